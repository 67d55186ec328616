//! Layouts that keep each page on the right side of the session.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Auth pages. A signed-in visitor is sent to the dashboard.
#[component]
pub fn GuestOnly() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth.is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

/// Pages that need a session. Without one, back to sign in.
#[component]
pub fn PrivateRoute() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth.is_authenticated() {
        tracing::info!("No session, redirecting to sign in");
        nav.replace(Route::SignIn {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
