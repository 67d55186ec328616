//! Route targets. Each wraps its page view and turns a [`Destination`] into a
//! [`Route`].

use dioxus::prelude::*;
use ui::{
    DashboardView, Destination, ForgotPasswordView, NotFoundView, ResetPasswordView, SignInView,
    SignUpView,
};

use crate::Route;

fn route_for(destination: Destination) -> Route {
    match destination {
        Destination::SignIn => Route::SignIn {},
        Destination::Dashboard => Route::Dashboard {},
    }
}

fn use_page_navigation() -> EventHandler<Destination> {
    let nav = use_navigator();
    use_callback(move |destination: Destination| {
        nav.push(route_for(destination));
    })
}

#[component]
pub fn SignIn() -> Element {
    let on_navigate = use_page_navigation();
    rsx! {
        SignInView { on_navigate }
    }
}

#[component]
pub fn SignUp() -> Element {
    let on_navigate = use_page_navigation();
    rsx! {
        SignUpView { on_navigate }
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    let on_navigate = use_page_navigation();
    rsx! {
        ForgotPasswordView { on_navigate }
    }
}

#[component]
pub fn ResetPassword(token: String) -> Element {
    let on_navigate = use_page_navigation();
    rsx! {
        ResetPasswordView { token, on_navigate }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        DashboardView {}
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::info!("No route for /{}", segments.join("/"));
    rsx! {
        NotFoundView {}
    }
}
