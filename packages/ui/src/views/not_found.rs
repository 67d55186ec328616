use dioxus::prelude::*;

use crate::components::AuthLayout;

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        AuthLayout {
            div {
                class: "auth-form",
                h1 { "Page not found" }
                p { "The page you are looking for does not exist." }
                Link { class: "auth-link", to: "/", "Back to sign in" }
            }
        }
    }
}
