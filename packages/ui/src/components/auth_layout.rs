use dioxus::prelude::*;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");
const LOGO: Asset = asset!("/assets/logo.svg");

/// Which side of the screen the background picture sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackgroundSide {
    Left,
    #[default]
    Right,
}

/// Split-screen shell shared by the sign in, sign up and password pages.
#[component]
pub fn AuthLayout(#[props(default)] background: BackgroundSide, children: Element) -> Element {
    let (background_class, content_class) = match background {
        BackgroundSide::Left => ("auth-background auth-background--signup", "auth-content auth-content--from-right"),
        BackgroundSide::Right => ("auth-background", "auth-content auth-content--from-left"),
    };

    rsx! {
        document::Stylesheet { href: AUTH_CSS }

        div {
            class: "auth-container",
            if background == BackgroundSide::Left {
                div { class: background_class }
            }
            div {
                class: "{content_class}",
                img { class: "auth-logo", src: LOGO, alt: "GoBarber" }
                {children}
            }
            if background == BackgroundSide::Right {
                div { class: background_class }
            }
        }
    }
}
