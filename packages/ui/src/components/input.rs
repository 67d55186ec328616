use dioxus::prelude::*;

use crate::icons::FiAlertCircle;
use crate::Icon;

const INPUT_CSS: Asset = asset!("/assets/styling/input.css");

/// Text input with a leading icon (passed as children) and an inline
/// validation error.
#[component]
pub fn Input(
    name: String,
    placeholder: String,
    #[props(default = "text".to_string())] r#type: String,
    value: String,
    error: Option<String>,
    oninput: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    let mut focused = use_signal(|| false);

    let mut class = String::from("input");
    if focused() {
        class.push_str(" input--focused");
    }
    if !value.is_empty() {
        class.push_str(" input--filled");
    }
    if error.is_some() {
        class.push_str(" input--error");
    }

    rsx! {
        document::Stylesheet { href: INPUT_CSS }

        div {
            class: "{class}",
            {children}
            input {
                name: "{name}",
                r#type: r#type.clone(),
                placeholder: "{placeholder}",
                value: "{value}",
                onfocus: move |_| focused.set(true),
                onblur: move |_| focused.set(false),
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = error {
                span {
                    class: "input-error",
                    title: "{message}",
                    Icon { icon: FiAlertCircle, width: 20, height: 20 }
                    span { class: "input-error-message", "{message}" }
                }
            }
        }
    }
}
