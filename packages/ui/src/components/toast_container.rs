use dioxus::prelude::*;

use crate::icons::{FiAlertCircle, FiCheckCircle, FiInfo, FiXCircle};
use crate::toast::{use_toast, Toast, ToastKind};
use crate::Icon;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Renders the toast queue, oldest on top.
#[component]
pub fn ToastContainer() -> Element {
    let toasts = use_toast().toasts();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        div {
            class: "toast-container",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let context = use_toast();
    let id = toast.id;
    let message = toast.message;

    rsx! {
        div {
            class: message.kind.class(),
            match message.kind {
                ToastKind::Success => rsx! { Icon { icon: FiCheckCircle, width: 24, height: 24 } },
                ToastKind::Error => rsx! { Icon { icon: FiAlertCircle, width: 24, height: 24 } },
                ToastKind::Info => rsx! { Icon { icon: FiInfo, width: 24, height: 24 } },
            }
            div {
                class: "toast-body",
                strong { "{message.title}" }
                if let Some(description) = &message.description {
                    p { "{description}" }
                }
            }
            button {
                class: "toast-close",
                r#type: "button",
                onclick: move |_| context.remove_toast(id),
                Icon { icon: FiXCircle, width: 18, height: 18 }
            }
        }
    }
}
