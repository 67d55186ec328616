use dioxus::prelude::*;

/// Primary action button. While `loading`, it is disabled and shows a
/// placeholder label instead of its children.
#[component]
pub fn Button(
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] loading: bool,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "button {class}",
            r#type: r#type.clone(),
            disabled: loading,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            if loading {
                "Loading..."
            } else {
                {children}
            }
        }
    }
}
