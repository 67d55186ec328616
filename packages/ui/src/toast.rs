//! Toast notifications: the queue, its context, and the provider component.
//!
//! Pages push a [`ToastMessage`] through [`ToastContext::add_toast`]; the toast
//! gets a fresh id, is appended to the queue, and removes itself once the
//! configured duration has elapsed. The container renders the queue in insertion
//! order.

use std::time::Duration;

use dioxus::prelude::*;
use uuid::Uuid;

use crate::components::ToastContainer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

/// What a page wants to tell the user.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A queued toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: ToastMessage,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: ToastMessage) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, message });
        id
    }

    /// Returns whether a toast was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Wait out `duration`, then run `remove`. Returns what `remove` reported.
pub async fn expire_after(duration: Duration, remove: impl FnOnce() -> bool) -> bool {
    crate::timer::sleep(duration).await;
    let removed = remove();
    if !removed {
        tracing::debug!("Toast already dismissed before expiry");
    }
    removed
}

/// Handle to the toast queue, provided by [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: Signal<ToastQueue>,
    duration: Duration,
}

/// Get the toast context.
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}

impl ToastContext {
    /// Show a toast and schedule its removal.
    pub fn add_toast(self, message: ToastMessage) -> Uuid {
        let mut queue = self.queue;
        let id = queue.write().push(message);
        // Outlives the page that raised it: pages often navigate away right after.
        let duration = self.duration;
        spawn_forever(async move {
            expire_after(duration, move || queue.write().remove(id)).await;
        });
        id
    }

    /// Dismiss a toast now. Unknown ids are ignored.
    pub fn remove_toast(self, id: Uuid) {
        let mut queue = self.queue;
        queue.write().remove(id);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }
}

/// Provider component that owns the toast queue and renders it.
#[component]
pub fn ToastProvider(
    #[props(default = 3000)] duration_ms: u64,
    children: Element,
) -> Element {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| ToastContext {
        queue,
        duration: Duration::from_millis(duration_ms),
    });

    rsx! {
        {children}
        ToastContainer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn info(title: &str) -> ToastMessage {
        ToastMessage::new(ToastKind::Info, title)
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_duration() {
        let queue = RefCell::new(ToastQueue::default());
        let id = queue.borrow_mut().push(ToastMessage::success("Saved"));

        let expiry = expire_after(Duration::from_millis(3000), || queue.borrow_mut().remove(id));
        tokio::pin!(expiry);

        let early = tokio::time::timeout(Duration::from_millis(2999), &mut expiry).await;
        assert!(early.is_err());
        assert_eq!(queue.borrow().len(), 1);

        assert!(expiry.await);
        assert!(queue.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_after_manual_dismiss_is_noop() {
        let queue = RefCell::new(ToastQueue::default());
        let id = queue.borrow_mut().push(info("dismissed"));
        let other = queue.borrow_mut().push(info("kept"));
        assert!(queue.borrow_mut().remove(id));

        let removed = expire_after(Duration::from_millis(3000), || queue.borrow_mut().remove(id)).await;
        assert!(!removed);
        assert_eq!(queue.borrow().toasts()[0].id, other);
    }

    #[test]
    fn test_insertion_order() {
        let mut queue = ToastQueue::default();
        queue.push(info("first"));
        queue.push(ToastMessage::success("second"));
        queue.push(ToastMessage::error("third"));

        let titles: Vec<&str> = queue.toasts().iter().map(|t| t.message.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut queue = ToastQueue::default();
        queue.push(info("first"));
        let middle = queue.push(info("second"));
        queue.push(info("third"));

        assert!(queue.remove(middle));
        let titles: Vec<&str> = queue.toasts().iter().map(|t| t.message.title.as_str()).collect();
        assert_eq!(titles, ["first", "third"]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut queue = ToastQueue::default();
        queue.push(info("only"));
        assert!(!queue.remove(Uuid::new_v4()));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = ToastQueue::default();
        let a = queue.push(info("a"));
        let b = queue.push(info("a"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_description_builder() {
        let message = ToastMessage::error("Registration error")
            .with_description("Registration failure, try again");
        assert_eq!(message.kind, ToastKind::Error);
        assert_eq!(message.description.as_deref(), Some("Registration failure, try again"));
    }
}
