//! What a form submission produced, and how a page applies it.
//!
//! Form pages run their submit logic as plain async functions returning a
//! [`FormOutcome`]. The component then applies it in a fixed order: inline
//! field errors, then the toast, then navigation.

use dioxus::prelude::*;

use crate::toast::{ToastContext, ToastMessage};
use crate::validation::FieldErrors;

/// Where a page sends the user after a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    SignIn,
    Dashboard,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Self::SignIn => "/",
            Self::Dashboard => "/dashboard",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormOutcome {
    pub errors: FieldErrors,
    pub toast: Option<ToastMessage>,
    pub navigate: Option<Destination>,
}

impl FormOutcome {
    /// Validation failed: show field errors, nothing else.
    pub fn invalid(errors: FieldErrors) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// The request failed: show the toast, stay on the page.
    pub fn failed(toast: ToastMessage) -> Self {
        Self {
            toast: Some(toast),
            ..Self::default()
        }
    }

    pub fn navigate(destination: Destination) -> Self {
        Self {
            navigate: Some(destination),
            ..Self::default()
        }
    }

    /// The request succeeded: show the toast, stay on the page.
    pub fn notify(toast: ToastMessage) -> Self {
        Self {
            toast: Some(toast),
            ..Self::default()
        }
    }

    pub fn and_toast(mut self, toast: ToastMessage) -> Self {
        self.toast = Some(toast);
        self
    }

    /// Push the outcome into the page's signals and the app contexts.
    pub fn apply(
        self,
        mut errors: Signal<FieldErrors>,
        toasts: ToastContext,
        on_navigate: EventHandler<Destination>,
    ) {
        errors.set(self.errors);
        if let Some(toast) = self.toast {
            toasts.add_toast(toast);
        }
        if let Some(destination) = self.navigate {
            tracing::info!("Navigating to {}", destination.path());
            on_navigate.call(destination);
        }
    }
}
