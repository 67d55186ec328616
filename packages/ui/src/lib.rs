//! Shared UI for the workspace: app contexts, page logic and components.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`auth`] | Session context, sign in and sign out |
//! | [`toast`] | Transient notification queue |
//! | [`validation`] | Form schemas and per-field errors |
//! | [`flow`] | Outcome of a form submission |
//! | [`dashboard`] | Provider dashboard state machine |
//! | [`calendar`] | Month grid model |
//! | [`components`] | Reusable Dioxus components |
//! | [`views`] | One component per page |

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fi_icons::*;
}

pub mod views;
pub use views::{
    DashboardView, ForgotPasswordView, NotFoundView, ResetPasswordView, SignInView, SignUpView,
};

pub const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

pub mod auth;
pub use auth::{use_auth, AuthContext, AuthProvider, AuthState, Session};

pub mod toast;
pub use toast::{use_toast, ToastContext, ToastKind, ToastMessage, ToastProvider};

pub mod validation;
pub use validation::{FieldErrors, FormValues, Rule, Schema};

pub mod flow;
pub use flow::{Destination, FormOutcome};

pub mod calendar;
pub mod dashboard;

mod storage;
mod timer;

#[cfg(test)]
mod testing;
