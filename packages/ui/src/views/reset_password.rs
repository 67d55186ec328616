use api::{Backend, ResetPasswordRequest};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{AuthLayout, Button, Input};
use crate::flow::{Destination, FormOutcome};
use crate::icons::FiLock;
use crate::toast::{use_toast, ToastMessage};
use crate::validation::{FieldErrors, FormValues, Rule, Schema};
use crate::Icon;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub password_confirmation: String,
}

impl FormValues for ResetPasswordForm {
    fn value(&self, field: &str) -> &str {
        match field {
            "password" => &self.password,
            "password_confirmation" => &self.password_confirmation,
            _ => "",
        }
    }
}

fn schema() -> Schema {
    Schema::new()
        .field(
            "password",
            [
                Rule::required("Password required"),
                Rule::min_length(6, "Min 6 characters"),
            ],
        )
        .field(
            "password_confirmation",
            [Rule::equals("password", "Passwords must match")],
        )
}

fn reset_failed() -> FormOutcome {
    FormOutcome::failed(ToastMessage::error("Password reset error").with_description(
        "An error occurred while resetting your password, please try again.",
    ))
}

/// Reset the password with the token from the recovery link. A blank token
/// never reaches the backend.
pub async fn submit<B: Backend>(backend: &B, form: &ResetPasswordForm, token: &str) -> FormOutcome {
    if let Err(errors) = schema().validate(form) {
        return FormOutcome::invalid(errors);
    }

    if token.trim().is_empty() {
        tracing::warn!("Password reset attempted without a token");
        return reset_failed();
    }

    let request = ResetPasswordRequest {
        password: form.password.clone(),
        password_confirmation: form.password_confirmation.clone(),
        token: token.to_string(),
    };
    match backend.reset_password(&request).await {
        Ok(()) => {
            tracing::info!("Password reset");
            FormOutcome::navigate(Destination::SignIn)
        }
        Err(e) => {
            tracing::warn!("Password reset failed: {}", e);
            reset_failed()
        }
    }
}

#[component]
pub fn ResetPasswordView(token: String, on_navigate: EventHandler<Destination>) -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let mut form = use_signal(ResetPasswordForm::default);
    let errors = use_signal(FieldErrors::new);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let values = form.read().clone();
        let client = auth.client();
        let token = token.clone();
        spawn(async move {
            loading.set(true);
            let outcome = submit(&client, &values, &token).await;
            loading.set(false);
            outcome.apply(errors, toasts, on_navigate);
        });
    };

    rsx! {
        AuthLayout {
            form {
                class: "auth-form",
                onsubmit,
                h1 { "Reset password" }

                Input {
                    name: "password",
                    r#type: "password",
                    placeholder: "New password",
                    value: form.read().password.clone(),
                    error: errors.read().get("password").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    Icon { icon: FiLock, width: 20, height: 20 }
                }
                Input {
                    name: "password_confirmation",
                    r#type: "password",
                    placeholder: "New password confirmation",
                    value: form.read().password_confirmation.clone(),
                    error: errors.read().get("password_confirmation").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().password_confirmation = evt.value(),
                    Icon { icon: FiLock, width: 20, height: 20 }
                }

                Button { r#type: "submit", loading: loading(), "Reset password" }
            }
        }
    }
}
