use api::{Backend, ForgotPasswordRequest};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{AuthLayout, Button, Input};
use crate::flow::{Destination, FormOutcome};
use crate::icons::{FiLogIn, FiMail};
use crate::toast::{use_toast, ToastMessage};
use crate::validation::{FieldErrors, FormValues, Rule, Schema};
use crate::Icon;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl FormValues for ForgotPasswordForm {
    fn value(&self, field: &str) -> &str {
        match field {
            "email" => &self.email,
            _ => "",
        }
    }
}

fn schema() -> Schema {
    Schema::new().field(
        "email",
        [
            Rule::required("Email required"),
            Rule::email("Please insert a valid email"),
        ],
    )
}

/// Request a recovery email. Success keeps the user on the page.
pub async fn submit<B: Backend>(backend: &B, form: &ForgotPasswordForm) -> FormOutcome {
    if let Err(errors) = schema().validate(form) {
        return FormOutcome::invalid(errors);
    }

    let request = ForgotPasswordRequest {
        email: form.email.clone(),
    };
    match backend.forgot_password(&request).await {
        Ok(()) => FormOutcome::notify(
            ToastMessage::success("Recovery link sent sucessfully.").with_description(
                "An email has been sent to the address you have provided. Please follow the link in the email to complete your password reset request.",
            ),
        ),
        Err(e) => {
            tracing::warn!("Password recovery request failed: {}", e);
            FormOutcome::failed(ToastMessage::error("Forgot password error").with_description(
                "The email you entered did not match our records. Please double-check and try again.",
            ))
        }
    }
}

#[component]
pub fn ForgotPasswordView(on_navigate: EventHandler<Destination>) -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let mut form = use_signal(ForgotPasswordForm::default);
    let errors = use_signal(FieldErrors::new);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let values = form.read().clone();
        let client = auth.client();
        spawn(async move {
            loading.set(true);
            let outcome = submit(&client, &values).await;
            loading.set(false);
            outcome.apply(errors, toasts, on_navigate);
        });
    };

    rsx! {
        AuthLayout {
            form {
                class: "auth-form",
                onsubmit,
                h1 { "Forgot password" }

                Input {
                    name: "email",
                    placeholder: "E-mail",
                    value: form.read().email.clone(),
                    error: errors.read().get("email").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    Icon { icon: FiMail, width: 20, height: 20 }
                }

                Button { r#type: "submit", loading: loading(), "Email me a recovery link" }
            }

            Link {
                class: "auth-link auth-link--secondary",
                to: "/",
                Icon { icon: FiLogIn, width: 20, height: 20 }
                "Sign In"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, MockBackend};
    use crate::toast::ToastKind;

    fn form(email: &str) -> ForgotPasswordForm {
        ForgotPasswordForm {
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_email_makes_no_request() {
        let backend = MockBackend::new();
        let outcome = submit(&backend, &form("")).await;

        assert_eq!(outcome.errors.get("email"), Some("Email required"));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_toasts_and_stays() {
        let backend = MockBackend::new();
        let outcome = submit(&backend, &form("johndoe@example.com")).await;

        assert!(outcome.navigate.is_none());
        let toast = outcome.toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Recovery link sent sucessfully.");
        assert_eq!(
            backend.calls(),
            vec![Call::ForgotPassword(ForgotPasswordRequest {
                email: "johndoe@example.com".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn test_unknown_email_shows_error() {
        let backend = MockBackend::failing(404);
        let outcome = submit(&backend, &form("nobody@example.com")).await;

        let toast = outcome.toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Forgot password error");
    }
}
