use std::future::Future;

use api::{ApiError, SessionRequest};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{AuthLayout, Button, Input};
use crate::flow::{Destination, FormOutcome};
use crate::icons::{FiLock, FiLogIn, FiMail};
use crate::toast::{use_toast, ToastMessage};
use crate::validation::{FieldErrors, FormValues, Rule, Schema};
use crate::Icon;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl FormValues for SignInForm {
    fn value(&self, field: &str) -> &str {
        match field {
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }
}

fn schema() -> Schema {
    Schema::new()
        .field(
            "email",
            [
                Rule::required("Email required"),
                Rule::email("Please insert a valid email"),
            ],
        )
        .field("password", [Rule::required("Password required")])
}

/// Validate, then hand the credentials to `sign_in`.
pub async fn submit<F, Fut>(form: &SignInForm, sign_in: F) -> FormOutcome
where
    F: FnOnce(SessionRequest) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if let Err(errors) = schema().validate(form) {
        return FormOutcome::invalid(errors);
    }

    let credentials = SessionRequest {
        email: form.email.clone(),
        password: form.password.clone(),
    };
    match sign_in(credentials).await {
        Ok(()) => FormOutcome::navigate(Destination::Dashboard),
        Err(e) => {
            tracing::warn!("Sign in failed: {}", e);
            FormOutcome::failed(
                ToastMessage::error("Authentication error")
                    .with_description("Authentication failure check credential properties."),
            )
        }
    }
}

#[component]
pub fn SignInView(on_navigate: EventHandler<Destination>) -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let mut form = use_signal(SignInForm::default);
    let errors = use_signal(FieldErrors::new);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let values = form.read().clone();
        spawn(async move {
            loading.set(true);
            let outcome = submit(&values, |credentials| auth.sign_in(credentials)).await;
            loading.set(false);
            outcome.apply(errors, toasts, on_navigate);
        });
    };

    rsx! {
        AuthLayout {
            form {
                class: "auth-form",
                onsubmit,
                h1 { "Join GoBarber today" }

                Input {
                    name: "email",
                    placeholder: "E-mail",
                    value: form.read().email.clone(),
                    error: errors.read().get("email").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    Icon { icon: FiMail, width: 20, height: 20 }
                }
                Input {
                    name: "password",
                    r#type: "password",
                    placeholder: "Password",
                    value: form.read().password.clone(),
                    error: errors.read().get("password").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    Icon { icon: FiLock, width: 20, height: 20 }
                }

                Button { r#type: "submit", loading: loading(), "Log in" }

                Link { class: "auth-link", to: "/forgot-password", "Forgot password?" }
            }

            Link {
                class: "auth-link auth-link--secondary",
                to: "/signup",
                Icon { icon: FiLogIn, width: 20, height: 20 }
                "Sign Up"
            }
        }
    }
}
