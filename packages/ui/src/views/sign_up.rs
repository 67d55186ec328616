use api::{Backend, NewUser};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{AuthLayout, BackgroundSide, Button, Input};
use crate::flow::{Destination, FormOutcome};
use crate::icons::{FiArrowLeft, FiLock, FiMail, FiUser};
use crate::toast::{use_toast, ToastMessage};
use crate::validation::{FieldErrors, FormValues, Rule, Schema};
use crate::Icon;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormValues for SignUpForm {
    fn value(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "password" => &self.password,
            _ => "",
        }
    }
}

fn schema() -> Schema {
    Schema::new()
        .field("name", [Rule::required("Name required")])
        .field(
            "email",
            [
                Rule::required("Email required"),
                Rule::email("Please insert a valid email"),
            ],
        )
        .field("password", [Rule::min_length(6, "Min 6 characters")])
}

pub async fn submit<B: Backend>(backend: &B, form: &SignUpForm) -> FormOutcome {
    if let Err(errors) = schema().validate(form) {
        return FormOutcome::invalid(errors);
    }

    let new_user = NewUser {
        name: form.name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    };
    match backend.create_user(&new_user).await {
        Ok(()) => {
            tracing::info!("Registered {}", new_user.email);
            FormOutcome::navigate(Destination::SignIn).and_toast(
                ToastMessage::success("Account registration confirmation")
                    .with_description("You can login on GoBarber."),
            )
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            FormOutcome::failed(
                ToastMessage::error("Registration error")
                    .with_description("Registration failure, try again"),
            )
        }
    }
}

#[component]
pub fn SignUpView(on_navigate: EventHandler<Destination>) -> Element {
    let auth = use_auth();
    let toasts = use_toast();
    let mut form = use_signal(SignUpForm::default);
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
            background: BackgroundSide::Left,
            form {
                class: "auth-form",
                onsubmit,
                h1 { "Create your account" }

                Input {
                    name: "name",
                    placeholder: "Name",
                    value: form.read().name.clone(),
                    error: errors.read().get("name").map(str::to_string),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    Icon { icon: FiUser, width: 20, height: 20 }
                }
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

                Button { r#type: "submit", loading: loading(), "Sign up" }
            }

            Link {
                class: "auth-link auth-link--secondary",
                to: "/",
                Icon { icon: FiArrowLeft, width: 20, height: 20 }
                "Back to sign in page"
            }
        }
    }
}
