//! # Users and sessions
//!
//! [`UserInfo`] is the user record the backend returns from `POST /sessions` and
//! `POST /users`. [`AuthData`] pairs it with the bearer token of a session; it is
//! what the auth context holds and what gets persisted between reloads.
//!
//! The request payloads ([`SessionRequest`], [`NewUser`], [`ForgotPasswordRequest`],
//! [`ResetPasswordRequest`]) serialise to exactly the JSON bodies the backend expects.

use serde::{Deserialize, Serialize};

/// User information as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserInfo {
    /// First word of the name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.email)
    }
}

/// An authenticated session: the token plus the user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthData {
    pub token: String,
    pub user: UserInfo,
}

/// Body of `POST /sessions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /password/forgot`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of `POST /password/reset`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetPasswordRequest {
    pub password: String,
    pub password_confirmation: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_response_decodes() {
        let body = r#"{
            "token": "jwt-token",
            "user": {
                "id": "8b2b6d0e-6a3e-4bde-9d4c-3f0f2b1f2c11",
                "name": "John Doe",
                "email": "johndoe@example.com",
                "avatar_url": null
            }
        }"#;
        let data: AuthData = serde_json::from_str(body).unwrap();
        assert_eq!(data.token, "jwt-token");
        assert_eq!(data.user.name, "John Doe");
        assert!(data.user.avatar_url.is_none());
    }

    #[test]
    fn test_missing_avatar_defaults_to_none() {
        let body = r#"{"id":"1","name":"Jane","email":"jane@example.com"}"#;
        let user: UserInfo = serde_json::from_str(body).unwrap();
        assert_eq!(user.avatar_url, None);
    }

    #[test]
    fn test_first_name() {
        let user = UserInfo {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            avatar_url: None,
        };
        assert_eq!(user.first_name(), "John");
    }

    #[test]
    fn test_reset_body_field_names() {
        let body = serde_json::to_value(ResetPasswordRequest {
            password: "123456".to_string(),
            password_confirmation: "123456".to_string(),
            token: "token-jwt".to_string(),
        })
        .unwrap();
        assert_eq!(body["password_confirmation"], "123456");
        assert_eq!(body["token"], "token-jwt");
    }
}
