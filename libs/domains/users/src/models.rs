use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

/// User document as stored in the `users` collection.
///
/// The password is only ever held as a bcrypt hash; the field keeps the
/// `password` name so existing documents load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(default)]
    pub role: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            role: role.into(),
        }
    }
}

/// Body of `POST /register`.
///
/// Every field must be present and non-empty. `role` is free text.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
    #[validate(required, length(min = 1))]
    #[schema(example = "student")]
    pub role: Option<String>,
}

/// Body of `POST /login`.
///
/// Fields are kept as raw JSON so a non-string credential is rejected as
/// invalid credentials rather than as a malformed body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(value_type = Option<String>, example = "ada@example.com")]
    pub email: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub password: Option<Value>,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(Value::String(email.into())),
            password: Some(Value::String(password.into())),
        }
    }

    /// Email and password, when both are JSON strings.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let email = self.email.as_ref()?.as_str()?;
        let password = self.password.as_ref()?.as_str()?;
        Some((email, password))
    }
}

/// Body of `POST /resetpassword`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordRequest {
    #[validate(required, length(min = 1))]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    /// HS256 bearer token carrying `userId`
    pub token: String,
}

/// Plain `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_serializes_hash_under_password_key() {
        let user = User::new("Ada", "ada@example.com", "$2b$10$hash", "student");
        let doc = mongodb::bson::to_document(&user).unwrap();

        assert_eq!(doc.get_str("password").unwrap(), "$2b$10$hash");
        assert!(doc.get_object_id("_id").is_ok());
        assert!(doc.get("password_hash").is_none());
    }

    #[test]
    fn test_register_request_rejects_empty_and_missing_fields() {
        let empty: RegisterRequest = serde_json::from_value(json!({
            "name": "",
            "email": "ada@example.com",
            "password": "pw",
            "role": "student"
        }))
        .unwrap();
        assert!(empty.validate().is_err());

        let missing: RegisterRequest = serde_json::from_value(json!({
            "email": "ada@example.com",
            "password": "pw",
            "role": "student"
        }))
        .unwrap();
        assert!(missing.validate().is_err());

        let null: RegisterRequest = serde_json::from_value(json!({
            "name": null,
            "email": "ada@example.com",
            "password": "pw",
            "role": "student"
        }))
        .unwrap();
        assert!(null.validate().is_err());
    }

    #[test]
    fn test_login_request_credentials_require_strings() {
        let input: LoginRequest =
            serde_json::from_value(json!({ "email": "ada@example.com", "password": 12345 }))
                .unwrap();
        assert!(input.credentials().is_none());

        let input = LoginRequest::new("ada@example.com", "pw");
        assert_eq!(input.credentials(), Some(("ada@example.com", "pw")));
    }

    #[test]
    fn test_register_request_accepts_complete_input() {
        let input: RegisterRequest = serde_json::from_value(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "pw",
            "role": "anything"
        }))
        .unwrap();
        assert!(input.validate().is_ok());
    }
}
