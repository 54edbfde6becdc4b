//! User record construction with field validation.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::service::validate;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u8,
    pub created_at: String,
    pub updated_at: String,
    pub active: bool,
    pub role: String,
    pub permissions: Vec<String>,
    pub profile: Profile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: String,
    pub notifications: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            bio: String::new(),
            avatar: None,
            preferences: Preferences {
                theme: "light".to_string(),
                notifications: true,
            },
        }
    }
}

/// Build a new user record. Name must be at least 2 characters, email
/// must be structurally valid, age must be within 0..=150.
pub fn create_user(name: &str, email: &str, age: i64) -> Result<User> {
    let name = name.trim();
    if name.len() < 2 {
        return Err(Error::validation_invalid_argument(
            "name",
            "Name must be at least 2 characters",
            None,
            None,
        ));
    }

    if !validate::validate_email(email) {
        return Err(Error::validation_invalid_argument(
            "email",
            "Invalid email format",
            None,
            None,
        ));
    }

    if !(0..=150).contains(&age) {
        return Err(Error::validation_invalid_argument(
            "age",
            "Invalid age",
            None,
            None,
        ));
    }

    let now = Utc::now().to_rfc3339();

    Ok(User {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.trim().to_lowercase(),
        age: age as u8,
        created_at: now.clone(),
        updated_at: now,
        active: true,
        role: "user".to_string(),
        permissions: vec!["read".to_string()],
        profile: Profile::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn creates_user_with_defaults() {
        let user = create_user("Ada", "ada@example.com", 36).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.age, 36);
        assert!(user.active);
        assert_eq!(user.role, "user");
        assert_eq!(user.permissions, vec!["read"]);
        assert_eq!(user.profile.preferences.theme, "light");
        assert!(!user.id.is_empty());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn ids_are_unique() {
        let a = create_user("Ada", "ada@example.com", 36).unwrap();
        let b = create_user("Ada", "ada@example.com", 36).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rejects_short_name() {
        let err = create_user("A", "ada@example.com", 36).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
        assert_eq!(err.details["field"], "name");
    }

    #[test]
    fn rejects_bad_email() {
        let err = create_user("Ada", "not-an-email", 36).unwrap_err();
        assert_eq!(err.details["field"], "email");
    }

    #[test]
    fn rejects_out_of_range_age() {
        assert!(create_user("Ada", "ada@example.com", -1).is_err());
        assert!(create_user("Ada", "ada@example.com", 151).is_err());
        assert!(create_user("Ada", "ada@example.com", 0).is_ok());
        assert!(create_user("Ada", "ada@example.com", 150).is_ok());
    }

    #[test]
    fn normalizes_email_case() {
        let user = create_user("Ada", "Ada@Example.COM", 36).unwrap();
        assert_eq!(user.email, "ada@example.com");
    }
}
