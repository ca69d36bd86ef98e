//! Student account records.

use serde::{Deserialize, Serialize};

/// A student account.
///
/// `username` and `email` are unique within the store by convention; the
/// store does not enforce uniqueness, matching the original backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identity, assigned at creation and never reassigned.
    pub id: String,
    /// Login name, used by the by-username lookup.
    pub username: String,
    /// Stored as-is; credential handling is out of scope for this layer.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Grade point average, kept as display text (e.g. `"4.2"`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gpa: Option<String>,
    /// Enrolled credit hours.
    pub credits: i32,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<i64>,
}

/// Create input for [`User`].
///
/// `credits` defaults to 0 when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Login name.
    pub username: String,
    /// Password, stored as-is.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Grade point average as display text.
    #[serde(default)]
    pub gpa: Option<String>,
    /// Enrolled credit hours; the store defaults this to 0.
    #[serde(default)]
    pub credits: Option<i32>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_camel_case() {
        let user = User {
            id: "u1".to_string(),
            username: "alexjohnson".to_string(),
            password: "password123".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@university.edu".to_string(),
            gpa: Some("4.2".to_string()),
            credits: 12,
            avatar: None,
            created_at: Some(1_700_000_000_000),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
        assert_eq!(json["gpa"], "4.2");
        // Absent optionals are omitted, not serialized as null.
        assert!(json.get("avatar").is_none());
    }

    #[test]
    fn new_user_deserializes_with_omitted_optionals() {
        let input: NewUser = serde_json::from_str(
            r#"{"username":"a","password":"b","name":"c","email":"d"}"#,
        )
        .unwrap();

        assert!(input.gpa.is_none());
        assert!(input.credits.is_none());
        assert!(input.avatar.is_none());
    }
}
