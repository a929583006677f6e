//! Wire types shared by the client and the session layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role as reported by the backend
///
/// Unknown role strings are kept verbatim in [`Role::Other`] so that a
/// profile written by a newer backend still round-trips through storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Student,
    Company,
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "student",
            Role::Company => "company",
            Role::Admin => "admin",
            Role::Other(other) => other,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "student" => Role::Student,
            "company" => Role::Company,
            "admin" => Role::Admin,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user record returned by login/registration and kept in the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub role: Role,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl UserProfile {
    /// Create a profile with only the required fields set
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            id: None,
            role,
            email: email.into(),
            full_name: None,
            company_name: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Name shown in the UI: student -> full name, company -> company name,
    /// anyone else -> email
    pub fn display_name(&self) -> Option<&str> {
        match self.role {
            Role::Student => self.full_name.as_deref(),
            Role::Company => self.company_name.as_deref(),
            _ => Some(self.email.as_str()),
        }
    }

    /// Shallow merge: fields set in `patch` replace ours, the rest stay
    pub fn merge(&mut self, patch: &UserPatch) {
        if let Some(full_name) = &patch.full_name {
            self.full_name = Some(full_name.clone());
        }
        if let Some(company_name) = &patch.company_name {
            self.company_name = Some(company_name.clone());
        }
    }
}

/// Partial update of a [`UserProfile`]; `None` means "leave unchanged".
///
/// Only the fields `PUT /api/profile` accepts. The email is fixed at
/// registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl UserPatch {
    pub fn full_name(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            ..Self::default()
        }
    }

    pub fn company_name(company_name: impl Into<String>) -> Self {
        Self {
            company_name: Some(company_name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.company_name.is_none()
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Required by the backend when `role` is company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response to both login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub user: UserProfile,
}

/// Full profile as returned by `GET /api/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
    // Student fields
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub year_of_study: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    // Company fields
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Plain `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_strings() {
        assert_eq!(Role::from("student"), Role::Student);
        assert_eq!(Role::from("company"), Role::Company);
        assert_eq!(Role::from("admin"), Role::Admin);
        assert_eq!(Role::from("mentor"), Role::Other("mentor".to_string()));
        assert_eq!(String::from(Role::Other("mentor".into())), "mentor");
    }

    #[test]
    fn test_user_profile_from_login_payload() {
        let user: UserProfile = serde_json::from_value(json!({
            "id": 7,
            "email": "acme@example.com",
            "role": "company",
            "full_name": null,
            "company_name": "Acme"
        }))
        .unwrap();

        assert_eq!(user.id, Some(7));
        assert_eq!(user.role, Role::Company);
        assert_eq!(user.full_name, None);
        assert_eq!(user.display_name(), Some("Acme"));
    }

    #[test]
    fn test_display_name_by_role() {
        let student = UserProfile::new(Role::Student, "a@x.com").with_full_name("Ada");
        let admin = UserProfile::new(Role::Admin, "root@x.com").with_full_name("Root");
        let unnamed = UserProfile::new(Role::Student, "b@x.com");

        assert_eq!(student.display_name(), Some("Ada"));
        assert_eq!(admin.display_name(), Some("root@x.com"));
        assert_eq!(unnamed.display_name(), None);
    }

    #[test]
    fn test_merge_preserves_unmentioned_fields() {
        let mut user = UserProfile::new(Role::Student, "a@x.com").with_full_name("A");
        user.merge(&UserPatch::full_name("X"));

        assert_eq!(user.full_name.as_deref(), Some("X"));
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.role, Role::Student);
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let body = serde_json::to_value(UserPatch::company_name("Acme")).unwrap();
        assert_eq!(body, json!({ "company_name": "Acme" }));
        assert!(UserPatch::default().is_empty());

        // Unknown keys such as `email` are not part of a patch
        let patch: UserPatch =
            serde_json::from_value(json!({ "email": "new@x.com", "full_name": "B" })).unwrap();
        let mut user = UserProfile::new(Role::Student, "a@x.com");
        user.merge(&patch);
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.full_name.as_deref(), Some("B"));
    }
}
