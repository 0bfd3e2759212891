//! Wire models for Casdoor entities.
//!
//! Fields the client does not model are kept in `extra` so a fetched entity
//! can be updated without dropping server-side data.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Go-side nil slices and maps arrive as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A Casdoor user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub updated_time: String,

    /// Server-assigned unique id (a UUID); distinct from [`User::get_id`].
    pub id: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub password: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub email: String,
    pub email_verified: bool,
    pub phone: String,
    pub country_code: String,
    pub region: String,
    pub location: String,
    pub affiliation: String,
    pub title: String,
    pub homepage: String,
    pub bio: String,
    pub tag: String,
    pub language: String,
    pub gender: String,
    pub birthday: String,
    pub score: i64,
    pub karma: i64,
    pub ranking: i64,
    pub is_online: bool,
    pub is_admin: bool,
    pub is_forbidden: bool,
    pub is_deleted: bool,
    pub signup_application: String,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: HashMap<String, String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Identifier the user endpoints are addressed by: `"<owner>/<name>"`.
    pub fn get_id(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// A Casdoor role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub display_name: String,
    pub description: String,

    /// Members, each as `"<owner>/<name>"`.
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub groups: Vec<String>,
    /// Sub-roles inherited by this role.
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub domains: Vec<String>,
    pub is_enabled: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Role {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            is_enabled: true,
            ..Default::default()
        }
    }
}

/// A Casdoor permission: who may perform which actions on which resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Permission {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub display_name: String,
    pub description: String,

    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub groups: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub domains: Vec<String>,

    /// Casbin model the permission is enforced with.
    pub model: String,
    pub adapter: String,
    pub resource_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resources: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub actions: Vec<String>,
    /// `"Allow"` or `"Deny"`.
    pub effect: String,
    pub is_enabled: bool,

    pub submitter: String,
    pub approver: String,
    pub approve_time: String,
    pub state: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Permission {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            effect: "Allow".to_string(),
            is_enabled: true,
            ..Default::default()
        }
    }
}

/// A stored file, as far as deletion needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resource {
    pub owner: String,
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_get_id() {
        let user = User::new("org1", "alice");
        assert_eq!(user.get_id(), "org1/alice");
    }

    #[test]
    fn test_user_wire_names() {
        let mut user = User::new("org1", "alice");
        user.display_name = "Alice".into();
        user.user_type = "normal-user".into();

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["displayName"], "Alice");
        assert_eq!(value["type"], "normal-user");
        assert_eq!(value["isAdmin"], false);
    }

    #[test]
    fn test_unknown_fields_survive() {
        let input = json!({
            "owner": "org1",
            "name": "editor",
            "users": ["org1/alice"],
            "isEnabled": true,
            "someNewField": {"nested": 1}
        });

        let role: Role = serde_json::from_value(input).unwrap();
        assert_eq!(role.users, vec!["org1/alice".to_string()]);
        assert_eq!(role.extra["someNewField"], json!({"nested": 1}));

        let back = serde_json::to_value(&role).unwrap();
        assert_eq!(back["someNewField"], json!({"nested": 1}));
    }

    #[test]
    fn test_permission_defaults() {
        let permission = Permission::new("org1", "read-docs");
        assert_eq!(permission.effect, "Allow");
        assert!(permission.is_enabled);

        // missing fields decode to defaults
        let decoded: Permission = serde_json::from_str(r#"{"owner":"o","name":"n"}"#).unwrap();
        assert!(decoded.actions.is_empty());
        assert!(!decoded.is_enabled);
    }

    #[test]
    fn test_null_collections_decode_empty() {
        let role: Role =
            serde_json::from_str(r#"{"owner":"o","name":"n","users":null,"roles":null}"#).unwrap();
        assert!(role.users.is_empty());
        assert!(role.roles.is_empty());

        let user: User = serde_json::from_str(r#"{"owner":"o","name":"n","properties":null}"#).unwrap();
        assert!(user.properties.is_empty());
    }
}
