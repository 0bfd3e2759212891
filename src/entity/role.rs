//! Role operations.

use super::{scoped_id, Entity, Role};
use crate::client::{Client, Response};
use crate::error::SdkResult;

impl Client {
    /// List all roles of the configured organization.
    pub async fn get_roles(&self) -> SdkResult<Vec<Role>> {
        let url = self.get_url("get-roles", &[("owner", self.config().organization_name())]);
        let bytes = self.do_get_bytes(&url).await?;
        let roles: Option<Vec<Role>> = serde_json::from_slice(&bytes)?;
        Ok(roles.unwrap_or_default())
    }

    pub async fn get_role(&self, name: &str) -> SdkResult<Option<Role>> {
        let id = scoped_id(self.config().organization_name(), name);
        let url = self.get_url("get-role", &[("id", id.as_str())]);
        let bytes = self.do_get_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn add_role(&self, role: &Role) -> SdkResult<bool> {
        let (_, affected) = self.modify_role("add-role", role, &[]).await?;
        Ok(affected)
    }

    pub async fn update_role(&self, role: &Role) -> SdkResult<bool> {
        let (_, affected) = self.modify_role("update-role", role, &[]).await?;
        Ok(affected)
    }

    pub async fn update_role_for_columns(&self, role: &Role, columns: &[&str]) -> SdkResult<bool> {
        let (_, affected) = self.modify_role("update-role", role, columns).await?;
        Ok(affected)
    }

    pub async fn delete_role(&self, role: &Role) -> SdkResult<bool> {
        let (_, affected) = self.modify_role("delete-role", role, &[]).await?;
        Ok(affected)
    }

    /// Create, update or delete a role; `action` is `add-role`, `update-role` or `delete-role`.
    ///
    /// The request id is the role's own `owner/name`, taken before the owner
    /// is replaced by the configured organization.
    pub async fn modify_role(
        &self,
        action: &str,
        role: &Role,
        columns: &[&str],
    ) -> SdkResult<(Response, bool)> {
        let id = role.resource_id();
        let mut role = role.clone();
        role.set_owner(self.config().organization_name());
        self.post_entity(action, &id, &role, columns).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::mock::{mock_client, MockTransport, TEST_ORG};
    use crate::entity::Role;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_role_id_and_owner() {
        let (client, transport) =
            mock_client(MockTransport::with_json(vec![json!({"status": "ok", "msg": "", "data": "Affected"})]));

        let role = Role::new("org1", "editor");
        let (resp, affected) = client.modify_role("add-role", &role, &[]).await.unwrap();
        assert!(affected);
        assert_eq!(resp.data, json!("Affected"));

        let req = transport.last_request();
        assert_eq!(req.url.path(), "/api/add-role");
        assert_eq!(req.query("id").as_deref(), Some("org1/editor"));
        assert_eq!(req.query_keys(), vec!["id"]);

        let body = req.body_json();
        assert_eq!(body["owner"], TEST_ORG);
        assert_eq!(body["name"], "editor");
    }

    #[tokio::test]
    async fn test_get_roles_null_data_is_empty() {
        let (client, _) =
            mock_client(MockTransport::with_json(vec![json!({"status": "ok", "data": null})]));
        assert!(client.get_roles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_role() {
        let (client, transport) = mock_client(MockTransport::with_json(vec![json!({
            "status": "ok",
            "data": {"owner": TEST_ORG, "name": "editor", "users": null, "isEnabled": true}
        })]));

        let role = client.get_role("editor").await.unwrap().unwrap();
        assert!(role.is_enabled);
        assert!(role.users.is_empty());
        assert_eq!(transport.last_request().url.path(), "/api/get-role");
    }

    #[tokio::test]
    async fn test_update_role_not_affected() {
        let (client, _) = mock_client(MockTransport::with_json(vec![
            json!({"status": "ok", "msg": "", "data": "Unaffected"}),
        ]));

        let affected = client
            .update_role_for_columns(&Role::new(TEST_ORG, "editor"), &["users"])
            .await
            .unwrap();
        assert!(!affected);
    }
}
