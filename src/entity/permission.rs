//! Permission operations.

use super::{scoped_id, Entity, Permission};
use crate::client::{Client, Response};
use crate::error::SdkResult;

impl Client {
    pub async fn get_permissions(&self) -> SdkResult<Vec<Permission>> {
        let url = self.get_url(
            "get-permissions",
            &[("owner", self.config().organization_name())],
        );
        let bytes = self.do_get_bytes(&url).await?;
        let permissions: Option<Vec<Permission>> = serde_json::from_slice(&bytes)?;
        Ok(permissions.unwrap_or_default())
    }

    pub async fn get_permission(&self, name: &str) -> SdkResult<Option<Permission>> {
        let id = scoped_id(self.config().organization_name(), name);
        let url = self.get_url("get-permission", &[("id", id.as_str())]);
        let bytes = self.do_get_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn add_permission(&self, permission: &Permission) -> SdkResult<bool> {
        let (_, affected) = self
            .modify_permission("add-permission", permission, &[])
            .await?;
        Ok(affected)
    }

    pub async fn update_permission(&self, permission: &Permission) -> SdkResult<bool> {
        let (_, affected) = self
            .modify_permission("update-permission", permission, &[])
            .await?;
        Ok(affected)
    }

    pub async fn update_permission_for_columns(
        &self,
        permission: &Permission,
        columns: &[&str],
    ) -> SdkResult<bool> {
        let (_, affected) = self
            .modify_permission("update-permission", permission, columns)
            .await?;
        Ok(affected)
    }

    pub async fn delete_permission(&self, permission: &Permission) -> SdkResult<bool> {
        let (_, affected) = self
            .modify_permission("delete-permission", permission, &[])
            .await?;
        Ok(affected)
    }

    /// Create, update or delete a permission; `action` is `add-permission`,
    /// `update-permission` or `delete-permission`.
    pub async fn modify_permission(
        &self,
        action: &str,
        permission: &Permission,
        columns: &[&str],
    ) -> SdkResult<(Response, bool)> {
        let id = permission.resource_id();
        let mut permission = permission.clone();
        permission.set_owner(self.config().organization_name());
        self.post_entity(action, &id, &permission, columns).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::mock::{mock_client, MockTransport, TEST_ORG};
    use crate::entity::Permission;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_permission_columns_in_order() {
        let (client, transport) =
            mock_client(MockTransport::with_json(vec![json!({"status": "ok", "data": "Affected"})]));

        let mut permission = Permission::new("org2", "read-docs");
        permission.actions = vec!["Read".into()];

        let affected = client
            .update_permission_for_columns(&permission, &["actions", "resources", "effect"])
            .await
            .unwrap();
        assert!(affected);

        let req = transport.last_request();
        assert_eq!(req.url.path(), "/api/update-permission");
        assert_eq!(req.query("id").as_deref(), Some("org2/read-docs"));
        assert_eq!(req.query("columns").as_deref(), Some("actions,resources,effect"));

        let body = req.body_json();
        assert_eq!(body["owner"], TEST_ORG);
        assert_eq!(body["actions"], json!(["Read"]));
    }

    #[tokio::test]
    async fn test_delete_permission_non_string_data() {
        let (client, _) =
            mock_client(MockTransport::with_json(vec![json!({"status": "ok", "data": {"rows": 1}})]));

        let affected = client
            .delete_permission(&Permission::new(TEST_ORG, "read-docs"))
            .await
            .unwrap();
        assert!(!affected);
    }

    #[tokio::test]
    async fn test_get_permissions() {
        let (client, transport) = mock_client(MockTransport::with_json(vec![json!({
            "status": "ok",
            "data": [{"owner": TEST_ORG, "name": "p1", "actions": ["Read", "Write"], "effect": "Allow"}]
        })]));

        let permissions = client.get_permissions().await.unwrap();
        assert_eq!(permissions[0].actions, vec!["Read", "Write"]);
        assert_eq!(transport.last_request().query("owner").as_deref(), Some(TEST_ORG));
    }
}
