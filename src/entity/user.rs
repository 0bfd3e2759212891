//! User operations.

use tracing::info;

use super::{scoped_id, Entity, User};
use crate::client::{Client, Response};
use crate::error::SdkResult;

impl Client {
    /// List all users of the configured organization.
    pub async fn get_users(&self) -> SdkResult<Vec<User>> {
        let url = self.get_url("get-users", &[("owner", self.config().organization_name())]);
        let bytes = self.do_get_bytes(&url).await?;
        let users: Option<Vec<User>> = serde_json::from_slice(&bytes)?;
        Ok(users.unwrap_or_default())
    }

    /// Fetch one user by name; `None` when the server has no such user.
    pub async fn get_user(&self, name: &str) -> SdkResult<Option<User>> {
        let id = scoped_id(self.config().organization_name(), name);
        let url = self.get_url("get-user", &[("id", id.as_str())]);
        let bytes = self.do_get_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Count users of the configured organization, optionally only online (`Some(true)`)
    /// or offline (`Some(false)`) ones.
    pub async fn get_user_count(&self, is_online: Option<bool>) -> SdkResult<i64> {
        let is_online = match is_online {
            Some(true) => "1",
            Some(false) => "0",
            None => "",
        };
        let url = self.get_url(
            "get-user-count",
            &[
                ("owner", self.config().organization_name()),
                ("isOnline", is_online),
            ],
        );
        let bytes = self.do_get_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn add_user(&self, user: &User) -> SdkResult<bool> {
        let (_, affected) = self.modify_user("add-user", user, &[]).await?;
        info!(user = %user.name, affected, "add-user");
        Ok(affected)
    }

    pub async fn update_user(&self, user: &User) -> SdkResult<bool> {
        let (_, affected) = self.modify_user("update-user", user, &[]).await?;
        Ok(affected)
    }

    /// Update only the listed columns (wire names, e.g. `"displayName"`).
    pub async fn update_user_for_columns(&self, user: &User, columns: &[&str]) -> SdkResult<bool> {
        let (_, affected) = self.modify_user("update-user", user, columns).await?;
        Ok(affected)
    }

    /// Update the user stored under `id`, which may differ from the user's
    /// current `owner/name` (e.g. when renaming).
    pub async fn update_user_by_id(&self, id: &str, user: &User) -> SdkResult<bool> {
        let (_, affected) = self.modify_user_by_id("update-user", id, user, &[]).await?;
        Ok(affected)
    }

    pub async fn delete_user(&self, user: &User) -> SdkResult<bool> {
        let (_, affected) = self.modify_user("delete-user", user, &[]).await?;
        info!(user = %user.name, affected, "delete-user");
        Ok(affected)
    }

    /// Create, update or delete a user; `action` is `add-user`, `update-user` or `delete-user`.
    pub async fn modify_user(
        &self,
        action: &str,
        user: &User,
        columns: &[&str],
    ) -> SdkResult<(Response, bool)> {
        self.modify_user_by_id(action, &user.get_id(), user, columns)
            .await
    }

    pub async fn modify_user_by_id(
        &self,
        action: &str,
        id: &str,
        user: &User,
        columns: &[&str],
    ) -> SdkResult<(Response, bool)> {
        let mut user = user.clone();
        user.set_owner(self.config().organization_name());
        self.post_entity(action, id, &user, columns).await
    }
}
