//! File resources: upload and delete.

use tracing::info;

use super::Resource;
use crate::client::Client;
use crate::error::SdkResult;

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedResource {
    /// Public URL of the stored file.
    pub file_url: String,
    /// Name the server stored the resource under.
    pub name: String,
}

impl Client {
    /// Upload `file_bytes` as a single-file multipart form.
    ///
    /// `user` is the uploading user's name, `full_file_path` the storage path
    /// relative to the application's storage provider.
    pub async fn upload_resource(
        &self,
        user: &str,
        tag: &str,
        parent: &str,
        full_file_path: &str,
        file_bytes: &[u8],
    ) -> SdkResult<UploadedResource> {
        let config = self.config();
        let query = [
            ("owner", config.organization_name()),
            ("user", user),
            ("application", config.application_name()),
            ("tag", tag),
            ("parent", parent),
            ("fullFilePath", full_file_path),
        ];

        let response = self
            .do_post("upload-resource", &query, file_bytes, true, true)
            .await?;

        let uploaded = UploadedResource {
            file_url: response.data_as()?,
            name: response.data2_as()?,
        };
        info!(name = %uploaded.name, bytes = file_bytes.len(), "uploaded resource");
        Ok(uploaded)
    }

    /// Delete a resource of the configured organization by name.
    pub async fn delete_resource(&self, name: &str) -> SdkResult<bool> {
        let resource = Resource::new(self.config().organization_name(), name);
        let body = serde_json::to_vec(&resource)?;

        let response = self
            .do_post("delete-resource", &[], &body, false, false)
            .await?;
        Ok(response.is_affected())
    }
}
