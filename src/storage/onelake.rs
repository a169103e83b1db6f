// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use object_store::azure::MicrosoftAzureBuilder;
use object_store::{ObjectStore, RetryConfig};

use super::error::StorageResult;
use crate::config::UploadConfig;

/// All OneLake workspaces live under a single shared storage account.
pub const ONELAKE_ACCOUNT: &str = "onelake";

/// Fabric DFS domain; the account name above resolves to
/// `https://onelake.dfs.fabric.microsoft.com`.
pub const FABRIC_DOMAIN: &str = "dfs.fabric.microsoft.com";

/// Handle to the Files area of a Fabric workspace, authenticated as a
/// service principal.
///
/// The workspace maps to the container/filesystem name; objects inside it are
/// addressed as `{lakehouse}.Lakehouse/Files/...` paths. Construction does not
/// perform any network activity: credentials are exercised lazily by
/// `object_store` on the first request.
pub struct OneLakeStore {
    store: Arc<dyn ObjectStore>,
    url: String,
}

impl OneLakeStore {
    /// Build an authenticated store for the configured workspace.
    ///
    /// # Arguments
    ///
    /// * `config` - Upload configuration carrying the service-principal
    ///   identity and the workspace name
    ///
    /// # Returns
    ///
    /// A `Result` containing:
    /// * `Ok(OneLakeStore)` - A store bound to the workspace filesystem
    /// * `Err(StorageError)` - If the underlying Azure store cannot be built
    ///
    /// # Errors
    ///
    /// This function will return an error if the `object_store` builder
    /// rejects the configuration (e.g., an invalid container name). Invalid
    /// credentials surface later, on the first request.
    pub fn connect(config: &UploadConfig) -> StorageResult<Self> {
        let builder = MicrosoftAzureBuilder::new()
            .with_account(ONELAKE_ACCOUNT)
            .with_container_name(&config.workspace)
            .with_use_fabric_endpoint(true)
            .with_tenant_id(&config.tenant_id)
            .with_client_id(&config.client_id)
            .with_client_secret(&config.client_secret)
            .with_retry(RetryConfig::default());

        let store = builder.build()?;

        // Format: abfss://<container>@<account>.<endpoint>/
        let url = format!(
            "abfss://{}@{}.{}",
            config.workspace, ONELAKE_ACCOUNT, FABRIC_DOMAIN
        );

        Ok(Self {
            store: Arc::new(store),
            url,
        })
    }

    /// The shared `ObjectStore` handle used for every request in a run.
    pub fn object_store(&self) -> Arc<dyn ObjectStore> {
        Arc::clone(&self.store)
    }

    /// Canonical `abfss://` URL of the workspace filesystem.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Debug for OneLakeStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OneLakeStore(url={})", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_config() -> UploadConfig {
        UploadConfig {
            tenant_id: "tenant".to_string(),
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            workspace: "ws1".to_string(),
            lakehouse: "lh1".to_string(),
            local_root: PathBuf::from("/tmp/does-not-matter"),
            subfolder: "drop".to_string(),
        }
    }

    #[test]
    fn test_connect_builds_store() {
        let store = OneLakeStore::connect(&test_config());
        assert!(store.is_ok());
    }

    #[test]
    fn test_workspace_url() {
        let store = OneLakeStore::connect(&test_config()).unwrap();
        assert_eq!(store.url(), "abfss://ws1@onelake.dfs.fabric.microsoft.com");
    }

    #[test]
    fn test_store_handle_is_shared() {
        let store = OneLakeStore::connect(&test_config()).unwrap();
        let a = store.object_store();
        let b = store.object_store();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_debug_implementation() {
        let store = OneLakeStore::connect(&test_config()).unwrap();
        let debug_str = format!("{:?}", store);
        assert!(debug_str.contains("OneLakeStore"));
        assert!(debug_str.contains("ws1"));
    }
}
