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

//! Environment-driven configuration
//!
//! All identity and path parameters come from environment variables (a `.env`
//! file, if present, is loaded by the binary before this module runs). The
//! configuration is read once at startup into an immutable [`UploadConfig`]
//! that is passed explicitly through the rest of the pipeline.

use std::env;
use std::path::PathBuf;

use crate::storage::error::{StorageError, StorageResult};

/// Subfolder used under the lakehouse Files root when `TARGET_SUBFOLDER`
/// is not set.
pub const DEFAULT_SUBFOLDER: &str = "auto_uploaded";

/// Immutable run configuration for one upload.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Entra tenant of the service principal
    pub tenant_id: String,
    /// Application (client) id of the service principal
    pub client_id: String,
    /// Client secret of the service principal
    pub client_secret: String,
    /// Fabric workspace name, which maps to the storage filesystem name
    pub workspace: String,
    /// Lakehouse name, prefixed to `.Lakehouse/Files` on the remote side
    pub lakehouse: String,
    /// Root of the local directory tree to upload
    pub local_root: PathBuf,
    /// Subfolder under the lakehouse Files root receiving the upload
    pub subfolder: String,
}

impl UploadConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a single `StorageError::ConfigError` naming every required
    /// variable that is missing or empty. No partial configuration is ever
    /// produced.
    pub fn from_env() -> StorageResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an injected lookup function.
    ///
    /// Same semantics as [`UploadConfig::from_env`]; tests use this to avoid
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> StorageResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut require = |key: &'static str| -> String {
            match lookup(key) {
                Some(value) if !value.is_empty() => value,
                _ => {
                    missing.push(key);
                    String::new()
                }
            }
        };

        let tenant_id = require("TENANT_ID");
        let client_id = require("CLIENT_ID");
        let client_secret = require("CLIENT_SECRET");
        let workspace = require("WORKSPACE_NAME");
        let lakehouse = require("LAKEHOUSE_NAME");
        let local_folder = require("LOCAL_FOLDER");

        if !missing.is_empty() {
            return Err(StorageError::ConfigError(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let subfolder = lookup("TARGET_SUBFOLDER")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBFOLDER.to_string());

        Ok(Self {
            tenant_id,
            client_id,
            client_secret,
            workspace,
            lakehouse,
            local_root: PathBuf::from(local_folder),
            subfolder,
        })
    }

    /// Remote root of the lakehouse Files area: `{lakehouse}.Lakehouse/Files`.
    pub fn lakehouse_root(&self) -> String {
        format!("{}.Lakehouse/Files", self.lakehouse)
    }
}
