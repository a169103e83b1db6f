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

//! # Lake Loader
//!
//! A Rust library and CLI for uploading a local directory tree to the Files
//! area of an Azure OneLake / Fabric Lakehouse.
//!
//! Lake Loader authenticates as a service principal (client credentials),
//! enumerates the local tree into a materialized transfer plan, and uploads
//! every file sequentially with overwrite semantics, isolating per-file
//! failures so one bad file never aborts the run.
//!
//! ## Features
//!
//! - **Service-principal authentication**: tenant id, client id and client
//!   secret, delegated to the `object_store` Azure backend
//! - **OneLake addressing**: objects land at
//!   `{lakehouse}.Lakehouse/Files/{subfolder}/{relative-path}` inside the
//!   workspace filesystem
//! - **Deterministic enumeration**: recursive, file names sorted per
//!   directory level, fully materialized before the first upload
//! - **Failure isolation**: per-file outcomes collected into a report; an
//!   optional policy bounds consecutive failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lake_loader::{ConsoleReporter, OneLakeStore, TransferPlan, UploadConfig, Uploader};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! // Reads TENANT_ID, CLIENT_ID, CLIENT_SECRET, WORKSPACE_NAME,
//! // LAKEHOUSE_NAME, LOCAL_FOLDER and optionally TARGET_SUBFOLDER.
//! let config = UploadConfig::from_env()?;
//!
//! let plan = TransferPlan::scan(&config)?;
//! let store = OneLakeStore::connect(&config)?;
//!
//! let report = Uploader::new(store.object_store())
//!     .run(&plan, &ConsoleReporter::new(&config))
//!     .await;
//!
//! assert!(report.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven run configuration
//! - [`storage`] - OneLake store factory and error types
//! - [`transfer`] - Transfer plan, upload driver and progress reporting

pub mod config;
pub mod storage;
pub mod transfer;

// Re-export commonly used types
pub use config::UploadConfig;
pub use storage::{OneLakeStore, StorageError, StorageResult};
pub use transfer::{
    ConsoleReporter, FailurePolicy, NoopReporter, ProgressReporter, TransferPlan, TransferReport,
    TransferUnit, Uploader,
};
