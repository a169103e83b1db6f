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

//! OneLake storage layer
//!
//! This module builds the authenticated handle to a Fabric workspace
//! filesystem on top of the `object_store` crate's Azure backend. The
//! `ObjectStore` trait is the seam between this crate and the cloud: the
//! upload driver only ever sees an `Arc<dyn ObjectStore>`, so tests can
//! substitute a local filesystem store.

pub mod error;
pub mod onelake;

// Public exports
pub use error::{StorageError, StorageResult};
pub use onelake::OneLakeStore;
