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

//! Transfer pipeline
//!
//! Enumeration of the local tree into a materialized [`TransferPlan`], the
//! sequential [`Uploader`] that drives the plan against an `ObjectStore`, and
//! the [`ProgressReporter`] observer both feed.

pub mod plan;
pub mod progress;
pub mod upload;

// Public exports
pub use plan::{remote_path, TransferPlan, TransferUnit};
pub use progress::{ConsoleReporter, NoopReporter, ProgressReporter};
pub use upload::{FailurePolicy, TransferOutcome, TransferReport, Uploader};
