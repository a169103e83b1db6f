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

use std::sync::Arc;

use bytes::Bytes;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutPayload};
use tracing::{error, info};

use super::plan::{TransferPlan, TransferUnit};
use super::progress::ProgressReporter;
use crate::storage::error::StorageResult;

/// Result of one attempted transfer unit.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub unit: TransferUnit,
    /// Captured failure message; `None` on success
    pub error: Option<String>,
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcomes of a whole run, one entry per attempted unit.
#[derive(Debug, Default)]
pub struct TransferReport {
    pub outcomes: Vec<TransferOutcome>,
    /// True when the failure policy stopped the run before all units were
    /// attempted
    pub aborted: bool,
}

impl TransferReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    /// Outcomes of units that failed, in attempt order.
    pub fn failures(&self) -> impl Iterator<Item = &TransferOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    /// True only when every unit was attempted and none failed.
    pub fn is_success(&self) -> bool {
        !self.aborted && self.failed() == 0
    }
}

/// Controls whether a run gives up early.
///
/// The default never aborts: every unit is attempted regardless of how many
/// fail, and failures only surface in the report. Setting
/// `max_consecutive_failures` bounds a run against a dead endpoint, where
/// every attempt would fail the same way.
#[derive(Debug, Clone, Default)]
pub struct FailurePolicy {
    pub max_consecutive_failures: Option<usize>,
}

/// Sequential upload driver.
///
/// Drives the materialized plan against an `ObjectStore`, one unit at a time
/// in plan order. Each local file is fully read and released before the next
/// unit starts; each put overwrites any existing object at the destination.
pub struct Uploader {
    store: Arc<dyn ObjectStore>,
    policy: FailurePolicy,
}

impl Uploader {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Attempt every unit in the plan, collecting per-unit outcomes.
    ///
    /// A failing unit never stops the units after it unless the failure
    /// policy trips; the reporter sees exactly one event per attempt plus
    /// `start` and `finish`.
    pub async fn run(&self, plan: &TransferPlan, reporter: &dyn ProgressReporter) -> TransferReport {
        let total = plan.len();
        reporter.start(total).await;

        let mut report = TransferReport::default();
        let mut consecutive_failures = 0usize;
        for unit in plan.units() {
            let attempted = report.attempted() + 1;
            match self.upload_one(unit).await {
                Ok(()) => {
                    consecutive_failures = 0;
                    info!(remote = %unit.remote_path, size = unit.size, "Uploaded file");
                    reporter.on_success(unit, attempted, total).await;
                    report.outcomes.push(TransferOutcome {
                        unit: unit.clone(),
                        error: None,
                    });
                }
                Err(e) => {
                    consecutive_failures += 1;
                    let message = e.to_string();
                    error!(file = %unit.file_name(), error = %message, "Upload failed");
                    reporter.on_error(unit, &message, attempted, total).await;
                    report.outcomes.push(TransferOutcome {
                        unit: unit.clone(),
                        error: Some(message),
                    });

                    if let Some(limit) = self.policy.max_consecutive_failures {
                        if consecutive_failures >= limit {
                            error!(limit, "Stopping run after consecutive upload failures");
                            report.aborted = true;
                            break;
                        }
                    }
                }
            }
        }

        reporter.finish(&report).await;
        report
    }

    async fn upload_one(&self, unit: &TransferUnit) -> StorageResult<()> {
        let contents = tokio::fs::read(&unit.local_path).await?;
        let destination = ObjectPath::from(unit.remote_path.as_str());
        self.store
            .put(&destination, PutPayload::from(Bytes::from(contents)))
            .await?;
        Ok(())
    }
}
