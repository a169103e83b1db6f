use async_trait::async_trait;

use super::plan::TransferUnit;
use super::upload::TransferReport;
use crate::config::UploadConfig;

/// Observer for upload progress. Exactly one of `on_success`/`on_error` fires
/// per attempted transfer unit.
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    async fn start(&self, total: usize);
    async fn on_success(&self, unit: &TransferUnit, attempted: usize, total: usize);
    async fn on_error(&self, unit: &TransferUnit, message: &str, attempted: usize, total: usize);
    async fn finish(&self, report: &TransferReport);
}

/// Console reporter: progress on stdout, failures on stderr.
pub struct ConsoleReporter {
    workspace: String,
    lakehouse: String,
    subfolder: String,
}

impl ConsoleReporter {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            workspace: config.workspace.clone(),
            lakehouse: config.lakehouse.clone(),
            subfolder: config.subfolder.clone(),
        }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleReporter {
    async fn start(&self, total: usize) {
        println!(
            "Uploading {} files to Lakehouse -> Files/{}/",
            total, self.subfolder
        );
    }

    async fn on_success(&self, unit: &TransferUnit, attempted: usize, total: usize) {
        println!("[{}/{}] {}", attempted, total, unit.remote_path);
    }

    async fn on_error(&self, unit: &TransferUnit, message: &str, attempted: usize, total: usize) {
        eprintln!(
            "[{}/{}] Failed {}: {}",
            attempted,
            total,
            unit.file_name(),
            message
        );
    }

    async fn finish(&self, report: &TransferReport) {
        if report.aborted {
            eprintln!("Run aborted after repeated failures.");
        }
        println!(
            "Done: {}/{} files uploaded.",
            report.succeeded(),
            report.attempted()
        );
        println!(
            "Fabric location: workspace '{}' -> lakehouse '{}' -> Files/{}",
            self.workspace, self.lakehouse, self.subfolder
        );
    }
}

/// Reporter that discards all events, for tests and embedding.
pub struct NoopReporter;

#[async_trait]
impl ProgressReporter for NoopReporter {
    async fn start(&self, _total: usize) {}
    async fn on_success(&self, _unit: &TransferUnit, _attempted: usize, _total: usize) {}
    async fn on_error(
        &self,
        _unit: &TransferUnit,
        _message: &str,
        _attempted: usize,
        _total: usize,
    ) {
    }
    async fn finish(&self, _report: &TransferReport) {}
}
