use std::error::Error;
use std::process;

use tracing::{error, info};

use lake_loader::{ConsoleReporter, OneLakeStore, TransferPlan, UploadConfig, Uploader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    dotenvy::dotenv().ok();

    let config = UploadConfig::from_env()?;
    info!(
        workspace = %config.workspace,
        lakehouse = %config.lakehouse,
        subfolder = %config.subfolder,
        "Starting Lake Loader"
    );

    let plan = TransferPlan::scan(&config)?;
    let store = OneLakeStore::connect(&config)?;
    info!(url = %store.url(), files = plan.len(), "Store connected, starting upload");

    let reporter = ConsoleReporter::new(&config);
    let report = Uploader::new(store.object_store())
        .run(&plan, &reporter)
        .await;

    if !report.is_success() {
        error!(
            failed = report.failed(),
            attempted = report.attempted(),
            "Run finished with upload failures"
        );
        process::exit(1);
    }

    Ok(())
}
