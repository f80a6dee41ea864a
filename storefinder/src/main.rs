use std::process::ExitCode;

use tracing::{error, info};

use storefinder::{logging, startup, Dependencies, IndexingError, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Store finder failed");
            eprintln!("storefinder: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), IndexingError> {
    let settings = Settings::from_env()?;
    logging::init_tracing(settings.log_format)?;

    let dependencies = Dependencies::new(settings).await?;

    if let Some(response) = startup::run(&dependencies).await? {
        info!(
            index = %response.index_name,
            indexed = response.stores_indexed.len(),
            failed = response.stores_failed_to_index.len(),
            "Store records loaded"
        );
    }

    Ok(())
}
