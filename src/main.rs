use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dbt_preflight::check::{DEBUG_TIMEOUT, ProcessCheckRunner};
use dbt_preflight::outcome::Outcome;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let outcome = ProcessCheckRunner::new().run().await?;

    match outcome {
        Outcome::Success => info!("dbt debug succeeded; profiles.yml is valid"),
        Outcome::Failure(code) => error!(code, "dbt debug failed"),
        Outcome::Timeout => {
            error!(timeout_secs = DEBUG_TIMEOUT.as_secs(), "dbt debug timed out");
        }
        Outcome::CommandNotFound => {
            error!("dbt command not found; make sure dbt is installed and on PATH");
        }
    }

    std::process::exit(outcome.exit_code());
}
