//! Binary entrypoint for the Tripwise API server.
use tripwise_api::{run, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ApiConfig::from_env()?;
    run(config).await
}
