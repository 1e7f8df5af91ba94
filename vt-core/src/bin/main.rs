use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{event, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vt_core::engine::MarketEngine;
use vt_core::server::build_router;
use vt_core::test_objects::DemoUniverse;
use vt_domain::EconomyConfig;

#[derive(Parser, Debug)]
#[command(name = "vt-server", about = "Voidtrade economy engine server")]
struct Cli {
    #[arg(long, env = "VT_LISTEN_ADDR", default_value = "127.0.0.1:8079")]
    listen_addr: SocketAddr,

    /// Fixed RNG seed for the featured-route seeder; omit for entropy.
    #[arg(long, env = "VT_RNG_SEED")]
    seed: Option<u64>,

    /// Overrides the reseed cadence from the economy config.
    #[arg(long, env = "VT_RESEED_INTERVAL_SECS")]
    reseed_interval_secs: Option<u64>,

    /// Optional JSON file overriding the built-in economy config.
    #[arg(long, env = "VT_ECONOMY_CONFIG")]
    economy_config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.economy_config {
        Some(path) => {
            let raw = std::fs::read_to_string(path).with_context(|| format!("reading economy config {}", path.display()))?;
            serde_json::from_str::<EconomyConfig>(&raw).with_context(|| format!("parsing economy config {}", path.display()))?
        }
        None => EconomyConfig::with_default_affinities(),
    };
    if let Some(secs) = cli.reseed_interval_secs {
        config.featured.reseed_interval_secs = secs;
    }
    let reseed_interval_secs = config.featured.reseed_interval_secs;

    let engine = Arc::new(MarketEngine::new(
        config,
        DemoUniverse::catalog(),
        DemoUniverse::recipe_book(),
        DemoUniverse::registry(),
        cli.seed,
    ));
    engine.reseed().await;

    let scheduler = JobScheduler::new()
        .await
        .map_err(|err| anyhow!("failed to create scheduler: {err:?}"))?;
    let job_engine = Arc::clone(&engine);
    let reseed_job = Job::new_repeated_async(Duration::from_secs(reseed_interval_secs), move |_uuid, _lock| {
        let engine = Arc::clone(&job_engine);
        Box::pin(async move {
            engine.reseed().await;
        })
    })
    .map_err(|err| anyhow!("failed to create reseed job: {err:?}"))?;
    scheduler
        .add(reseed_job)
        .await
        .map_err(|err| anyhow!("failed to add reseed job: {err:?}"))?;
    scheduler
        .start()
        .await
        .map_err(|err| anyhow!("failed to start scheduler: {err:?}"))?;
    event!(Level::INFO, "Reseeding featured routes every {}s", reseed_interval_secs);

    let app = build_router(Arc::clone(&engine));
    let listener = tokio::net::TcpListener::bind(cli.listen_addr).await?;
    event!(Level::INFO, "Listening on http://{}", cli.listen_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
