use std::sync::Arc;

use fnproxy::api::{FnProxyApi, shutdown_signal};
use fnproxy::conf::Config;
use fnproxy::core::setup_logging;
use fnproxy::service::{PgSource, TestDataSource};
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    let config = Config::from_env()?;

    let source = Arc::new(PgSource::connect(&config.database, &config.pool).await?);
    let api = FnProxyApi::new(source.clone(), &config.server);
    let served = api.serve(&config.server.addr(), shutdown_signal()).await;

    source.close().await;
    served?;
    info!("fnproxy stopped.");
    Ok(())
}
