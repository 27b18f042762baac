use anyhow::Result;
use job_board::config::AppConfig;
use job_board::web::start_web_server;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("job_board=info,rocket::server=off")),
        )
        .init();

    let config = AppConfig::load()?;

    let port = match std::env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?,
        Err(_) => 8000,
    };

    info!(
        "Environment: {}",
        std::env::var("JOB_BOARD_ENV").unwrap_or_else(|_| "local".to_string())
    );

    start_web_server(config, port).await
}
