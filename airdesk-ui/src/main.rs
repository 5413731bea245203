use std::sync::Arc;
use anyhow::Context;
use airdesk_client::Config;
use airdesk_ui::{app, host, state_from_config, AppError, TerminalDocument};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout is the page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airdesk_ui=info,airdesk_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().map_err(AppError::from).context("Failed to load config")?;
    tracing::info!(
        "Booking endpoint {}, chat endpoint {}",
        config.endpoints.booking_url(),
        config.endpoints.chat_url()
    );

    let state = state_from_config(&config).context("Failed to build HTTP client")?;

    let document = Arc::new(TerminalDocument::stdout());
    let controller = app(state, document.clone());
    document.note(host::HELP);

    host::run(controller, document, BufReader::new(tokio::io::stdin())).await?;
    Ok(())
}
