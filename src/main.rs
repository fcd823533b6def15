//! HTTP server for the Recruiter Margin Calculator.
//!
//! Environment:
//! - `BIND_ADDR` - listen address (default `127.0.0.1:3000`)
//! - `RATE_TABLE_PATH` - optional YAML rate table; built-in GSA rates otherwise
//! - `EXPORT_MAX_ATTEMPTS` - renderer attempts per export (default 1)
//! - `RUST_LOG` - tracing filter (default `recruiter_margin_calc=info`)

use recruiter_margin_calc::api::{AppState, create_router};
use recruiter_margin_calc::config::ServerSettings;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("recruiter_margin_calc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let settings = ServerSettings::from_env()?;
    let rates = settings.rate_table()?;
    tracing::info!(
        destinations = rates.len(),
        source = %settings
            .rate_table_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        "Rate table ready"
    );

    let state = AppState::new(rates).with_export_settings(settings.export_settings());
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    tracing::info!(addr = %settings.bind_addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
