// Exports the OpenAPI schema of the service's shared payloads.
// Run with: cargo run --bin openapi_export

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_service_errors::{config::ExportConfig, openapi::ApiDoc};
use utoipa::OpenApi;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the document
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,user_service_errors=debug,openapi_export=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ExportConfig::from_env().context("Failed to load configuration")?;
    debug!(?config, "Configuration loaded");

    let doc = ApiDoc::openapi();
    let json = if config.pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    }
    .context("Failed to serialize OpenAPI spec to JSON")?;

    match &config.output_path {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write OpenAPI spec to {}", path.display()))?;
            info!(path = %path.display(), bytes = json.len(), "OpenAPI specification written");
        }
        None => {
            println!("{}", json);
            info!(bytes = json.len(), "OpenAPI specification generated");
        }
    }

    Ok(())
}
