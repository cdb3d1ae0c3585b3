use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber;

use markgate::config::MarkgateConfig;
use markgate::ratelimit::RateLimiter;
use markgate::registry::{Document, DocumentSubmitter, SubmissionOutcome};

#[derive(Parser)]
#[command(name = "markgate", version)]
#[command(about = "Rate-limited document submission gateway for the product marking registry")]
struct Args {
    /// Path to the YAML configuration file; built-in defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the document JSON to submit
    #[arg(long)]
    document: PathBuf,

    /// Detached signature, sent as the bearer token
    #[arg(long)]
    signature: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    info!("Starting Markgate submission gateway");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => {
            let path = path.to_str().context("Config path is not valid UTF-8")?;
            MarkgateConfig::from_file(path)?
        }
        None => MarkgateConfig::default(),
    };
    info!(
        endpoint = %config.registry.endpoint,
        limit = config.rate_limiting.requests_per_unit,
        unit = %config.rate_limiting.unit,
        "Configuration loaded"
    );

    let limiter = Arc::new(RateLimiter::new(
        config.rate_limiting.requests_per_unit,
        config.rate_limiting.unit.duration(),
    ));
    info!("Rate limiter initialized");

    let submitter = DocumentSubmitter::new(&config.registry, Arc::clone(&limiter))?;

    let raw = std::fs::read_to_string(&args.document)
        .with_context(|| format!("Failed to read document {}", args.document.display()))?;
    let document: Document = serde_json::from_str(&raw)?;

    let outcome = submitter.submit(&document, &args.signature).await;
    limiter.shutdown();

    match outcome? {
        SubmissionOutcome::Accepted(status) => {
            info!(status = %status, "Document accepted by registry");
        }
        SubmissionOutcome::AcceptedWithAuthWarning => {
            warn!("Document submitted, but the registry reported an authorization problem");
        }
    }

    Ok(())
}
