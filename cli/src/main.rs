//! CLI entrypoint for AidPal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use aidpal_application::{
    AnalyzeWoundInput, AnalyzeWoundUseCase, HistoryItem, HistoryStore, NoHistoryStore,
};
use aidpal_domain::Model;
use aidpal_infrastructure::{ConfigLoader, FileOutputFormat, GeminiGateway, JsonlHistoryStore};
use aidpal_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use anyhow::{Context, Result, bail};
use base64::Engine;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("Defaults:\n{}", ConfigLoader::default_toml());
        return Ok(());
    }

    for issue in config.validate() {
        warn!("config: {}", issue.message);
    }

    // History store; falls back to the no-op store when disabled or unopenable
    let store: Arc<dyn HistoryStore> = if config.history.enabled && !cli.no_history {
        config
            .history
            .resolve_path()
            .and_then(JsonlHistoryStore::open)
            .map(|s| Arc::new(s) as Arc<dyn HistoryStore>)
            .unwrap_or_else(|| Arc::new(NoHistoryStore))
    } else {
        Arc::new(NoHistoryStore)
    };

    // History view mode
    if cli.history {
        println!("{}", ConsoleFormatter::format_history(&store.list()));
        return Ok(());
    }

    // Analysis mode requires an image
    let Some(image_path) = cli.image.as_ref() else {
        bail!("An image path is required. Use --history to view past analyses.");
    };

    // Candidate models: CLI override beats config
    let candidates: Vec<Model> = if cli.model.is_empty() {
        config.models.parse_candidates().0
    } else {
        // Model::from_str is infallible; unknown names become Custom(...)
        cli.model.iter().map(|s| s.parse().unwrap()).collect()
    };

    let Some(api_key) = config.provider.resolve_api_key() else {
        bail!(
            "No API key configured. Set {} or provider.api_key in the config file.",
            config.provider.api_key_env
        );
    };

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(
        api_key,
        config.provider.base_url.clone(),
        config.provider.timeout(),
    )?);
    let use_case = AnalyzeWoundUseCase::new(gateway, candidates);

    let image = encode_image(image_path)?;
    let input = AnalyzeWoundInput::new(image.clone(), cli.context.clone());

    info!("Analyzing {}", image_path.display());

    let result = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        let outcome = use_case.execute_with_progress(input, &progress).await;
        progress.finish();
        outcome?
    };

    let format = cli.output.unwrap_or(match config.output.format {
        FileOutputFormat::Text => OutputFormat::Text,
        FileOutputFormat::Json => OutputFormat::Json,
    });
    let rendered = match format {
        OutputFormat::Text => ConsoleFormatter::format(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", rendered);

    // Record the analysis; append failures only warn, never fail the run
    store.append(&HistoryItem::new(image, result));

    Ok(())
}

/// Read an image file and encode it as a data URI.
fn encode_image(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    if bytes.is_empty() {
        bail!("Image file {} is empty", path.display());
    }

    let media_type = mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| "image/jpeg".to_string());
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);

    Ok(format!("data:{};base64,{}", media_type, encoded))
}
