use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glowscan::api::AnalysisResponse;
use glowscan::models::AppConfig;
use glowscan::server;
use glowscan::services::{Analysis, ImageDecoder};
use skin_tone::SkinScanner;

#[derive(Parser)]
#[command(name = "glowscan")]
#[command(about = "Glowscan - skin tone scan service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Analyze image files in one scan session
    Analyze {
        /// PNG or JPEG files, analyzed in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print one JSON object per file instead of a summary line
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Analyze { files, json }) => run_analyze_command(&files, json),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn config_path() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

/// Analyze files directly (no server needed)
fn run_analyze_command(files: &[PathBuf], json: bool) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glowscan=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(config_path().as_deref());
    let decoder = ImageDecoder::new(&config.limits);
    let mut scanner = SkinScanner::with_options(config.cache_options());

    let mut failed = 0usize;
    for path in files {
        match analyze_file(&decoder, &mut scanner, path) {
            Ok(analysis) => {
                if json {
                    let response = AnalysisResponse::new(&analysis);
                    println!("{}", serde_json::to_string(&response)?);
                } else {
                    print_summary(path, &analysis);
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}: {e:#}", path.display());
            }
        }
    }

    if !json {
        let stats = scanner.stats();
        println!(
            "\n{} analyzed, {} from cache, {} failed",
            stats.computations, stats.hits, failed
        );
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} files could not be analyzed", files.len());
    }
    Ok(())
}

fn analyze_file(
    decoder: &ImageDecoder,
    scanner: &mut SkinScanner,
    path: &Path,
) -> anyhow::Result<Analysis> {
    let bytes = std::fs::read(path)?;
    let buffer = decoder.decode(&bytes)?;
    let outcome = scanner.lookup_or_compute(&buffer);

    Ok(Analysis {
        outcome,
        width: buffer.width(),
        height: buffer.height(),
        analyzed_at: chrono::Utc::now(),
    })
}

fn print_summary(path: &Path, analysis: &Analysis) {
    let result = &analysis.outcome.result;
    let category = result.category();
    let source = if analysis.outcome.cache_hit {
        "cached"
    } else {
        "computed"
    };

    println!(
        "{}: {} {} (rule {}, brightness {:.1}, melanin {:.2}) [{source}]",
        path.display(),
        category.letter(),
        category.name(),
        result.classification.rule.position(),
        result.profile.average_brightness,
        result.classification.ratios.melanin,
    );
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    // Read environment variables
    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    // Header
    println!("Glowscan v{VERSION}");
    println!("Skin tone scan service\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    // Effective configuration
    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(config_file.as_deref().map(Path::new));

    println!("\nConfiguration ({config_source}):");
    println!(
        "  cache.similarity_threshold = {}",
        config.cache.similarity_threshold
    );
    println!("  cache.tolerance            = {}", config.cache.tolerance);
    println!(
        "  cache.max_entries          = {}",
        config
            .cache
            .max_entries
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unbounded".to_string())
    );
    println!(
        "  limits.max_upload_bytes    = {}",
        config.limits.max_upload_bytes
    );
    println!(
        "  limits.max_dimension       = {}",
        config.limits.max_dimension
    );

    // Commands section
    println!("\nCommands:");
    println!("  glowscan serve     Start the HTTP server");
    println!("  glowscan analyze   Analyze image files");
    println!("\nRun 'glowscan --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glowscan=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::load(config_path().as_deref());

    let state = server::create_app_state(config);
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Glowscan server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
