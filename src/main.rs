use analytics::LossAnalyzer;
use clap::{Parser, Subcommand};
use configuration::{ReportFormat, Settings};
use records::{CsvSource, RecordSource};
use std::net::SocketAddr;
use std::path::PathBuf;

mod render;

/// The main entry point for the farm-gate loss analyzer.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // FARMGATE__* overrides may live in a .env file; it is optional.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = configuration::load_settings(&cli.config)?;
    let _guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &settings),
        Commands::Serve(args) => handle_serve(args, settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Estimates what producers lose by selling at the farm gate instead of at market.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file. Missing files are fine; defaults and FARMGATE__* variables apply.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a crop price CSV and print the loss per crop.
    Analyze(AnalyzeArgs),
    /// Serve the JSON API.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// The CSV to analyze. Defaults to the configured sample data.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Output format. Defaults to `report.format` from the settings.
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to bind (e.g., "0.0.0.0:8080"). Defaults to the configured host and port.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_analyze(args: AnalyzeArgs, settings: &Settings) -> anyhow::Result<()> {
    let path = args.csv.unwrap_or_else(|| settings.data.sample_csv.clone());
    let records = CsvSource::new(&path).load()?;

    let summary = LossAnalyzer::new().analyze_all(&records);
    tracing::info!(
        path = %path.display(),
        rows = summary.rows.len(),
        total_loss = %summary.total_loss,
        "Analysis complete."
    );

    match args.format.unwrap_or(settings.report.format) {
        ReportFormat::Table => println!("{}", render::render_table(&summary)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

async fn handle_serve(args: ServeArgs, settings: Settings) -> anyhow::Result<()> {
    let addr = match args.addr {
        Some(addr) => addr,
        None => settings.server.socket_addr()?,
    };
    web_server::run_server(addr, settings).await
}
