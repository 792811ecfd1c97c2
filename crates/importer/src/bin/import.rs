use clap::{Parser, Subcommand};
use importer::{
    PageExtractor, SwimmerImporter, SwimmerLocator, UsmsClient, sources::usms::DEFAULT_USER_AGENT,
    validate_swimmer_id,
};
use performance::{analyze_performance, dto::report::AnalysisReport};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swim-import")]
#[command(about = "USMS swimmer results importer and performance analyzer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a swimmer's results page and print or save the report
    Analyze {
        /// Results page URL or swimmer id such as MZ99C
        locator: String,

        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Analyze a results page saved to disk
    Extract { file: PathBuf },
    /// Validate a swimmer id and print its results URL
    CheckId { swimmer_id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("swim_import={},importer={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Analyze { locator, output } => {
            let client =
                UsmsClient::with_options(&cli.user_agent, Duration::from_secs(cli.timeout_secs))?;
            let importer = SwimmerImporter::new(Arc::new(client), PageExtractor::default());
            handle_analyze(&importer, &locator, output).await?;
        }
        Commands::Extract { file } => {
            handle_extract(file).await?;
        }
        Commands::CheckId { swimmer_id } => {
            handle_check_id(&swimmer_id)?;
        }
    }

    Ok(())
}

async fn handle_analyze(
    importer: &SwimmerImporter,
    locator: &str,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let locator = SwimmerLocator::parse(locator)?;

    let data = importer
        .scrape(&locator)
        .await?
        .ok_or_else(|| format!("No results found at {}", locator.url()))?;

    let report = analyze_performance(&data).ok_or("No results to analyze")?;

    match output {
        Some(output_dir) => {
            let name = locator.swimmer_id().unwrap_or("swimmer");
            save_report(&report, &output_dir, name).await?;
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

async fn handle_extract(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loading results page from: {}", file.display());

    let html = tokio::fs::read_to_string(&file).await?;
    let data = PageExtractor::default()
        .extract(&html)
        .ok_or_else(|| format!("No results found in {}", file.display()))?;

    tracing::info!(
        "Extracted {} results for {}",
        data.results.len(),
        data.swimmer.name
    );

    let report = analyze_performance(&data).ok_or("No results to analyze")?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn handle_check_id(swimmer_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !validate_swimmer_id(swimmer_id) {
        return Err(format!(
            "'{}' is not a valid swimmer id (two letters, two or three digits, one letter)",
            swimmer_id
        )
        .into());
    }

    let locator = SwimmerLocator::from_swimmer_id(swimmer_id)?;
    tracing::info!("✓ Swimmer id is valid");
    println!("{}", locator.url());

    Ok(())
}

async fn save_report(
    report: &AnalysisReport,
    output_dir: &PathBuf,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    tokio::fs::create_dir_all(output_dir).await?;

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S");
    let filename = format!("{}_{}_report.json", timestamp, name);
    let filepath = output_dir.join(&filename);

    let json = serde_json::to_string_pretty(report)?;
    tokio::fs::write(&filepath, json).await?;

    tracing::info!(
        "Saved report for {} ({} events) to: {}",
        report.swimmer.name,
        report.summary.total_events,
        filepath.display()
    );

    Ok(())
}
