use anyhow::{Context, Result};
use clap::Parser;
use property_forecast::{
    project_property, DataLoader, Metric, PropertyHistory, ProjectionConfig,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "property_outlook")]
#[command(about = "Five-year trend and scenario outlook for a property", long_about = None)]
struct Cli {
    /// Input CSV with Property Name, Year, NOI, Occupancy and Value columns
    #[arg(short, long)]
    input: PathBuf,

    /// Property to analyse (defaults to the first one in the file)
    #[arg(short, long)]
    property: Option<String>,

    /// Number of years to project
    #[arg(short, long)]
    years: Option<usize>,

    /// JSON file with projection settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the outlook as JSON
    #[arg(long)]
    json: bool,

    /// List property names and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let portfolio = DataLoader::from_csv(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    info!(rows = portfolio.len(), "loaded property table");

    if cli.list {
        for name in portfolio.property_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => ProjectionConfig::from_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ProjectionConfig::default(),
    };
    if let Some(years) = cli.years {
        config = ProjectionConfig::new(years).context("Invalid --years")?;
    }

    let history = match &cli.property {
        Some(name) => portfolio.property_history(name),
        None => portfolio.first_property_history(),
    }
    .context("Failed to select property")?;

    let outlook = project_property(&history, &config).context("Projection failed")?;

    if cli.json {
        println!("{}", outlook.to_json()?);
        return Ok(());
    }

    println!("\nAnalyzing Property: {}\n", outlook.property_name());
    print_history(&history);

    println!(
        "\n----- {}-Year Scenario Forecast -----\n",
        config.years_forward
    );
    print!("{}", outlook.scenarios());

    println!("\n----- Trend Fit -----\n");
    for metric in Metric::ALL {
        println!("{:<10} {}", metric, outlook.projection(metric).diagnostics());
    }

    Ok(())
}

fn print_history(history: &PropertyHistory) {
    println!(
        "{:>6} {:>16} {:>10} {:>18} {:>8}",
        "Year", "NOI", "Occupancy", "Value", "DSCR"
    );
    for record in history.records() {
        let dscr = record
            .dscr
            .map(|d| format!("{:.2}", d))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>6} {:>16.2} {:>10.2} {:>18.2} {:>8}",
            record.year, record.noi, record.occupancy, record.value, dscr
        );
    }
}
