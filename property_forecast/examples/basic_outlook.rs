use property_forecast::{project_property, DataLoader, Metric, ProjectionConfig};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load data from CSV
    let csv_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("examples")
        .join("csv")
        .join("cmbs_property_data.csv");

    println!("Loading data from: {}", csv_path.display());
    let portfolio = DataLoader::from_csv(csv_path)?;
    println!("Properties: {:?}", portfolio.property_names());

    let history = portfolio.property_history("Maple Commons")?;
    let outlook = project_property(&history, &ProjectionConfig::default())?;

    println!("\n5-year scenarios for {}:\n", outlook.property_name());
    print!("{}", outlook.scenarios());

    // Chart data for each metric
    for metric in Metric::ALL {
        let chart = outlook.chart_series(metric);
        println!("\n{} ({})", chart.title, chart.y_label);
        for line in &chart.lines {
            let last = line.points.last().map(|(_, v)| *v).unwrap_or_default();
            println!("  {:<10} ends at {:.2}", line.label, last);
        }
    }

    Ok(())
}
