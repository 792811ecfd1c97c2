use importer::{SwimmerImporter, SwimmerLocator};
use performance::analyze_performance;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let locator = SwimmerLocator::parse("MZ99C")?;
    let importer = SwimmerImporter::usms()?;

    let Some(data) = importer.scrape(&locator).await? else {
        println!("No results found at {}", locator.url());
        return Ok(());
    };

    if let Some(report) = analyze_performance(&data) {
        println!(
            "{}: {} events over {} meets, {} points",
            report.swimmer.name,
            report.summary.total_events,
            report.swimmer.total_meets,
            report.summary.total_points
        );
        for best in &report.performance.best_times {
            println!("  {} {} ({})", best.event, best.time, best.course_type);
        }
    }

    Ok(())
}
