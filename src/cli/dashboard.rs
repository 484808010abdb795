use anyhow::{Context, Result};
use fitmarket::constants::truncate_safe;
use fitmarket::flows::dashboard::CreatorDashboard;

pub fn run(config_path: Option<&str>) -> Result<()> {
    let (_settings, gateway) = super::setup(config_path)?;

    let mut dash =
        CreatorDashboard::from_gateway(&gateway).context("Failed to fetch published programs")?;
    dash.load_analytics(&gateway);

    let stats = dash.stats();
    println!("Subscribers: {}", stats.total_subscribers);
    println!("Ratings:     {}", stats.total_ratings);
    println!("Avg rating:  {:.1}", stats.avg_rating);
    if let Some(analytics) = dash.analytics() {
        println!("Views:       {}", analytics.total_views);
        println!("Joins (mo):  {}", analytics.joins_this_month);
    }

    println!();
    if dash.is_empty() {
        println!("No published programs yet. Publish one to see engagement here.");
        return Ok(());
    }

    println!("{:<30}  {:>6}  {}", "PROGRAM", "SUBS", "ENGAGEMENT");
    println!("{}", "-".repeat(70));
    for program in dash.published() {
        let width = dash.bar_width(program);
        let filled = (width / 100.0 * 30.0).round() as usize;
        let name = if program.name.len() > 29 {
            format!("{}...", truncate_safe(&program.name, 26))
        } else {
            program.name.clone()
        };
        println!(
            "{:<30}  {:>6}  {}{}",
            name,
            program.subscriber_count,
            "█".repeat(filled),
            "░".repeat(30 - filled),
        );
    }

    Ok(())
}
