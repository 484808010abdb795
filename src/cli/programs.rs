use anyhow::{Context, Result};
use fitmarket::storage::database::open_connection;
use fitmarket::storage::CustomProgramStorage;

pub fn run(config_path: Option<&str>) -> Result<()> {
    let (settings, _gateway) = super::setup(config_path)?;
    let conn =
        open_connection(&settings.db_path()).context("Failed to open local cache database")?;

    let records = CustomProgramStorage::list_all(&conn).context("Failed to list cached programs")?;
    if records.is_empty() {
        println!("No locally cached programs. Join one via an invite to cache it.");
        return Ok(());
    }

    println!("{:<34}  {:<30}  {:>10}  {}", "ID", "NAME", "MARKET ID", "SAVED");
    println!("{}", "-".repeat(90));
    for r in &records {
        println!(
            "{:<34}  {:<30}  {:>10}  {}",
            r.id,
            r.name,
            r.marketplace_id,
            r.created_at.format("%Y-%m-%d"),
        );
    }
    println!("\nTotal: {} programs", records.len());

    Ok(())
}
