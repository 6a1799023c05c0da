//! Analytics command

use std::sync::Arc;

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::AnalyticsService;
use crate::storage::SeaOrmStorage;

pub async fn show_analytics(storage: Arc<SeaOrmStorage>, json: bool) -> Result<(), CliError> {
    let rows = AnalyticsService::new(storage).listing_clicks().await?;

    if json {
        let out = serde_json::to_string_pretty(&rows)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{} No listings found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Click totals:".bold().green());
    println!();
    for row in &rows {
        println!(
            "  {} {} {} {}",
            format!("#{}", row.id).cyan(),
            row.title,
            format!("(deadline {})", row.deadline).dimmed(),
            row.click_count.to_string().green()
        );
    }
    println!();
    let total: u64 = rows.iter().map(|r| r.click_count).sum();
    println!(
        "{} {} listings, {} clicks",
        "ℹ".bold().blue(),
        rows.len().to_string().green(),
        total.to_string().green()
    );
    Ok(())
}
