//! Rank command: the home feed with badges

use std::sync::Arc;

use chrono::Utc;
use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::ranking::Badge;
use crate::services::BadgeService;
use crate::storage::SeaOrmStorage;

pub async fn show_ranking(
    storage: Arc<SeaOrmStorage>,
    json: bool,
    badge: Option<Badge>,
) -> Result<(), CliError> {
    let service = BadgeService::from_config(storage);
    let mut listings = service.ranked_active(Utc::now()).await?;
    if let Some(badge) = badge {
        listings.retain(|l| l.badge == Some(badge));
    }

    if json {
        let out = serde_json::to_string_pretty(&listings)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if listings.is_empty() {
        println!("{} No matching active listings", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Active listings:".bold().green());
    println!();
    for item in &listings {
        let badge = match item.badge {
            Some(Badge::Popular) => "[Popular]".red().bold().to_string(),
            Some(Badge::Notable) => "[Notable]".yellow().bold().to_string(),
            Some(Badge::Rising) => "[Rising]".magenta().bold().to_string(),
            None => String::new(),
        };
        println!(
            "  {} {} {} {} {}",
            format!("#{}", item.listing.id).cyan(),
            item.listing.title,
            format!("(until {})", item.listing.deadline).dimmed(),
            format!("clicks: {}", item.click_count).dimmed().cyan(),
            badge
        );
    }
    println!();
    println!(
        "{} Total {} active listings",
        "ℹ".bold().blue(),
        listings.len().to_string().green()
    );
    Ok(())
}
