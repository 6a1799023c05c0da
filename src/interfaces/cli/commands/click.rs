//! Click command

use std::sync::Arc;

use chrono::Utc;
use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::ClickService;
use crate::storage::SeaOrmStorage;

pub async fn record_click(storage: Arc<SeaOrmStorage>, listing_id: i64) -> Result<(), CliError> {
    let destination = ClickService::new(storage)
        .follow(listing_id, Utc::now())
        .await?;

    println!(
        "{} Click recorded for #{} → {}",
        "✓".bold().green(),
        listing_id.to_string().cyan(),
        destination.blue().underline()
    );
    Ok(())
}
