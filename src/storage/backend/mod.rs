//! SeaORM storage backend
//!
//! Concrete upstream for the ranking engine: listings and the append-only
//! click log, on SQLite, MySQL/MariaDB or PostgreSQL.

mod analytics;
mod badge_source;
mod clicks;
mod connection;
mod converters;
mod query;
pub mod retry;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::{ClickrankError, Result};

pub use analytics::ListingClicksRow;
pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_listing, new_listing_to_active_model};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(ClickrankError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    /// 写入点击时的重试配置
    retry_config: retry::RetryConfig,
}

impl SeaOrmStorage {
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(ClickrankError::database_config("database_url is empty"));
        }

        let config = crate::config::get_config();
        let retry_config = retry::RetryConfig::from(&config.database);

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, backend_name, &config.database).await?
        };

        run_migrations(&db).await?;

        info!("{} storage initialized.", backend_name.to_uppercase());
        Ok(SeaOrmStorage { db, retry_config })
    }
}
