//! Clickrank - click-driven popularity badges for time-bounded listings
//!
//! This library ranks the currently active listings by user clicks and
//! assigns at most one badge per listing: Popular, Notable or Rising.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//!
//! # Architecture
//! - `ranking`: Pure ranking engine (aggregate → rank → merge)
//! - `storage`: SeaORM storage backend and `BadgeSource` implementation
//! - `services`: Badge, click and analytics services
//! - `interfaces`: User interfaces (CLI)
//! - `config`: Configuration management
//! - `system`: Logging and other process-level utilities

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod ranking;
pub mod services;
pub mod storage;
pub mod system;
