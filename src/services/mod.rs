//! Service layer for business logic
//!
//! This module provides the business logic shared by every interface
//! (currently the CLI): badge computation, click recording and analytics.

mod analytics_service;
mod badge_service;
mod click_service;

pub use analytics_service::*;
pub use badge_service::*;
pub use click_service::*;
