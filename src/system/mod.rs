//! System-level modules
//!
//! Process-wide concerns shared by the binary and embedding applications:
//! - Logging initialization

pub mod logging;

pub use logging::init_logging;
