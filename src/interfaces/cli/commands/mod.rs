mod analytics;
mod click;
mod config_gen;
mod rank;

pub use analytics::show_analytics;
pub use click::record_click;
pub use config_gen::config_generate;
pub use rank::show_ranking;
