pub mod click_log;
pub mod listing;

pub use click_log::Entity as ClickLogEntity;
pub use listing::Entity as ListingEntity;
