use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::storage::{Listing, NewListing};
use migration::entities::listing;

/// 将 Sea-ORM Model 转换为 Listing
pub fn model_to_listing(model: listing::Model) -> Listing {
    Listing {
        id: model.id,
        title: model.title,
        publisher: model.publisher,
        author: model.author,
        destination_url: model.destination_url,
        category: model.category,
        deadline: model.deadline,
        created_at: model.created_at,
    }
}

/// 将 NewListing 转换为待插入的 ActiveModel
pub fn new_listing_to_active_model(
    new: &NewListing,
    created_at: DateTime<Utc>,
) -> listing::ActiveModel {
    listing::ActiveModel {
        id: NotSet,
        title: Set(new.title.clone()),
        publisher: Set(new.publisher.clone()),
        author: Set(new.author.clone()),
        destination_url: Set(new.destination_url.clone()),
        category: Set(new.category.clone()),
        deadline: Set(new.deadline),
        created_at: Set(created_at),
    }
}
