//! Per-product customer reviews.
//!
//! Reviews live in one store-wide JSON array under a single key and are
//! filtered by product id on read, matching the persisted layout the display
//! layer expects. A corrupt or missing store degrades to "no reviews yet".

use crate::{
    catalog::Catalog,
    errors::{Error, Result},
    storage,
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Storage key for the store-wide review array.
pub const REVIEWS_KEY: &str = "naija_delight_reviews";

/// One customer review of a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique review id
    pub id: String,
    /// Id of the reviewed product
    pub product_id: String,
    /// Reviewer's display name
    pub user_name: String,
    /// Star rating, 1 through 5
    pub rating: u8,
    /// Review body
    pub text: String,
    /// When the review was left
    pub date: DateTime<Utc>,
}

/// Reads every stored review, oldest first. Corrupt or absent data reads as
/// an empty list.
pub async fn all(db: &DatabaseConnection) -> Vec<Review> {
    let Some(raw) = storage::get_lenient(db, REVIEWS_KEY).await else {
        return Vec::new();
    };

    match serde_json::from_str(&raw) {
        Ok(reviews) => reviews,
        Err(e) => {
            warn!(error = %e, "review store is corrupt, treating as empty");
            Vec::new()
        }
    }
}

/// Reviews for one product, filtered from the store-wide array.
pub async fn for_product(db: &DatabaseConnection, product_id: &str) -> Vec<Review> {
    all(db)
        .await
        .into_iter()
        .filter(|r| r.product_id == product_id)
        .collect()
}

/// Adds a review for a catalog product.
///
/// # Errors
/// Returns an error if:
/// - The rating is outside 1-5
/// - The reviewer name is blank
/// - The product id is not in the catalog
/// - The review array cannot be re-encoded or written
pub async fn add(
    db: &DatabaseConnection,
    catalog: &Catalog,
    product_id: &str,
    user_name: &str,
    rating: u8,
    text: &str,
) -> Result<Review> {
    if !(1..=5).contains(&rating) {
        return Err(Error::InvalidRating { rating });
    }
    if user_name.trim().is_empty() {
        return Err(Error::EmptyReviewerName);
    }
    if catalog.product(product_id).is_none() {
        return Err(Error::UnknownProduct {
            id: product_id.to_string(),
        });
    }

    let now = chrono::Utc::now();
    let suffix: u32 = rand::Rng::gen_range(&mut rand::thread_rng(), 1000..10_000);
    let review = Review {
        id: format!("rev-{}-{suffix}", now.timestamp_millis()),
        product_id: product_id.to_string(),
        user_name: user_name.trim().to_string(),
        rating,
        text: text.to_string(),
        date: now,
    };

    let mut reviews = all(db).await;
    reviews.push(review.clone());
    storage::set(db, REVIEWS_KEY, &serde_json::to_string(&reviews)?).await?;

    Ok(review)
}

/// Average rating for a product, or `None` if it has no reviews.
pub async fn average_rating(db: &DatabaseConnection, product_id: &str) -> Option<f64> {
    let reviews = for_product(db, product_id).await;
    if reviews.is_empty() {
        return None;
    }

    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    #[allow(clippy::cast_precision_loss)]
    Some(f64::from(sum) / reviews.len() as f64)
}
