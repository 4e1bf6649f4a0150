use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};

static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("slug pattern is valid"));

/// A shoe as listed on the storefront.
/// Field names match the listing JSON (`imageSrc`, `salePrice`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    /// Minor units (cents)
    pub price: i64,
    /// Present only when discounted. Any value counts, including zero.
    #[serde(default)]
    pub sale_price: Option<i64>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl Shoe {
    /// Path of the shoe's detail page
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Check the invariants the card relies on
    pub fn validate(&self) -> Result<()> {
        if self.slug.is_empty() {
            return Err(AppError::invalid_shoe(&self.slug, "slug must not be empty"));
        }
        if !SLUG_PATTERN.is_match(&self.slug) {
            return Err(AppError::invalid_shoe(
                &self.slug,
                "slug may only contain letters, digits, '-' and '_'",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_shoe(&self.slug, "name must not be empty"));
        }
        if self.num_of_colors == 0 {
            return Err(AppError::invalid_shoe(
                &self.slug,
                "numOfColors must be at least 1",
            ));
        }
        Ok(())
    }
}
