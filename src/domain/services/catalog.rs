//! Validated list of shoes shown on the listing page.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::domain::models::Shoe;
use crate::shared::errors::{AppError, Result};
use crate::shared::logging::{log_catalog_loaded, log_shoe_rejected};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    shoes: Vec<Shoe>,
}

// (slug, name, price, sale price, days since release, colors)
const SAMPLE_SHOES: &[(&str, &str, i64, Option<i64>, i64, u32)] = &[
    ("tech-challenge", "Tech Challenge 20", 16500, None, 2, 2),
    ("stefan-janoski", "Stefan Janoski", 9000, Some(6000), 10 * 365, 3),
    ("react-infinity", "React Infinity Pro", 16000, None, 5, 1),
    ("phantom-vision", "Phantom Vision", 22000, None, 3 * 365, 4),
    ("air-max-270", "Air Max 270", 15000, Some(5000), 2, 2),
    ("blazer-mid", "Blazer Mid '77", 10000, None, 90, 5),
    ("court-vision", "Court Vision Low", 7000, Some(4500), 200, 1),
    ("pegasus-trail", "Pegasus Trail 3", 13000, None, 20, 3),
];

impl Catalog {
    /// Build a catalog, rejecting invalid records and duplicate slugs
    pub fn new(shoes: Vec<Shoe>) -> Result<Self> {
        {
            let mut seen: HashSet<&str> = HashSet::with_capacity(shoes.len());
            for shoe in shoes.iter() {
                if let Err(e) = shoe.validate() {
                    log_shoe_rejected(&shoe.slug, &e.to_string());
                    return Err(e);
                }
                if !seen.insert(shoe.slug.as_str()) {
                    log_shoe_rejected(&shoe.slug, "duplicate slug");
                    return Err(AppError::DuplicateSlug(shoe.slug.clone()));
                }
            }
        }
        Ok(Self { shoes })
    }

    /// Parse a JSON array of listing records
    pub fn from_json(json: &str) -> Result<Self> {
        let shoes: Vec<Shoe> = serde_json::from_str(json)?;
        let catalog = Self::new(shoes)?;
        log_catalog_loaded("json", catalog.len());
        Ok(catalog)
    }

    /// Bundled demo shoes. Release dates are relative to `now` so the
    /// listing always shows a mix of sale, new and regular cards.
    pub fn sample(now: DateTime<Utc>) -> Self {
        let shoes: Vec<Shoe> = SAMPLE_SHOES
            .iter()
            .map(|&(slug, name, price, sale_price, age_days, colors)| Shoe {
                slug: slug.to_string(),
                name: name.to_string(),
                image_src: format!("/assets/shoes/{slug}.jpg"),
                price,
                sale_price,
                release_date: now - Duration::days(age_days),
                num_of_colors: colors,
            })
            .collect();
        log_catalog_loaded("sample", shoes.len());
        Self { shoes }
    }

    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn get(&self, slug: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|shoe| shoe.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }
}
