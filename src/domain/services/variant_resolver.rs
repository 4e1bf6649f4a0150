//! Picks the display variant of a shoe card.
//!
//! A sale always wins over a new release: a discounted shoe released last week
//! is shown as `on-sale`.

use chrono::{DateTime, Utc};

use crate::domain::models::{Shoe, Variant};
use crate::shared::logging::log_variant_resolved;
use crate::shared::utils::CardFormatter;

/// Resolve a variant from raw fields. `is_new` decides freshness given
/// `(release_date, now)`.
pub fn resolve_variant<F>(
    sale_price: Option<i64>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
    is_new: F,
) -> Variant
where
    F: FnOnce(DateTime<Utc>, DateTime<Utc>) -> bool,
{
    if sale_price.is_some() {
        Variant::OnSale
    } else if is_new(release_date, now) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}

/// Resolve the variant of a shoe using the formatter's freshness rule
pub fn resolve_shoe_variant<C>(shoe: &Shoe, now: DateTime<Utc>, formatter: &C) -> Variant
where
    C: CardFormatter + ?Sized,
{
    let variant = resolve_variant(shoe.sale_price, shoe.release_date, now, |released, now| {
        formatter.is_new_shoe(released, now)
    });
    log_variant_resolved(&shoe.slug, variant);
    variant
}
