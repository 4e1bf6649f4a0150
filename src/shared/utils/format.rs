//! Price, count and freshness helpers used by the shoe card.
//!
//! The card only talks to these through [`CardFormatter`], so tests can swap
//! in fixed implementations without touching the clock or the currency.

use chrono::{DateTime, Duration, Utc};

use crate::config::AppConfig;

/// Formatting collaborators consumed by the card view
pub trait CardFormatter {
    /// Render an amount in minor units (cents) as a display price
    fn format_price(&self, amount: i64) -> String;

    /// "1 Color", "3 Colors"
    fn pluralize(&self, noun: &str, count: u32) -> String;

    /// Whether a shoe released at `release_date` is still a new release at `now`
    fn is_new_shoe(&self, release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool;
}

/// Default storefront formatter, driven by [`AppConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct StoreFormatter {
    pub currency_symbol: String,
    pub new_release_window: Duration,
}

impl StoreFormatter {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            // Out-of-range windows saturate instead of panicking
            new_release_window: Duration::try_days(config.new_release_window_days)
                .unwrap_or(Duration::MAX),
        }
    }
}

impl Default for StoreFormatter {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl CardFormatter for StoreFormatter {
    fn format_price(&self, amount: i64) -> String {
        format_price(amount, &self.currency_symbol)
    }

    fn pluralize(&self, noun: &str, count: u32) -> String {
        pluralize(noun, count)
    }

    fn is_new_shoe(&self, release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        is_new_shoe(release_date, now, self.new_release_window)
    }
}

/// Format cents as a price. Whole amounts drop the decimals: 16500 -> "$165".
pub fn format_price(amount: i64, currency_symbol: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let (whole, cents) = (abs / 100, abs % 100);

    if cents == 0 {
        format!("{sign}{currency_symbol}{whole}")
    } else {
        format!("{sign}{currency_symbol}{whole}.{cents:02}")
    }
}

pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Strictly inside the window counts as new. Unreleased (future) shoes are new too.
pub fn is_new_shoe(release_date: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    now - release_date < window
}
