//! Runtime configuration for the storefront cards.
//!
//! Read once at startup from the environment and handed to components via
//! Dioxus context.

use crate::shared::errors::{AppError, Result};
use crate::shared::logging::log_config_default;

pub const CURRENCY_ENV: &str = "SHOE_CARD_CURRENCY";
pub const NEW_RELEASE_DAYS_ENV: &str = "SHOE_CARD_NEW_RELEASE_DAYS";

const DEFAULT_CURRENCY: &str = "$";
const DEFAULT_NEW_RELEASE_DAYS: i64 = 30;
/// Upper bound for the new-release window (ten years)
pub const MAX_NEW_RELEASE_DAYS: i64 = 3650;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub currency_symbol: String,
    /// A shoe released less than this many days ago is a new release
    pub new_release_window_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            new_release_window_days: DEFAULT_NEW_RELEASE_DAYS,
        }
    }
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup; missing keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency_symbol = match lookup(CURRENCY_ENV) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            Some(value) => {
                return Err(AppError::Config {
                    key: CURRENCY_ENV.to_string(),
                    value,
                });
            }
            None => {
                log_config_default(CURRENCY_ENV, DEFAULT_CURRENCY);
                DEFAULT_CURRENCY.to_string()
            }
        };

        let new_release_window_days = match lookup(NEW_RELEASE_DAYS_ENV) {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(days) if (1..=MAX_NEW_RELEASE_DAYS).contains(&days) => days,
                _ => {
                    return Err(AppError::Config {
                        key: NEW_RELEASE_DAYS_ENV.to_string(),
                        value,
                    });
                }
            },
            None => {
                log_config_default(NEW_RELEASE_DAYS_ENV, &DEFAULT_NEW_RELEASE_DAYS.to_string());
                DEFAULT_NEW_RELEASE_DAYS
            }
        };

        Ok(Self {
            currency_symbol,
            new_release_window_days,
        })
    }
}
