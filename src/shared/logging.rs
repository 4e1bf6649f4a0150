//! Structured logging for the shoe card crate
//!
//! Keeps field names consistent across the catalog, config and card code.
//! Uses tracing with an `operation` field so logs can be filtered per concern.

use crate::domain::models::Variant;

/// Operations that emit logs
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    CatalogLoad,
    VariantResolution,
    ConfigLoad,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::CatalogLoad => "catalog_load",
            LogOperation::VariantResolution => "variant_resolution",
            LogOperation::ConfigLoad => "config_load",
        }
    }
}

/// Log a successful catalog load
pub fn log_catalog_loaded(source: &str, shoe_count: usize) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = source,
        shoe_count = shoe_count,
        "Catalog loaded"
    );
}

/// Log a shoe record rejected during catalog load
pub fn log_shoe_rejected(slug: &str, reason: &str) {
    tracing::warn!(
        operation = LogOperation::CatalogLoad.as_str(),
        slug = slug,
        reason = reason,
        "Rejected shoe record"
    );
}

/// Log the variant picked for a card. Very chatty, so trace only.
pub fn log_variant_resolved(slug: &str, variant: Variant) {
    tracing::trace!(
        operation = LogOperation::VariantResolution.as_str(),
        slug = slug,
        variant = variant.as_str(),
        "Resolved card variant"
    );
}

/// Log a configuration value that fell back to its default
pub fn log_config_default(key: &str, default: &str) {
    tracing::debug!(
        operation = LogOperation::ConfigLoad.as_str(),
        key = key,
        default = default,
        "Using default configuration value"
    );
}
