pub mod catalog;
pub mod variant_resolver;

pub use catalog::Catalog;
pub use variant_resolver::{resolve_shoe_variant, resolve_variant};
