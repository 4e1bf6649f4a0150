pub mod shoe;
pub mod variant;

pub use shoe::Shoe;
pub use variant::Variant;
