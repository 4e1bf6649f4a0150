pub mod errors;
pub mod logging;
pub mod theme;
pub mod utils;

pub use errors::{AppError, Result};
pub use theme::{ColorToken, TextDecoration};
