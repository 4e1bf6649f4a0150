pub mod format;

pub use format::{format_price, is_new_shoe, pluralize, CardFormatter, StoreFormatter};
