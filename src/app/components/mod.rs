pub mod shoe_card;
pub mod shoe_grid;
pub mod spacer;

pub use shoe_card::{FlagView, PriceStyle, SalePriceView, ShoeCard, ShoeCardView};
pub use shoe_grid::ShoeGrid;
pub use spacer::Spacer;
