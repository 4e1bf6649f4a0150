use serde::{Deserialize, Serialize};

/// Display mode of a shoe card.
/// Derived from the shoe on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    NewRelease,
    OnSale,
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::NewRelease => "new-release",
            Variant::OnSale => "on-sale",
            Variant::Default => "default",
        }
    }

    pub fn is_on_sale(&self) -> bool {
        matches!(self, Variant::OnSale)
    }

    /// Flag text, or `None` when the card has no flag
    pub fn flag_label(&self) -> Option<&'static str> {
        match self {
            Variant::OnSale => Some("Sale"),
            Variant::NewRelease => Some("Just released!"),
            Variant::Default => None,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
