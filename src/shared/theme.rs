//! Design tokens shared by the card components.
//! Each token maps to a CSS custom property declared in `assets/css/tokens.css`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Primary,
    Secondary,
    Gray700,
}

impl ColorToken {
    pub fn css_var(&self) -> &'static str {
        match self {
            ColorToken::Primary => "var(--color-primary)",
            ColorToken::Secondary => "var(--color-secondary)",
            ColorToken::Gray700 => "var(--color-gray-700)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoration {
    LineThrough,
}

impl TextDecoration {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::LineThrough => "line-through",
        }
    }
}
