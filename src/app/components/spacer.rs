use dioxus::prelude::*;

/// Inline style for a square gap of `size` pixels
pub fn spacer_style(size: u32) -> String {
    format!("width: {size}px; min-width: {size}px; height: {size}px; min-height: {size}px;")
}

/// Empty block used for fixed gaps between elements
#[component]
pub fn Spacer(size: u32) -> Element {
    rsx! {
        span {
            class: "c-spacer",
            style: spacer_style(size),
        }
    }
}
