use chrono::Utc;
use dioxus::prelude::*;

use crate::app::components::ShoeGrid;
use crate::domain::services::Catalog;

const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

/// Root component: the listing of sample shoes
#[component]
pub fn App() -> Element {
    let catalog = use_hook(|| Catalog::sample(Utc::now()));

    use_effect(|| {
        tracing::info!("Shoe listing mounted");
    });

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        main {
            class: "c-listing",
            ShoeGrid { shoes: catalog.shoes().to_vec() }
        }
    }
}
