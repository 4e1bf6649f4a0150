use dioxus::prelude::*;

use crate::app::components::ShoeCard;
use crate::domain::models::Shoe;

/// Wrapping row of shoe cards
#[component]
pub fn ShoeGrid(shoes: Vec<Shoe>) -> Element {
    rsx! {
        section {
            class: "c-shoe-grid",
            for shoe in shoes.iter() {
                ShoeCard {
                    key: "{shoe.slug}",
                    shoe: shoe.clone(),
                }
            }
        }
    }
}
