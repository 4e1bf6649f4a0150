//! Shoe listing card
//!
//! All text and styling decisions live in [`ShoeCardView`], a plain value built
//! from a [`Shoe`] and a [`CardFormatter`]. The `ShoeCard` component only turns
//! that view into markup.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::app::components::Spacer;
use crate::config::AppConfig;
use crate::domain::models::{Shoe, Variant};
use crate::domain::services::resolve_shoe_variant;
use crate::shared::theme::{ColorToken, TextDecoration};
use crate::shared::utils::{CardFormatter, StoreFormatter};

/// Styling of the regular price. Struck through and muted while on sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceStyle {
    pub color: Option<ColorToken>,
    pub text_decoration: Option<TextDecoration>,
}

impl PriceStyle {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::OnSale => Self {
                color: Some(ColorToken::Gray700),
                text_decoration: Some(TextDecoration::LineThrough),
            },
            Variant::NewRelease | Variant::Default => Self::default(),
        }
    }

    pub fn is_struck_through(&self) -> bool {
        self.text_decoration == Some(TextDecoration::LineThrough)
    }

    /// Custom properties consumed by `.c-shoe-card__price`
    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        if let Some(color) = self.color {
            style.push_str(&format!("--color: {};", color.css_var()));
        }
        if let Some(decoration) = self.text_decoration {
            style.push_str(&format!("--text-decoration: {};", decoration.as_css()));
        }
        style
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalePriceView {
    pub text: String,
    pub color: ColorToken,
}

impl SalePriceView {
    pub fn inline_style(&self) -> String {
        format!("color: {};", self.color.css_var())
    }
}

/// Corner flag shown on sale and new-release cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagView {
    pub label: &'static str,
    pub background: ColorToken,
}

impl FlagView {
    pub fn for_variant(variant: Variant) -> Option<Self> {
        let background = match variant {
            Variant::OnSale => ColorToken::Primary,
            Variant::NewRelease => ColorToken::Secondary,
            Variant::Default => return None,
        };
        variant.flag_label().map(|label| Self { label, background })
    }

    /// Custom property consumed by `.c-shoe-card__flag`
    pub fn inline_style(&self) -> String {
        format!("--flag-background: {};", self.background.css_var())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoeCardView {
    pub variant: Variant,
    pub href: String,
    pub image_src: String,
    pub name: String,
    pub price: String,
    pub price_style: PriceStyle,
    pub colors_label: String,
    pub sale_price: Option<SalePriceView>,
    pub flag: Option<FlagView>,
}

impl ShoeCardView {
    pub fn build<C>(shoe: &Shoe, now: DateTime<Utc>, formatter: &C) -> Self
    where
        C: CardFormatter + ?Sized,
    {
        let variant = resolve_shoe_variant(shoe, now, formatter);

        let sale_price = match (variant, shoe.sale_price) {
            (Variant::OnSale, Some(amount)) => Some(SalePriceView {
                text: formatter.format_price(amount),
                color: ColorToken::Primary,
            }),
            _ => None,
        };

        Self {
            variant,
            href: shoe.href(),
            image_src: shoe.image_src.clone(),
            name: shoe.name.clone(),
            price: formatter.format_price(shoe.price),
            price_style: PriceStyle::for_variant(variant),
            colors_label: formatter.pluralize("Color", shoe.num_of_colors),
            sale_price,
            flag: FlagView::for_variant(variant),
        }
    }
}

#[component]
pub fn ShoeCard(shoe: Shoe) -> Element {
    // Native launches provide the env config as root context
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let formatter = StoreFormatter::from_config(&config);
    let view = ShoeCardView::build(&shoe, Utc::now(), &formatter);

    let variant = view.variant.as_str();
    let price_style = view.price_style.inline_style();

    rsx! {
        a {
            class: "c-shoe-card",
            href: "{view.href}",
            article {
                class: "c-shoe-card__wrapper",
                "data-variant": "{variant}",
                div {
                    class: "c-shoe-card__image-wrapper",
                    img {
                        class: "c-shoe-card__image",
                        alt: "",
                        src: "{view.image_src}",
                    }
                }
                Spacer { size: 12 }
                div {
                    class: "c-shoe-card__row",
                    h3 { class: "c-shoe-card__name", "{view.name}" }
                    span {
                        class: "c-shoe-card__price",
                        style: "{price_style}",
                        "{view.price}"
                    }
                }
                div {
                    class: "c-shoe-card__row",
                    p { class: "c-shoe-card__colors", "{view.colors_label}" }
                    if let Some(sale) = view.sale_price.as_ref() {
                        span {
                            class: "c-shoe-card__sale-price",
                            style: sale.inline_style(),
                            "{sale.text}"
                        }
                    }
                }
                if let Some(flag) = view.flag {
                    span {
                        class: "c-shoe-card__flag c-shoe-card__flag--{variant}",
                        style: flag.inline_style(),
                        "{flag.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    /// Formatter with a 30 day window and plain dollar prices
    struct TestFormatter;

    impl CardFormatter for TestFormatter {
        fn format_price(&self, amount: i64) -> String {
            format!("${}", amount / 100)
        }

        fn pluralize(&self, noun: &str, count: u32) -> String {
            crate::shared::utils::pluralize(noun, count)
        }

        fn is_new_shoe(&self, release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
            now - release_date < Duration::days(30)
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn make_shoe(sale_price: Option<i64>, age_days: i64, colors: u32) -> Shoe {
        Shoe {
            slug: "tech-challenge".to_string(),
            name: "Tech Challenge 20".to_string(),
            image_src: "/assets/shoes/tech-challenge.jpg".to_string(),
            price: 9000,
            sale_price,
            release_date: now() - Duration::days(age_days),
            num_of_colors: colors,
        }
    }

    #[test]
    fn test_on_sale_old_shoe() {
        let view = ShoeCardView::build(&make_shoe(Some(6000), 10 * 365, 3), now(), &TestFormatter);

        assert_eq!(view.variant, Variant::OnSale);
        assert_eq!(view.flag.map(|f| f.label), Some("Sale"));
        assert!(view.price_style.is_struck_through());
        assert_eq!(view.price_style.color, Some(ColorToken::Gray700));
        assert_eq!(view.sale_price.as_ref().map(|s| s.text.as_str()), Some("$60"));
        assert_eq!(view.colors_label, "3 Colors");
    }

    #[test]
    fn test_new_release_single_color() {
        let view = ShoeCardView::build(&make_shoe(None, 5, 1), now(), &TestFormatter);

        assert_eq!(view.variant, Variant::NewRelease);
        assert_eq!(view.flag.map(|f| f.label), Some("Just released!"));
        assert_eq!(view.colors_label, "1 Color");
        assert!(!view.price_style.is_struck_through());
        assert!(view.sale_price.is_none());
    }

    #[test]
    fn test_default_has_no_flag() {
        let view = ShoeCardView::build(&make_shoe(None, 3 * 365, 4), now(), &TestFormatter);

        assert_eq!(view.variant, Variant::Default);
        assert!(view.flag.is_none());
        assert!(view.sale_price.is_none());
        assert_eq!(view.price_style, PriceStyle::default());
        assert_eq!(view.price_style.inline_style(), "");
        assert_eq!(view.colors_label, "4 Colors");
    }

    #[test]
    fn test_sale_beats_new_release() {
        let view = ShoeCardView::build(&make_shoe(Some(5000), 2, 2), now(), &TestFormatter);

        assert_eq!(view.variant, Variant::OnSale);
        assert_eq!(view.flag.map(|f| f.label), Some("Sale"));
        assert_eq!(view.sale_price.map(|s| s.text), Some("$50".to_string()));
    }

    #[test]
    fn test_flag_background_per_variant() {
        assert_eq!(
            FlagView::for_variant(Variant::OnSale).map(|f| f.background),
            Some(ColorToken::Primary)
        );
        assert_eq!(
            FlagView::for_variant(Variant::NewRelease).map(|f| f.background),
            Some(ColorToken::Secondary)
        );
        assert_eq!(FlagView::for_variant(Variant::Default), None);

        let flag = FlagView::for_variant(Variant::NewRelease).unwrap();
        assert_eq!(flag.inline_style(), "--flag-background: var(--color-secondary);");
    }

    #[test]
    fn test_price_style_inline() {
        assert_eq!(
            PriceStyle::for_variant(Variant::OnSale).inline_style(),
            "--color: var(--color-gray-700);--text-decoration: line-through;"
        );
        assert_eq!(PriceStyle::for_variant(Variant::NewRelease).inline_style(), "");
    }

    #[test]
    fn test_structure_fields() {
        let view = ShoeCardView::build(&make_shoe(None, 100, 2), now(), &StoreFormatter::default());

        assert_eq!(view.href, "/shoe/tech-challenge");
        assert_eq!(view.image_src, "/assets/shoes/tech-challenge.jpg");
        assert_eq!(view.name, "Tech Challenge 20");
        assert_eq!(view.price, "$90");
    }

    #[test]
    fn test_zero_sale_price_still_on_sale() {
        let view = ShoeCardView::build(&make_shoe(Some(0), 400, 1), now(), &StoreFormatter::default());

        assert_eq!(view.variant, Variant::OnSale);
        assert_eq!(view.sale_price.map(|s| s.text), Some("$0".to_string()));
    }

    fn render_card(shoe: Shoe) -> String {
        dioxus_ssr::render_element(rsx! {
            ShoeCard { shoe }
        })
    }

    fn shoe_released_days_ago(sale_price: Option<i64>, age_days: i64) -> Shoe {
        Shoe {
            release_date: Utc::now() - Duration::days(age_days),
            ..make_shoe(sale_price, 0, 4)
        }
    }

    #[test]
    fn test_render_default_card_markup() {
        let html = render_card(shoe_released_days_ago(None, 3 * 365));

        assert!(html.contains(r#"href="/shoe/tech-challenge""#));
        assert!(html.contains(r#"src="/assets/shoes/tech-challenge.jpg""#));
        assert!(html.contains("Tech Challenge 20"));
        assert!(html.contains("$90"));
        assert!(html.contains("4 Colors"));
        assert!(!html.contains("c-shoe-card__flag"));
        assert!(!html.contains("c-shoe-card__sale-price"));
        assert!(!html.contains("line-through"));
    }

    #[test]
    fn test_render_on_sale_card_markup() {
        let html = render_card(shoe_released_days_ago(Some(6000), 2));

        assert!(html.contains(r#"href="/shoe/tech-challenge""#));
        assert!(html.contains("c-shoe-card__flag"));
        assert!(html.contains(">Sale<"));
        assert!(!html.contains("Just released!"));
        assert!(html.contains("c-shoe-card__sale-price"));
        assert!(html.contains("$60"));
        assert!(html.contains("line-through"));
    }

    #[test]
    fn test_render_new_release_card_markup() {
        let html = render_card(shoe_released_days_ago(None, 5));

        assert!(html.contains("Just released!"));
        assert!(!html.contains("c-shoe-card__sale-price"));
        assert!(!html.contains("line-through"));
    }
}
