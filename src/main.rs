//! Shoe card storefront - entry point
//!
//! Native builds read configuration from the environment and install a
//! tracing subscriber before launching. The browser build launches directly.

use shoe_card::app::App;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use shoe_card::config::AppConfig;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting shoe card storefront...");

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        currency = %config.currency_symbol,
        new_release_window_days = config.new_release_window_days,
        "Configuration loaded"
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] Shoe card storefront initialized".into());
    dioxus::launch(App);
}
