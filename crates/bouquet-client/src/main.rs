//! Bouquet Builder Client
//!
//! Yew WASM frontend application.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "bouquet-client only supports wasm32 target. Use: cargo check -p bouquet-client --target wasm32-unknown-unknown"
);

mod app;
mod components;
mod hooks;
mod pages;
mod routes;
mod state;

use app::App;
use bouquet_core::BouquetConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Initialize custom panic hook that redirects to panic page
    pages::set_panic_hook();

    let config = BouquetConfig::default();
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::info!("Starting bouquet builder");

    yew::Renderer::<App>::new().render();
}
