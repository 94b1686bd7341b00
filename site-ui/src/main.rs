mod app;
mod assets;
mod components;
mod config;
mod gate;
mod pages;
mod reveal;

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = config::load();
    tracing::info!(?config, "mounting site");
    mount_to_body(move || view! { <app::App config=config/> });
}
