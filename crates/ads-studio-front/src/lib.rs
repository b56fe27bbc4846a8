pub mod config;
pub mod models;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod hooks;
#[cfg(target_arch = "wasm32")]
mod pages;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = config::AppConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("Ads Studio UI starting (page size {})", config.page_size);

    yew::Renderer::<app::App>::with_props(app::AppProps { config }).render();

    Ok(())
}
