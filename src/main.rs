mod app;
mod components;
pub mod config;
pub mod models;
pub mod utils;
pub mod wallet;
use app::{App, AppProps};
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    let config = AppConfig::load();
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
