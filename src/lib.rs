mod app;
mod components;
mod forms;
mod models;
mod pages;
mod routes;
mod services;
mod utils;

use wasm_bindgen::prelude::*;
use app::App;

#[wasm_bindgen(start)]
pub fn run_app() {
    utils::set_panic_hook();
    utils::init_logging();
    log::info!("find-my-recipe starting");
    yew::Renderer::<App>::new().render();
}
