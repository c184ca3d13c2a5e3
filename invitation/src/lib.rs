pub mod app;
pub mod components;
pub mod config;
pub mod dates;
pub mod errors;
pub mod form;
pub mod icons;
pub mod pages;
pub mod services;
pub mod submit;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
