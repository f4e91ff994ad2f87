//! Web UI for bin2dec
//!
//! A Yew page with a single converter widget: a text field for the binary
//! string, a Convert button and a result line.

mod app;
mod components;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
