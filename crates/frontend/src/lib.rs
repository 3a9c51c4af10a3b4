pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Set up logging and panic reporting. The host application calls this once
/// before constructing any view-model.
#[wasm_bindgen]
pub fn init() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
}
