//! Bootstrap tooltip activation.

use validator_core::config::selectors;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::console;
use crate::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

/// Create a Bootstrap tooltip for every flagged element.
///
/// Returns the number of tooltips created. Stops at the first failure, which
/// usually means the Bootstrap bundle is not loaded.
pub fn init_tooltips() -> usize {
    let mut created = 0;
    for element in dom::query_all(selectors::TOOLTIP_TRIGGER) {
        match Tooltip::new(&element) {
            Ok(_) => created += 1,
            Err(e) => {
                console::warn(&format!("tooltip init failed: {:?}", e));
                break;
            }
        }
    }
    created
}
