//! Browser front-end for the annotation validator.
//!
//! Compiled to WebAssembly and loaded by the upload page. On start it applies
//! the saved theme and, once the DOM is ready, activates tooltips and guards
//! the file pickers. The functions page scripts call are exported under their
//! camelCase names.

pub mod clipboard;
pub mod components;
pub mod console;
pub mod dom;
pub mod error;
pub mod export;
pub mod table;
pub mod theme;
pub mod tooltip;
pub mod upload;

use validator_core::config::ids;
use validator_core::{Notice, Severity, format_file_size};
use wasm_bindgen::prelude::*;

use crate::components::{notification, progress};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    theme::load();

    dom::on_ready(|| {
        let tooltips = tooltip::init_tooltips();
        let pickers = upload::attach_guards();
        console::debug(&format!(
            "validator ready: {} tooltips, {} file pickers",
            tooltips, pickers
        ));
    });
}

/// Human-readable size, e.g. `1.5 KB`.
#[wasm_bindgen(js_name = formatFileSize)]
pub fn js_format_file_size(bytes: f64) -> String {
    format_file_size(bytes.max(0.0) as u64)
}

/// `true` if both upload pickers have a file; warns otherwise.
#[wasm_bindgen(js_name = validateForm)]
pub fn js_validate_form() -> bool {
    upload::validate_form(ids::ORIGINAL_FILE, ids::EXPORTED_FILE)
}

#[wasm_bindgen(js_name = showNotification)]
pub fn js_show_notification(message: &str, kind: Option<String>) {
    let _ = notification::show(Notice::new(message, Severity::from_tag(kind.as_deref())));
}

#[wasm_bindgen(js_name = showProgress)]
pub fn js_show_progress(percentage: f64) {
    progress::show(percentage);
}

#[wasm_bindgen(js_name = hideProgress)]
pub fn js_hide_progress() {
    progress::hide();
}

/// CSV text for an array of row objects.
#[wasm_bindgen(js_name = convertToCSV)]
pub fn js_convert_to_csv(data: JsValue) -> Result<String, JsValue> {
    Ok(export::csv_from_js(data)?)
}

/// Download an array of row objects as a CSV file.
#[wasm_bindgen(js_name = exportToCSV)]
pub fn js_export_to_csv(data: JsValue, filename: &str) -> Result<(), JsValue> {
    let rows = export::rows_from_js(data)?;
    Ok(export::export_to_csv(&rows, filename)?)
}

#[wasm_bindgen(js_name = filterTable)]
pub fn js_filter_table(input_id: &str, table_id: &str) {
    table::attach_filter(input_id, table_id);
}

#[wasm_bindgen(js_name = copyToClipboard)]
pub fn js_copy_to_clipboard(text: String) {
    clipboard::copy(text);
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn js_toggle_theme() {
    theme::toggle();
}

#[wasm_bindgen(js_name = loadTheme)]
pub fn js_load_theme() {
    theme::load();
}
