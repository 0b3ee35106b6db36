//! CSV download of report data.

use js_sys::Array;
use validator_core::config::CSV_MIME_TYPE;
use validator_core::{ExportRow, convert_to_csv, rows_from_json};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom;
use crate::error::DomError;

/// Read export rows from a JS array of plain objects.
pub fn rows_from_js(data: JsValue) -> Result<Vec<ExportRow>, DomError> {
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(data).map_err(|e| DomError::InvalidRows(e.to_string()))?;
    if !value.is_array() {
        return Err(DomError::InvalidRows("expected an array of objects".into()));
    }
    Ok(rows_from_json(&value))
}

/// Render JS rows as CSV text.
pub fn csv_from_js(data: JsValue) -> Result<String, DomError> {
    Ok(convert_to_csv(&rows_from_js(data)?))
}

/// Offer `text` to the user as a file download.
pub fn download_text(text: &str, filename: &str, mime: &str) -> Result<(), DomError> {
    let body = dom::body().ok_or(DomError::NoDocument)?;

    let parts = Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = dom::create("a")?;
    link.set_href(&url);
    link.set_download(filename);
    link.style().set_property("visibility", "hidden")?;

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}

/// Download rows as a CSV file named `filename`.
pub fn export_to_csv(rows: &[ExportRow], filename: &str) -> Result<(), DomError> {
    download_text(&convert_to_csv(rows), filename, CSV_MIME_TYPE)
}
