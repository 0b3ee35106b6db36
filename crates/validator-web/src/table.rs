//! Live search filter for report tables.

use validator_core::row_visibility;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::console;
use crate::dom;

/// Show or hide the body rows of `table` for `query`.
pub fn apply_filter(table: &Element, query: &str) {
    let rows = table.get_elements_by_tag_name("tr");
    let rows: Vec<HtmlElement> = (0..rows.length())
        .filter_map(|i| rows.item(i))
        .filter_map(|row| row.dyn_into::<HtmlElement>().ok())
        .collect();
    let texts: Vec<String> = rows
        .iter()
        .map(|row| row.text_content().unwrap_or_default())
        .collect();

    for (row, visible) in rows.iter().zip(row_visibility(&texts, query)).skip(1) {
        let display = if visible { "" } else { "none" };
        let _ = row.style().set_property("display", display);
    }
}

/// Filter `table_id` as the user types into `input_id`.
///
/// Returns `false` without attaching anything if either element is missing.
pub fn attach_filter(input_id: &str, table_id: &str) -> bool {
    let (Some(input), Some(table)) = (dom::input_by_id(input_id), dom::element_by_id(table_id))
    else {
        console::debug(&format!(
            "table filter not attached: #{} or #{} missing",
            input_id, table_id
        ));
        return false;
    };

    let source = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        apply_filter(&table, &source.value());
    }) as Box<dyn Fn()>);

    let _ = input.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

