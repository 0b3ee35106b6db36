//! File descriptor rendered under a file picker.

use leptos::prelude::*;
use leptos_icons::Icon;
use validator_core::SelectedFile;
use validator_core::config::selectors;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

#[component]
pub fn FileInfo(file: SelectedFile) -> impl IntoView {
    let label = file.describe();

    view! {
        <div class="file-info mt-2">
            <small class="text-muted">
                <span class="me-1"><Icon icon=icondata::BsFileEarmark /></span>
                {label}
            </small>
        </div>
    }
}

/// Render the descriptor for `file` next to `input`, replacing any previous one.
pub fn show(input: &HtmlInputElement, file: SelectedFile) {
    let Some(parent) = input
        .parent_element()
        .and_then(|p| p.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    if let Ok(Some(existing)) = parent.query_selector(selectors::FILE_INFO) {
        existing.remove();
    }

    // Static markup; removed by the next selection rather than unmounted
    mount_to(parent, move || view! { <FileInfo file=file /> }).forget();
}
