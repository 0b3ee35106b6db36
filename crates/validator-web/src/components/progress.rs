//! Upload progress bar.
//!
//! At most one bar exists. It is created inside the upload form on the first
//! [`show`] and updated in place afterwards.

use std::any::Any;
use std::cell::RefCell;

use leptos::prelude::*;
use validator_core::Progress;
use validator_core::config::ids;
use wasm_bindgen::JsCast;

use crate::console;
use crate::dom;

struct LiveBar {
    value: ArcRwSignal<f64>,
    _handle: Box<dyn Any>,
}

thread_local! {
    static BAR: RefCell<Option<LiveBar>> = const { RefCell::new(None) };
}

#[component]
pub fn ProgressBar(value: ArcRwSignal<f64>) -> impl IntoView {
    let width = value.clone();
    let aria = value;

    view! {
        <div id=ids::PROGRESS_BAR class="progress mt-3">
            <div
                class="progress-bar progress-bar-striped progress-bar-animated"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                style:width=move || Progress(width.get()).width()
                aria-valuenow=move || Progress(aria.get()).aria_value()
            ></div>
        </div>
    }
}

/// Show the bar at `percentage`, creating it if needed.
pub fn show(percentage: f64) {
    let updated = BAR.with(|bar| match bar.borrow().as_ref() {
        Some(live) => {
            live.value.set(percentage);
            true
        }
        None => false,
    });
    if updated {
        return;
    }

    let Some(form) = dom::element_by_id(ids::UPLOAD_FORM)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        console::debug("progress bar skipped: upload form not found");
        return;
    };

    let value = ArcRwSignal::new(percentage);
    let signal = value.clone();
    let handle = mount_to(form, move || view! { <ProgressBar value=signal /> });
    BAR.with(|bar| {
        *bar.borrow_mut() = Some(LiveBar {
            value,
            _handle: Box::new(handle),
        })
    });
}

/// Remove the bar. No-op if none is shown.
pub fn hide() {
    let live = BAR.with(|bar| bar.borrow_mut().take());
    drop(live);
}

/// Whether a bar is currently shown.
pub fn is_visible() -> bool {
    BAR.with(|bar| bar.borrow().is_some())
}
