//! File picker wiring for the upload form.

use validator_core::config::selectors;
use validator_core::{FileSlots, GuardOutcome, SelectedFile, guard_selection, validate_pair};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlInputElement};

use crate::components::{BannerNotifier, file_info};
use crate::dom;

/// First file selected in a picker.
pub fn selected_file(input: &HtmlInputElement) -> Option<SelectedFile> {
    let file = input.files()?.get(0)?;
    Some(SelectedFile::new(file.name(), file.size() as u64))
}

/// Apply the upload checks to a picker after its selection changed.
pub fn handle_change(input: &HtmlInputElement) -> GuardOutcome {
    let outcome = guard_selection(selected_file(input), &BannerNotifier);
    match &outcome {
        GuardOutcome::Accepted(file) => file_info::show(input, file.clone()),
        GuardOutcome::Rejected(_) => input.set_value(""),
        GuardOutcome::Empty => {}
    }
    outcome
}

/// Attach the upload guard to every file picker on the page.
///
/// Returns the number of pickers guarded.
pub fn attach_guards() -> usize {
    let inputs: Vec<HtmlInputElement> = dom::query_all(selectors::FILE_INPUTS)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect();

    for input in &inputs {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Some(input) = event
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                handle_change(&input);
            }
        }) as Box<dyn Fn(Event)>);

        let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    inputs.len()
}

/// Pickers looked up by element id.
pub struct DocumentSlots;

impl FileSlots for DocumentSlots {
    fn has_file(&self, id: &str) -> bool {
        dom::input_by_id(id)
            .and_then(|input| selected_file(&input))
            .is_some()
    }
}

/// Check that both pickers have a file, warning the user otherwise.
pub fn validate_form(first: &str, second: &str) -> bool {
    validate_pair(&DocumentSlots, first, second, &BannerNotifier)
}
