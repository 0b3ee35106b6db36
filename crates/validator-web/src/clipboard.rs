//! Browser clipboard access.

use js_sys::Reflect;
use validator_core::ClipboardError;
use validator_core::clipboard::ClipboardBackend;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::components::BannerNotifier;
use crate::console;
use crate::dom;

/// Clipboard through `navigator.clipboard`, or a hidden textarea.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardBackend for BrowserClipboard {
    fn has_async(&self) -> bool {
        dom::window()
            .and_then(|w| Reflect::get(&w.navigator(), &"clipboard".into()).ok())
            .is_some_and(|c| c.is_truthy())
    }

    async fn write_async(&self, text: &str) -> Result<(), ClipboardError> {
        let window =
            dom::window().ok_or_else(|| ClipboardError::Rejected("no window".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))
    }

    fn write_legacy(&self, text: &str) -> Result<(), ClipboardError> {
        let document = dom::document().ok_or(ClipboardError::LegacyCopyFailed)?;
        let body = document.body().ok_or(ClipboardError::LegacyCopyFailed)?;
        let area: HtmlTextAreaElement =
            dom::create("textarea").map_err(|_| ClipboardError::LegacyCopyFailed)?;
        area.set_value(text);

        body.append_child(&area)
            .map_err(|_| ClipboardError::LegacyCopyFailed)?;
        area.select();
        let copied = document
            .dyn_into::<HtmlDocument>()
            .ok()
            .and_then(|d| d.exec_command("copy").ok())
            .unwrap_or(false);
        let _ = body.remove_child(&area);

        if copied {
            Ok(())
        } else {
            Err(ClipboardError::LegacyCopyFailed)
        }
    }
}

/// Copy `text` in the background and notify the user of the result.
pub fn copy(text: String) {
    spawn_local(async move {
        if let Err(e) = validator_core::copy_text(&BrowserClipboard, &text, &BannerNotifier).await {
            console::warn(&e.to_string());
        }
    });
}
