//! Notification banner.
//!
//! Banners are mounted on the document body and removed either by the close
//! button or by a timer after [`Notice::ttl_ms`]. Whichever fires second
//! finds nothing to remove.

use std::any::Any;
use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use validator_core::{Notice, NoticeRegistry, Notifier};

use crate::console;
use crate::dom;

const BANNER_STYLE: &str = "top: 20px; right: 20px; z-index: 9999; min-width: 300px;";

thread_local! {
    static LIVE: RefCell<NoticeRegistry<Box<dyn Any>>> = RefCell::new(NoticeRegistry::new());
}

/// Dismissible banner for a single notice.
#[component]
pub fn NotificationBanner(notice: Notice, id: u64) -> impl IntoView {
    let on_close = move |_: leptos::ev::MouseEvent| {
        // Defer so the handler is not dropped while it runs
        Timeout::new(0, move || dismiss(id)).forget();
    };
    let class = notice.class_name();
    let message = notice.message;

    view! {
        <div class=class role="alert" style=BANNER_STYLE>
            {message}
            <button type="button" class="btn-close" aria-label="Close" on:click=on_close></button>
        </div>
    }
}

/// Show a notice and schedule its removal. Returns the banner id.
pub fn show(notice: Notice) -> Option<u64> {
    let Some(body) = dom::body() else {
        console::warn(&format!("notification dropped, no body: {}", notice.message));
        return None;
    };

    let id = LIVE.with(|live| live.borrow_mut().next_id());
    let ttl_ms = notice.ttl_ms;
    let handle = mount_to(body, move || view! { <NotificationBanner notice=notice id=id /> });
    LIVE.with(|live| live.borrow_mut().insert(id, Box::new(handle)));

    Timeout::new(ttl_ms, move || dismiss(id)).forget();
    Some(id)
}

/// Remove a banner. No-op if it is already gone.
pub fn dismiss(id: u64) {
    let handle = LIVE.with(|live| live.borrow_mut().dismiss(id));
    // Dropping the handle unmounts the banner
    drop(handle);
}

/// Number of banners on screen.
pub fn live_count() -> usize {
    LIVE.with(|live| live.borrow().len())
}

/// [`Notifier`] that renders banners.
#[derive(Clone, Copy, Debug, Default)]
pub struct BannerNotifier;

impl Notifier for BannerNotifier {
    fn notify(&self, notice: Notice) {
        let _ = show(notice);
    }
}
