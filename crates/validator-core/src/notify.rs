//! Notification model and the single "alert the user" seam.
//!
//! Everything that needs to tell the user something goes through a
//! [`Notifier`]. The browser implementation renders a dismissible banner;
//! tests use a recording notifier.

#[cfg(test)]
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::config::NOTIFICATION_TTL_MS;

/// Severity of a notification, mapped onto Bootstrap `alert-*` classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Success,
    Danger,
}

impl Severity {
    /// Parse a severity tag as page scripts pass it.
    ///
    /// Unknown or missing tags fall back to [`Severity::Info`].
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("warning") => Self::Warning,
            Some("success") => Self::Success,
            Some("danger") | Some("error") => Self::Danger,
            _ => Self::Info,
        }
    }

    /// Tag used in the `alert-{tag}` class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    /// Milliseconds before the banner removes itself.
    pub ttl_ms: u32,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            ttl_ms: NOTIFICATION_TTL_MS,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Danger)
    }

    /// CSS classes of the rendered banner.
    pub fn class_name(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show position-fixed",
            self.severity
        )
    }
}

/// Sink for user-facing notices.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Notifier that keeps every notice.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Live notices keyed by id, holding whatever keeps each one on screen.
///
/// Both the close button and the auto-removal timer call [`Self::dismiss`];
/// only the first call gets the handle back, so removal happens once.
#[derive(Debug)]
pub struct NoticeRegistry<H> {
    next_id: u64,
    live: HashMap<u64, H>,
}

impl<H> NoticeRegistry<H> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            live: HashMap::new(),
        }
    }

    /// Reserve the id for the next notice.
    pub fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn insert(&mut self, id: u64, handle: H) {
        self.live.insert(id, handle);
    }

    /// Take the handle for `id`. `None` if it was already dismissed.
    pub fn dismiss(&mut self, id: u64) -> Option<H> {
        self.live.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl<H> Default for NoticeRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
