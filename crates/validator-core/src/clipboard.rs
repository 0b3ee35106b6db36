//! Copy-to-clipboard flow.
//!
//! Prefers the async Clipboard API and falls back to the legacy
//! select-and-copy path. Both outcomes are reported to the user.

use std::future::Future;

use crate::config::messages;
use crate::error::ClipboardError;
use crate::notify::{Notice, Notifier};

/// Access to the system clipboard.
pub trait ClipboardBackend {
    /// Whether the async Clipboard API is present.
    fn has_async(&self) -> bool;

    /// Write through the async Clipboard API.
    fn write_async(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;

    /// Write through a temporary selection and `execCommand("copy")`.
    fn write_legacy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copy `text` and tell the user how it went.
pub async fn copy_text<B, N>(backend: &B, text: &str, notifier: &N) -> Result<(), ClipboardError>
where
    B: ClipboardBackend,
    N: Notifier,
{
    let result = if backend.has_async() {
        backend.write_async(text).await
    } else {
        backend.write_legacy(text)
    };

    match &result {
        Ok(()) => notifier.notify(Notice::success(messages::COPIED)),
        Err(_) => notifier.notify(Notice::danger(messages::COPY_FAILED)),
    }
    result
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::notify::{RecordingNotifier, Severity};

    #[derive(Default)]
    struct FakeClipboard {
        has_async: bool,
        reject_async: bool,
        fail_legacy: bool,
        written: RefCell<Vec<(&'static str, String)>>,
    }

    impl ClipboardBackend for FakeClipboard {
        fn has_async(&self) -> bool {
            self.has_async
        }

        async fn write_async(&self, text: &str) -> Result<(), ClipboardError> {
            if self.reject_async {
                return Err(ClipboardError::Rejected("NotAllowedError".into()));
            }
            self.written.borrow_mut().push(("async", text.to_string()));
            Ok(())
        }

        fn write_legacy(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail_legacy {
                return Err(ClipboardError::LegacyCopyFailed);
            }
            self.written.borrow_mut().push(("legacy", text.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_async_path_reports_success() {
        let clipboard = FakeClipboard {
            has_async: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::new();

        assert!(copy_text(&clipboard, "report-1", &notifier).await.is_ok());
        assert_eq!(
            clipboard.written.borrow().as_slice(),
            &[("async", "report-1".to_string())]
        );
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, messages::COPIED);
        assert_eq!(notices[0].severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_async_rejection_is_surfaced() {
        let clipboard = FakeClipboard {
            has_async: true,
            reject_async: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::new();

        let result = copy_text(&clipboard, "x", &notifier).await;
        assert!(matches!(result, Err(ClipboardError::Rejected(_))));
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Danger);
        assert_eq!(notices[0].message, messages::COPY_FAILED);
    }

    #[tokio::test]
    async fn test_legacy_fallback() {
        let clipboard = FakeClipboard::default();
        let notifier = RecordingNotifier::new();

        assert!(copy_text(&clipboard, "legacy text", &notifier).await.is_ok());
        assert_eq!(clipboard.written.borrow()[0].0, "legacy");
        assert_eq!(notifier.notices()[0].severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_legacy_failure() {
        let clipboard = FakeClipboard {
            fail_legacy: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::new();

        assert_eq!(
            copy_text(&clipboard, "x", &notifier).await,
            Err(ClipboardError::LegacyCopyFailed)
        );
        assert_eq!(notifier.notices()[0].severity, Severity::Danger);
    }
}
