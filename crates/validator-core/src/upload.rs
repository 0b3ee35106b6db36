//! Upload checks for the file pickers on the comparison form.

use crate::config::{ALLOWED_EXTENSIONS, MAX_FILE_SIZE, messages};
use crate::error::FileRejection;
use crate::format::format_file_size;
use crate::notify::{Notice, Notifier};

/// The file currently selected in a picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Lower-cased extension of the file name.
    pub fn extension(&self) -> String {
        file_extension(&self.name)
    }

    /// One-line descriptor shown under the picker, e.g. `data.jsonl (1.5 KB)`.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.name, format_file_size(self.size))
    }
}

/// Lower-cased text after the last `.`; the whole name when there is none.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_lowercase()
}

/// Check a selected file against the size limit and the extension allow-list.
///
/// Size is checked first.
pub fn check_file(file: &SelectedFile) -> Result<(), FileRejection> {
    if file.size > MAX_FILE_SIZE {
        return Err(FileRejection::TooLarge {
            size: file.size,
            limit: MAX_FILE_SIZE,
        });
    }

    let extension = file.extension();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(FileRejection::UnsupportedExtension { extension });
    }

    Ok(())
}

/// What the picker should do after a change event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Nothing selected; leave the picker alone.
    Empty,
    /// Keep the selection and render its descriptor.
    Accepted(SelectedFile),
    /// Clear the selection; the user has been told why.
    Rejected(FileRejection),
}

/// Run the upload checks for a picker change and report rejections.
pub fn guard_selection(file: Option<SelectedFile>, notifier: &impl Notifier) -> GuardOutcome {
    let Some(file) = file else {
        return GuardOutcome::Empty;
    };

    match check_file(&file) {
        Ok(()) => GuardOutcome::Accepted(file),
        Err(rejection) => {
            notifier.notify(Notice::danger(rejection.to_string()));
            GuardOutcome::Rejected(rejection)
        }
    }
}

/// Read access to the pickers on the page.
pub trait FileSlots {
    /// Whether the picker with this id exists and has a file selected.
    fn has_file(&self, id: &str) -> bool;
}

/// Succeeds only if both pickers have a file; warns the user otherwise.
pub fn validate_pair(
    slots: &impl FileSlots,
    first: &str,
    second: &str,
    notifier: &impl Notifier,
) -> bool {
    if slots.has_file(first) && slots.has_file(second) {
        return true;
    }
    notifier.notify(Notice::warning(messages::BOTH_FILES_REQUIRED));
    false
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::config::ids;
    use crate::notify::{RecordingNotifier, Severity};

    struct Slots(HashSet<&'static str>);

    impl FileSlots for Slots {
        fn has_file(&self, id: &str) -> bool {
            self.0.contains(id)
        }
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("data.json"), "json");
        assert_eq!(file_extension("export.v2.JSONL"), "jsonl");
        assert_eq!(file_extension(".json"), "json");
        assert_eq!(file_extension("README"), "readme");
        assert_eq!(file_extension("trailing."), "");
    }

    #[test]
    fn test_check_file_accepts_limit_exactly() {
        let file = SelectedFile::new("a.json", MAX_FILE_SIZE);
        assert_eq!(check_file(&file), Ok(()));
    }

    #[test]
    fn test_check_file_rejects_oversize() {
        let file = SelectedFile::new("a.json", MAX_FILE_SIZE + 1);
        assert!(matches!(
            check_file(&file),
            Err(FileRejection::TooLarge { size, .. }) if size == MAX_FILE_SIZE + 1
        ));
    }

    #[test]
    fn test_check_file_size_before_extension() {
        let file = SelectedFile::new("a.csv", MAX_FILE_SIZE + 1);
        assert!(matches!(check_file(&file), Err(FileRejection::TooLarge { .. })));
    }

    #[test]
    fn test_check_file_rejects_extension() {
        for name in ["a.csv", "a.txt", "readme", "a.json.bak"] {
            let file = SelectedFile::new(name, 10);
            assert!(
                matches!(check_file(&file), Err(FileRejection::UnsupportedExtension { .. })),
                "{} should be rejected",
                name
            );
        }
        assert_eq!(check_file(&SelectedFile::new("A.JSON", 10)), Ok(()));
        assert_eq!(check_file(&SelectedFile::new("b.Jsonl", 10)), Ok(()));
    }

    #[test]
    fn test_guard_selection() {
        let notifier = RecordingNotifier::new();

        assert_eq!(guard_selection(None, &notifier), GuardOutcome::Empty);

        let ok = SelectedFile::new("labels.jsonl", 2048);
        assert_eq!(
            guard_selection(Some(ok.clone()), &notifier),
            GuardOutcome::Accepted(ok)
        );
        assert!(notifier.notices().is_empty());

        let outcome = guard_selection(Some(SelectedFile::new("x.xml", 1)), &notifier);
        assert!(matches!(outcome, GuardOutcome::Rejected(_)));
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, messages::UNSUPPORTED_EXTENSION);
        assert_eq!(notices[0].severity, Severity::Danger);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            SelectedFile::new("labels.jsonl", 1536).describe(),
            "labels.jsonl (1.5 KB)"
        );
    }

    #[test]
    fn test_validate_pair() {
        let notifier = RecordingNotifier::new();
        let both = Slots([ids::ORIGINAL_FILE, ids::EXPORTED_FILE].into());
        assert!(validate_pair(&both, ids::ORIGINAL_FILE, ids::EXPORTED_FILE, &notifier));
        assert!(notifier.notices().is_empty());

        let one = Slots([ids::ORIGINAL_FILE].into());
        assert!(!validate_pair(&one, ids::ORIGINAL_FILE, ids::EXPORTED_FILE, &notifier));
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Warning);
        assert_eq!(notices[0].message, messages::BOTH_FILES_REQUIRED);
    }
}
