//! Browser-independent logic for the annotation validator front-end.
//!
//! Provides:
//! - [`upload`] - size/extension checks for the file pickers
//! - [`format`] - human-readable file sizes
//! - [`notify`] - notification model and the [`Notifier`] seam
//! - [`csv`] - CSV rendering of report rows
//! - [`filter`] - table row filtering
//! - [`theme`] - light/dark theme persistence
//! - [`clipboard`] - copy-to-clipboard flow
//!
//! Browser access sits behind small traits so the crate builds and tests
//! natively; `validator-web` supplies the `web-sys` implementations.

pub mod clipboard;
pub mod config;
pub mod csv;
pub mod error;
pub mod filter;
pub mod format;
pub mod notify;
pub mod progress;
pub mod theme;
pub mod upload;

pub use clipboard::{ClipboardBackend, copy_text};
pub use csv::{ExportRow, convert_to_csv, rows_from_json};
pub use error::{ClipboardError, FileRejection, StorageError};
pub use filter::{row_matches, row_visibility};
pub use format::format_file_size;
pub use notify::{Notice, NoticeRegistry, Notifier, Severity};
pub use progress::Progress;
pub use theme::{Theme, ThemeController, ThemeStore, ThemeTarget};
pub use upload::{FileSlots, GuardOutcome, SelectedFile, check_file, guard_selection, validate_pair};
