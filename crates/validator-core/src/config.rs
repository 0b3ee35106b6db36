//! Application configuration.
//!
//! Centralizes the limits, DOM identifiers, storage keys and user-facing
//! messages shared by the core logic and the browser bindings.

// =============================================================================
// Upload Limits
// =============================================================================

/// Maximum accepted upload size in bytes (16 MiB).
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// File extensions accepted by the upload form (lower-case, no dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &["json", "jsonl"];

// =============================================================================
// DOM Contract
// =============================================================================

/// Element identifiers the page markup provides.
pub mod ids {
    /// File picker for the original annotation file.
    pub const ORIGINAL_FILE: &str = "original_file";
    /// File picker for the exported annotation file.
    pub const EXPORTED_FILE: &str = "exported_file";
    /// Upload form that hosts the progress bar.
    pub const UPLOAD_FORM: &str = "uploadForm";
    /// Progress bar container created on demand.
    pub const PROGRESS_BAR: &str = "progressBar";
}

/// Selectors used to discover elements at start-up.
pub mod selectors {
    /// Elements that should receive a Bootstrap tooltip.
    pub const TOOLTIP_TRIGGER: &str = "[data-bs-toggle=\"tooltip\"]";
    /// File pickers guarded by the upload checks.
    pub const FILE_INPUTS: &str = "input[type=\"file\"]";
    /// Rendered file descriptor below a picker.
    pub const FILE_INFO: &str = ".file-info";
}

// =============================================================================
// Theme
// =============================================================================

/// localStorage key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Document attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

// =============================================================================
// Notifications
// =============================================================================

/// Time a notification stays on screen before auto-removal.
pub const NOTIFICATION_TTL_MS: u32 = 5000;

// =============================================================================
// Export
// =============================================================================

/// MIME type of downloaded CSV files.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

// =============================================================================
// User-facing Messages
// =============================================================================

/// Korean messages shown to the user.
pub mod messages {
    pub const FILE_TOO_LARGE: &str = "파일 크기가 16MB를 초과합니다.";
    pub const UNSUPPORTED_EXTENSION: &str = "JSON 또는 JSONL 파일만 업로드 가능합니다.";
    pub const BOTH_FILES_REQUIRED: &str = "두 파일 모두 선택해주세요.";
    pub const COPIED: &str = "클립보드에 복사되었습니다.";
    pub const COPY_FAILED: &str = "클립보드 복사에 실패했습니다.";
}
