//! Theme persistence over localStorage and the `<body>` attribute.

use validator_core::config::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use validator_core::{StorageError, Theme, ThemeController, ThemeStore, ThemeTarget};

use crate::console;
use crate::dom;

/// Theme name stored in localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        dom::local_storage()?.get_item(THEME_STORAGE_KEY).ok()?
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }
}

/// `data-theme` attribute of the document body.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyTheme;

impl ThemeTarget for BodyTheme {
    fn current(&self) -> Option<String> {
        dom::body()?.get_attribute(THEME_ATTRIBUTE)
    }

    fn apply(&self, value: &str) {
        if let Some(body) = dom::body() {
            let _ = body.set_attribute(THEME_ATTRIBUTE, value);
        }
    }
}

fn controller() -> ThemeController<LocalThemeStore, BodyTheme> {
    ThemeController::new(LocalThemeStore, BodyTheme)
}

/// Apply the saved theme, if there is one.
pub fn load() -> Option<String> {
    controller().load()
}

/// Switch between light and dark and remember the choice.
///
/// Returns the theme now applied to the page. A failed save is logged; the
/// page still switches.
pub fn toggle() -> Option<Theme> {
    match controller().toggle() {
        Ok(theme) => Some(theme),
        Err(e) => {
            console::warn(&format!("theme not saved: {}", e));
            BodyTheme.current().and_then(|value| value.parse().ok())
        }
    }
}
