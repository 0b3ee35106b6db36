//! Light/dark theme persistence.
//!
//! The theme lives in two places: an attribute on the document body and a
//! localStorage entry. [`ThemeController`] keeps them in sync through the
//! [`ThemeTarget`] and [`ThemeStore`] seams.

use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// UI color theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Theme that follows the given attribute value on toggle.
    ///
    /// Exactly `"dark"` goes to light; anything else, including no value,
    /// goes to dark.
    pub fn toggled_from(current: Option<&str>) -> Self {
        match current {
            Some("dark") => Self::Light,
            _ => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Persistent storage for the theme name.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// The document attribute that styling reads.
pub trait ThemeTarget {
    fn current(&self) -> Option<String>;
    fn apply(&self, value: &str);
}

/// Theme operations over injected storage and document access.
pub struct ThemeController<S, T> {
    store: S,
    target: T,
}

impl<S: ThemeStore, T: ThemeTarget> ThemeController<S, T> {
    pub fn new(store: S, target: T) -> Self {
        Self { store, target }
    }

    /// Apply the stored theme, if any. Returns the applied value.
    ///
    /// Stored values are applied verbatim, even unknown ones.
    pub fn load(&self) -> Option<String> {
        let saved = self.store.load().filter(|v| !v.is_empty())?;
        self.target.apply(&saved);
        Some(saved)
    }

    /// Flip the theme and persist it.
    ///
    /// The attribute is always updated; a failed write is returned so the
    /// caller can log it.
    pub fn toggle(&self) -> Result<Theme, StorageError> {
        let next = Theme::toggled_from(self.target.current().as_deref());
        self.target.apply(next.as_str());
        self.store.save(next.as_str())?;
        Ok(next)
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    fn target(&self) -> &T {
        &self.target
    }
}
