//! Persistence seam for the saved theme.
//!
//! DESIGN
//! ======
//! The controller only sees [`ThemeStore`]. The browser implementation wraps
//! `localStorage` (see `web`); [`MemoryThemeStore`] keeps the raw string in
//! memory so tests can seed arbitrary stored values and simulate a storage
//! that refuses writes.

use crate::preference::ThemePreference;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Why a theme could not be saved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage is available (disabled by the browser, private mode, etc.).
    #[error("theme storage unavailable")]
    Unavailable,
    /// Storage exists but rejected the write (quota exceeded, security error).
    #[error("theme storage rejected write: {0}")]
    Rejected(String),
}

/// Typed get/set over the single persisted theme entry.
pub trait ThemeStore {
    /// The saved theme, or `None` when nothing usable is saved.
    fn get(&self) -> Option<ThemePreference>;

    /// Save `theme`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the value could not be written.
    fn set(&mut self, theme: ThemePreference) -> Result<(), StoreError>;
}

/// In-memory [`ThemeStore`] holding the raw stored string.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    raw: Option<String>,
    read_only: bool,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `raw`, valid theme or not.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Some(raw.into()), read_only: false }
    }

    /// A store whose writes always fail with [`StoreError::Rejected`].
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// The raw stored string, exactly as written.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get(&self) -> Option<ThemePreference> {
        self.raw.as_deref().and_then(|raw| raw.parse().ok())
    }

    fn set(&mut self, theme: ThemePreference) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Rejected("read-only store".into()));
        }
        self.raw = Some(theme.as_str().to_owned());
        Ok(())
    }
}
