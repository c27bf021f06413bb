//! The persisted theme value.

use std::fmt;
use std::str::FromStr;

use crate::consts::{MOON_CLASS, MOON_GLYPH, SUN_CLASS, SUN_GLYPH};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Error returned when a string is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);

/// The visitor's selected theme.
///
/// Stored as `"light"` or `"dark"`. A missing or unrecognized stored value
/// means [`ThemePreference::Light`], which is what the page markup renders by
/// default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The string written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Glyph shown in the toggle icon while this theme is active.
    #[must_use]
    pub fn icon_glyph(self) -> &'static str {
        match self {
            Self::Light => MOON_GLYPH,
            Self::Dark => SUN_GLYPH,
        }
    }

    /// Icon class for this theme, paired with the class it replaces.
    #[must_use]
    pub fn icon_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => (MOON_CLASS, SUN_CLASS),
            Self::Dark => (SUN_CLASS, MOON_CLASS),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}
