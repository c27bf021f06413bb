//! Visual-state seam: the `<body>` class and the toggle icon.

use std::collections::BTreeSet;

use crate::consts::MOON_CLASS;
use crate::preference::ThemePreference;

/// Something that can show a theme.
pub trait ThemeView {
    /// Make the visual state match `theme`: body class, icon glyph, and the
    /// mutually exclusive `sun`/`moon` icon class.
    fn apply(&mut self, theme: ThemePreference);
}

/// In-memory [`ThemeView`] mirroring what the DOM would show.
///
/// Starts out as the default page markup: no `dark-mode` class and a moon
/// icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryThemeView {
    pub dark_mode: bool,
    pub glyph: String,
    pub icon_classes: BTreeSet<String>,
    /// Number of `apply` calls, so tests can tell "untouched" from "re-rendered".
    pub renders: usize,
}

impl Default for MemoryThemeView {
    fn default() -> Self {
        Self {
            dark_mode: false,
            glyph: ThemePreference::Light.icon_glyph().to_owned(),
            icon_classes: BTreeSet::from([MOON_CLASS.to_owned()]),
            renders: 0,
        }
    }
}

impl MemoryThemeView {
    /// The theme this view currently shows.
    #[must_use]
    pub fn shown(&self) -> ThemePreference {
        if self.dark_mode { ThemePreference::Dark } else { ThemePreference::Light }
    }

    /// Whether the icon carries `class`.
    #[must_use]
    pub fn has_icon_class(&self, class: &str) -> bool {
        self.icon_classes.contains(class)
    }
}

impl ThemeView for MemoryThemeView {
    fn apply(&mut self, theme: ThemePreference) {
        let (add, remove) = theme.icon_classes();
        self.dark_mode = theme.is_dark();
        self.glyph = theme.icon_glyph().to_owned();
        self.icon_classes.remove(remove);
        self.icon_classes.insert(add.to_owned());
        self.renders += 1;
    }
}
