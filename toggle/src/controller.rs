use crate::preference::ThemePreference;
use crate::store::ThemeStore;
use crate::view::ThemeView;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Keeps the shown theme and the saved theme in step.
///
/// Owns the current [`ThemePreference`] explicitly; the view is only ever
/// written to, never read back. Separated from the browser wiring so it can
/// be tested with [`crate::MemoryThemeStore`] and [`crate::MemoryThemeView`].
pub struct ThemeToggleController<S, V> {
    store: S,
    view: V,
    theme: ThemePreference,
}

impl<S: ThemeStore, V: ThemeView> ThemeToggleController<S, V> {
    /// Read the saved theme and show it.
    ///
    /// Only a saved dark theme touches the view; light (saved, missing, or
    /// unrecognized) is what the markup already shows.
    pub fn new(store: S, mut view: V) -> Self {
        let theme = store.get().unwrap_or_default();
        if theme.is_dark() {
            view.apply(theme);
        }
        log::debug!("theme initialized: {theme}");
        Self { store, view, theme }
    }

    /// Flip the theme, show it, then save it. Returns the new theme.
    ///
    /// A failed save is logged and otherwise ignored: the page keeps the new
    /// theme for this visit.
    pub fn toggle(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        self.view.apply(self.theme);
        if let Err(e) = self.store.set(self.theme) {
            log::warn!("theme not saved: {e}");
        }
        self.theme
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Give back the store and view, e.g. to simulate a page reload.
    pub fn into_parts(self) -> (S, V) {
        (self.store, self.view)
    }
}
