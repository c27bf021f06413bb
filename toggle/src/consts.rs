//! Fixed names shared by the page markup, the stylesheet, and the toggle.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the saved theme.
pub const STORAGE_KEY: &str = "theme";

// ── Markup ──────────────────────────────────────────────────────

/// Id of the clickable toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Id of the element showing the sun/moon icon.
pub const ICON_ID: &str = "theme-toggle-icon";

/// Class set on `<body>` while the dark theme is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

// ── Icon ────────────────────────────────────────────────────────

/// Icon class while dark (the icon offers the way back to light).
pub const SUN_CLASS: &str = "sun";

/// Icon class while light.
pub const MOON_CLASS: &str = "moon";

pub const SUN_GLYPH: &str = "\u{2600}\u{FE0F}";

pub const MOON_GLYPH: &str = "\u{263D}";
