//! Light/dark theme toggle for the daylight site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It reads the
//! visitor's saved theme from `localStorage` when the page is ready, applies
//! the matching visual state, and flips and saves the theme on every click of
//! the toggle button. The core state machine has no browser dependency so it
//! can be tested natively; the DOM and storage bindings live behind the
//! `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`preference`] | The persisted [`preference::ThemePreference`] value |
//! | [`store`] | [`store::ThemeStore`] persistence seam and in-memory store |
//! | [`view`] | [`view::ThemeView`] visual-state seam and in-memory view |
//! | [`controller`] | [`controller::ThemeToggleController`] state machine |
//! | [`consts`] | Storage key, element ids, class names, glyphs |
//! | `web` | `localStorage`/DOM bindings and the wasm entry point (`hydrate`) |

pub mod consts;
pub mod controller;
pub mod preference;
pub mod store;
pub mod view;
#[cfg(feature = "hydrate")]
pub mod web;

pub use controller::ThemeToggleController;
pub use preference::ThemePreference;
pub use store::{MemoryThemeStore, StoreError, ThemeStore};
pub use view::{MemoryThemeView, ThemeView};
