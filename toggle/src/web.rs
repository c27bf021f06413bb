//! Browser bindings: `localStorage`, the page's DOM, and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup provides `#theme-toggle` and `#theme-toggle-icon` and
//! loads this module. Once the document is parsed, [`bind`] builds a
//! [`ThemeToggleController`] over [`LocalStorageThemeStore`] and
//! [`DomThemeView`] and hands it to the click listener, which keeps it alive
//! for the rest of the page view.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Storage};

use crate::consts::{DARK_MODE_CLASS, ICON_ID, STORAGE_KEY, TOGGLE_ID};
use crate::controller::ThemeToggleController;
use crate::preference::ThemePreference;
use crate::store::{StoreError, ThemeStore};
use crate::view::ThemeView;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "web_test.rs"]
mod web_test;

/// Why the toggle could not be wired into the page.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("failed to add {event} listener: {message}")]
    Listener { event: &'static str, message: String },
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================================
// STORAGE
// =============================================================================

/// [`ThemeStore`] over the origin's `localStorage`.
///
/// `storage` is `None` when the browser refuses access; reads then see no
/// saved theme and writes fail with [`StoreError::Unavailable`].
pub struct LocalStorageThemeStore {
    storage: Option<Storage>,
}

impl LocalStorageThemeStore {
    #[must_use]
    pub fn new(storage: Option<Storage>) -> Self {
        Self { storage }
    }

    /// Open the current window's `localStorage`, if allowed.
    #[must_use]
    pub fn from_window(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", js_message(&e));
                None
            }
        };
        Self::new(storage)
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn get(&self) -> Option<ThemePreference> {
        let raw = self.storage.as_ref()?.get_item(STORAGE_KEY).ok().flatten()?;
        raw.parse().ok()
    }

    fn set(&mut self, theme: ThemePreference) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(STORAGE_KEY, theme.as_str())
            .map_err(|e| StoreError::Rejected(js_message(&e)))
    }
}

// =============================================================================
// DOM
// =============================================================================

/// [`ThemeView`] over `<body>` and the toggle icon element.
pub struct DomThemeView {
    body: HtmlElement,
    icon: Element,
}

impl DomThemeView {
    #[must_use]
    pub fn new(body: HtmlElement, icon: Element) -> Self {
        Self { body, icon }
    }
}

impl ThemeView for DomThemeView {
    fn apply(&mut self, theme: ThemePreference) {
        let body_classes = self.body.class_list();
        let _ = if theme.is_dark() {
            body_classes.add_1(DARK_MODE_CLASS)
        } else {
            body_classes.remove_1(DARK_MODE_CLASS)
        };

        let (add, remove) = theme.icon_classes();
        self.icon.set_text_content(Some(theme.icon_glyph()));
        let icon_classes = self.icon.class_list();
        let _ = icon_classes.remove_1(remove);
        let _ = icon_classes.add_1(add);
    }
}

// =============================================================================
// WIRING
// =============================================================================

/// Apply the saved theme to `document` and start listening for clicks.
///
/// # Errors
///
/// Returns [`BindError`] if the body or either toggle element is missing, or
/// the click listener cannot be registered.
pub fn bind(window: &web_sys::Window, document: &Document) -> Result<(), BindError> {
    let body = document.body().ok_or(BindError::NoBody)?;
    let toggle = document.get_element_by_id(TOGGLE_ID).ok_or(BindError::MissingElement(TOGGLE_ID))?;
    let icon = document.get_element_by_id(ICON_ID).ok_or(BindError::MissingElement(ICON_ID))?;

    let controller = Rc::new(RefCell::new(ThemeToggleController::new(
        LocalStorageThemeStore::from_window(window),
        DomThemeView::new(body, icon),
    )));

    let on_click = Closure::wrap(Box::new(move || {
        let theme = controller.borrow_mut().toggle();
        log::debug!("theme toggled: {theme}");
    }) as Box<dyn FnMut()>);

    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener { event: "click", message: js_message(&e) })?;
    // The listener lives as long as the page.
    on_click.forget();
    Ok(())
}

fn bind_current_page() -> Result<(), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;

    if document.ready_state() != "loading" {
        return bind(&window, &document);
    }

    let target = document.clone();
    let on_ready = Closure::wrap(Box::new(move || {
        if let Err(e) = bind(&window, &target) {
            log::error!("theme toggle not bound: {e}");
        }
    }) as Box<dyn FnMut()>);
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener { event: "DOMContentLoaded", message: js_message(&e) })?;
    on_ready.forget();
    Ok(())
}

/// Wasm entry point: set up console logging and bind the toggle once the
/// document is parsed (immediately if it already is).
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(e) = bind_current_page() {
        log::error!("theme toggle not bound: {e}");
    }
}
