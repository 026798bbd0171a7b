//! Document-side theme environment: OS preference and the `<html>` class.

use backdrop_core::{ThemeEnvironment, ThemeMode};

/// Media query reporting an OS-level dark preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Reads `prefers-color-scheme` and toggles a class on the document element.
#[derive(Debug, Clone)]
pub struct DomTheme {
    dark_class: String,
}

impl DomTheme {
    /// Toggle `dark_class` on `<html>` in dark mode.
    pub fn new(dark_class: impl Into<String>) -> Self {
        Self {
            dark_class: dark_class.into(),
        }
    }

    /// Whether the document element currently carries the dark class.
    pub fn document_is_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .is_some_and(|el| el.class_list().contains(&self.dark_class))
    }
}

impl ThemeEnvironment for DomTheme {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }

    fn apply(&self, mode: ThemeMode) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        root.class_list()
            .toggle_with_force(&self.dark_class, mode.is_dark())
            .ok();
    }
}
