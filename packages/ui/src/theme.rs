//! Light/dark theme shared by every page.
//!
//! The choice lives in a [`ThemeSignal`] context, is mirrored onto
//! `<html data-theme="…">` for the stylesheet, and is remembered under the
//! `theme` storage key.

use dioxus::prelude::*;
use store::KeyValueStore;

use crate::icons::{FaMoon, FaSun};
use crate::storage::make_store;
use crate::Icon;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub type ThemeSignal = Signal<Theme>;

/// Stored theme, light when nothing valid is stored.
pub fn load_theme() -> Theme {
    make_store()
        .get(THEME_STORAGE_KEY)
        .and_then(|v| Theme::parse(&v))
        .unwrap_or_default()
}

/// Set `data-theme` on the document root and remember the choice.
pub fn apply_theme(theme: Theme) {
    make_store().set(THEME_STORAGE_KEY, theme.as_str());
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

/// Floating round button that flips the theme.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeSignal>();
    let is_dark = theme() == Theme::Dark;

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            title: if is_dark { "Mudar para tema claro" } else { "Mudar para tema escuro" },
            aria_label: "Alternar tema",
            onclick: move |_| {
                let next = theme().toggled();
                apply_theme(next);
                theme.set(next);
            },
            if is_dark {
                Icon { icon: FaMoon, width: 18, height: 18 }
            } else {
                Icon { icon: FaSun, width: 18, height: 18 }
            }
        }
    }
}
