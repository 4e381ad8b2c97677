use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of the theme value in the durable key-value store.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Key of the theme value in the fast synchronous cache.
pub const THEME_CACHE_KEY: &str = "vt_theme";

/// Visual theme shared across extension surfaces.
///
/// A closed set; unknown or malformed values normalize to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Catppuccin,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Catppuccin => "catppuccin",
        }
    }

    /// Parses a raw theme string, returning `None` for values outside the set.
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "catppuccin" => Some(Theme::Catppuccin),
            _ => None,
        }
    }

    /// Normalizes a raw theme string, mapping anything unknown to the default.
    pub fn normalize(raw: &str) -> Theme {
        Theme::parse(raw).unwrap_or_default()
    }

    /// Normalizes a stored JSON value; non-string values map to the default.
    pub fn from_value(value: &serde_json::Value) -> Theme {
        value.as_str().map(Theme::normalize).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
