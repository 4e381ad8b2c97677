use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a tab, unique within the whole browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub i64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a browser window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub i64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mute state of a tab. Mute takes precedence over audible for badge display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutedInfo {
    pub muted: bool,
}

/// One open tab as reported by the host window manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub window_id: WindowId,
    /// Zero-based position within the owning window; externally assigned.
    pub index: usize,
    pub title: Option<String>,
    pub url: Option<String>,
    pub fav_icon_url: Option<String>,
    pub active: bool,
    pub audible: bool,
    pub muted_info: MutedInfo,
}

impl Tab {
    /// Display text for a tab row: title, falling back to URL, then a placeholder.
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref())
            .or_else(|| non_empty(self.url.as_deref()))
            .unwrap_or("New Tab")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Partial-change payload carried on update events. Only changed attributes
/// are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabDelta {
    pub title: Option<String>,
    pub url: Option<String>,
    pub fav_icon_url: Option<String>,
    pub audible: Option<bool>,
    pub muted: Option<bool>,
    pub active: Option<bool>,
}
