//! Change-stream event types delivered by the host window manager.
//!
//! Events arrive in a single ordered stream per window; handlers are written
//! idempotently so duplicate or stale deliveries degrade to no-ops.

use serde::{Deserialize, Serialize};

use crate::types::tab::{Tab, TabDelta, TabId, WindowId};

/// Payload of a removal event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveInfo {
    pub window_id: WindowId,
    pub is_window_closing: bool,
}

/// Payload of a within-window move event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveInfo {
    pub window_id: WindowId,
    pub from_index: usize,
    pub to_index: usize,
}

/// Payload of an activation event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveInfo {
    pub tab_id: TabId,
    pub window_id: WindowId,
}

/// Payload of a detach event; filtered on the window the tab is leaving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetachInfo {
    pub old_window_id: WindowId,
}

/// Payload of an attach event; filtered on the window the tab is joining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachInfo {
    pub new_window_id: WindowId,
}

/// One external change to the tab collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TabEvent {
    Created {
        tab: Tab,
    },
    Removed {
        tab_id: TabId,
        info: RemoveInfo,
    },
    Updated {
        tab_id: TabId,
        delta: TabDelta,
        tab: Tab,
    },
    Moved {
        tab_id: TabId,
        info: MoveInfo,
    },
    Activated {
        info: ActiveInfo,
    },
    Detached {
        tab_id: TabId,
        info: DetachInfo,
    },
    Attached {
        tab_id: TabId,
        info: AttachInfo,
    },
    /// Browser-internal substitution of one tab for another (e.g. prerender
    /// promotion); handled as an atomic swap from the view's perspective.
    Replaced {
        added_tab_id: TabId,
        removed_tab_id: TabId,
    },
}
