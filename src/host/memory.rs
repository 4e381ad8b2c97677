//! In-memory reference host.
//!
//! Holds an authoritative ordered tab collection, executes commands against
//! it with browser semantics (sequential per-tab moves, index clamping, at
//! most one active tab per window), and pushes the resulting events onto the
//! stream in the order a browser would. Backs the demo binary and the
//! integration tests; also exposes simulation methods for changes that only
//! the browser itself can originate.

use tokio::sync::mpsc;

use crate::host::pump::EventPump;
use crate::host::{PanelHost, TabHost, TabQuery};
use crate::types::errors::CommandError;
use crate::types::events::{
    ActiveInfo, AttachInfo, DetachInfo, MoveInfo, RemoveInfo, TabEvent,
};
use crate::types::tab::{MutedInfo, Tab, TabDelta, TabId, WindowId};

/// In-memory tab collection implementing the host capability surface.
pub struct MemoryTabHost {
    tabs: Vec<Tab>,
    focused: Option<WindowId>,
    next_id: i64,
    side_panel: bool,
    open_on_action: bool,
    reject_panel_open: bool,
    opened_panels: Vec<WindowId>,
    events: mpsc::UnboundedSender<TabEvent>,
}

impl MemoryTabHost {
    /// Creates a host and the pump draining its event stream.
    pub fn new() -> (Self, EventPump) {
        let (tx, rx) = mpsc::unbounded_channel();
        let host = Self {
            tabs: Vec::new(),
            focused: None,
            next_id: 1,
            side_panel: true,
            open_on_action: false,
            reject_panel_open: false,
            opened_panels: Vec::new(),
            events: tx,
        };
        (host, EventPump::new(rx))
    }

    /// Builds a host without the side-panel capability.
    pub fn without_side_panel(mut self) -> Self {
        self.side_panel = false;
        self
    }

    /// Builds a host whose panel-open command always fails, as when a user
    /// gesture is required.
    pub fn rejecting_panel_open(mut self) -> Self {
        self.reject_panel_open = true;
        self
    }

    /// Marks a window as focused without going through a command.
    pub fn focus(&mut self, window_id: WindowId) {
        self.focused = Some(window_id);
    }

    /// Windows the side panel has been opened for, in open order.
    pub fn opened_panels(&self) -> &[WindowId] {
        &self.opened_panels
    }

    pub fn open_on_action(&self) -> bool {
        self.open_on_action
    }

    /// Ordered snapshot of one window's tabs, for assertions.
    pub fn tabs_in(&self, window_id: WindowId) -> Vec<Tab> {
        let mut tabs: Vec<Tab> = self
            .tabs
            .iter()
            .filter(|t| t.window_id == window_id)
            .cloned()
            .collect();
        tabs.sort_by_key(|t| t.index);
        tabs
    }

    fn emit(&self, event: TabEvent) {
        // The panel side may be gone in teardown; a closed stream is fine.
        let _ = self.events.send(event);
    }

    fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    fn window_order(&self, window_id: WindowId) -> Vec<TabId> {
        self.tabs_in(window_id).iter().map(|t| t.id).collect()
    }

    fn apply_order(&mut self, order: &[TabId]) {
        for (i, id) in order.iter().enumerate() {
            if let Some(tab) = self.tab_mut(*id) {
                tab.index = i;
            }
        }
    }

    fn set_active_in_window(&mut self, window_id: WindowId, id: TabId) {
        for tab in self.tabs.iter_mut().filter(|t| t.window_id == window_id) {
            tab.active = tab.id == id;
        }
    }

    /// Opens a new tab at the end of a window. The first tab of a window
    /// becomes active.
    pub fn spawn_tab(&mut self, window_id: WindowId, url: Option<&str>) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        let index = self.tabs.iter().filter(|t| t.window_id == window_id).count();
        let tab = Tab {
            id,
            window_id,
            index,
            title: None,
            url: url.map(String::from),
            fav_icon_url: None,
            active: index == 0,
            audible: false,
            muted_info: MutedInfo::default(),
        };
        self.tabs.push(tab.clone());
        self.emit(TabEvent::Created { tab });
        id
    }

    /// Applies a partial change to a tab and emits the matching update event.
    /// Returns false when the tab is gone.
    pub fn update_tab(&mut self, id: TabId, delta: TabDelta) -> bool {
        let window_id = match self.tab(id) {
            Some(tab) => tab.window_id,
            None => return false,
        };
        if delta.active == Some(true) {
            self.set_active_in_window(window_id, id);
        }
        let snapshot = match self.tab_mut(id) {
            Some(tab) => {
                if let Some(title) = &delta.title {
                    tab.title = Some(title.clone());
                }
                if let Some(url) = &delta.url {
                    tab.url = Some(url.clone());
                }
                if let Some(fav) = &delta.fav_icon_url {
                    tab.fav_icon_url = Some(fav.clone());
                }
                if let Some(audible) = delta.audible {
                    tab.audible = audible;
                }
                if let Some(muted) = delta.muted {
                    tab.muted_info.muted = muted;
                }
                if delta.active == Some(false) {
                    tab.active = false;
                }
                tab.clone()
            }
            None => return false,
        };
        self.emit(TabEvent::Updated {
            tab_id: id,
            delta,
            tab: snapshot,
        });
        true
    }

    /// Moves a tab to another window: a detach from the old window followed
    /// by an attach into the new one at `index` (clamped).
    pub fn transfer_tab(&mut self, id: TabId, new_window_id: WindowId, index: usize) -> bool {
        let (old_window_id, was_active, old_index) = match self.tab(id) {
            Some(tab) => (tab.window_id, tab.active, tab.index),
            None => return false,
        };

        let mut old_order = self.window_order(old_window_id);
        old_order.retain(|other| *other != id);
        self.apply_order(&old_order);
        if let Some(tab) = self.tab_mut(id) {
            tab.active = false;
        }
        self.emit(TabEvent::Detached {
            tab_id: id,
            info: DetachInfo { old_window_id },
        });
        if was_active && !old_order.is_empty() {
            let next = old_order[old_index.min(old_order.len() - 1)];
            self.set_active_in_window(old_window_id, next);
            self.emit(TabEvent::Activated {
                info: ActiveInfo {
                    tab_id: next,
                    window_id: old_window_id,
                },
            });
        }

        let mut new_order = self.window_order(new_window_id);
        let dest = index.min(new_order.len());
        new_order.insert(dest, id);
        if let Some(tab) = self.tab_mut(id) {
            tab.window_id = new_window_id;
        }
        self.apply_order(&new_order);
        self.emit(TabEvent::Attached {
            tab_id: id,
            info: AttachInfo { new_window_id },
        });
        true
    }

    /// Substitutes a tab in place with a fresh identifier, as the browser
    /// does when promoting a prerendered page. Returns the new id.
    pub fn replace_tab(&mut self, old_id: TabId) -> Option<TabId> {
        let pos = self.tabs.iter().position(|t| t.id == old_id)?;
        let new_id = TabId(self.next_id);
        self.next_id += 1;
        self.tabs[pos].id = new_id;
        self.emit(TabEvent::Replaced {
            added_tab_id: new_id,
            removed_tab_id: old_id,
        });
        Some(new_id)
    }

    /// Closes a whole window, emitting window-closing removals for its tabs.
    pub fn close_window(&mut self, window_id: WindowId) {
        for id in self.window_order(window_id) {
            self.tabs.retain(|t| t.id != id);
            self.emit(TabEvent::Removed {
                tab_id: id,
                info: RemoveInfo {
                    window_id,
                    is_window_closing: true,
                },
            });
        }
        if self.focused == Some(window_id) {
            self.focused = None;
        }
    }

    fn close_one(&mut self, id: TabId) {
        let (window_id, was_active, old_index) = match self.tab(id) {
            Some(tab) => (tab.window_id, tab.active, tab.index),
            None => return,
        };
        self.tabs.retain(|t| t.id != id);
        let order = self.window_order(window_id);
        self.apply_order(&order);
        self.emit(TabEvent::Removed {
            tab_id: id,
            info: RemoveInfo {
                window_id,
                is_window_closing: false,
            },
        });
        // The browser promotes the nearest neighbor of a closed active tab.
        if was_active && !order.is_empty() {
            let next = order[old_index.min(order.len() - 1)];
            self.set_active_in_window(window_id, next);
            self.emit(TabEvent::Activated {
                info: ActiveInfo {
                    tab_id: next,
                    window_id,
                },
            });
        }
    }

    fn move_one(&mut self, id: TabId, to_index: usize) {
        let window_id = match self.tab(id) {
            Some(tab) => tab.window_id,
            None => return,
        };
        let mut order = self.window_order(window_id);
        let from_index = match order.iter().position(|other| *other == id) {
            Some(pos) => pos,
            None => return,
        };
        order.remove(from_index);
        let dest = to_index.min(order.len());
        order.insert(dest, id);
        self.apply_order(&order);
        if from_index != dest {
            self.emit(TabEvent::Moved {
                tab_id: id,
                info: MoveInfo {
                    window_id,
                    from_index,
                    to_index: dest,
                },
            });
        }
    }
}

impl TabHost for MemoryTabHost {
    fn current_window(&self) -> Option<WindowId> {
        self.focused
    }

    fn query_tabs(&self, query: TabQuery) -> Vec<Tab> {
        match query {
            TabQuery::Window(window_id) => self.tabs_in(window_id),
            TabQuery::CurrentWindow => self
                .focused
                .map(|window_id| self.tabs_in(window_id))
                .unwrap_or_default(),
            TabQuery::All => {
                let mut tabs = self.tabs.clone();
                tabs.sort_by_key(|t| (t.window_id, t.index));
                tabs
            }
        }
    }

    fn get_tab(&self, id: TabId) -> Option<Tab> {
        self.tab(id).cloned()
    }

    fn activate_tab(&mut self, id: TabId) -> Result<(), CommandError> {
        let window_id = self
            .tab(id)
            .map(|t| t.window_id)
            .ok_or_else(|| CommandError::NotFound(id.to_string()))?;
        self.set_active_in_window(window_id, id);
        self.emit(TabEvent::Activated {
            info: ActiveInfo { tab_id: id, window_id },
        });
        Ok(())
    }

    fn focus_window(&mut self, window_id: WindowId) -> Result<(), CommandError> {
        self.focused = Some(window_id);
        Ok(())
    }

    fn close_tabs(&mut self, ids: &[TabId]) -> Result<(), CommandError> {
        for &id in ids {
            self.close_one(id);
        }
        Ok(())
    }

    fn move_tabs(&mut self, ids: &[TabId], index: usize) -> Result<(), CommandError> {
        // The browser applies a bulk move one tab at a time, so the group
        // lands at `index` in payload order.
        for (offset, &id) in ids.iter().enumerate() {
            self.move_one(id, index + offset);
        }
        Ok(())
    }
}

impl PanelHost for MemoryTabHost {
    fn supports_side_panel(&self) -> bool {
        self.side_panel
    }

    fn enable_open_on_action(&mut self) -> Result<(), CommandError> {
        if !self.side_panel {
            return Err(CommandError::Unsupported("side panel".to_string()));
        }
        self.open_on_action = true;
        Ok(())
    }

    fn open_panel(&mut self, window_id: WindowId) -> Result<(), CommandError> {
        if !self.side_panel {
            return Err(CommandError::Unsupported("side panel".to_string()));
        }
        if self.reject_panel_open {
            return Err(CommandError::Rejected(
                "side panel open requires a user gesture".to_string(),
            ));
        }
        self.opened_panels.push(window_id);
        Ok(())
    }
}
