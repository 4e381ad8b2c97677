//! List synchronization engine.
//!
//! Reconciles the view list against the external change stream. Every
//! operation is idempotent: duplicate inserts become in-place refreshes,
//! events for absent rows are no-ops, and out-of-range indices clamp. That
//! is what lets the view converge on the authoritative order even under
//! duplicate or stale deliveries.

use crate::panel::view::{ViewList, ViewNode};
use crate::types::tab::{Tab, TabId};

/// What an update application did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Attributes were refreshed on an existing row.
    Refreshed,
    /// No row existed yet; the update was treated as an insert. The browser
    /// can report an update before its creation was observed.
    Inserted,
}

/// The reconciliation engine owning the view list.
#[derive(Debug, Default)]
pub struct SyncEngine {
    view: ViewList,
    initialized: bool,
}

impl SyncEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewList {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewList {
        &mut self.view
    }

    /// Whether the initial bulk load has completed. Incremental events are
    /// not applied before this; the bulk snapshot supersedes them.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Bulk load: replaces the whole view with the given ordered snapshot
    /// and marks the engine initialized.
    pub fn render(&mut self, tabs: &[Tab]) {
        self.view.clear();
        if tabs.is_empty() {
            self.view.show_empty_state();
        } else {
            for tab in tabs {
                self.view.push(ViewNode::for_tab(tab));
            }
            self.view.reindex();
        }
        self.initialized = true;
    }

    /// Inserts a row at the tab's reported index, clamped to the current
    /// length. An existing row for the same identifier is refreshed instead.
    pub fn insert(&mut self, tab: &Tab) {
        self.view.clear_empty_state();
        if self.view.contains(tab.id) {
            self.refresh(tab);
            return;
        }
        let at = tab.index.min(self.view.len());
        self.view.insert_at(at, ViewNode::for_tab(tab));
        if tab.active {
            self.view.set_active(tab.id);
        }
        self.view.reindex();
    }

    /// Removes a row. Returns false when no row existed, so the caller can
    /// skip selection bookkeeping.
    pub fn remove(&mut self, id: TabId) -> bool {
        if !self.view.remove(id) {
            return false;
        }
        if self.view.is_empty() {
            self.view.show_empty_state();
        } else {
            self.view.reindex();
        }
        true
    }

    /// Refreshes display attributes of an existing row; promotes it when the
    /// tab reports itself active. Absent row is a no-op.
    pub fn refresh(&mut self, tab: &Tab) {
        let found = match self.view.get_mut(tab.id) {
            Some(node) => {
                node.refresh(tab);
                true
            }
            None => false,
        };
        if found && tab.active {
            self.view.set_active(tab.id);
        }
    }

    /// Applies an update event: refresh in place, or insert when the row is
    /// not there yet.
    pub fn update(&mut self, tab: &Tab) -> UpdateOutcome {
        if self.view.contains(tab.id) {
            self.refresh(tab);
            UpdateOutcome::Refreshed
        } else {
            self.insert(tab);
            UpdateOutcome::Inserted
        }
    }

    /// Repositions a row at the authoritative index. Absent row is a no-op.
    pub fn move_to(&mut self, id: TabId, to_index: usize) -> bool {
        if !self.view.move_node(id, to_index) {
            return false;
        }
        self.view.reindex();
        true
    }

    /// Promotes a row to active, demoting any other. Absent row is a no-op.
    pub fn activate(&mut self, id: TabId) -> bool {
        self.view.set_active(id)
    }
}
