//! Multi-select state.
//!
//! Tracks the set of selected rows and the anchor used as the range pivot.
//! The set only ever references rows present in the view: marking a missing
//! row is a no-op, and removals evict their identifier.

use std::collections::HashSet;

use crate::panel::view::ViewList;
use crate::types::tab::TabId;

/// Modifier keys held during a row click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl ClickModifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    fn toggles(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Selected rows plus the range anchor.
#[derive(Debug, Default)]
pub struct SelectionModel {
    selected: HashSet<TabId>,
    anchor: Option<TabId>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.selected.contains(&id)
    }

    pub fn anchor(&self) -> Option<TabId> {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Option<TabId>) {
        self.anchor = anchor;
    }

    /// The bulk toolbar only appears for a real multi-selection; a single
    /// selected row is indistinguishable from normal focus.
    pub fn bar_visible(&self) -> bool {
        self.selected.len() > 1
    }

    /// Marks or unmarks one row, keeping the set and the row flag in step.
    /// A row absent from the view leaves the set untouched.
    pub fn set_selected(&mut self, view: &mut ViewList, id: TabId, selected: bool) {
        if !view.set_selected(id, selected) {
            return;
        }
        if selected {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    /// Empties the selection; skips the unmark pass when already empty.
    pub fn clear(&mut self, view: &mut ViewList) {
        if self.selected.is_empty() {
            return;
        }
        for id in self.selected.drain() {
            view.set_selected(id, false);
        }
    }

    /// Selects the closed interval between two rows in current visual order.
    /// When either endpoint is missing, falls back to selecting the target.
    pub fn select_range(&mut self, view: &mut ViewList, anchor_id: TabId, target_id: TabId) {
        let ids = view.ids();
        let start = ids.iter().position(|id| *id == anchor_id);
        let end = ids.iter().position(|id| *id == target_id);
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                self.set_selected(view, target_id, true);
                return;
            }
        };
        let (from, to) = if start < end { (start, end) } else { (end, start) };
        self.clear(view);
        for id in &ids[from..=to] {
            self.set_selected(view, *id, true);
        }
    }

    /// Applies the modifier-click rules. Returns true when the click was a
    /// selection gesture; the caller must then skip the activate path.
    pub fn handle_click(&mut self, view: &mut ViewList, id: TabId, mods: ClickModifiers) -> bool {
        if mods.shift {
            match self.anchor {
                None => {
                    self.clear(view);
                    self.set_selected(view, id, true);
                }
                Some(anchor) => self.select_range(view, anchor, id),
            }
            self.anchor = Some(id);
            return true;
        }
        if mods.toggles() {
            let now_selected = !self.selected.contains(&id);
            self.set_selected(view, id, now_selected);
            self.anchor = Some(id);
            return true;
        }
        false
    }

    /// Selected identifiers in current visual order.
    pub fn selected_in_order(&self, view: &ViewList) -> Vec<TabId> {
        view.ids()
            .into_iter()
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    /// Drops one identifier after its row was removed. Returns whether the
    /// set changed; resets the anchor when it pointed at the removed row.
    pub fn evict(&mut self, id: TabId) -> bool {
        let removed = self.selected.remove(&id);
        if self.anchor == Some(id) {
            self.anchor = None;
        }
        removed
    }

    /// Reconciles the selection with a freshly rendered view: identifiers no
    /// longer present are dropped, survivors are re-marked on their rows.
    pub fn retain_present(&mut self, view: &mut ViewList) {
        self.selected.retain(|id| view.contains(*id));
        for id in self.selected.iter() {
            view.set_selected(*id, true);
        }
        if let Some(anchor) = self.anchor {
            if !view.contains(anchor) {
                self.anchor = None;
            }
        }
    }
}
