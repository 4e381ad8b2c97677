//! Drag-reorder state machine: `Idle → Dragging → {Dropped | Cancelled} → Idle`.
//!
//! The controller never reorders the view itself. A drop only computes the
//! authoritative bulk-move command; the resulting move events reorder the
//! view. Drag affordances (dragging mark, drop marker) are local and
//! transient.

use crate::panel::selection::SelectionModel;
use crate::panel::view::{DropPosition, ViewList};
use crate::types::tab::TabId;

/// The reorder command a drop resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCommand {
    /// Payload identifiers in visual order.
    pub ids: Vec<TabId>,
    /// Insertion index within the remaining order (full order minus payload).
    pub index: usize,
}

/// In-progress drag state plus the single visible drop marker.
#[derive(Debug, Default)]
pub struct DragController {
    payload: Option<Vec<TabId>>,
    drop_target: Option<(TabId, DropPosition)>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&[TabId]> {
        self.payload.as_deref()
    }

    pub fn drop_target(&self) -> Option<(TabId, DropPosition)> {
        self.drop_target
    }

    /// Above/below from the pointer's vertical position against the row's
    /// midpoint.
    pub fn drop_position(pointer_y: f64, row_top: f64, row_height: f64) -> DropPosition {
        if pointer_y - row_top < row_height / 2.0 {
            DropPosition::Above
        } else {
            DropPosition::Below
        }
    }

    /// Starts a drag from one row. A row inside a multi-selection drags the
    /// whole selection in visual order; any other row drags alone, clearing
    /// whatever selection existed.
    pub fn begin(&mut self, view: &mut ViewList, selection: &mut SelectionModel, id: TabId) {
        let ordered = selection.selected_in_order(view);
        let payload = if ordered.len() > 1 && selection.contains(id) {
            ordered
        } else {
            if !selection.is_empty() {
                selection.clear(view);
            }
            vec![id]
        };
        self.payload = Some(payload);
        view.set_dragging(id, true);
    }

    /// Hover over a row mid-drag. Rows in the payload (or the dragged row
    /// itself) reject the hover; otherwise the single drop marker moves to
    /// this row. Returns whether the row accepted.
    pub fn drag_over(&mut self, view: &mut ViewList, target: TabId, position: DropPosition) -> bool {
        let payload = match &self.payload {
            Some(payload) => payload,
            None => return false,
        };
        let dragging_self = view.get(target).map(|n| n.dragging).unwrap_or(false);
        if dragging_self || payload.contains(&target) {
            return false;
        }
        if self.drop_target == Some((target, position)) {
            return true;
        }
        self.clear_marker(view);
        self.drop_target = Some((target, position));
        view.set_drop_marker(target, position);
        true
    }

    /// The pointer left a row; only that row's marker is cleared.
    pub fn drag_leave(&mut self, view: &mut ViewList, target: TabId) {
        if let Some((marked, _)) = self.drop_target {
            if marked == target {
                self.clear_marker(view);
            }
        }
    }

    /// Drop on a row. Computes the insertion index within the remaining
    /// order (full order minus payload), +1 for a below drop. Returns `None`
    /// when the drop is invalid; the marker is cleared either way.
    pub fn drop_on(
        &mut self,
        view: &mut ViewList,
        target: TabId,
        position: DropPosition,
    ) -> Option<MoveCommand> {
        let payload = match &self.payload {
            Some(payload) => payload.clone(),
            None => return None,
        };
        let dragging_self = view.get(target).map(|n| n.dragging).unwrap_or(false);
        if dragging_self || payload.contains(&target) {
            self.clear_marker(view);
            return None;
        }
        let remaining: Vec<TabId> = view
            .ids()
            .into_iter()
            .filter(|id| !payload.contains(id))
            .collect();
        let target_index = match remaining.iter().position(|id| *id == target) {
            Some(pos) => pos,
            None => {
                self.clear_marker(view);
                return None;
            }
        };
        let index = target_index + usize::from(position == DropPosition::Below);
        self.clear_marker(view);
        Some(MoveCommand { ids: payload, index })
    }

    /// Drop on the empty area below all rows: the payload moves to the end
    /// of the remaining order.
    pub fn drop_on_empty(&mut self, view: &mut ViewList) -> Option<MoveCommand> {
        let payload = match &self.payload {
            Some(payload) => payload.clone(),
            None => return None,
        };
        let remaining = view
            .ids()
            .iter()
            .filter(|id| !payload.contains(id))
            .count();
        self.clear_marker(view);
        Some(MoveCommand {
            ids: payload,
            index: remaining,
        })
    }

    /// Ends the gesture regardless of drop success: dragging marks, the drop
    /// marker, and the payload all reset.
    pub fn end(&mut self, view: &mut ViewList) {
        view.clear_dragging();
        self.clear_marker(view);
        self.payload = None;
    }

    fn clear_marker(&mut self, view: &mut ViewList) {
        if let Some((marked, _)) = self.drop_target.take() {
            view.clear_drop_marker(marked);
        }
    }
}
