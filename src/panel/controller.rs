//! Panel controller.
//!
//! One `PanelController` exists per panel lifetime. It owns the window
//! scope, the synchronization engine, the selection model and the drag
//! controller, implements [`TabEventSink`] for the host change stream, and
//! translates user gestures into host commands. Commands are best-effort:
//! errors are logged and discarded, and the view waits for the resulting
//! change events instead of mutating itself speculatively.

use log::debug;

use crate::host::{TabEventSink, TabHost, TabQuery};
use crate::panel::drag::DragController;
use crate::panel::scope::WindowScope;
use crate::panel::selection::{ClickModifiers, SelectionModel};
use crate::panel::sync::SyncEngine;
use crate::panel::view::{DropPosition, ViewList};
use crate::types::events::{ActiveInfo, AttachInfo, DetachInfo, MoveInfo, RemoveInfo};
use crate::types::tab::{Tab, TabDelta, TabId, WindowId};

/// Derived state of the bulk-action toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBar {
    pub count: usize,
    pub visible: bool,
}

/// The panel's single stateful controller.
pub struct PanelController<H: TabHost> {
    host: H,
    scope: WindowScope,
    sync: SyncEngine,
    selection: SelectionModel,
    drag: DragController,
}

impl<H: TabHost> PanelController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            scope: WindowScope::new(),
            sync: SyncEngine::new(),
            selection: SelectionModel::new(),
            drag: DragController::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn view(&self) -> &ViewList {
        self.sync.view()
    }

    pub fn scope(&self) -> &WindowScope {
        &self.scope
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn is_initialized(&self) -> bool {
        self.sync.is_initialized()
    }

    pub fn selection_bar(&self) -> SelectionBar {
        SelectionBar {
            count: self.selection.len(),
            visible: self.selection.bar_visible(),
        }
    }

    /// Startup: resolve the panel's window if the host already knows it,
    /// then bulk-load the tab snapshot.
    pub fn initialize(&mut self) {
        if let Some(window_id) = self.host.current_window() {
            self.scope.learn(window_id);
        }
        self.refresh_tabs();
    }

    /// Queries the scoped snapshot and re-renders the whole list. The scope
    /// can also be learned here, from the first tab of the snapshot.
    pub fn refresh_tabs(&mut self) {
        let query = match self.scope.current() {
            Some(window_id) => TabQuery::Window(window_id),
            None => TabQuery::CurrentWindow,
        };
        let tabs = self.host.query_tabs(query);
        if let Some(first) = tabs.first() {
            self.scope.learn(first.window_id);
        }
        self.sync.render(&tabs);
        self.selection.retain_present(self.sync.view_mut());
    }

    fn admits(&self, window_id: WindowId) -> bool {
        self.sync.is_initialized() && self.scope.includes(window_id)
    }

    /// Removes a row and keeps selection state consistent with it.
    fn remove_row(&mut self, id: TabId) {
        if self.sync.remove(id) {
            self.selection.evict(id);
        }
    }

    // === Gestures ===

    /// Click on a row. A modifier click mutates the selection and suppresses
    /// activation; a plain click clears the selection, re-anchors, and
    /// activates the tab (bringing its window to front).
    pub fn click_tab(&mut self, id: TabId, mods: ClickModifiers) {
        if self.selection.handle_click(self.sync.view_mut(), id, mods) {
            return;
        }
        self.selection.clear(self.sync.view_mut());
        self.selection.set_anchor(Some(id));
        self.activate_tab(id);
    }

    /// Enter/Space on a focused row activates it without touching selection.
    pub fn key_activate(&mut self, id: TabId) {
        self.activate_tab(id);
    }

    pub fn key_escape(&mut self) {
        self.clear_selection();
    }

    /// Delete/Backspace closes the selection, when there is one.
    pub fn key_delete(&mut self) {
        if !self.selection.is_empty() {
            self.close_selected();
        }
    }

    /// Click on the list background, outside any row.
    pub fn background_click(&mut self) {
        self.clear_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear(self.sync.view_mut());
    }

    /// Closes the selected tabs: snapshot in visual order, clear the
    /// selection so the UI feels immediate, then one bulk close command.
    pub fn close_selected(&mut self) {
        let ids = self.selection.selected_in_order(self.sync.view());
        if ids.is_empty() {
            return;
        }
        self.selection.clear(self.sync.view_mut());
        if let Err(err) = self.host.close_tabs(&ids) {
            debug!("close command discarded: {}", err);
        }
    }

    fn activate_tab(&mut self, id: TabId) {
        let Some(tab) = self.host.get_tab(id) else {
            return;
        };
        if let Err(err) = self.host.activate_tab(id) {
            debug!("activate command discarded: {}", err);
        }
        if let Err(err) = self.host.focus_window(tab.window_id) {
            debug!("focus command discarded: {}", err);
        }
    }

    // === Drag gestures ===

    pub fn drag_start(&mut self, id: TabId) {
        self.drag.begin(self.sync.view_mut(), &mut self.selection, id);
    }

    pub fn drag_over(&mut self, target: TabId, position: DropPosition) -> bool {
        self.drag.drag_over(self.sync.view_mut(), target, position)
    }

    pub fn drag_leave(&mut self, target: TabId) {
        self.drag.drag_leave(self.sync.view_mut(), target);
    }

    /// Drop on a row: issue the computed bulk move and wait for the move
    /// events. The view is never reordered locally.
    pub fn drop_on(&mut self, target: TabId, position: DropPosition) {
        if let Some(cmd) = self.drag.drop_on(self.sync.view_mut(), target, position) {
            if let Err(err) = self.host.move_tabs(&cmd.ids, cmd.index) {
                debug!("move command discarded: {}", err);
            }
        }
    }

    /// Drop below all rows: the payload moves to the end.
    pub fn drop_on_empty(&mut self) {
        if let Some(cmd) = self.drag.drop_on_empty(self.sync.view_mut()) {
            if let Err(err) = self.host.move_tabs(&cmd.ids, cmd.index) {
                debug!("move command discarded: {}", err);
            }
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.end(self.sync.view_mut());
    }
}

impl<H: TabHost> TabEventSink for PanelController<H> {
    fn on_created(&mut self, tab: Tab) {
        if !self.admits(tab.window_id) {
            return;
        }
        self.sync.insert(&tab);
    }

    fn on_removed(&mut self, tab_id: TabId, info: &RemoveInfo) {
        if !self.admits(info.window_id) {
            return;
        }
        self.remove_row(tab_id);
    }

    fn on_updated(&mut self, _tab_id: TabId, _delta: &TabDelta, tab: Tab) {
        if !self.admits(tab.window_id) {
            return;
        }
        self.sync.update(&tab);
    }

    fn on_moved(&mut self, tab_id: TabId, info: &MoveInfo) {
        if !self.admits(info.window_id) {
            return;
        }
        self.sync.move_to(tab_id, info.to_index);
    }

    fn on_activated(&mut self, info: &ActiveInfo) {
        if !self.admits(info.window_id) {
            return;
        }
        self.sync.activate(info.tab_id);
    }

    fn on_detached(&mut self, tab_id: TabId, info: &DetachInfo) {
        // Filtered on the window the tab is leaving.
        if !self.admits(info.old_window_id) {
            return;
        }
        self.remove_row(tab_id);
    }

    fn on_attached(&mut self, tab_id: TabId, info: &AttachInfo) {
        // Filtered on the window the tab is joining. The event does not
        // carry the tab's state, so fetch it before inserting.
        if !self.admits(info.new_window_id) {
            return;
        }
        let Some(tab) = self.host.get_tab(tab_id) else {
            return;
        };
        if self.scope.includes(tab.window_id) {
            self.sync.insert(&tab);
        }
    }

    fn on_replaced(&mut self, added_tab_id: TabId, removed_tab_id: TabId) {
        if !self.sync.is_initialized() {
            return;
        }
        let Some(tab) = self.host.get_tab(added_tab_id) else {
            return;
        };
        if !self.scope.includes(tab.window_id) {
            return;
        }
        self.remove_row(removed_tab_id);
        self.sync.insert(&tab);
    }
}
