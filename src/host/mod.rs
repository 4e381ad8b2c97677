//! Host boundary: the capability surface the panel consumes.
//!
//! The engine never talks to a browser directly. It issues commands through
//! [`TabHost`]/[`PanelHost`] and receives changes as [`TabEvent`]s forwarded
//! by the [`pump::EventPump`] to a [`TabEventSink`]. Commands are
//! fire-and-forget: their error results exist to be read and discarded.

use crate::types::errors::CommandError;
use crate::types::events::{ActiveInfo, AttachInfo, DetachInfo, MoveInfo, RemoveInfo};
use crate::types::tab::{Tab, TabDelta, TabId, WindowId};

pub mod memory;
pub mod pump;

/// Which tabs a query should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabQuery {
    /// Tabs of the window the panel considers current.
    CurrentWindow,
    /// Tabs of one specific window.
    Window(WindowId),
    /// Every tab in the session.
    All,
}

/// Trait defining the tab collection interface of the host window manager.
pub trait TabHost {
    /// The window this surface is attached to, if the host has resolved one.
    fn current_window(&self) -> Option<WindowId>;
    /// Ordered snapshot of tabs matching the query.
    fn query_tabs(&self, query: TabQuery) -> Vec<Tab>;
    fn get_tab(&self, id: TabId) -> Option<Tab>;
    fn activate_tab(&mut self, id: TabId) -> Result<(), CommandError>;
    fn focus_window(&mut self, window_id: WindowId) -> Result<(), CommandError>;
    /// Closes all given tabs as one bulk command.
    fn close_tabs(&mut self, ids: &[TabId]) -> Result<(), CommandError>;
    /// Moves all given tabs so the group lands at `index`, in payload order.
    fn move_tabs(&mut self, ids: &[TabId], index: usize) -> Result<(), CommandError>;
}

/// Trait defining the side-panel capability of the host.
pub trait PanelHost {
    /// Whether the side-panel API exists in this build at all.
    fn supports_side_panel(&self) -> bool;
    fn enable_open_on_action(&mut self) -> Result<(), CommandError>;
    fn open_panel(&mut self, window_id: WindowId) -> Result<(), CommandError>;
}

/// One method per external event kind. Implemented by the panel controller;
/// driven by the event pump so the engine stays host-agnostic.
pub trait TabEventSink {
    fn on_created(&mut self, tab: Tab);
    fn on_removed(&mut self, tab_id: TabId, info: &RemoveInfo);
    fn on_updated(&mut self, tab_id: TabId, delta: &TabDelta, tab: Tab);
    fn on_moved(&mut self, tab_id: TabId, info: &MoveInfo);
    fn on_activated(&mut self, info: &ActiveInfo);
    fn on_detached(&mut self, tab_id: TabId, info: &DetachInfo);
    fn on_attached(&mut self, tab_id: TabId, info: &AttachInfo);
    fn on_replaced(&mut self, added_tab_id: TabId, removed_tab_id: TabId);
}
