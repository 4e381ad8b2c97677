//! Background service: opens the side panel on window lifecycle events.
//!
//! Best-effort throughout. A missing side-panel capability skips the feature
//! silently, and open failures (some hosts require a user gesture) are read
//! and discarded.

use std::collections::HashSet;

use log::debug;

use crate::host::{PanelHost, TabHost, TabQuery};
use crate::types::events::RemoveInfo;
use crate::types::tab::WindowId;

/// Opens the side panel at most once per window.
#[derive(Debug, Default)]
pub struct PanelOpener {
    opened: HashSet<WindowId>,
}

impl PanelOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_opened(&self, window_id: WindowId) -> bool {
        self.opened.contains(&window_id)
    }

    /// Install hook: enable click-to-open and sweep existing windows.
    pub fn handle_installed<H: PanelHost + TabHost>(&mut self, host: &mut H) {
        self.enable_click_open(host);
        self.open_all_windows(host);
    }

    /// Browser-startup hook: same sweep as install.
    pub fn handle_startup<H: PanelHost + TabHost>(&mut self, host: &mut H) {
        self.enable_click_open(host);
        self.open_all_windows(host);
    }

    /// A tab appeared; its window may be new.
    pub fn on_tab_created<H: PanelHost>(&mut self, host: &mut H, window_id: WindowId) {
        self.ensure_open(host, window_id);
    }

    /// A closing window is forgotten so a future window reusing the
    /// identifier gets its panel opened again.
    pub fn on_tab_removed(&mut self, info: &RemoveInfo) {
        if info.is_window_closing {
            self.opened.remove(&info.window_id);
        }
    }

    /// Opens the panel for every window that currently has tabs.
    pub fn open_all_windows<H: PanelHost + TabHost>(&mut self, host: &mut H) {
        let mut seen = HashSet::new();
        let window_ids: Vec<WindowId> = host
            .query_tabs(TabQuery::All)
            .into_iter()
            .map(|tab| tab.window_id)
            .filter(|window_id| seen.insert(*window_id))
            .collect();
        for window_id in window_ids {
            self.ensure_open(host, window_id);
        }
    }

    /// Opens the panel for one window, once. The window is marked before the
    /// attempt; a rejected open is not retried.
    pub fn ensure_open<H: PanelHost>(&mut self, host: &mut H, window_id: WindowId) {
        if !self.opened.insert(window_id) {
            return;
        }
        if !host.supports_side_panel() {
            return;
        }
        if let Err(err) = host.open_panel(window_id) {
            debug!("side panel open discarded: {}", err);
        }
    }

    fn enable_click_open<H: PanelHost>(&self, host: &mut H) {
        if !host.supports_side_panel() {
            return;
        }
        if let Err(err) = host.enable_open_on_action() {
            debug!("panel behavior setup discarded: {}", err);
        }
    }
}
