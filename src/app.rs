//! App Core for the side panel.
//!
//! Central struct wiring storage, theme presentation, and the panel
//! controller together, managing the panel surface's lifecycle.

use crate::host::TabHost;
use crate::panel::controller::PanelController;
use crate::storage::{KeyValueStore, LocalCache};
use crate::theme::presenter::ThemePresenter;
use crate::types::theme::Theme;

/// One panel surface: controller plus theme plumbing.
pub struct PanelApp<H: TabHost> {
    controller: PanelController<H>,
    presenter: ThemePresenter,
    store: Box<dyn KeyValueStore>,
    cache: Box<dyn LocalCache>,
}

impl<H: TabHost> PanelApp<H> {
    pub fn new(host: H, store: Box<dyn KeyValueStore>, cache: Box<dyn LocalCache>) -> Self {
        Self {
            controller: PanelController::new(host),
            presenter: ThemePresenter::new(),
            store,
            cache,
        }
    }

    /// Startup sequence: theme before tabs, so the first paint already has
    /// the right colors; then resolve the window and bulk-load.
    pub fn startup(&mut self) {
        self.presenter.boot_from_cache(self.cache.as_ref());
        self.presenter
            .load(self.cache.as_mut(), self.store.as_ref());
        self.controller.initialize();
    }

    /// Forwards pending durable-store change notifications to the theme
    /// presenter.
    pub fn pump_store_changes(&mut self) {
        let changes = self.store.take_changes();
        if !changes.is_empty() {
            self.presenter
                .handle_store_changes(&changes, self.cache.as_mut());
        }
    }

    pub fn theme(&self) -> Theme {
        self.presenter.current()
    }

    pub fn controller(&self) -> &PanelController<H> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PanelController<H> {
        &mut self.controller
    }

    pub fn store_mut(&mut self) -> &mut dyn KeyValueStore {
        self.store.as_mut()
    }
}
