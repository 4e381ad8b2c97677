//! Window scope resolution.
//!
//! A panel instance is bound to a single window for its whole lifetime, but
//! the window identifier can be learned asynchronously after first render.
//! Until it is learned, every event passes the scope check.

use crate::types::tab::WindowId;

/// The window whose tabs this panel reflects.
#[derive(Debug, Default)]
pub struct WindowScope {
    current: Option<WindowId>,
}

impl WindowScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the panel's window. First write wins; later values are
    /// ignored because the binding never changes once known.
    pub fn learn(&mut self, window_id: WindowId) {
        if self.current.is_none() {
            self.current = Some(window_id);
        }
    }

    pub fn current(&self) -> Option<WindowId> {
        self.current
    }

    pub fn is_resolved(&self) -> bool {
        self.current.is_some()
    }

    /// Whether an event for `window_id` is relevant to this panel.
    pub fn includes(&self, window_id: WindowId) -> bool {
        match self.current {
            Some(current) => current == window_id,
            None => true,
        }
    }
}
