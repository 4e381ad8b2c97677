//! Options-page glue: a theme selector bound to the durable store.

use log::warn;

use crate::storage::{KeyValueStore, LocalCache};
use crate::types::theme::{Theme, THEME_CACHE_KEY, THEME_STORAGE_KEY};

/// State of the options-page theme selector.
#[derive(Debug, Default)]
pub struct OptionsController {
    selected: Theme,
    status: Option<&'static str>,
}

impl OptionsController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Theme {
        self.selected
    }

    /// Transient status message last shown to the user.
    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    /// Loads the persisted theme into the selector. Without a durable store
    /// (sandboxed build) the cached value is the best available.
    pub fn load(&mut self, store: Option<&dyn KeyValueStore>, cache: &mut dyn LocalCache) {
        let theme = match store {
            Some(store) => match store.get(THEME_STORAGE_KEY) {
                Ok(Some(value)) => Theme::from_value(&value),
                Ok(None) => Theme::default(),
                Err(err) => {
                    warn!("theme store read failed: {}", err);
                    Theme::default()
                }
            },
            None => cache
                .get(THEME_CACHE_KEY)
                .ok()
                .flatten()
                .as_deref()
                .map(Theme::normalize)
                .unwrap_or_default(),
        };
        self.selected = theme;
        if store.is_some() {
            let _ = cache.set(THEME_CACHE_KEY, theme.as_str());
        }
    }

    /// The user picked a theme: normalize, apply locally, cache, persist.
    pub fn change(
        &mut self,
        raw: &str,
        store: Option<&mut dyn KeyValueStore>,
        cache: &mut dyn LocalCache,
    ) -> Theme {
        let theme = Theme::normalize(raw);
        self.selected = theme;
        let _ = cache.set(THEME_CACHE_KEY, theme.as_str());
        match store {
            Some(store) => {
                if store
                    .set(THEME_STORAGE_KEY, serde_json::json!(theme.as_str()))
                    .is_ok()
                {
                    self.status = Some("Saved");
                }
            }
            None => self.status = Some("Saved"),
        }
        theme
    }
}
