//! Theme presentation for the panel surface.
//!
//! The applied theme is reconciled between the fast synchronous cache (read
//! first, to avoid a flash of the default) and the durable store (the
//! authoritative value, applied when it resolves). Change notifications from
//! other surfaces re-apply and re-cache. Every ingest point normalizes, so
//! an unknown stored value degrades to the default instead of failing.

use log::warn;

use crate::storage::{KeyValueStore, LocalCache, StoreChange};
use crate::types::theme::{Theme, THEME_CACHE_KEY, THEME_STORAGE_KEY};

/// Applies and tracks the theme on one surface.
#[derive(Debug, Default)]
pub struct ThemePresenter {
    applied: Theme,
}

impl ThemePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Theme {
        self.applied
    }

    pub fn apply(&mut self, theme: Theme) {
        self.applied = theme;
    }

    /// Pre-load boot step: apply the cached value before anything else has
    /// resolved. Cache failures fall through to the default silently.
    pub fn boot_from_cache(&mut self, cache: &dyn LocalCache) {
        let cached = cache.get(THEME_CACHE_KEY).ok().flatten();
        if let Some(raw) = cached {
            self.apply(Theme::normalize(&raw));
        }
    }

    /// Full load: cached value first, then the durable value once it
    /// resolves, writing the result back to the cache.
    pub fn load(&mut self, cache: &mut dyn LocalCache, store: &dyn KeyValueStore) {
        let cached = cache.get(THEME_CACHE_KEY).ok().flatten();
        let fallback = cached
            .as_deref()
            .map(Theme::normalize)
            .unwrap_or_default();
        self.apply(fallback);

        let theme = match store.get(THEME_STORAGE_KEY) {
            Ok(Some(value)) => Theme::from_value(&value),
            Ok(None) => fallback,
            Err(err) => {
                warn!("theme store read failed: {}", err);
                fallback
            }
        };
        self.apply(theme);
        let _ = cache.set(THEME_CACHE_KEY, theme.as_str());
    }

    /// Ingests durable-store change notifications from other surfaces.
    pub fn handle_store_changes(&mut self, changes: &[StoreChange], cache: &mut dyn LocalCache) {
        for change in changes {
            if change.key != THEME_STORAGE_KEY {
                continue;
            }
            let theme = change
                .new_value
                .as_ref()
                .map(Theme::from_value)
                .unwrap_or_default();
            self.apply(theme);
            let _ = cache.set(THEME_CACHE_KEY, theme.as_str());
        }
    }
}
