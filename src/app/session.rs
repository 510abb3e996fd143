use crate::core::engine::run_mode;
use crate::core::normalization::ScoringOptions;
use crate::domain::model::{Mode, ModeResult};
use crate::utils::error::Result;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Last successful result per mode.
#[derive(Debug, Clone, Default)]
pub struct ResultCache {
    results: HashMap<Mode, ModeResult>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was cached for the result's own mode.
    pub fn store(&mut self, result: ModeResult) -> &ModeResult {
        match self.results.entry(result.mode()) {
            Entry::Occupied(mut slot) => {
                slot.insert(result);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(result),
        }
    }

    pub fn get(&self, mode: Mode) -> Option<&ModeResult> {
        self.results.get(&mode)
    }

    pub fn clear(&mut self, mode: Mode) {
        self.results.remove(&mode);
    }
}

/// Selected mode plus its cache. A cached result is only visible while its mode is selected.
#[derive(Debug, Clone)]
pub struct Session {
    selected: Mode,
    options: ScoringOptions,
    cache: ResultCache,
}

impl Session {
    pub fn new(selected: Mode, options: ScoringOptions) -> Self {
        Self {
            selected,
            options,
            cache: ResultCache::new(),
        }
    }

    pub fn selected(&self) -> Mode {
        self.selected
    }

    pub fn select(&mut self, mode: Mode) {
        if mode != self.selected {
            tracing::debug!("Switching mode from {} to {}", self.selected, mode);
        }
        self.selected = mode;
    }

    /// Computes the selected mode from `text`. Failures leave the cache as it was.
    pub fn submit(&mut self, text: &str) -> Result<&ModeResult> {
        let result = run_mode(self.selected, text, &self.options)?;
        Ok(self.cache.store(result))
    }

    /// Result of the selected mode, if one was computed; other modes stay hidden.
    pub fn visible(&self) -> Option<&ModeResult> {
        self.cache.get(self.selected)
    }
}
