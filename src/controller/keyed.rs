//! Key-based panel controller for the about tabs.
//!
//! The tabs variant pairs panels and tab buttons by a shared string key
//! instead of position. A switch is atomic: either both the panel and the
//! button matching the key exist and both flip active, or nothing changes.

use std::collections::HashSet;

/// Controller state for key-paired panels and indicators.
#[derive(Debug, Clone)]
pub struct KeyedPanelController {
    /// Shared keys in display order (indicator order).
    keys: Vec<String>,
    panel_keys: HashSet<String>,
    indicator_keys: HashSet<String>,
    current: String,
}

impl KeyedPanelController {
    /// Creates a controller from panel keys and indicator keys.
    ///
    /// Display order follows `indicator_keys`. Only keys present in both
    /// collections are navigable. Returns `None` when no key is shared, in
    /// which case the owning feature should skip initialization.
    #[must_use]
    pub fn new(panel_keys: &[String], indicator_keys: &[String]) -> Option<Self> {
        let panels: HashSet<String> = panel_keys.iter().cloned().collect();
        let indicators: HashSet<String> = indicator_keys.iter().cloned().collect();
        let keys: Vec<String> = indicator_keys
            .iter()
            .filter(|k| panels.contains(*k))
            .cloned()
            .collect();
        let current = keys.first()?.clone();
        Some(Self {
            keys,
            panel_keys: panels,
            indicator_keys: indicators,
            current,
        })
    }

    /// Navigable keys in display order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The currently active key.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether the panel/indicator pair for `key` is the active one.
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        self.current == key
    }

    /// Switches the active pair to `key`.
    ///
    /// If either collection lacks the key the switch is refused and a
    /// diagnostic is logged; no partial state is left behind.
    pub fn go_to(&mut self, key: &str) -> bool {
        if !self.panel_keys.contains(key) || !self.indicator_keys.contains(key) {
            tracing::warn!(key, "tab switch refused: no matching panel/indicator pair");
            return false;
        }
        self.current = key.to_string();
        true
    }

    /// Activates the next key in display order, wrapping around.
    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    /// Activates the previous key in display order, wrapping around.
    pub fn previous(&mut self) -> bool {
        self.step(self.keys.len().saturating_sub(1))
    }

    fn step(&mut self, offset: usize) -> bool {
        let count = self.keys.len();
        if count == 0 {
            return false;
        }
        let position = self
            .keys
            .iter()
            .position(|k| *k == self.current)
            .unwrap_or(0);
        let key = self.keys[(position + offset) % count].clone();
        self.go_to(&key)
    }
}
