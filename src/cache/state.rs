//! Cache State
//!
//! Which cache types are currently switched on.

use std::collections::HashMap;
use std::sync::RwLock;

/// Reports whether a cache type is enabled.
pub trait CacheStateOracle: Send + Sync {
    fn is_enabled(&self, type_identifier: &str) -> bool;
}

// == Cache Type State ==
/// In-memory on/off switch per cache type identifier.
///
/// Types never configured report `default_enabled`.
#[derive(Debug)]
pub struct CacheTypeState {
    default_enabled: bool,
    types: RwLock<HashMap<String, bool>>,
}

impl CacheTypeState {
    pub fn new(default_enabled: bool) -> Self {
        Self {
            default_enabled,
            types: RwLock::new(HashMap::new()),
        }
    }

    /// Switches a cache type on or off.
    pub fn set_enabled(&self, type_identifier: &str, enabled: bool) {
        let mut types = self.types.write().unwrap_or_else(|e| e.into_inner());
        types.insert(type_identifier.to_string(), enabled);
    }
}

impl Default for CacheTypeState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CacheStateOracle for CacheTypeState {
    fn is_enabled(&self, type_identifier: &str) -> bool {
        let types = self.types.read().unwrap_or_else(|e| e.into_inner());
        types
            .get(type_identifier)
            .copied()
            .unwrap_or(self.default_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_applies_to_unknown_types() {
        assert!(CacheTypeState::new(true).is_enabled("anything"));
        assert!(!CacheTypeState::new(false).is_enabled("anything"));
    }

    #[test]
    fn test_toggle_is_per_type() {
        let state = CacheTypeState::default();
        state.set_enabled("quotes", false);

        assert!(!state.is_enabled("quotes"));
        assert!(state.is_enabled("layout"));

        state.set_enabled("quotes", true);
        assert!(state.is_enabled("quotes"));
    }
}
