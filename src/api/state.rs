//! Application state for the salary statistics API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollRules};

/// Shared application state.
///
/// Holds the loaded payroll configuration. Each request runs the pipeline
/// on its own roster; nothing else is shared.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the salary formula rules.
    pub fn rules(&self) -> &PayrollRules {
        self.config.rules()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_uses_standard_rules() {
        let state = AppState::default();
        assert_eq!(state.rules(), &PayrollRules::default());
    }
}
