//! Settings loading and runtime updates.
//!
//! This module provides the [`SettingsStore`] type: the single owner of the
//! active [`PayrollConfiguration`], loadable from a YAML file and mutable
//! only through a validated patch operation.

use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfigPatch, PayrollConfiguration};

/// Owns the active payroll configuration.
///
/// Cloning the store is cheap and every clone shares the same underlying
/// configuration, so an update through any handle is visible to all.
/// Calculations read a snapshot via [`SettingsStore::current`]; nothing
/// mutates the configuration implicitly.
///
/// # Example
///
/// ```no_run
/// use talentflow_engine::config::SettingsStore;
///
/// let settings = SettingsStore::from_yaml_file("./config/payroll.yaml")?;
/// let config = settings.current();
/// println!("HRA rate: {}", config.hra_rate);
/// # Ok::<(), talentflow_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsStore {
    config: Arc<RwLock<PayrollConfiguration>>,
}

impl SettingsStore {
    /// Creates a store holding the given configuration.
    pub fn new(config: PayrollConfiguration) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Loads the configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `SettingsStore` on success, or an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file contains invalid YAML or missing fields (`ConfigParseError`)
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PayrollConfiguration =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self::new(config))
    }

    /// Returns a snapshot of the current configuration.
    pub fn current(&self) -> PayrollConfiguration {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Applies a validated patch and returns the updated configuration.
    ///
    /// Every supplied value must be zero or positive; the first offending
    /// field rejects the whole patch and the active configuration is left
    /// unchanged.
    pub fn update(&self, patch: PayrollConfigPatch) -> EngineResult<PayrollConfiguration> {
        for (field, value) in patch.supplied_fields() {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidRate {
                    field: field.to_string(),
                    value,
                });
            }
        }

        let mut guard = self
            .config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = patch.apply_to(&guard);
        Ok(guard.clone())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(PayrollConfiguration::default())
    }
}
