//! Payroll configuration for the Compensation & Time-Ledger Engine.
//!
//! This module provides the strongly-typed configuration for all statutory
//! rates and thresholds, loading from YAML files, and validated runtime
//! updates.

mod loader;
mod types;

pub use loader::SettingsStore;
pub use types::{PayrollConfigPatch, PayrollConfiguration};
