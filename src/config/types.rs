//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML settings file, plus the patch type used for
//! runtime updates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The process-wide payroll configuration.
///
/// One active instance exists at a time; it is mutated only through
/// [`super::SettingsStore::update`], never implicitly by a calculation.
/// Rates are fractions of salary (0.40 = 40%), thresholds are monthly or
/// annual currency amounts as noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollConfiguration {
    /// House Rent Allowance rate, as a fraction of basic salary.
    pub hra_rate: Decimal,
    /// Dearness Allowance rate, as a fraction of basic salary.
    pub da_rate: Decimal,
    /// Provident Fund rate, as a fraction of basic salary.
    pub pf_rate: Decimal,
    /// Employee State Insurance rate, as a fraction of gross salary.
    pub esi_rate: Decimal,
    /// Monthly gross ceiling at or below which ESI applies.
    pub esi_gross_ceiling: Decimal,
    /// Annual income threshold above which TDS applies. Compared against
    /// monthly gross after dividing by 12.
    pub tds_annual_threshold: Decimal,
    /// Tax Deducted at Source rate, as a fraction of gross salary.
    pub tds_rate: Decimal,
}

impl Default for PayrollConfiguration {
    fn default() -> Self {
        Self {
            hra_rate: Decimal::new(40, 2),           // 40%
            da_rate: Decimal::new(10, 2),            // 10%
            pf_rate: Decimal::new(12, 2),            // 12%
            esi_rate: Decimal::new(75, 4),           // 0.75%
            esi_gross_ceiling: Decimal::from(21000),
            tds_annual_threshold: Decimal::from(250000),
            tds_rate: Decimal::new(10, 2),           // 10%
        }
    }
}

/// A partial update to the payroll configuration.
///
/// Only the supplied fields change; every supplied value must be zero or
/// positive or the whole patch is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollConfigPatch {
    /// New HRA rate, if changing.
    #[serde(default)]
    pub hra_rate: Option<Decimal>,
    /// New DA rate, if changing.
    #[serde(default)]
    pub da_rate: Option<Decimal>,
    /// New PF rate, if changing.
    #[serde(default)]
    pub pf_rate: Option<Decimal>,
    /// New ESI rate, if changing.
    #[serde(default)]
    pub esi_rate: Option<Decimal>,
    /// New ESI gross ceiling, if changing.
    #[serde(default)]
    pub esi_gross_ceiling: Option<Decimal>,
    /// New annual TDS threshold, if changing.
    #[serde(default)]
    pub tds_annual_threshold: Option<Decimal>,
    /// New TDS rate, if changing.
    #[serde(default)]
    pub tds_rate: Option<Decimal>,
}

impl PayrollConfigPatch {
    /// Returns the supplied fields as `(name, value)` pairs, for validation.
    pub(crate) fn supplied_fields(&self) -> Vec<(&'static str, Decimal)> {
        let mut fields = Vec::new();
        if let Some(v) = self.hra_rate {
            fields.push(("hra_rate", v));
        }
        if let Some(v) = self.da_rate {
            fields.push(("da_rate", v));
        }
        if let Some(v) = self.pf_rate {
            fields.push(("pf_rate", v));
        }
        if let Some(v) = self.esi_rate {
            fields.push(("esi_rate", v));
        }
        if let Some(v) = self.esi_gross_ceiling {
            fields.push(("esi_gross_ceiling", v));
        }
        if let Some(v) = self.tds_annual_threshold {
            fields.push(("tds_annual_threshold", v));
        }
        if let Some(v) = self.tds_rate {
            fields.push(("tds_rate", v));
        }
        fields
    }

    /// Applies the patch to a configuration, returning the updated copy.
    pub(crate) fn apply_to(&self, config: &PayrollConfiguration) -> PayrollConfiguration {
        PayrollConfiguration {
            hra_rate: self.hra_rate.unwrap_or(config.hra_rate),
            da_rate: self.da_rate.unwrap_or(config.da_rate),
            pf_rate: self.pf_rate.unwrap_or(config.pf_rate),
            esi_rate: self.esi_rate.unwrap_or(config.esi_rate),
            esi_gross_ceiling: self.esi_gross_ceiling.unwrap_or(config.esi_gross_ceiling),
            tds_annual_threshold: self
                .tds_annual_threshold
                .unwrap_or(config.tds_annual_threshold),
            tds_rate: self.tds_rate.unwrap_or(config.tds_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rates() {
        let config = PayrollConfiguration::default();
        assert_eq!(config.hra_rate, dec("0.40"));
        assert_eq!(config.da_rate, dec("0.10"));
        assert_eq!(config.pf_rate, dec("0.12"));
        assert_eq!(config.esi_rate, dec("0.0075"));
        assert_eq!(config.esi_gross_ceiling, dec("21000"));
        assert_eq!(config.tds_annual_threshold, dec("250000"));
        assert_eq!(config.tds_rate, dec("0.10"));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
hra_rate: 0.40
da_rate: 0.10
pf_rate: 0.12
esi_rate: 0.0075
esi_gross_ceiling: 21000
tds_annual_threshold: 250000
tds_rate: 0.10
"#;
        let config: PayrollConfiguration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config, PayrollConfiguration::default());
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let config = PayrollConfiguration::default();
        let patch = PayrollConfigPatch {
            hra_rate: Some(dec("0.50")),
            ..Default::default()
        };

        let updated = patch.apply_to(&config);
        assert_eq!(updated.hra_rate, dec("0.50"));
        assert_eq!(updated.da_rate, config.da_rate);
        assert_eq!(updated.tds_annual_threshold, config.tds_annual_threshold);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let config = PayrollConfiguration::default();
        let updated = PayrollConfigPatch::default().apply_to(&config);
        assert_eq!(updated, config);
    }

    #[test]
    fn test_supplied_fields_lists_only_set_values() {
        let patch = PayrollConfigPatch {
            pf_rate: Some(dec("0.13")),
            tds_rate: Some(dec("0.15")),
            ..Default::default()
        };

        let fields = patch.supplied_fields();
        assert_eq!(
            fields,
            vec![("pf_rate", dec("0.13")), ("tds_rate", dec("0.15"))]
        );
    }
}
