//! Salary breakdown computation.
//!
//! This module provides the pure function that turns a monthly basic salary
//! and the active [`PayrollConfiguration`] into a full earnings/deductions
//! breakdown. It has no side effects and no hidden state; every rate and
//! threshold comes from the configuration.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::PayrollConfiguration;
use crate::error::{EngineError, EngineResult};

/// A full salary breakdown at full decimal precision.
///
/// Intermediate values are never rounded; call [`SalaryBreakdown::rounded`]
/// exactly when persisting a payroll record.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use talentflow_engine::calculation::compute_breakdown;
/// use talentflow_engine::config::PayrollConfiguration;
///
/// let config = PayrollConfiguration::default();
/// let breakdown = compute_breakdown(Decimal::from(70000), &config).unwrap();
/// assert_eq!(breakdown.gross, Decimal::from(105000));
/// assert_eq!(breakdown.net, Decimal::from(86100));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The monthly basic salary the computation ran on.
    pub basic: Decimal,
    /// House Rent Allowance: `basic * hra_rate`.
    pub hra: Decimal,
    /// Dearness Allowance: `basic * da_rate`.
    pub da: Decimal,
    /// Gross salary: `basic + hra + da`.
    pub gross: Decimal,
    /// Provident Fund deduction: `basic * pf_rate`.
    pub pf: Decimal,
    /// Employee State Insurance: `gross * esi_rate` when gross is at or
    /// below the ESI ceiling, else zero.
    pub esi: Decimal,
    /// Tax Deducted at Source: `gross * tds_rate` when gross exceeds the
    /// annualized threshold, else zero.
    pub tds: Decimal,
    /// Total deductions: `pf + esi + tds`.
    pub deductions: Decimal,
    /// Net salary: `gross - deductions`.
    pub net: Decimal,
}

impl SalaryBreakdown {
    /// Rounds every monetary field to whole currency units, half away from
    /// zero, then recomputes the aggregates from the rounded components so
    /// the identities `gross = basic + hra + da`,
    /// `deductions = pf + esi + tds`, and `net = gross - deductions` hold
    /// exactly on the result.
    pub fn rounded(&self) -> SalaryBreakdown {
        fn unit(value: Decimal) -> Decimal {
            value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }

        let basic = unit(self.basic);
        let hra = unit(self.hra);
        let da = unit(self.da);
        let gross = basic + hra + da;
        let pf = unit(self.pf);
        let esi = unit(self.esi);
        let tds = unit(self.tds);
        let deductions = pf + esi + tds;

        SalaryBreakdown {
            basic,
            hra,
            da,
            gross,
            pf,
            esi,
            tds,
            deductions,
            net: gross - deductions,
        }
    }
}

/// The monthly TDS threshold: the configured annual threshold divided by 12.
///
/// The engine applies one threshold policy everywhere: monthly gross is
/// compared against the annualized value, never against the raw annual
/// constant.
pub fn monthly_tds_threshold(config: &PayrollConfiguration) -> Decimal {
    config.tds_annual_threshold / Decimal::from(12)
}

/// Computes the salary breakdown for a monthly basic salary.
///
/// # Arguments
///
/// * `basic` - The monthly basic salary; must be zero or positive
/// * `config` - The active payroll configuration supplying every rate
///
/// # Returns
///
/// The full-precision [`SalaryBreakdown`], or `InvalidInput` if `basic` is
/// negative.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use talentflow_engine::calculation::compute_breakdown;
/// use talentflow_engine::config::PayrollConfiguration;
///
/// let config = PayrollConfiguration::default();
///
/// // A zero salary produces an all-zero breakdown.
/// let zero = compute_breakdown(Decimal::ZERO, &config).unwrap();
/// assert_eq!(zero.gross, Decimal::ZERO);
/// assert_eq!(zero.net, Decimal::ZERO);
///
/// // Negative salaries are rejected.
/// assert!(compute_breakdown(Decimal::from(-1), &config).is_err());
/// ```
pub fn compute_breakdown(
    basic: Decimal,
    config: &PayrollConfiguration,
) -> EngineResult<SalaryBreakdown> {
    if basic < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "basic_salary".to_string(),
            message: format!("{} is negative", basic),
        });
    }

    let hra = basic * config.hra_rate;
    let da = basic * config.da_rate;
    let gross = basic + hra + da;

    let pf = basic * config.pf_rate;
    let esi = if gross <= config.esi_gross_ceiling {
        gross * config.esi_rate
    } else {
        Decimal::ZERO
    };
    let tds = if gross > monthly_tds_threshold(config) {
        gross * config.tds_rate
    } else {
        Decimal::ZERO
    };

    let deductions = pf + esi + tds;

    Ok(SalaryBreakdown {
        basic,
        hra,
        da,
        gross,
        pf,
        esi,
        tds,
        deductions,
        net: gross - deductions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// SB-001: the worked reference case, basic = 70000
    #[test]
    fn test_breakdown_for_70000_basic() {
        let config = PayrollConfiguration::default();
        let breakdown = compute_breakdown(dec("70000"), &config).unwrap();

        assert_eq!(breakdown.hra, dec("28000"));
        assert_eq!(breakdown.da, dec("7000"));
        assert_eq!(breakdown.gross, dec("105000"));
        assert_eq!(breakdown.pf, dec("8400"));
        // gross exceeds the 21000 ESI ceiling
        assert_eq!(breakdown.esi, Decimal::ZERO);
        // gross exceeds the annualized threshold 250000/12
        assert_eq!(breakdown.tds, dec("10500"));
        assert_eq!(breakdown.deductions, dec("18900"));
        assert_eq!(breakdown.net, dec("86100"));
    }

    /// SB-002: zero basic yields an all-zero breakdown
    #[test]
    fn test_zero_basic_is_all_zero() {
        let config = PayrollConfiguration::default();
        let breakdown = compute_breakdown(Decimal::ZERO, &config).unwrap();

        assert_eq!(breakdown.hra, Decimal::ZERO);
        assert_eq!(breakdown.da, Decimal::ZERO);
        assert_eq!(breakdown.gross, Decimal::ZERO);
        assert_eq!(breakdown.pf, Decimal::ZERO);
        assert_eq!(breakdown.esi, Decimal::ZERO);
        assert_eq!(breakdown.tds, Decimal::ZERO);
        assert_eq!(breakdown.net, Decimal::ZERO);
    }

    /// SB-003: negative basic is rejected
    #[test]
    fn test_negative_basic_rejected() {
        let config = PayrollConfiguration::default();
        let result = compute_breakdown(dec("-1"), &config);

        match result.unwrap_err() {
            EngineError::InvalidInput { field, .. } => assert_eq!(field, "basic_salary"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// SB-004: ESI applies at or below the gross ceiling
    #[test]
    fn test_esi_applies_below_ceiling() {
        let config = PayrollConfiguration::default();
        // basic 10000 -> gross 15000, under the 21000 ceiling
        let breakdown = compute_breakdown(dec("10000"), &config).unwrap();

        assert_eq!(breakdown.gross, dec("15000"));
        assert_eq!(breakdown.esi, dec("112.5000"));
    }

    /// SB-005: ESI applies exactly at the ceiling
    #[test]
    fn test_esi_boundary_at_exact_ceiling() {
        let config = PayrollConfiguration::default();
        // basic 14000 -> gross exactly 21000
        let breakdown = compute_breakdown(dec("14000"), &config).unwrap();

        assert_eq!(breakdown.gross, dec("21000"));
        assert_eq!(breakdown.esi, dec("157.5000"));
    }

    /// SB-006: no TDS at or below the monthly threshold
    #[test]
    fn test_tds_not_applied_at_exact_threshold() {
        let mut config = PayrollConfiguration::default();
        // Pick an annual threshold whose twelfth is exact: 180000/12 = 15000.
        config.tds_annual_threshold = dec("180000");

        // basic 10000 -> gross 15000, exactly at the monthly threshold
        let breakdown = compute_breakdown(dec("10000"), &config).unwrap();
        assert_eq!(breakdown.tds, Decimal::ZERO);

        // One unit of basic more pushes gross over the threshold.
        let over = compute_breakdown(dec("10001"), &config).unwrap();
        assert!(over.tds > Decimal::ZERO);
    }

    /// SB-007: the threshold policy is annualized
    #[test]
    fn test_monthly_threshold_is_annual_divided_by_twelve() {
        let config = PayrollConfiguration::default();
        let threshold = monthly_tds_threshold(&config);

        assert_eq!(threshold, dec("250000") / dec("12"));
        // A monthly gross between the annualized and raw annual values must
        // attract TDS: the raw annual constant is never used directly.
        let breakdown = compute_breakdown(dec("50000"), &config).unwrap();
        assert_eq!(breakdown.gross, dec("75000"));
        assert!(breakdown.gross < config.tds_annual_threshold);
        assert_eq!(breakdown.tds, dec("7500.0"));
    }

    /// SB-008: rates are read from configuration, not hardcoded
    #[test]
    fn test_rates_come_from_configuration() {
        let config = PayrollConfiguration {
            hra_rate: dec("0.5"),
            da_rate: dec("0.2"),
            pf_rate: dec("0.1"),
            esi_rate: dec("0.01"),
            esi_gross_ceiling: dec("100000"),
            tds_annual_threshold: dec("1200000"),
            tds_rate: dec("0.2"),
        };

        let breakdown = compute_breakdown(dec("40000"), &config).unwrap();
        assert_eq!(breakdown.hra, dec("20000"));
        assert_eq!(breakdown.da, dec("8000"));
        assert_eq!(breakdown.gross, dec("68000"));
        assert_eq!(breakdown.pf, dec("4000"));
        // gross under the raised ceiling, so ESI applies
        assert_eq!(breakdown.esi, dec("680.00"));
        // monthly threshold 100000, gross under it, so no TDS
        assert_eq!(breakdown.tds, Decimal::ZERO);
    }

    #[test]
    fn test_net_identity_holds_at_full_precision() {
        let config = PayrollConfiguration::default();
        for basic in ["0", "1", "12345.67", "20833.33", "70000", "999999"] {
            let b = compute_breakdown(dec(basic), &config).unwrap();
            assert_eq!(b.gross, b.basic + b.hra + b.da);
            assert_eq!(b.deductions, b.pf + b.esi + b.tds);
            assert_eq!(b.net, b.gross - b.deductions);
        }
    }

    #[test]
    fn test_rounded_preserves_identities() {
        let config = PayrollConfiguration::default();
        // 12345.67 basic produces fractional components everywhere
        let rounded = compute_breakdown(dec("12345.67"), &config)
            .unwrap()
            .rounded();

        assert_eq!(rounded.gross, rounded.basic + rounded.hra + rounded.da);
        assert_eq!(rounded.deductions, rounded.pf + rounded.esi + rounded.tds);
        assert_eq!(rounded.net, rounded.gross - rounded.deductions);
        // every field is a whole number of currency units
        for value in [
            rounded.basic,
            rounded.hra,
            rounded.da,
            rounded.gross,
            rounded.pf,
            rounded.esi,
            rounded.tds,
            rounded.deductions,
            rounded.net,
        ] {
            assert_eq!(value, value.trunc(), "{} is not whole", value);
        }
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        let config = PayrollConfiguration::default();
        // basic 5 -> hra 2, da 0.5; half rounds away from zero to 1
        let rounded = compute_breakdown(dec("5"), &config).unwrap().rounded();
        assert_eq!(rounded.da, dec("1"));
    }
}
