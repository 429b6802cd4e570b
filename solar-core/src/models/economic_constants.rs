//! Domain constants shared by every proposal of an edition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest system lifetime accepted by [`EconomicConstants::validate`].
pub const MAX_SYSTEM_LIFETIME_YEARS: u32 = 100;

/// Errors returned by [`EconomicConstants::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConstantsError {
    /// The grid tariff must be a positive, finite amount.
    #[error("cost per unit must be positive, got {0}")]
    InvalidCostPerUnit(f64),

    /// The escalation rate must be finite and greater than -100%.
    #[error("annual tariff escalation must be finite and greater than -1, got {0}")]
    InvalidTariffEscalation(f64),

    /// The system must live between one and [`MAX_SYSTEM_LIFETIME_YEARS`] years.
    #[error("system lifetime must be between 1 and {MAX_SYSTEM_LIFETIME_YEARS} years, got {0}")]
    InvalidLifetime(u32),

    /// The specific yield must be a positive, finite amount.
    #[error("average annual units per kW must be positive, got {0}")]
    InvalidAnnualYield(f64),
}

/// Constants that drive every savings and output figure.
///
/// These are fixed per edition of the business logic and are never edited at
/// runtime. The [`Default`] values are those used by the proposal documents.
///
/// # Example
///
/// ```
/// use solar_core::EconomicConstants;
///
/// let constants = EconomicConstants::default();
///
/// assert_eq!(constants.cost_per_unit, 10.05);
/// assert_eq!(constants.system_lifetime_years, 25);
/// assert!(constants.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicConstants {
    /// Grid electricity price per unit (kWh), in rupees.
    pub cost_per_unit: f64,

    /// Fractional yearly growth of the grid tariff, e.g. `0.04` for 4%.
    pub annual_tariff_escalation: f64,

    /// Years over which lifetime value and levelized cost are measured.
    pub system_lifetime_years: u32,

    /// Expected yearly generation per installed kW, in units.
    pub avg_annual_units_per_kw: f64,
}

impl Default for EconomicConstants {
    fn default() -> Self {
        Self {
            cost_per_unit: 10.05,
            annual_tariff_escalation: 0.04,
            system_lifetime_years: 25,
            avg_annual_units_per_kw: 1400.0,
        }
    }
}

impl EconomicConstants {
    /// Checks that every constant is inside its meaningful range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConstantsError`] found.
    pub fn validate(&self) -> Result<(), ConstantsError> {
        if !self.cost_per_unit.is_finite() || self.cost_per_unit <= 0.0 {
            return Err(ConstantsError::InvalidCostPerUnit(self.cost_per_unit));
        }
        if !self.annual_tariff_escalation.is_finite() || self.annual_tariff_escalation <= -1.0 {
            return Err(ConstantsError::InvalidTariffEscalation(
                self.annual_tariff_escalation,
            ));
        }
        if !(1..=MAX_SYSTEM_LIFETIME_YEARS).contains(&self.system_lifetime_years) {
            return Err(ConstantsError::InvalidLifetime(self.system_lifetime_years));
        }
        if !self.avg_annual_units_per_kw.is_finite() || self.avg_annual_units_per_kw <= 0.0 {
            return Err(ConstantsError::InvalidAnnualYield(
                self.avg_annual_units_per_kw,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_matches_proposal_document_values() {
        let constants = EconomicConstants::default();

        assert_eq!(constants.cost_per_unit, 10.05);
        assert_eq!(constants.annual_tariff_escalation, 0.04);
        assert_eq!(constants.system_lifetime_years, 25);
        assert_eq!(constants.avg_annual_units_per_kw, 1400.0);
    }

    #[test]
    fn validate_bounds_system_lifetime() {
        let too_long = EconomicConstants {
            system_lifetime_years: u32::MAX,
            ..EconomicConstants::default()
        };
        let longest = EconomicConstants {
            system_lifetime_years: MAX_SYSTEM_LIFETIME_YEARS,
            ..EconomicConstants::default()
        };

        assert_eq!(
            too_long.validate(),
            Err(ConstantsError::InvalidLifetime(u32::MAX))
        );
        assert_eq!(longest.validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_zero_escalation() {
        let constants = EconomicConstants {
            annual_tariff_escalation: 0.0,
            ..EconomicConstants::default()
        };

        assert_eq!(constants.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_non_positive_cost_per_unit() {
        let constants = EconomicConstants {
            cost_per_unit: 0.0,
            ..EconomicConstants::default()
        };

        assert_eq!(
            constants.validate(),
            Err(ConstantsError::InvalidCostPerUnit(0.0))
        );
    }

    #[test]
    fn validate_rejects_escalation_at_minus_one() {
        let constants = EconomicConstants {
            annual_tariff_escalation: -1.0,
            ..EconomicConstants::default()
        };

        assert_eq!(
            constants.validate(),
            Err(ConstantsError::InvalidTariffEscalation(-1.0))
        );
    }

    #[test]
    fn validate_rejects_zero_lifetime() {
        let constants = EconomicConstants {
            system_lifetime_years: 0,
            ..EconomicConstants::default()
        };

        assert_eq!(constants.validate(), Err(ConstantsError::InvalidLifetime(0)));
    }

    #[test]
    fn validate_rejects_nan_yield() {
        let constants = EconomicConstants {
            avg_annual_units_per_kw: f64::NAN,
            ..EconomicConstants::default()
        };

        assert!(matches!(
            constants.validate(),
            Err(ConstantsError::InvalidAnnualYield(_))
        ));
    }
}
