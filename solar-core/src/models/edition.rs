//! Editions of the proposal business logic.
//!
//! The proposal documents, the ROI calculator and the server-side quick quote
//! all share one calculator but differ in constants, in the GST default and in
//! which figures they show. Those differences live here as configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::ProposalCalculator;
use crate::{ConstantsError, EconomicConstants};

const DEFAULT_GST_PERCENTAGE: f64 = 13.8;
const QUICK_QUOTE_COST_PER_KW: f64 = 70_000.0;

/// Errors that can occur while resolving or validating an edition.
#[derive(Debug, Error)]
pub enum EditionError {
    #[error("unknown edition preset '{0}'")]
    UnknownPreset(String),

    #[error("edition TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid economic constants: {0}")]
    Constants(#[from] ConstantsError),

    #[error("default GST percentage must be positive, got {0}")]
    InvalidGstPercentage(f64),

    #[error("estimated cost per kW must be positive, got {0}")]
    InvalidEstimatedCostPerKw(f64),
}

/// Which pricing section a proposal of this edition displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingVariant {
    /// System cost, PPA processing, GST, amount payable and real cost.
    #[default]
    PricingTable,
    /// Yearly savings, payback period and 25-year ROI.
    SimpleRoi,
}

/// The investment figure payback and ROI are measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaybackBasis {
    /// System cost less incentives.
    #[default]
    NetInvestment,
    /// System cost before incentives.
    GrossSystemCost,
}

impl PaybackBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetInvestment => "net-investment",
            Self::GrossSystemCost => "gross-system-cost",
        }
    }
}

fn default_gst_percentage() -> f64 {
    DEFAULT_GST_PERCENTAGE
}

/// A named configuration of the economics engine.
///
/// # Example
///
/// ```
/// use solar_core::{Edition, PricingVariant};
///
/// let toml = r#"
///     name = "north-circle"
///     default_gst_percentage = 12.0
///     pricing = "simple-roi"
///
///     [constants]
///     cost_per_unit = 8.5
/// "#;
///
/// let edition = Edition::from_toml_str(toml).unwrap();
///
/// assert_eq!(edition.pricing, PricingVariant::SimpleRoi);
/// assert_eq!(edition.constants.cost_per_unit, 8.5);
/// assert_eq!(edition.constants.system_lifetime_years, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    pub name: String,

    #[serde(default)]
    pub constants: EconomicConstants,

    /// GST rate applied when a proposal does not carry its own.
    #[serde(default = "default_gst_percentage")]
    pub default_gst_percentage: f64,

    #[serde(default)]
    pub pricing: PricingVariant,

    #[serde(default)]
    pub payback_basis: PaybackBasis,

    /// When set, a missing system cost is estimated as size times this rate.
    #[serde(default)]
    pub estimated_cost_per_kw: Option<f64>,
}

impl Default for Edition {
    fn default() -> Self {
        Self::proposal_document()
    }
}

impl Edition {
    pub const PRESETS: [&'static str; 3] = ["proposal-document", "roi-calculator", "quick-quote"];

    /// The multi-page proposal document with the PPA/GST price table.
    pub fn proposal_document() -> Self {
        Self {
            name: "proposal-document".to_string(),
            constants: EconomicConstants::default(),
            default_gst_percentage: DEFAULT_GST_PERCENTAGE,
            pricing: PricingVariant::PricingTable,
            payback_basis: PaybackBasis::NetInvestment,
            estimated_cost_per_kw: None,
        }
    }

    /// The toolbox ROI calculator: payback and ROI on the net investment.
    pub fn roi_calculator() -> Self {
        Self {
            name: "roi-calculator".to_string(),
            pricing: PricingVariant::SimpleRoi,
            ..Self::proposal_document()
        }
    }

    /// The server-side quick quote.
    ///
    /// Prices the system at a flat rate per kW when no cost is given and
    /// measures payback against the gross system cost.
    pub fn quick_quote() -> Self {
        Self {
            name: "quick-quote".to_string(),
            pricing: PricingVariant::SimpleRoi,
            payback_basis: PaybackBasis::GrossSystemCost,
            estimated_cost_per_kw: Some(QUICK_QUOTE_COST_PER_KW),
            ..Self::proposal_document()
        }
    }

    /// Looks up a built-in edition by name.
    ///
    /// # Errors
    ///
    /// Returns [`EditionError::UnknownPreset`] for names not in [`Edition::PRESETS`].
    pub fn preset(name: &str) -> Result<Self, EditionError> {
        match name {
            "proposal-document" => Ok(Self::proposal_document()),
            "roi-calculator" => Ok(Self::roi_calculator()),
            "quick-quote" => Ok(Self::quick_quote()),
            other => Err(EditionError::UnknownPreset(other.to_string())),
        }
    }

    /// Parses and validates an edition from TOML text.
    ///
    /// Omitted constants fall back to [`EconomicConstants::default`] field by field.
    ///
    /// # Errors
    ///
    /// Returns [`EditionError::Parse`] for malformed TOML and any error from
    /// [`Edition::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, EditionError> {
        let edition: Self = toml::from_str(text)?;
        edition.validate()?;
        Ok(edition)
    }

    /// Validates the constants and the edition-level defaults.
    pub fn validate(&self) -> Result<(), EditionError> {
        self.constants.validate()?;

        if !self.default_gst_percentage.is_finite() || self.default_gst_percentage <= 0.0 {
            return Err(EditionError::InvalidGstPercentage(
                self.default_gst_percentage,
            ));
        }
        if let Some(rate) = self.estimated_cost_per_kw {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(EditionError::InvalidEstimatedCostPerKw(rate));
            }
        }
        Ok(())
    }

    /// Returns a calculator configured with this edition's constants and basis.
    pub fn calculator(&self) -> ProposalCalculator<'_> {
        ProposalCalculator::new(&self.constants).with_payback_basis(self.payback_basis)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preset_resolves_every_listed_name() {
        for name in Edition::PRESETS {
            let edition = Edition::preset(name).unwrap();
            assert_eq!(edition.name, name);
            assert!(edition.validate().is_ok());
        }
    }

    #[test]
    fn preset_rejects_unknown_name() {
        let result = Edition::preset("summer-sale");

        assert!(matches!(result, Err(EditionError::UnknownPreset(name)) if name == "summer-sale"));
    }

    #[test]
    fn quick_quote_uses_gross_basis_and_flat_rate() {
        let edition = Edition::quick_quote();

        assert_eq!(edition.payback_basis, PaybackBasis::GrossSystemCost);
        assert_eq!(edition.estimated_cost_per_kw, Some(70_000.0));
        assert_eq!(edition.pricing, PricingVariant::SimpleRoi);
    }

    #[test]
    fn from_toml_str_fills_defaults() {
        let edition = Edition::from_toml_str(r#"name = "minimal""#).unwrap();

        assert_eq!(edition.constants, EconomicConstants::default());
        assert_eq!(edition.default_gst_percentage, 13.8);
        assert_eq!(edition.pricing, PricingVariant::PricingTable);
        assert_eq!(edition.payback_basis, PaybackBasis::NetInvestment);
        assert_eq!(edition.estimated_cost_per_kw, None);
    }

    #[test]
    fn from_toml_str_reads_kebab_case_variants() {
        let toml = r#"
            name = "legacy"
            payback_basis = "gross-system-cost"
            estimated_cost_per_kw = 65000.0
        "#;

        let edition = Edition::from_toml_str(toml).unwrap();

        assert_eq!(edition.payback_basis, PaybackBasis::GrossSystemCost);
        assert_eq!(edition.estimated_cost_per_kw, Some(65000.0));
    }

    #[test]
    fn from_toml_str_rejects_invalid_constants() {
        let toml = r#"
            name = "broken"

            [constants]
            system_lifetime_years = 0
        "#;

        let result = Edition::from_toml_str(toml);

        assert!(matches!(
            result,
            Err(EditionError::Constants(ConstantsError::InvalidLifetime(0)))
        ));
    }

    #[test]
    fn from_toml_str_rejects_zero_gst() {
        let toml = r#"
            name = "no-gst"
            default_gst_percentage = 0.0
        "#;

        assert!(matches!(
            Edition::from_toml_str(toml),
            Err(EditionError::InvalidGstPercentage(_))
        ));
    }

    #[test]
    fn from_toml_str_reports_parse_errors() {
        assert!(matches!(
            Edition::from_toml_str("name = "),
            Err(EditionError::Parse(_))
        ));
    }
}
