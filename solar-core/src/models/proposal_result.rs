use serde::{Deserialize, Serialize};

use crate::PaybackBasis;

/// Expected monthly output band covering seasonal irradiance variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputRange {
    pub min: f64,
    pub max: f64,
}

/// Price table shown by editions that break out PPA processing and GST.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// System cost plus PPA processing cost.
    pub table_system_cost: f64,
    pub gst_amount: f64,
    /// Table system cost including GST.
    pub amount_payable: f64,
    /// Amount payable less incentives.
    pub real_cost_to_customer: f64,
}

/// Bill-based return figures shown by the ROI calculator editions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    /// Current monthly bill times twelve.
    pub yearly_savings: f64,

    /// The investment figure payback and ROI were measured against.
    pub basis: PaybackBasis,
    pub basis_amount: f64,

    /// `f64::INFINITY` when yearly savings are not positive.
    pub payback_period_years: f64,

    /// `f64::INFINITY` when the basis amount is not positive.
    pub roi_percent_over_25_years: f64,
}

/// Every derived figure displayed on a proposal.
///
/// Recomputed on each render and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProposalResult {
    pub avg_required_monthly_output_units: f64,
    pub avg_required_annual_output_units: f64,
    pub expected_annual_output_units: f64,
    pub expected_monthly_output_units: f64,
    pub expected_monthly_output_range: OutputRange,
    pub first_year_savings: f64,
    pub lifetime_value: f64,

    /// System cost less incentives. Negative when incentives exceed the cost.
    pub net_investment: f64,

    /// Levelized cost of a solar unit over the system lifetime, `0.0` when undefined.
    pub cost_per_unit_with_solar: f64,

    pub pricing: PricingBreakdown,
    pub roi: RoiSummary,
}
