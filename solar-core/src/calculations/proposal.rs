//! The proposal economics calculator.
//!
//! # Calculation order
//!
//! | Step | Figure | Formula |
//! |------|--------|---------|
//! | 1    | Required monthly output | monthly bill ÷ cost per unit |
//! | 2    | Required annual output | step 1 × 12 |
//! | 3    | Expected annual output | system size × units per kW |
//! | 4    | Expected monthly output | step 3 ÷ 12 |
//! | 5    | Monthly output range | step 4 × 0.7 to step 4 × 1.2 |
//! | 6    | First-year savings | step 3 × cost per unit |
//! | 7    | Lifetime value | Σ step 6 × (1 + escalation)^i over the lifetime |
//! | 8    | Net investment | system cost − incentives |
//! | 9    | Cost per unit with solar | system cost ÷ (step 3 × lifetime), or 0 |
//! | 10   | Pricing table | (cost + PPA) × (1 + GST%), less incentives |
//! | 11   | Simple ROI | payback and 25-year ROI on the bill savings |
//!
//! # Example
//!
//! ```
//! use solar_core::{EconomicConstants, ProposalCalculator, ProposalInput};
//! use solar_core::{CustomerType, InstallationLocation};
//!
//! let input = ProposalInput {
//!     customer_name: "Asha Rao".to_string(),
//!     address: "14 Lake Road, Pune".to_string(),
//!     consumer_number: "170011234567".to_string(),
//!     customer_type: CustomerType::Residential,
//!     connection_type: "Single Phase".to_string(),
//!     connected_load_kw: 5.0,
//!     system_size_kw: 5.0,
//!     monthly_bill: 5000.0,
//!     roof_size_sq_ft: 700.0,
//!     installation_location: InstallationLocation::RoofMounted,
//!     system_cost: 300000.0,
//!     incentives: 78000.0,
//!     ppa_processing_cost: 0.0,
//!     gst_percentage: 13.8,
//!     inverter_capacity_label: "5.00kW".to_string(),
//! };
//!
//! let constants = EconomicConstants::default();
//! let result = ProposalCalculator::new(&constants).calculate(&input);
//!
//! assert_eq!(result.expected_annual_output_units, 7000.0);
//! assert_eq!(result.first_year_savings, 70350.0);
//! assert_eq!(result.net_investment, 222000.0);
//! ```

use crate::calculations::common::{growth_series_sum, ratio_or_infinity};
use crate::{
    EconomicConstants, OutputRange, PaybackBasis, PricingBreakdown, ProposalInput, ProposalResult,
    RoiSummary,
};

/// Horizon of the simple ROI figure, fixed regardless of the system lifetime.
pub const ROI_HORIZON_YEARS: u32 = 25;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Seasonal band around the expected monthly output: winter low, summer high.
const MONTHLY_RANGE_LOW_FACTOR: f64 = 0.7;
const MONTHLY_RANGE_HIGH_FACTOR: f64 = 1.2;

/// Computes every proposal figure with the net-investment payback basis.
///
/// Shorthand for `ProposalCalculator::new(constants).calculate(input)`.
pub fn compute(
    input: &ProposalInput,
    constants: &EconomicConstants,
) -> ProposalResult {
    ProposalCalculator::new(constants).calculate(input)
}

/// Calculator for the figures shown across a proposal document.
///
/// Holds the edition constants and the payback basis; the calculation itself
/// is total and never fails for a normalized input.
#[derive(Debug, Clone, Copy)]
pub struct ProposalCalculator<'a> {
    constants: &'a EconomicConstants,
    payback_basis: PaybackBasis,
}

impl<'a> ProposalCalculator<'a> {
    /// Creates a calculator measuring payback against the net investment.
    pub fn new(constants: &'a EconomicConstants) -> Self {
        Self {
            constants,
            payback_basis: PaybackBasis::NetInvestment,
        }
    }

    /// Sets the investment figure payback and ROI are measured against.
    pub fn with_payback_basis(
        mut self,
        payback_basis: PaybackBasis,
    ) -> Self {
        self.payback_basis = payback_basis;
        self
    }

    /// Calculates the complete set of proposal figures.
    pub fn calculate(
        &self,
        input: &ProposalInput,
    ) -> ProposalResult {
        let avg_required_monthly_output_units = self.required_monthly_output(input.monthly_bill);
        let avg_required_annual_output_units =
            self.required_annual_output(avg_required_monthly_output_units);

        let expected_annual_output_units = self.expected_annual_output(input.system_size_kw);
        let expected_monthly_output_units =
            self.expected_monthly_output(expected_annual_output_units);
        let expected_monthly_output_range =
            self.monthly_output_range(expected_monthly_output_units);

        let first_year_savings = self.first_year_savings(expected_annual_output_units);
        let lifetime_value = self.lifetime_value(first_year_savings);

        let net_investment = self.net_investment(input.system_cost, input.incentives);
        let cost_per_unit_with_solar =
            self.cost_per_unit_with_solar(input.system_cost, expected_annual_output_units);

        let pricing = self.pricing_breakdown(input);
        let roi = self.roi_summary(input, net_investment);

        ProposalResult {
            avg_required_monthly_output_units,
            avg_required_annual_output_units,
            expected_annual_output_units,
            expected_monthly_output_units,
            expected_monthly_output_range,
            first_year_savings,
            lifetime_value,
            net_investment,
            cost_per_unit_with_solar,
            pricing,
            roi,
        }
    }

    /// Units per month the current bill pays for.
    fn required_monthly_output(
        &self,
        monthly_bill: f64,
    ) -> f64 {
        monthly_bill / self.constants.cost_per_unit
    }

    fn required_annual_output(
        &self,
        required_monthly_output: f64,
    ) -> f64 {
        required_monthly_output * MONTHS_PER_YEAR
    }

    fn expected_annual_output(
        &self,
        system_size_kw: f64,
    ) -> f64 {
        system_size_kw * self.constants.avg_annual_units_per_kw
    }

    /// Derived from the annual figure only, never recomputed independently.
    fn expected_monthly_output(
        &self,
        expected_annual_output: f64,
    ) -> f64 {
        expected_annual_output / MONTHS_PER_YEAR
    }

    fn monthly_output_range(
        &self,
        expected_monthly_output: f64,
    ) -> OutputRange {
        OutputRange {
            min: expected_monthly_output * MONTHLY_RANGE_LOW_FACTOR,
            max: expected_monthly_output * MONTHLY_RANGE_HIGH_FACTOR,
        }
    }

    fn first_year_savings(
        &self,
        expected_annual_output: f64,
    ) -> f64 {
        expected_annual_output * self.constants.cost_per_unit
    }

    /// Savings over the system lifetime with the tariff escalating yearly.
    /// Year one uses today's tariff.
    fn lifetime_value(
        &self,
        first_year_savings: f64,
    ) -> f64 {
        growth_series_sum(
            first_year_savings,
            self.constants.annual_tariff_escalation,
            self.constants.system_lifetime_years,
        )
    }

    /// Not clamped: incentives above the cost give a negative figure.
    fn net_investment(
        &self,
        system_cost: f64,
        incentives: f64,
    ) -> f64 {
        system_cost - incentives
    }

    /// Levelized cost of one solar unit, or zero when either factor is zero.
    fn cost_per_unit_with_solar(
        &self,
        system_cost: f64,
        expected_annual_output: f64,
    ) -> f64 {
        if system_cost > 0.0 && expected_annual_output > 0.0 {
            system_cost / (expected_annual_output * f64::from(self.constants.system_lifetime_years))
        } else {
            0.0
        }
    }

    fn pricing_breakdown(
        &self,
        input: &ProposalInput,
    ) -> PricingBreakdown {
        let table_system_cost = input.system_cost + input.ppa_processing_cost;
        let gst_amount = table_system_cost * input.gst_percentage / 100.0;
        let amount_payable = table_system_cost + gst_amount;
        let real_cost_to_customer = amount_payable - input.incentives;

        PricingBreakdown {
            table_system_cost,
            gst_amount,
            amount_payable,
            real_cost_to_customer,
        }
    }

    /// Payback and ROI measured on the customer's current bill.
    fn roi_summary(
        &self,
        input: &ProposalInput,
        net_investment: f64,
    ) -> RoiSummary {
        let yearly_savings = input.monthly_bill * MONTHS_PER_YEAR;
        let basis_amount = match self.payback_basis {
            PaybackBasis::NetInvestment => net_investment,
            PaybackBasis::GrossSystemCost => input.system_cost,
        };

        let payback_period_years = ratio_or_infinity(basis_amount, yearly_savings);

        let horizon_savings = yearly_savings * f64::from(ROI_HORIZON_YEARS);
        let roi_percent_over_25_years = if basis_amount > 0.0 {
            ((horizon_savings - basis_amount) / basis_amount) * 100.0
        } else {
            f64::INFINITY
        };

        RoiSummary {
            yearly_savings,
            basis: self.payback_basis,
            basis_amount,
            payback_period_years,
            roi_percent_over_25_years,
        }
    }
}
