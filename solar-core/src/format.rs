//! Display formatting for proposal figures.
//!
//! Amounts are rounded half away from zero through [`rust_decimal`] and
//! grouped with the Indian convention (`3,00,000`). Non-finite figures, the
//! sentinel for "not meaningful", render as [`NOT_AVAILABLE`]; every finite
//! figure renders as a number. Formatting is
//! the last step of the pipeline and never feeds back into calculation.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::{Edition, PricingVariant, ProposalInput, ProposalResult};

pub const CURRENCY_SYMBOL: &str = "₹";
pub const NOT_AVAILABLE: &str = "N/A";

/// Rounds `value` to `dp` decimal places, half away from zero.
///
/// Returns `None` for values that are not finite or too large for a
/// [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::format::round_for_display;
///
/// assert_eq!(round_for_display(2.5, 0), Some(dec!(3)));
/// assert_eq!(round_for_display(-2.5, 0), Some(dec!(-3)));
/// assert_eq!(round_for_display(5.0, 1).map(|d| d.to_string()), Some("5.0".to_string()));
/// assert_eq!(round_for_display(f64::INFINITY, 0), None);
/// ```
pub fn round_for_display(
    value: f64,
    dp: u32,
) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let mut rounded =
        Decimal::from_f64(value)?.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}

/// Groups a string of integer digits the Indian way: the last three digits,
/// then pairs.
///
/// # Examples
///
/// ```
/// use solar_core::format::group_indian;
///
/// assert_eq!(group_indian("300000"), "3,00,000");
/// assert_eq!(group_indian("1400"), "1,400");
/// assert_eq!(group_indian("999"), "999");
/// ```
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Rounded text for `value`, or `None` when it is not finite.
///
/// Figures beyond the [`Decimal`] range fall back to `f64` formatting. Every
/// `f64` that large is already a whole number, so no rounding is lost.
fn rounded_text(
    value: f64,
    dp: u32,
) -> Option<String> {
    match round_for_display(value, dp) {
        Some(rounded) => Some(rounded.to_string()),
        None if value.is_finite() => Some(format!("{value:.prec$}", prec = dp as usize)),
        None => None,
    }
}

/// Splits a leading minus off rounded text.
fn split_sign(text: String) -> (&'static str, String) {
    match text.strip_prefix('-') {
        Some(magnitude) => ("-", magnitude.to_string()),
        None => ("", text),
    }
}

/// Rounds to a whole number and groups it, returning the sign separately.
fn grouped_whole(value: f64) -> Option<(&'static str, String)> {
    let (sign, digits) = split_sign(rounded_text(value, 0)?);
    Some((sign, group_indian(&digits)))
}

/// Formats a rupee amount, e.g. `₹ 3,00,000` or `-₹ 28,000`.
pub fn format_currency(amount: f64) -> String {
    match grouped_whole(amount) {
        Some((sign, digits)) => format!("{sign}{CURRENCY_SYMBOL} {digits}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a per-unit rupee rate to paise, e.g. `₹ 10.05`.
pub fn format_rate(rate: f64) -> String {
    match rounded_text(rate, 2).map(split_sign) {
        Some((sign, magnitude)) => format!("{sign}{CURRENCY_SYMBOL} {magnitude}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats an energy quantity, e.g. `1,400 Units`.
pub fn format_units(units: f64) -> String {
    match grouped_whole(units) {
        Some((sign, digits)) => format!("{sign}{digits} Units"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a roof area, e.g. `700 sq ft`.
pub fn format_area(sq_ft: f64) -> String {
    match grouped_whole(sq_ft) {
        Some((sign, digits)) => format!("{sign}{digits} sq ft"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a period to one decimal, e.g. `5.7 years`.
pub fn format_years(years: f64) -> String {
    match rounded_text(years, 1) {
        Some(rounded) => format!("{rounded} years"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a percentage with no decimals, e.g. `341%`.
pub fn format_percent(percent: f64) -> String {
    match rounded_text(percent, 0) {
        Some(rounded) => format!("{rounded}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats a capacity to two decimals, e.g. `5.00kW`.
pub fn format_kw(kw: f64) -> String {
    match rounded_text(kw, 2) {
        Some(rounded) => format!("{rounded}kW"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Formats the date printed on a proposal, e.g. `19/10/2026`.
pub fn format_proposal_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Suggested file name when saving a proposal, e.g. `Proposal-2026-10-19.pdf`.
pub fn proposal_file_name(date: NaiveDate) -> String {
    format!("Proposal-{}.pdf", date.format("%Y-%m-%d"))
}

/// Renders blank descriptive text as [`NOT_AVAILABLE`].
fn text_or_not_available(text: &str) -> String {
    if text.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        text.to_string()
    }
}

/// Price table strings, shown by [`PricingVariant::PricingTable`] editions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedPricing {
    pub system_cost: String,
    pub ppa_processing_cost: String,
    pub table_system_cost: String,
    pub gst_percentage: String,
    pub gst_amount: String,
    pub amount_payable: String,
    pub incentives: String,
    pub real_cost_to_customer: String,
}

/// Return strings, shown by [`PricingVariant::SimpleRoi`] editions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedRoi {
    pub yearly_savings: String,
    pub basis: String,
    pub basis_amount: String,
    pub payback_period: String,
    pub roi_over_25_years: String,
}

/// Every display string of one proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedProposal {
    pub edition: String,
    pub customer_name: String,
    pub address: String,
    pub consumer_number: String,
    pub customer_type: String,
    pub connection_type: String,
    pub connected_load: String,
    pub system_size: String,
    pub inverter_capacity: String,
    pub roof_size: String,
    pub installation_location: String,
    pub monthly_bill: String,

    pub avg_required_monthly_output: String,
    pub avg_required_annual_output: String,
    pub expected_annual_output: String,
    pub expected_monthly_output: String,
    pub expected_monthly_output_range: String,
    pub first_year_savings: String,
    pub lifetime_value: String,
    pub net_investment: String,
    pub cost_per_unit_without_solar: String,
    pub cost_per_unit_with_solar: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<FormattedPricing>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<FormattedRoi>,
}

impl FormattedProposal {
    /// Renders the input and result the way `edition` displays them.
    pub fn new(
        input: &ProposalInput,
        result: &ProposalResult,
        edition: &Edition,
    ) -> Self {
        let range = &result.expected_monthly_output_range;

        let pricing = (edition.pricing == PricingVariant::PricingTable).then(|| FormattedPricing {
            system_cost: format_currency(input.system_cost),
            ppa_processing_cost: format_currency(input.ppa_processing_cost),
            table_system_cost: format_currency(result.pricing.table_system_cost),
            gst_percentage: format!("{}%", input.gst_percentage),
            gst_amount: format_currency(result.pricing.gst_amount),
            amount_payable: format_currency(result.pricing.amount_payable),
            incentives: format_currency(input.incentives),
            real_cost_to_customer: format_currency(result.pricing.real_cost_to_customer),
        });

        let roi = (edition.pricing == PricingVariant::SimpleRoi).then(|| FormattedRoi {
            yearly_savings: format_currency(result.roi.yearly_savings),
            basis: result.roi.basis.as_str().to_string(),
            basis_amount: format_currency(result.roi.basis_amount),
            payback_period: format_years(result.roi.payback_period_years),
            roi_over_25_years: format_percent(result.roi.roi_percent_over_25_years),
        });

        Self {
            edition: edition.name.clone(),
            customer_name: text_or_not_available(&input.customer_name),
            address: text_or_not_available(&input.address),
            consumer_number: text_or_not_available(&input.consumer_number),
            customer_type: input.customer_type.as_str().to_string(),
            connection_type: text_or_not_available(&input.connection_type),
            connected_load: format_kw(input.connected_load_kw),
            system_size: format_kw(input.system_size_kw),
            inverter_capacity: text_or_not_available(&input.inverter_capacity_label),
            roof_size: format_area(input.roof_size_sq_ft),
            installation_location: input.installation_location.as_str().to_string(),
            monthly_bill: format_currency(input.monthly_bill),

            avg_required_monthly_output: format_units(result.avg_required_monthly_output_units),
            avg_required_annual_output: format_units(result.avg_required_annual_output_units),
            expected_annual_output: format_units(result.expected_annual_output_units),
            expected_monthly_output: format_units(result.expected_monthly_output_units),
            expected_monthly_output_range: format!(
                "{} to {}",
                format_units(range.min),
                format_units(range.max)
            ),
            first_year_savings: format_currency(result.first_year_savings),
            lifetime_value: format_currency(result.lifetime_value),
            net_investment: format_currency(result.net_investment),
            cost_per_unit_without_solar: format_rate(edition.constants.cost_per_unit),
            cost_per_unit_with_solar: format_rate(result.cost_per_unit_with_solar),
            pricing,
            roi,
        }
    }
}

impl fmt::Display for FormattedProposal {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Customer:                 {} ({})", self.customer_name, self.customer_type)?;
        writeln!(f, "Address:                  {}", self.address)?;
        writeln!(f, "Consumer number:          {}", self.consumer_number)?;
        writeln!(f, "Connection:               {}, {} load", self.connection_type, self.connected_load)?;
        writeln!(
            f,
            "System:                   {} ({} inverter), {}",
            self.system_size, self.inverter_capacity, self.installation_location
        )?;
        writeln!(f, "Roof size:                {}", self.roof_size)?;
        writeln!(f, "Monthly bill:             {}", self.monthly_bill)?;
        writeln!(f, "Required output:          {} / month, {} / year", self.avg_required_monthly_output, self.avg_required_annual_output)?;
        writeln!(f, "Expected output:          {} / month, {} / year", self.expected_monthly_output, self.expected_annual_output)?;
        writeln!(f, "Monthly output range:     {}", self.expected_monthly_output_range)?;
        writeln!(f, "First-year savings:       {}", self.first_year_savings)?;
        writeln!(f, "Lifetime value:           {}", self.lifetime_value)?;
        writeln!(f, "Net investment:           {}", self.net_investment)?;
        writeln!(
            f,
            "Cost per unit:            {} without solar, {} with solar",
            self.cost_per_unit_without_solar, self.cost_per_unit_with_solar
        )?;

        if let Some(pricing) = &self.pricing {
            writeln!(f, "System cost:              {}", pricing.system_cost)?;
            writeln!(f, "PPA processing:           {}", pricing.ppa_processing_cost)?;
            writeln!(f, "Table system cost:        {}", pricing.table_system_cost)?;
            writeln!(f, "GST ({}):              {}", pricing.gst_percentage, pricing.gst_amount)?;
            writeln!(f, "Amount payable:           {}", pricing.amount_payable)?;
            writeln!(f, "Subsidy:                  {}", pricing.incentives)?;
            writeln!(f, "Real cost to customer:    {}", pricing.real_cost_to_customer)?;
        }

        if let Some(roi) = &self.roi {
            writeln!(f, "Yearly savings:           {}", roi.yearly_savings)?;
            writeln!(f, "Payback basis:            {} ({})", roi.basis_amount, roi.basis)?;
            writeln!(f, "Payback period:           {}", roi.payback_period)?;
            writeln!(f, "25-year ROI:              {}", roi.roi_over_25_years)?;
        }

        Ok(())
    }
}
