use serde::{Deserialize, Serialize};

use crate::{CustomerType, InstallationLocation};

/// A fully normalized proposal, ready for calculation.
///
/// Produced by [`crate::normalize::Normalizer`] and immutable thereafter.
/// Monetary fields are in rupees, sizes in kW and square feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalInput {
    // Identifying, non-computational
    pub customer_name: String,
    pub address: String,
    pub consumer_number: String,

    pub customer_type: CustomerType,
    pub connection_type: String,
    pub connected_load_kw: f64,
    pub system_size_kw: f64,
    pub monthly_bill: f64,
    pub roof_size_sq_ft: f64,
    pub installation_location: InstallationLocation,

    /// All-inclusive installation price before subsidy and tax adjustments.
    pub system_cost: f64,

    /// Government subsidy (CFA) or rebate. Zero when not given.
    pub incentives: f64,

    /// Optional PPA processing fee added to the pricing table. Zero when not given.
    pub ppa_processing_cost: f64,

    /// GST rate in percent, e.g. `13.8`.
    pub gst_percentage: f64,

    pub inverter_capacity_label: String,
}
