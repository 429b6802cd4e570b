//! The pre-filled values of the "add new customer" form.
//!
//! Used by `--sample` to render a proposal without a CSV file.

use solar_core::CustomerType;
use solar_core::normalize::{RawProposalFields, field};

/// Returns the default form values for the given customer type.
pub fn sample_fields(customer_type: CustomerType) -> RawProposalFields {
    RawProposalFields::from_pairs([
        (field::CUSTOMER_TYPE, customer_type.as_str()),
        (field::NAME, "Sample Customer"),
        (field::CONSUMER_NUMBER, "123456789012"),
        (field::CONNECTION_TYPE, "Single Phase"),
        (field::ADDRESS, "123 Solar Way, Green City"),
        (field::CONNECTED_LOAD, "5"),
        (field::SYSTEM_SIZE, "5"),
        (field::MONTHLY_BILL, "5000"),
        (field::ROOF_SIZE, "700"),
        (field::INSTALLATION_LOCATION, "Roof Mounted"),
        (field::SYSTEM_COST, "300000"),
        (field::INCENTIVES, "78000"),
        (field::INVERTER_CAPACITY, "5.00kW"),
    ])
}
