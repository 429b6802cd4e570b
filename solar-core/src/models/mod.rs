mod customer_type;
mod economic_constants;
mod edition;
mod installation_location;
mod proposal_input;
mod proposal_result;

pub use customer_type::CustomerType;
pub use economic_constants::{ConstantsError, EconomicConstants, MAX_SYSTEM_LIFETIME_YEARS};
pub use edition::{Edition, EditionError, PaybackBasis, PricingVariant};
pub use installation_location::InstallationLocation;
pub use proposal_input::ProposalInput;
pub use proposal_result::{OutputRange, PricingBreakdown, ProposalResult, RoiSummary};
