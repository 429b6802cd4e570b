//! Economics engine behind the solar installation proposal documents.
//!
//! Raw form fields flow one way through three stages:
//!
//! 1. [`normalize`] turns string fields into a validated [`ProposalInput`].
//! 2. [`calculations`] derives the [`ProposalResult`] from the input and the
//!    [`EconomicConstants`] of an [`Edition`].
//! 3. [`format`] renders the figures as display strings.
//!
//! ```
//! use solar_core::{Edition, ValidationMode, normalize::{Normalizer, RawProposalFields}};
//!
//! let edition = Edition::default();
//! let raw = RawProposalFields::from_pairs([
//!     ("systemSize", "5"),
//!     ("monthlyBill", "5000"),
//!     ("systemCost", "300000"),
//!     ("incentives", "78000"),
//!     ("load", "5"),
//!     ("roofSize", "700"),
//!     ("customerType", "Residential"),
//! ]);
//!
//! let input = Normalizer::new(&edition)
//!     .with_mode(ValidationMode::StoredRender)
//!     .normalize(&raw)
//!     .unwrap();
//! let result = edition.calculator().calculate(&input);
//!
//! assert_eq!(result.expected_annual_output_units, 7000.0);
//! assert_eq!(result.net_investment, 222000.0);
//! ```

pub mod calculations;
pub mod format;
pub mod models;
pub mod normalize;

pub use calculations::{ProposalCalculator, compute};
pub use models::*;
pub use normalize::{ValidationError, ValidationErrors, ValidationMode, ValidationReason};
