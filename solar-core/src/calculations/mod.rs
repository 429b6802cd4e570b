//! Proposal economics calculations.
//!
//! Everything here is a pure function of a [`crate::ProposalInput`] and an
//! [`crate::EconomicConstants`]: no I/O, no shared state, and the same input
//! always yields bit-identical output.

pub mod common;
pub mod proposal;

pub use proposal::{ProposalCalculator, ROI_HORIZON_YEARS, compute};
