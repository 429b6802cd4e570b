//! Runs proposal rows through normalization, calculation and formatting.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use solar_core::format::{FormattedProposal, format_proposal_date, proposal_file_name};
use solar_core::normalize::{Normalizer, RawProposalFields};
use solar_core::{Edition, ProposalResult, ValidationErrors, ValidationMode};
use tracing::{debug, warn};

/// Outcome of one input row.
#[derive(Debug, Clone)]
pub enum RowOutcome {
    Rendered {
        result: ProposalResult,
        proposal: Box<FormattedProposal>,
    },
    Rejected(ValidationErrors),
}

/// One input row with its 1-based position.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub row: usize,
    pub outcome: RowOutcome,
}

/// Rendered proposals for a batch of rows.
#[derive(Debug, Clone)]
pub struct Report {
    pub edition: String,
    pub date: NaiveDate,
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Normalizes, calculates and formats every row.
    ///
    /// Rows that fail validation are kept with their errors; nothing is
    /// calculated for them.
    pub fn build(
        rows: &[RawProposalFields],
        edition: &Edition,
        mode: ValidationMode,
        date: NaiveDate,
    ) -> Self {
        let normalizer = Normalizer::new(edition).with_mode(mode);
        let calculator = edition.calculator();

        let rows = rows
            .iter()
            .enumerate()
            .map(|(idx, raw)| {
                let row = idx + 1;
                let outcome = match normalizer.normalize(raw) {
                    Ok(input) => {
                        let result = calculator.calculate(&input);
                        debug!(
                            row,
                            expected_annual_output = result.expected_annual_output_units,
                            net_investment = result.net_investment,
                            "calculated proposal"
                        );
                        let proposal = FormattedProposal::new(&input, &result, edition);
                        RowOutcome::Rendered {
                            result,
                            proposal: Box::new(proposal),
                        }
                    }
                    Err(errors) => {
                        warn!(row, %errors, "proposal rejected");
                        RowOutcome::Rejected(errors)
                    }
                };
                ReportRow { row, outcome }
            })
            .collect();

        Self {
            edition: edition.name.clone(),
            date,
            rows,
        }
    }

    /// Number of rows that failed validation.
    pub fn rejected(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r.outcome, RowOutcome::Rejected(_)))
            .count()
    }

    /// Serializes the report for `--format json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let rows = self
            .rows
            .iter()
            .map(|r| match &r.outcome {
                RowOutcome::Rendered { result, proposal } => JsonRow {
                    row: r.row,
                    status: "rendered",
                    figures: Some(result),
                    proposal: Some(proposal.as_ref()),
                    errors: Vec::new(),
                },
                RowOutcome::Rejected(errors) => JsonRow {
                    row: r.row,
                    status: "rejected",
                    figures: None,
                    proposal: None,
                    errors: errors.errors().iter().map(ToString::to_string).collect(),
                },
            })
            .collect();

        serde_json::to_string_pretty(&JsonReport {
            edition: &self.edition,
            date: format_proposal_date(self.date),
            file_name: proposal_file_name(self.date),
            rows,
        })
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    edition: &'a str,
    date: String,
    file_name: String,
    rows: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    row: usize,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    figures: Option<&'a ProposalResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proposal: Option<&'a FormattedProposal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl fmt::Display for Report {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Edition:   {}", self.edition)?;
        writeln!(f, "Date:      {}", format_proposal_date(self.date))?;
        writeln!(f, "File name: {}", proposal_file_name(self.date))?;

        for row in &self.rows {
            writeln!(f)?;
            writeln!(f, "── Row {} ──", row.row)?;
            match &row.outcome {
                RowOutcome::Rendered { proposal, .. } => write!(f, "{proposal}")?,
                RowOutcome::Rejected(errors) => {
                    writeln!(f, "Rejected:")?;
                    for error in errors.errors() {
                        writeln!(f, "  - {error}")?;
                    }
                }
            }
        }
        Ok(())
    }
}
