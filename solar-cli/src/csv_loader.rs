//! CSV loader for stored proposal rows.
//!
//! ## CSV Format
//!
//! Headers are the proposal field names and are matched by name, so column
//! order does **not** matter. Names are case-sensitive. Every value is read as
//! text and validated later by the normalizer, exactly like a proposal
//! re-rendered from its query string.
//!
//! | Column | Notes |
//! |------------------------|---------------------------------------------|
//! | `customerType` | `Residential` or `Commercial` |
//! | `name` | |
//! | `consumerNumber` | |
//! | `connectionType` | e.g. `Single Phase` |
//! | `address` | |
//! | `load` | connected load, kW |
//! | `systemSize` | kW |
//! | `monthlyBill` | rupees |
//! | `roofSize` | sq ft |
//! | `installationLocation` | `Roof Mounted` or `Ground Mounted` |
//! | `systemCost` | rupees |
//! | `incentives` | rupees, empty for none |
//! | `ppaProcessingCost` | rupees, empty for none |
//! | `gstPercentage` | empty for the edition default |
//! | `inverterCapacity` | e.g. `5.00kW` |
//!
//! The storage metadata columns `id` and `createdAt` are skipped silently.
//! Any other unknown column (e.g. `panelType`) is skipped with a warning, the
//! same way a re-rendered query string ignores keys it does not know.
//!
//! ### Minimal example
//!
//! ```csv
//! systemSize,monthlyBill,systemCost
//! 5,5000,300000
//! ```

use std::io;
use std::path::{Path, PathBuf};

use solar_core::normalize::{RawProposalFields, field};
use tracing::warn;

/// Storage metadata columns that carry no proposal data.
const SKIPPED_COLUMNS: [&str; 2] = ["id", "createdAt"];

/// Errors that can occur while loading proposal rows.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV is structurally invalid (ragged rows, bad quoting, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),
}

/// Parses CSV text into raw proposal fields, one entry per row in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
pub fn load_from_str(input: &str) -> Result<Vec<RawProposalFields>, CsvLoadError> {
    load_from_reader(input.as_bytes())
}

/// Reads proposal rows from any reader.
pub fn load_from_reader<R: io::Read>(reader: R) -> Result<Vec<RawProposalFields>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for header in headers.iter() {
        if !field::ALL.contains(&header) && !SKIPPED_COLUMNS.contains(&header) {
            warn!(column = header, "skipping unrecognised column");
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawProposalFields = headers
            .iter()
            .zip(record.iter())
            .filter(|(name, _)| field::ALL.contains(name))
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Reads a file from disk and delegates to [`load_from_reader`].
pub fn load_from_file(path: &Path) -> Result<Vec<RawProposalFields>, CsvLoadError> {
    let file = std::fs::File::open(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(io::BufReader::new(file))
}
