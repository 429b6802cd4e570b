//! Resolves the edition the command line asks for.
//!
//! An edition is either one of the built-in presets (`proposal-document`,
//! `roi-calculator`, `quick-quote`) or a TOML file:
//!
//! ```toml
//! name = "proposal-2023"
//! default_gst_percentage = 12.0
//! pricing = "pricing-table"           # or "simple-roi"
//! payback_basis = "net-investment"    # or "gross-system-cost"
//!
//! [constants]
//! cost_per_unit = 9.5
//! annual_tariff_escalation = 0.03
//! system_lifetime_years = 25
//! avg_annual_units_per_kw = 1400.0
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use solar_core::Edition;
use tracing::{debug, info};

/// Loads an edition from a preset name or a path to a `.toml` file.
pub fn resolve_edition(name_or_path: &str) -> Result<Edition> {
    let path = Path::new(name_or_path);
    let is_file = path.extension().is_some_and(|ext| ext == "toml") || path.is_file();

    let edition = if is_file {
        load_edition_file(path)?
    } else {
        Edition::preset(name_or_path).with_context(|| {
            format!(
                "'{name_or_path}' is neither a preset ({}) nor a .toml file",
                Edition::PRESETS.join(", ")
            )
        })?
    };

    info!(
        edition = %edition.name,
        cost_per_unit = edition.constants.cost_per_unit,
        pricing = ?edition.pricing,
        "using edition"
    );
    Ok(edition)
}

/// Reads and validates an edition TOML file.
pub fn load_edition_file(path: &Path) -> Result<Edition> {
    debug!(path = %path.display(), "reading edition file");

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edition file: {}", path.display()))?;

    Edition::from_toml_str(&text)
        .with_context(|| format!("Invalid edition file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use solar_core::PricingVariant;

    use super::*;

    #[test]
    fn resolve_edition_accepts_presets() {
        let edition = resolve_edition("roi-calculator").unwrap();

        assert_eq!(edition.pricing, PricingVariant::SimpleRoi);
    }

    #[test]
    fn resolve_edition_rejects_unknown_preset() {
        let err = resolve_edition("winter-promo").unwrap_err();

        assert!(err.to_string().contains("winter-promo"));
    }

    #[test]
    fn resolve_edition_reports_missing_toml_file() {
        let err = resolve_edition("/nonexistent/edition.toml").unwrap_err();

        assert!(err.to_string().contains("Failed to read edition file"));
    }

    #[test]
    fn load_edition_file_reads_toml() {
        let path = std::env::temp_dir().join(format!("solar-edition-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "name = \"temp\"\npricing = \"simple-roi\"\n\n[constants]\ncost_per_unit = 8.0\n",
        )
        .unwrap();

        let edition = load_edition_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(edition.name, "temp");
        assert_eq!(edition.constants.cost_per_unit, 8.0);
    }
}
