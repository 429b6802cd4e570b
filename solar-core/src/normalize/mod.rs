//! Input normalization for raw proposal fields.
//!
//! Form submissions and query-string re-renders both arrive as strings. The
//! [`Normalizer`] turns them into a fully defaulted [`ProposalInput`], or
//! reports every offending field so the caller can re-prompt. No figure is
//! calculated from input that failed normalization.
//!
//! # Defaults
//!
//! | Field | When missing |
//! |-------|--------------|
//! | `installationLocation` | Roof Mounted |
//! | `incentives` | 0 |
//! | `ppaProcessingCost` | 0 |
//! | `gstPercentage` | the edition's default GST |
//! | `systemCost` | size × the edition's cost per kW, when the edition has one |

mod error;
mod raw_fields;

pub use error::{ValidationError, ValidationErrors, ValidationReason};
pub use raw_fields::{RawProposalFields, field};

use serde::{Deserialize, Serialize};

use crate::{CustomerType, Edition, InstallationLocation, ProposalInput};

const MIN_NAME_LEN: usize = 2;
const MIN_ADDRESS_LEN: usize = 5;
const MIN_DESCRIPTIVE_LEN: usize = 1;

/// How strictly the fields are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// The "add new customer" workflow: text minimums apply and every
    /// amount that must be positive is checked as such.
    #[default]
    NewCustomer,

    /// Read-only rendering of already stored data: no text minimums, missing
    /// descriptive fields are tolerated and zero amounts are accepted.
    StoredRender,
}

/// Validates and coerces [`RawProposalFields`] into a [`ProposalInput`].
///
/// # Example
///
/// ```
/// use solar_core::Edition;
/// use solar_core::normalize::{Normalizer, RawProposalFields, ValidationReason, field};
///
/// let edition = Edition::default();
/// let raw = RawProposalFields::from_pairs([(field::NAME, "R")]);
///
/// let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();
///
/// assert_eq!(errors.reason_for(field::NAME), Some(&ValidationReason::TooShort { min: 2 }));
/// assert_eq!(errors.reason_for(field::SYSTEM_SIZE), Some(&ValidationReason::Missing));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    edition: &'a Edition,
    mode: ValidationMode,
}

impl<'a> Normalizer<'a> {
    /// Creates a normalizer for the "add new customer" workflow.
    pub fn new(edition: &'a Edition) -> Self {
        Self {
            edition,
            mode: ValidationMode::NewCustomer,
        }
    }

    pub fn with_mode(
        mut self,
        mode: ValidationMode,
    ) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Normalizes the raw fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every field that is missing,
    /// non-numeric, out of range or not one of its allowed labels.
    pub fn normalize(
        &self,
        raw: &RawProposalFields,
    ) -> Result<ProposalInput, ValidationErrors> {
        let strict = self.mode == ValidationMode::NewCustomer;
        let mut reader = FieldReader::new(raw);

        let customer_name = reader.text(field::NAME, strict.then_some(MIN_NAME_LEN));
        let consumer_number =
            reader.text(field::CONSUMER_NUMBER, strict.then_some(MIN_DESCRIPTIVE_LEN));
        let connection_type =
            reader.text(field::CONNECTION_TYPE, strict.then_some(MIN_DESCRIPTIVE_LEN));
        let address = reader.text(field::ADDRESS, strict.then_some(MIN_ADDRESS_LEN));

        let customer_type = reader.choice(
            field::CUSTOMER_TYPE,
            CustomerType::parse,
            &CustomerType::LABELS,
            (!strict).then_some(CustomerType::Residential),
        );

        let connected_load_kw = if strict {
            reader.amount(field::CONNECTED_LOAD, Sign::Positive)
        } else {
            reader.optional_amount(field::CONNECTED_LOAD, 0.0)
        };
        let system_size_kw = reader.amount(field::SYSTEM_SIZE, self.positive_sign());
        let monthly_bill = reader.amount(field::MONTHLY_BILL, self.positive_sign());
        let roof_size_sq_ft = if strict {
            reader.amount(field::ROOF_SIZE, Sign::Positive)
        } else {
            reader.optional_amount(field::ROOF_SIZE, 0.0)
        };

        let installation_location = reader.choice(
            field::INSTALLATION_LOCATION,
            InstallationLocation::parse,
            &InstallationLocation::LABELS,
            Some(InstallationLocation::default()),
        );

        let system_cost = match (raw.get(field::SYSTEM_COST), self.edition.estimated_cost_per_kw) {
            (None, Some(rate_per_kw)) => system_size_kw * rate_per_kw,
            _ => reader.amount(field::SYSTEM_COST, self.positive_sign()),
        };
        let incentives = reader.optional_amount(field::INCENTIVES, 0.0);
        let ppa_processing_cost = reader.optional_amount(field::PPA_PROCESSING_COST, 0.0);
        let gst_percentage = match raw.get(field::GST_PERCENTAGE) {
            None => self.edition.default_gst_percentage,
            Some(_) => reader.amount(field::GST_PERCENTAGE, Sign::Positive),
        };

        let inverter_capacity_label =
            reader.text(field::INVERTER_CAPACITY, strict.then_some(MIN_DESCRIPTIVE_LEN));

        reader.finish()?;

        Ok(ProposalInput {
            customer_name,
            address,
            consumer_number,
            // Only `None` alongside a recorded error, which `finish` returned above.
            customer_type: customer_type.unwrap_or(CustomerType::Residential),
            connection_type,
            connected_load_kw,
            system_size_kw,
            monthly_bill,
            roof_size_sq_ft,
            installation_location: installation_location.unwrap_or_default(),
            system_cost,
            incentives,
            ppa_processing_cost,
            gst_percentage,
            inverter_capacity_label,
        })
    }

    /// Sign required of amounts that must be positive in the form.
    fn positive_sign(&self) -> Sign {
        match self.mode {
            ValidationMode::NewCustomer => Sign::Positive,
            ValidationMode::StoredRender => Sign::NonNegative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Positive,
    NonNegative,
}

/// Reads fields one at a time, recording an error for each bad one.
///
/// Rejected fields yield a placeholder so reading can continue; the
/// placeholders never escape because [`FieldReader::finish`] fails first.
struct FieldReader<'r> {
    raw: &'r RawProposalFields,
    errors: Vec<ValidationError>,
}

impl<'r> FieldReader<'r> {
    fn new(raw: &'r RawProposalFields) -> Self {
        Self {
            raw,
            errors: Vec::new(),
        }
    }

    fn reject(
        &mut self,
        field: &'static str,
        reason: ValidationReason,
    ) {
        self.errors.push(ValidationError { field, reason });
    }

    fn text(
        &mut self,
        field: &'static str,
        min_len: Option<usize>,
    ) -> String {
        let value = self.raw.get(field).unwrap_or_default().to_string();

        if let Some(min) = min_len {
            if value.is_empty() {
                self.reject(field, ValidationReason::Missing);
            } else if value.chars().count() < min {
                self.reject(field, ValidationReason::TooShort { min });
            }
        }
        value
    }

    fn amount(
        &mut self,
        field: &'static str,
        sign: Sign,
    ) -> f64 {
        let raw = self.raw;
        let Some(text) = raw.get(field) else {
            self.reject(field, ValidationReason::Missing);
            return 0.0;
        };
        self.checked_amount(field, text, sign)
    }

    fn optional_amount(
        &mut self,
        field: &'static str,
        default: f64,
    ) -> f64 {
        let raw = self.raw;
        match raw.get(field) {
            Some(text) => self.checked_amount(field, text, Sign::NonNegative),
            None => default,
        }
    }

    fn checked_amount(
        &mut self,
        field: &'static str,
        text: &str,
        sign: Sign,
    ) -> f64 {
        let value = match parse_number(text) {
            Ok(value) => value,
            Err(reason) => {
                self.reject(field, reason);
                return 0.0;
            }
        };

        match sign {
            Sign::Positive if value <= 0.0 => {
                self.reject(field, ValidationReason::NotPositive(value));
                0.0
            }
            Sign::NonNegative if value < 0.0 => {
                self.reject(field, ValidationReason::Negative(value));
                0.0
            }
            _ => value,
        }
    }

    fn choice<T>(
        &mut self,
        field: &'static str,
        parse: fn(&str) -> Option<T>,
        allowed: &'static [&'static str],
        default: Option<T>,
    ) -> Option<T> {
        let raw = self.raw;
        match (raw.get(field), default) {
            (None, Some(default)) => Some(default),
            (None, None) => {
                self.reject(field, ValidationReason::Missing);
                None
            }
            (Some(label), _) => {
                let parsed = parse(label);
                if parsed.is_none() {
                    self.reject(
                        field,
                        ValidationReason::UnknownOption {
                            value: label.to_string(),
                            allowed,
                        },
                    );
                }
                parsed
            }
        }
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Parses a numeric field, tolerating `,` thousands separators.
fn parse_number(text: &str) -> Result<f64, ValidationReason> {
    let normalized = text.trim().replace(',', "");
    let value: f64 = normalized
        .parse()
        .map_err(|_| ValidationReason::NotANumber(text.to_string()))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationReason::NotFinite)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn complete_form() -> RawProposalFields {
        RawProposalFields::from_pairs([
            (field::CUSTOMER_TYPE, "Residential"),
            (field::NAME, "Asha Rao"),
            (field::CONSUMER_NUMBER, "170011234567"),
            (field::CONNECTION_TYPE, "Single Phase"),
            (field::ADDRESS, "14 Lake Road, Pune"),
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

    fn with(
        mut raw: RawProposalFields,
        name: &str,
        value: &str,
    ) -> RawProposalFields {
        raw.insert(name, value);
        raw
    }

    // =========================================================================
    // parse_number tests
    // =========================================================================

    #[test]
    fn parse_number_accepts_thousands_separators() {
        assert_eq!(parse_number("3,00,000"), Ok(300000.0));
        assert_eq!(parse_number("1,234.5"), Ok(1234.5));
    }

    #[test]
    fn parse_number_rejects_text() {
        assert_eq!(
            parse_number("five"),
            Err(ValidationReason::NotANumber("five".to_string()))
        );
    }

    #[test]
    fn parse_number_rejects_infinity_and_nan() {
        assert_eq!(parse_number("inf"), Err(ValidationReason::NotFinite));
        assert_eq!(parse_number("NaN"), Err(ValidationReason::NotFinite));
    }

    // =========================================================================
    // NewCustomer mode
    // =========================================================================

    #[test]
    fn normalize_complete_form() {
        let edition = Edition::default();

        let input = Normalizer::new(&edition).normalize(&complete_form()).unwrap();

        assert_eq!(input.customer_name, "Asha Rao");
        assert_eq!(input.customer_type, CustomerType::Residential);
        assert_eq!(input.system_size_kw, 5.0);
        assert_eq!(input.system_cost, 300000.0);
        assert_eq!(input.incentives, 78000.0);
        assert_eq!(input.ppa_processing_cost, 0.0);
        assert_eq!(input.gst_percentage, 13.8);
        assert_eq!(input.installation_location, InstallationLocation::RoofMounted);
    }

    #[test]
    fn normalize_trims_text_fields() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::NAME, "   Asha Rao \t");

        let input = Normalizer::new(&edition).normalize(&raw).unwrap();

        assert_eq!(input.customer_name, "Asha Rao");
    }

    #[test]
    fn normalize_defaults_installation_location() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::INSTALLATION_LOCATION, "");

        let input = Normalizer::new(&edition).normalize(&raw).unwrap();

        assert_eq!(input.installation_location, InstallationLocation::RoofMounted);
    }

    #[test]
    fn normalize_reads_explicit_gst_and_ppa() {
        let edition = Edition::default();
        let raw = with(
            with(complete_form(), field::GST_PERCENTAGE, "18"),
            field::PPA_PROCESSING_COST,
            "10000",
        );

        let input = Normalizer::new(&edition).normalize(&raw).unwrap();

        assert_eq!(input.gst_percentage, 18.0);
        assert_eq!(input.ppa_processing_cost, 10000.0);
    }

    #[test]
    fn normalize_rejects_unknown_customer_type() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::CUSTOMER_TYPE, "residential");

        let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();

        assert_eq!(errors.fields(), vec![field::CUSTOMER_TYPE]);
        assert!(matches!(
            errors.reason_for(field::CUSTOMER_TYPE),
            Some(ValidationReason::UnknownOption { value, .. }) if value == "residential"
        ));
    }

    #[test]
    fn normalize_rejects_unknown_installation_location() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::INSTALLATION_LOCATION, "Carport");

        let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();

        assert_eq!(errors.fields(), vec![field::INSTALLATION_LOCATION]);
    }

    #[test]
    fn normalize_requires_customer_type_for_new_customers() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::CUSTOMER_TYPE, "");

        let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();

        assert_eq!(errors.reason_for(field::CUSTOMER_TYPE), Some(&ValidationReason::Missing));
    }

    #[test]
    fn normalize_enforces_text_minimums() {
        let edition = Edition::default();
        let raw = with(with(complete_form(), field::NAME, "R"), field::ADDRESS, "Pune");

        let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();

        assert_eq!(errors.fields(), vec![field::NAME, field::ADDRESS]);
        assert_eq!(
            errors.reason_for(field::ADDRESS),
            Some(&ValidationReason::TooShort { min: 5 })
        );
    }

    #[test]
    fn normalize_rejects_zero_system_size() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::SYSTEM_SIZE, "0");

        let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();

        assert_eq!(
            errors.reason_for(field::SYSTEM_SIZE),
            Some(&ValidationReason::NotPositive(0.0))
        );
    }

    #[test]
    fn normalize_rejects_negative_incentives() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::INCENTIVES, "-5000");

        let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();

        assert_eq!(
            errors.reason_for(field::INCENTIVES),
            Some(&ValidationReason::Negative(-5000.0))
        );
    }

    #[test]
    fn normalize_accepts_zero_incentives() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::INCENTIVES, "0");

        let input = Normalizer::new(&edition).normalize(&raw).unwrap();

        assert_eq!(input.incentives, 0.0);
    }

    #[test]
    fn normalize_rejects_zero_gst() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::GST_PERCENTAGE, "0");

        let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();

        assert_eq!(errors.fields(), vec![field::GST_PERCENTAGE]);
    }

    #[test]
    fn normalize_reports_every_bad_field() {
        let edition = Edition::default();
        let raw = RawProposalFields::new();

        let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();

        assert_eq!(
            errors.fields(),
            vec![
                field::NAME,
                field::CONSUMER_NUMBER,
                field::CONNECTION_TYPE,
                field::ADDRESS,
                field::CUSTOMER_TYPE,
                field::CONNECTED_LOAD,
                field::SYSTEM_SIZE,
                field::MONTHLY_BILL,
                field::ROOF_SIZE,
                field::SYSTEM_COST,
                field::INVERTER_CAPACITY,
            ]
        );
    }

    #[test]
    fn normalize_requires_system_cost_without_edition_estimate() {
        let edition = Edition::roi_calculator();
        let raw = with(complete_form(), field::SYSTEM_COST, "");

        let errors = Normalizer::new(&edition).normalize(&raw).unwrap_err();

        assert_eq!(errors.reason_for(field::SYSTEM_COST), Some(&ValidationReason::Missing));
    }

    #[test]
    fn normalize_estimates_system_cost_for_quick_quote() {
        let edition = Edition::quick_quote();
        let raw = with(complete_form(), field::SYSTEM_COST, "");

        let input = Normalizer::new(&edition).normalize(&raw).unwrap();

        assert_eq!(input.system_cost, 350000.0);
    }

    #[test]
    fn normalize_prefers_given_cost_over_quick_quote_estimate() {
        let edition = Edition::quick_quote();

        let input = Normalizer::new(&edition).normalize(&complete_form()).unwrap();

        assert_eq!(input.system_cost, 300000.0);
    }

    // =========================================================================
    // StoredRender mode
    // =========================================================================

    #[test]
    fn stored_render_tolerates_missing_descriptive_fields() {
        let edition = Edition::default();
        let raw = RawProposalFields::from_pairs([
            (field::SYSTEM_SIZE, "5"),
            (field::MONTHLY_BILL, "5000"),
            (field::SYSTEM_COST, "300000"),
        ]);

        let input = Normalizer::new(&edition)
            .with_mode(ValidationMode::StoredRender)
            .normalize(&raw)
            .unwrap();

        assert_eq!(input.customer_name, "");
        assert_eq!(input.customer_type, CustomerType::Residential);
        assert_eq!(input.connected_load_kw, 0.0);
        assert_eq!(input.roof_size_sq_ft, 0.0);
    }

    #[test]
    fn stored_render_skips_text_minimums() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::NAME, "R");

        let input = Normalizer::new(&edition)
            .with_mode(ValidationMode::StoredRender)
            .normalize(&raw)
            .unwrap();

        assert_eq!(input.customer_name, "R");
    }

    #[test]
    fn stored_render_accepts_zero_bill_and_cost() {
        let edition = Edition::default();
        let raw = with(
            with(complete_form(), field::MONTHLY_BILL, "0"),
            field::SYSTEM_COST,
            "0",
        );

        let input = Normalizer::new(&edition)
            .with_mode(ValidationMode::StoredRender)
            .normalize(&raw)
            .unwrap();

        assert_eq!(input.monthly_bill, 0.0);
        assert_eq!(input.system_cost, 0.0);
    }

    #[test]
    fn stored_render_still_rejects_non_numeric_and_negative_values() {
        let edition = Edition::default();
        let raw = with(
            with(complete_form(), field::MONTHLY_BILL, "abc"),
            field::SYSTEM_SIZE,
            "-1",
        );

        let errors = Normalizer::new(&edition)
            .with_mode(ValidationMode::StoredRender)
            .normalize(&raw)
            .unwrap_err();

        assert_eq!(errors.fields(), vec![field::SYSTEM_SIZE, field::MONTHLY_BILL]);
    }

    #[test]
    fn stored_render_still_requires_computational_fields() {
        let edition = Edition::default();
        let raw = RawProposalFields::from_pairs([(field::NAME, "Asha Rao")]);

        let errors = Normalizer::new(&edition)
            .with_mode(ValidationMode::StoredRender)
            .normalize(&raw)
            .unwrap_err();

        assert_eq!(
            errors.fields(),
            vec![field::SYSTEM_SIZE, field::MONTHLY_BILL, field::SYSTEM_COST]
        );
    }

    #[test]
    fn stored_render_rejects_unknown_customer_type() {
        let edition = Edition::default();
        let raw = with(complete_form(), field::CUSTOMER_TYPE, "Industrial");

        let result = Normalizer::new(&edition)
            .with_mode(ValidationMode::StoredRender)
            .normalize(&raw);

        assert!(result.is_err());
    }
}
