use std::collections::BTreeMap;

/// Names of the raw proposal fields as they appear in the customer form and
/// in the proposal query string.
pub mod field {
    pub const CUSTOMER_TYPE: &str = "customerType";
    pub const NAME: &str = "name";
    pub const CONSUMER_NUMBER: &str = "consumerNumber";
    pub const CONNECTION_TYPE: &str = "connectionType";
    pub const ADDRESS: &str = "address";
    pub const CONNECTED_LOAD: &str = "load";
    pub const SYSTEM_SIZE: &str = "systemSize";
    pub const MONTHLY_BILL: &str = "monthlyBill";
    pub const ROOF_SIZE: &str = "roofSize";
    pub const INSTALLATION_LOCATION: &str = "installationLocation";
    pub const SYSTEM_COST: &str = "systemCost";
    pub const INCENTIVES: &str = "incentives";
    pub const PPA_PROCESSING_COST: &str = "ppaProcessingCost";
    pub const GST_PERCENTAGE: &str = "gstPercentage";
    pub const INVERTER_CAPACITY: &str = "inverterCapacity";

    /// Every recognized field, in form order.
    pub const ALL: [&str; 15] = [
        CUSTOMER_TYPE,
        NAME,
        CONSUMER_NUMBER,
        CONNECTION_TYPE,
        ADDRESS,
        CONNECTED_LOAD,
        SYSTEM_SIZE,
        MONTHLY_BILL,
        ROOF_SIZE,
        INSTALLATION_LOCATION,
        SYSTEM_COST,
        INCENTIVES,
        PPA_PROCESSING_COST,
        GST_PERCENTAGE,
        INVERTER_CAPACITY,
    ];
}

/// Untyped proposal fields, exactly as submitted or read back from storage.
///
/// Values are always strings. A value that is empty after trimming counts as
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProposalFields {
    fields: BTreeMap<String, String>,
}

impl RawProposalFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the fields from `(name, value)` pairs. Later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the trimmed value of `name`, or `None` when absent or blank.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RawProposalFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
