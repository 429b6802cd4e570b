use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    Residential,
    Commercial,
}

impl CustomerType {
    pub const LABELS: [&'static str; 2] = ["Residential", "Commercial"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Residential" => Some(Self::Residential),
            "Commercial" => Some(Self::Commercial),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_exact_labels() {
        assert_eq!(CustomerType::parse("Residential"), Some(CustomerType::Residential));
        assert_eq!(CustomerType::parse("Commercial"), Some(CustomerType::Commercial));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(CustomerType::parse("residential"), None);
        assert_eq!(CustomerType::parse("COMMERCIAL"), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for label in CustomerType::LABELS {
            let parsed = CustomerType::parse(label).unwrap();
            assert_eq!(parsed.as_str(), label);
        }
    }
}
