use serde::{Deserialize, Serialize};

/// Where the array is mounted. Descriptive only; it does not change any figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallationLocation {
    #[default]
    RoofMounted,
    GroundMounted,
}

impl InstallationLocation {
    pub const LABELS: [&'static str; 2] = ["Roof Mounted", "Ground Mounted"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoofMounted => "Roof Mounted",
            Self::GroundMounted => "Ground Mounted",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Roof Mounted" => Some(Self::RoofMounted),
            "Ground Mounted" => Some(Self::GroundMounted),
            _ => None,
        }
    }
}
