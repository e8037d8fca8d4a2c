//! Survey module codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The closed set of survey instruments a campaign can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModuleCode {
    /// Organizational Culture Assessment Instrument (ipsative).
    #[serde(rename = "M1_OCAI")]
    M1Ocai,
    /// Quality Culture Inventory.
    #[serde(rename = "M2_QCI")]
    M2Qci,
    /// Management Skills Assessment Instrument (360°).
    #[serde(rename = "M3_MSAI")]
    M3Msai,
    /// Utrecht Work Engagement Scale.
    #[serde(rename = "M4_UWES")]
    M4Uwes,
    /// Stakeholder Engagement Index.
    #[serde(rename = "M5_PKE")]
    M5Pke,
    /// Strategic Plan Alignment.
    #[serde(rename = "M6_SPU")]
    M6Spu,
}

impl ModuleCode {
    /// All module codes in catalog order.
    pub const ALL: [ModuleCode; 6] = [
        ModuleCode::M1Ocai,
        ModuleCode::M2Qci,
        ModuleCode::M3Msai,
        ModuleCode::M4Uwes,
        ModuleCode::M5Pke,
        ModuleCode::M6Spu,
    ];

    /// Returns the wire code, e.g. `M1_OCAI`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleCode::M1Ocai => "M1_OCAI",
            ModuleCode::M2Qci => "M2_QCI",
            ModuleCode::M3Msai => "M3_MSAI",
            ModuleCode::M4Uwes => "M4_UWES",
            ModuleCode::M5Pke => "M5_PKE",
            ModuleCode::M6Spu => "M6_SPU",
        }
    }
}

impl fmt::Display for ModuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        ModuleCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| {
                ValidationError::invalid_format("module", format!("unknown module code '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_code_serializes_to_wire_code() {
        let json = serde_json::to_string(&ModuleCode::M4Uwes).unwrap();
        assert_eq!(json, "\"M4_UWES\"");
    }

    #[test]
    fn module_code_deserializes_from_wire_code() {
        let code: ModuleCode = serde_json::from_str("\"M6_SPU\"").unwrap();
        assert_eq!(code, ModuleCode::M6Spu);
    }

    #[test]
    fn module_code_rejects_unknown_symbol() {
        assert!(serde_json::from_str::<ModuleCode>("\"M7_XYZ\"").is_err());
        assert!("M7_XYZ".parse::<ModuleCode>().is_err());
    }

    #[test]
    fn module_code_parses_lowercase_query_values() {
        assert_eq!("m2_qci".parse::<ModuleCode>().unwrap(), ModuleCode::M2Qci);
    }

    #[test]
    fn display_matches_as_str() {
        for code in ModuleCode::ALL {
            assert_eq!(code.to_string(), code.as_str());
        }
    }
}
