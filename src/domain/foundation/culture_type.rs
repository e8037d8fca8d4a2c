//! Competing Values culture types and OCAI perspectives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One of the four Competing Values Framework culture types.
///
/// Enumeration order is significant: it is the tie-break order for gap
/// ranking and dominant-type selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CultureType {
    Clan,
    Adhocracy,
    Market,
    Hierarchy,
}

impl CultureType {
    /// All culture types in enumeration order.
    pub const ALL: [CultureType; 4] = [
        CultureType::Clan,
        CultureType::Adhocracy,
        CultureType::Market,
        CultureType::Hierarchy,
    ];

    /// Maps an ipsative alternative key (A-D) to its culture type.
    pub fn for_alternative(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'A' => Some(CultureType::Clan),
            'B' => Some(CultureType::Adhocracy),
            'C' => Some(CultureType::Market),
            'D' => Some(CultureType::Hierarchy),
            _ => None,
        }
    }

    /// Returns the ipsative alternative key for this culture type.
    pub fn alternative(&self) -> char {
        match self {
            CultureType::Clan => 'A',
            CultureType::Adhocracy => 'B',
            CultureType::Market => 'C',
            CultureType::Hierarchy => 'D',
        }
    }

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CultureType::Clan => "clan",
            CultureType::Adhocracy => "adhocracy",
            CultureType::Market => "market",
            CultureType::Hierarchy => "hierarchy",
        }
    }

    /// Returns the report label shown to Turkish-speaking administrators.
    pub fn label(&self) -> &'static str {
        match self {
            CultureType::Clan => "Klan (Aile)",
            CultureType::Adhocracy => "Adhokrasi (Yenilik)",
            CultureType::Market => "Pazar (Rekabet)",
            CultureType::Hierarchy => "Hiyerarşi (Kontrol)",
        }
    }
}

impl fmt::Display for CultureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CultureType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clan" => Ok(CultureType::Clan),
            "adhocracy" => Ok(CultureType::Adhocracy),
            "market" => Ok(CultureType::Market),
            "hierarchy" => Ok(CultureType::Hierarchy),
            other => Err(ValidationError::invalid_format(
                "culture_type",
                format!("unknown culture type '{}'", other),
            )),
        }
    }
}

/// Which state an OCAI answer describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CulturePerspective {
    /// The culture as it is today.
    #[serde(alias = "mevcut")]
    Current,
    /// The culture respondents would like to see.
    #[serde(alias = "tercih_edilen")]
    Preferred,
}

impl CulturePerspective {
    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CulturePerspective::Current => "current",
            CulturePerspective::Preferred => "preferred",
        }
    }
}

impl FromStr for CulturePerspective {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" | "mevcut" => Ok(CulturePerspective::Current),
            "preferred" | "tercih_edilen" => Ok(CulturePerspective::Preferred),
            other => Err(ValidationError::invalid_format(
                "perspective",
                format!("unknown perspective '{}'", other),
            )),
        }
    }
}
