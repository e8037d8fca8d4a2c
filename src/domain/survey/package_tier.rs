//! Package tiers and the modules each tier unlocks.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ModuleCode, ValidationError};

/// Commercial package a tenant organisation has purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    /// Culture, quality and engagement scales.
    Starter,
    /// Adds the stakeholder and strategic-plan indices.
    Professional,
    /// Everything, including the 360° leadership review.
    Enterprise,
}

static PACKAGE_MODULES: Lazy<HashMap<PackageTier, Vec<ModuleCode>>> = Lazy::new(|| {
    use ModuleCode::*;
    HashMap::from([
        (PackageTier::Starter, vec![M1Ocai, M2Qci, M4Uwes]),
        (PackageTier::Professional, vec![M1Ocai, M2Qci, M4Uwes, M5Pke, M6Spu]),
        (
            PackageTier::Enterprise,
            vec![M1Ocai, M2Qci, M3Msai, M4Uwes, M5Pke, M6Spu],
        ),
    ])
});

impl PackageTier {
    /// Modules available to this tier.
    ///
    /// | Tier | Modules |
    /// |------|---------|
    /// | Starter | M1, M2, M4 |
    /// | Professional | M1, M2, M4, M5, M6 |
    /// | Enterprise | all six |
    pub fn allowed_modules(&self) -> &'static [ModuleCode] {
        PACKAGE_MODULES
            .get(self)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if the tier includes `module`.
    pub fn includes(&self, module: ModuleCode) -> bool {
        self.allowed_modules().contains(&module)
    }

    /// Returns the numeric rank of this tier for comparison.
    pub fn rank(&self) -> u8 {
        match self {
            PackageTier::Starter => 0,
            PackageTier::Professional => 1,
            PackageTier::Enterprise => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageTier::Starter => "starter",
            PackageTier::Professional => "professional",
            PackageTier::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Ok(PackageTier::Starter),
            "professional" => Ok(PackageTier::Professional),
            "enterprise" => Ok(PackageTier::Enterprise),
            other => Err(ValidationError::invalid_format(
                "package_tier",
                format!("unknown package tier '{}'", other),
            )),
        }
    }
}
