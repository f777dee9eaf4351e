//! Ordered compliance levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classified compliance level, ordered worst to best.
///
/// The derived `Ord` follows declaration order, so
/// `Critical < Warning < Good < Excellent`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceLevel {
    /// Immediate intervention required.
    Critical,
    /// Below acceptable; review needed.
    Warning,
    /// Acceptable adherence.
    Good,
    /// Exemplary adherence.
    Excellent,
}

impl ComplianceLevel {
    /// All levels, worst to best.
    pub const ALL: [ComplianceLevel; 4] = [
        ComplianceLevel::Critical,
        ComplianceLevel::Warning,
        ComplianceLevel::Good,
        ComplianceLevel::Excellent,
    ];

    /// Level name as used in configuration files and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    /// Look up a level by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.name() == name)
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
