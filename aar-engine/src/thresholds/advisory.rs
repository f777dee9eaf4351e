//! Per-level advisory data supplied to the report generator.

use aar_core::types::ComplianceLevel;

const DAY_SECS: u64 = 86_400;
const WEEK_SECS: u64 = 7 * DAY_SECS;

/// Static recommendations for a compliance level, embedded verbatim into
/// the generated report.
pub fn recommendations(level: ComplianceLevel) -> &'static [&'static str] {
    match level {
        ComplianceLevel::Excellent => &[
            "Maintain current geometry practices",
            "Share working patterns with other teams",
        ],
        ComplianceLevel::Good => &[
            "Continue current practices with minor refinements",
            "Focus on the weakest pattern in the breakdown",
        ],
        ComplianceLevel::Warning => &[
            "Review pattern adherence and strengthen weak areas",
            "Increase monitoring frequency",
        ],
        ComplianceLevel::Critical => &[
            "Immediate intervention required",
            "Halt non-critical activity until compliance recovers",
            "Implement corrective measures now",
        ],
    }
}

/// Recommended seconds until the next compliance review for a level.
/// Worse levels review sooner.
pub fn review_interval_secs(level: ComplianceLevel) -> u64 {
    match level {
        ComplianceLevel::Excellent => 4 * WEEK_SECS,
        ComplianceLevel::Good => 2 * WEEK_SECS,
        ComplianceLevel::Warning => WEEK_SECS,
        ComplianceLevel::Critical => DAY_SECS,
    }
}
