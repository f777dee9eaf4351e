//! AAR report ID derivation.

use aar_core::types::PHI;
use xxhash_rust::xxh3::xxh3_128;

/// Derive a stable report ID from subject and evaluation timestamp.
///
/// The hex digest is truncated to ⌊len/φ⌋ characters, the same golden-ratio
/// proportioning the reports themselves are scored against. Identical
/// inputs always produce the same ID.
pub fn generate(subject_id: &str, timestamp: i64) -> String {
    let seed = format!("{subject_id}_{timestamp}_{PHI}");
    let digest = xxh3_128(seed.as_bytes());
    let hex = format!("{digest:032x}");
    let take = (hex.len() as f64 / PHI) as usize;
    format!("aar_{}", &hex[..take])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs_identical_ids() {
        assert_eq!(generate("m1", 1_700_000_000), generate("m1", 1_700_000_000));
    }

    #[test]
    fn test_distinct_subjects_distinct_ids() {
        assert_ne!(generate("m1", 1_700_000_000), generate("m2", 1_700_000_000));
    }

    #[test]
    fn test_id_shape() {
        let id = generate("m1", 1_700_000_000);
        assert!(id.starts_with("aar_"));
        // 32 hex chars proportioned by φ: ⌊32/1.618⌋ = 19.
        assert_eq!(id.len(), 4 + 19);
    }
}
