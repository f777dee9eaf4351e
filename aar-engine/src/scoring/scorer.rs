//! Weighted-mean aggregation of pattern results.

use aar_core::errors::ScoringError;
use aar_core::types::{ComplianceScore, PatternResult, WeightTable};

/// Combine pattern results and their weights into a compliance score.
///
/// `overall` = Σ confidenceᵢ × weightᵢ over the patterns the table
/// references, clamped to [0,1] to absorb floating-point drift. Results for
/// patterns the table does not reference (failed-validation markers under
/// the renormalize policy) stay in the breakdown but contribute nothing.
///
/// Fails with `IncompletePatternSet` when a weighted pattern has no result.
pub fn score(
    results: &[PatternResult],
    weights: &WeightTable,
) -> Result<ComplianceScore, ScoringError> {
    for pattern in weights.patterns() {
        if !results.iter().any(|r| r.pattern == pattern) {
            return Err(ScoringError::IncompletePatternSet { pattern });
        }
    }

    let overall: f64 = results
        .iter()
        .filter_map(|r| weights.get(r.pattern).map(|w| r.confidence * w))
        .sum();

    Ok(ComplianceScore {
        overall: overall.clamp(0.0, 1.0),
        breakdown: results.iter().cloned().collect(),
        weights_used: weights.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aar_core::types::collections::{FxHashMap, FxHashSet};
    use aar_core::types::GeometricPattern;

    fn result(pattern: GeometricPattern, confidence: f64) -> PatternResult {
        PatternResult::new(pattern, confidence, "test")
    }

    fn full_results(confidence: f64) -> Vec<PatternResult> {
        GeometricPattern::ALL
            .into_iter()
            .map(|p| result(p, confidence))
            .collect()
    }

    #[test]
    fn test_all_perfect_scores_one() {
        let s = score(&full_results(1.0), &WeightTable::equal_default()).unwrap();
        assert!((s.overall - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_mean() {
        let mut weights = FxHashMap::default();
        weights.insert(GeometricPattern::Circle, 0.75);
        weights.insert(GeometricPattern::Spiral, 0.25);
        let table = WeightTable::new(weights).unwrap();

        let results = vec![
            result(GeometricPattern::Circle, 0.8),
            result(GeometricPattern::Spiral, 0.4),
        ];
        let s = score(&results, &table).unwrap();
        assert!((s.overall - (0.8 * 0.75 + 0.4 * 0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_missing_weighted_pattern_fails() {
        let results = vec![result(GeometricPattern::Circle, 0.8)];
        let err = score(&results, &WeightTable::equal_default()).unwrap_err();
        assert!(matches!(err, ScoringError::IncompletePatternSet { .. }));
    }

    #[test]
    fn test_unweighted_result_contributes_nothing() {
        // Fractal excluded from the table; its zero-confidence marker stays
        // in the breakdown without dragging the overall down.
        let mut excluded = FxHashSet::default();
        excluded.insert(GeometricPattern::Fractal);
        let table = WeightTable::equal_default()
            .renormalized_excluding(&excluded)
            .unwrap();

        let mut results = full_results(1.0);
        results
            .iter_mut()
            .find(|r| r.pattern == GeometricPattern::Fractal)
            .unwrap()
            .confidence = 0.0;

        let s = score(&results, &table).unwrap();
        assert!((s.overall - 1.0).abs() < 1e-12);
        assert_eq!(s.breakdown.len(), 5);
    }

    #[test]
    fn test_overall_clamped() {
        // Confidences at 1.0 with a weight sum at the top of the tolerance
        // band can nudge past 1.0; the clamp absorbs it.
        let s = score(&full_results(1.0), &WeightTable::equal_default()).unwrap();
        assert!(s.overall <= 1.0);
    }
}
