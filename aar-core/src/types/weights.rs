//! Validated pattern weight tables.

use serde::{Deserialize, Serialize};

use super::collections::{FxHashMap, FxHashSet};
use super::pattern::GeometricPattern;
use crate::errors::WeightConfigError;

/// Tolerance applied when checking that weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A validated mapping from pattern to relative weight.
///
/// Construction is the only validation point: every table in circulation
/// has finite, non-negative weights summing to 1.0 within
/// [`WEIGHT_SUM_TOLERANCE`]. Scoring never re-checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: FxHashMap<GeometricPattern, f64>,
}

impl WeightTable {
    /// Build a table from raw weights, rejecting invalid configurations.
    pub fn new(weights: FxHashMap<GeometricPattern, f64>) -> Result<Self, WeightConfigError> {
        if weights.is_empty() {
            return Err(WeightConfigError::EmptyTable);
        }
        for (&pattern, &weight) in &weights {
            if !weight.is_finite() {
                return Err(WeightConfigError::NonFiniteWeight { pattern });
            }
            if weight < 0.0 {
                return Err(WeightConfigError::NegativeWeight { pattern, weight });
            }
        }
        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightConfigError::BadSum { sum });
        }
        Ok(Self { weights })
    }

    /// The compiled default: all five patterns weighted equally.
    pub fn equal_default() -> Self {
        let weights = GeometricPattern::ALL.into_iter().map(|p| (p, 0.2)).collect();
        Self { weights }
    }

    /// Weight for a pattern, if the table references it.
    pub fn get(&self, pattern: GeometricPattern) -> Option<f64> {
        self.weights.get(&pattern).copied()
    }

    /// Patterns referenced by this table, in canonical order.
    pub fn patterns(&self) -> impl Iterator<Item = GeometricPattern> + '_ {
        GeometricPattern::ALL
            .into_iter()
            .filter(|p| self.weights.contains_key(p))
    }

    /// Number of patterns referenced.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Drop the excluded patterns and renormalize the remainder to sum 1.0.
    ///
    /// Returns `None` when nothing usable remains (all patterns excluded, or
    /// the remaining weights sum to zero).
    pub fn renormalized_excluding(
        &self,
        excluded: &FxHashSet<GeometricPattern>,
    ) -> Option<Self> {
        let remaining: FxHashMap<GeometricPattern, f64> = self
            .weights
            .iter()
            .filter(|(p, _)| !excluded.contains(p))
            .map(|(&p, &w)| (p, w))
            .collect();
        let sum: f64 = remaining.values().sum();
        if remaining.is_empty() || sum <= 0.0 {
            return None;
        }
        let weights = remaining.into_iter().map(|(p, w)| (p, w / sum)).collect();
        Some(Self { weights })
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::equal_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(GeometricPattern, f64)]) -> FxHashMap<GeometricPattern, f64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_equal_default_sums_to_one() {
        let t = WeightTable::equal_default();
        let sum: f64 = GeometricPattern::ALL
            .into_iter()
            .filter_map(|p| t.get(p))
            .sum();
        assert!((sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn test_bad_sum_rejected() {
        let err = WeightTable::new(table(&[
            (GeometricPattern::Circle, 0.5),
            (GeometricPattern::Spiral, 0.6),
        ]))
        .unwrap_err();
        assert!(matches!(err, WeightConfigError::BadSum { .. }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = WeightTable::new(table(&[
            (GeometricPattern::Circle, -0.2),
            (GeometricPattern::Spiral, 1.2),
        ]))
        .unwrap_err();
        assert!(matches!(err, WeightConfigError::NegativeWeight { .. }));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let err = WeightTable::new(table(&[(GeometricPattern::Circle, f64::NAN)])).unwrap_err();
        assert!(matches!(err, WeightConfigError::NonFiniteWeight { .. }));
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = WeightTable::new(FxHashMap::default()).unwrap_err();
        assert!(matches!(err, WeightConfigError::EmptyTable));
    }

    #[test]
    fn test_renormalize_excluding_restores_sum() {
        let t = WeightTable::equal_default();
        let mut excluded = FxHashSet::default();
        excluded.insert(GeometricPattern::Fractal);
        let renorm = t.renormalized_excluding(&excluded).unwrap();
        assert_eq!(renorm.len(), 4);
        let sum: f64 = GeometricPattern::ALL
            .into_iter()
            .filter_map(|p| renorm.get(p))
            .sum();
        assert!((sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!(renorm.get(GeometricPattern::Fractal).is_none());
    }

    #[test]
    fn test_renormalize_excluding_everything_is_none() {
        let t = WeightTable::equal_default();
        let excluded: FxHashSet<_> = GeometricPattern::ALL.into_iter().collect();
        assert!(t.renormalized_excluding(&excluded).is_none());
    }
}
