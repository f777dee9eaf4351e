//! Weight tables: compiled defaults plus per-context override tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::WeightConfigError;
use crate::types::collections::FxHashMap;
use crate::types::pattern::GeometricPattern;
use crate::types::weights::WeightTable;

/// Raw weight configuration as read from `aar.toml`.
///
/// Keys are pattern names; name resolution and sum validation happen in
/// [`WeightConfig::build_tables`], which runs at configuration-load time.
/// An override table fully replaces the default for its context — tables
/// are never blended.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeightConfig {
    /// Default table; compiled equal weights when absent.
    pub default: Option<HashMap<String, f64>>,
    /// Per-context (mission category) override tables.
    pub overrides: HashMap<String, HashMap<String, f64>>,
}

impl WeightConfig {
    /// Resolve names and validate every table.
    ///
    /// Returns the default table plus one validated table per context.
    /// Any invalid table — unknown pattern name, bad sum, negative or
    /// non-finite weight — rejects the whole configuration.
    pub fn build_tables(
        &self,
    ) -> Result<(WeightTable, FxHashMap<String, WeightTable>), WeightConfigError> {
        let default = match &self.default {
            Some(raw) => parse_table("default", raw)?,
            None => WeightTable::equal_default(),
        };

        let mut overrides = FxHashMap::default();
        for (context, raw) in &self.overrides {
            overrides.insert(context.clone(), parse_table(context, raw)?);
        }

        Ok((default, overrides))
    }
}

fn parse_table(
    context: &str,
    raw: &HashMap<String, f64>,
) -> Result<WeightTable, WeightConfigError> {
    let mut weights = FxHashMap::default();
    for (name, &weight) in raw {
        let pattern = GeometricPattern::from_name(name).ok_or_else(|| {
            WeightConfigError::UnknownPattern {
                context: context.to_string(),
                name: name.clone(),
            }
        })?;
        weights.insert(pattern, weight);
    }
    WeightTable::new(weights)
}
