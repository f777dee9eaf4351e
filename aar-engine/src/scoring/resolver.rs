//! Per-context weight resolution.

use aar_core::config::WeightConfig;
use aar_core::errors::WeightConfigError;
use aar_core::types::collections::FxHashMap;
use aar_core::types::WeightTable;

/// Resolves the weight table for an evaluation context (mission category).
///
/// All tables are validated once at construction; resolution itself is an
/// infallible lookup. An override fully replaces the default table for its
/// context — tables are never blended.
pub struct WeightResolver {
    default: WeightTable,
    overrides: FxHashMap<String, WeightTable>,
}

impl WeightResolver {
    /// Build a resolver from raw configuration, validating every table.
    pub fn from_config(config: &WeightConfig) -> Result<Self, WeightConfigError> {
        let (default, overrides) = config.build_tables()?;
        Ok(Self { default, overrides })
    }

    /// Resolver with compiled equal weights and no overrides.
    pub fn with_defaults() -> Self {
        Self {
            default: WeightTable::equal_default(),
            overrides: FxHashMap::default(),
        }
    }

    /// The weight table for a context. Unknown or absent contexts fall back
    /// to the default table.
    pub fn resolve(&self, context: Option<&str>) -> &WeightTable {
        context
            .and_then(|c| self.overrides.get(c))
            .unwrap_or(&self.default)
    }

    /// Contexts with override tables.
    pub fn override_contexts(&self) -> impl Iterator<Item = &str> {
        self.overrides.keys().map(String::as_str)
    }
}
