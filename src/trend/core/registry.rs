//! Metric registry — an immutable, explicitly passed table of
//! [`MetricDefinition`]s keyed by metric key.
//!
//! Purpose
//! -------
//! Replace an implicit module-level lookup table with a value callers own
//! and hand to the engine, so tests and embedders can supply synthetic
//! definitions.
//!
//! Key behaviors
//! -------------
//! - [`MetricRegistry::builtin`] returns the six dashboard metrics.
//! - [`MetricRegistry::new`] validates a caller-supplied set (unique,
//!   non-empty keys).
//! - [`MetricRegistry::from_json`] / [`MetricRegistry::to_json`] read and
//!   write a JSON array of camelCase definition objects.
//!
//! Conventions
//! -----------
//! - Iteration order is the lexicographic order of keys, so serialized
//!   registries are stable.
use std::collections::BTreeMap;

use crate::trend::{
    core::{
        bounds::ValueBounds,
        definition::{
            FavorableDirection, MetricDefinition, MetricDefinitionConfig, ThresholdDirection,
            ThresholdForecast,
        },
    },
    errors::{EngineResult, TrendError},
};

/// MetricRegistry — lookup table from metric key to definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricRegistry {
    definitions: BTreeMap<String, MetricDefinition>,
}

impl MetricRegistry {
    /// Build a registry from already-validated definitions.
    ///
    /// Errors
    /// ------
    /// - `TrendError::DuplicateMetric` if two definitions share a key.
    pub fn new(definitions: impl IntoIterator<Item = MetricDefinition>) -> EngineResult<Self> {
        let mut table = BTreeMap::new();
        for definition in definitions {
            let key = definition.key().to_string();
            if table.insert(key.clone(), definition).is_some() {
                return Err(TrendError::DuplicateMetric { key });
            }
        }
        Ok(MetricRegistry { definitions: table })
    }

    /// The dashboard's built-in metrics.
    ///
    /// | key                | domain     | digits | order | min range | threshold |
    /// |--------------------|------------|--------|-------|-----------|-----------|
    /// | `LogicalLOC`       | `[0, ∞)`   | 0      | 2     | 10        | —         |
    /// | `CC`               | `[0, ∞)`   | 2      | 2     | 1         | max 4     |
    /// | `avLocPerFunction` | `[0, ∞)`   | 1      | 2     | 5         | max 30    |
    /// | `avLocPerClass`    | `[0, ∞)`   | 1      | 2     | 20        | max 200   |
    /// | `CommentsDensity`  | `[0, 100]` | 1      | 2     | 5         | —         |
    /// | `DuplicateCodePct` | `[0, 100]` | 1      | 2     | 5         | max 10    |
    pub fn builtin() -> Self {
        let definitions = [
            builtin_definition(
                "LogicalLOC",
                "Logical lines of code",
                (0.0, f64::INFINITY, 0),
                10.0,
                FavorableDirection::Neutral,
                None,
            ),
            builtin_definition(
                "CC",
                "Cyclomatic complexity",
                (0.0, f64::INFINITY, 2),
                1.0,
                FavorableDirection::Down,
                Some((4.0, "Average cyclomatic complexity will exceed the recommended maximum")),
            ),
            builtin_definition(
                "avLocPerFunction",
                "Average lines of code per function",
                (0.0, f64::INFINITY, 1),
                5.0,
                FavorableDirection::Down,
                Some((30.0, "Functions will grow beyond the recommended average size")),
            ),
            builtin_definition(
                "avLocPerClass",
                "Average lines of code per class",
                (0.0, f64::INFINITY, 1),
                20.0,
                FavorableDirection::Down,
                Some((200.0, "Classes will grow beyond the recommended average size")),
            ),
            builtin_definition(
                "CommentsDensity",
                "Comments density",
                (0.0, 100.0, 1),
                5.0,
                FavorableDirection::Up,
                None,
            ),
            builtin_definition(
                "DuplicateCodePct",
                "Duplicate code percentage",
                (0.0, 100.0, 1),
                5.0,
                FavorableDirection::Down,
                Some((10.0, "Duplicated code will exceed the tolerated share")),
            ),
        ];
        MetricRegistry {
            definitions: definitions.into_iter().map(|d| (d.key.clone(), d)).collect(),
        }
    }

    /// Parse a JSON array of [`MetricDefinitionConfig`] objects.
    ///
    /// Errors
    /// ------
    /// - `TrendError::InvalidRegistryJson` on malformed JSON.
    /// - Any validation error from the definitions themselves.
    /// - `TrendError::DuplicateMetric` on repeated keys.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let configs: Vec<MetricDefinitionConfig> = serde_json::from_str(json)?;
        let definitions =
            configs.into_iter().map(MetricDefinition::try_from).collect::<EngineResult<Vec<_>>>()?;
        MetricRegistry::new(definitions)
    }

    /// Serialize to a pretty-printed JSON array accepted by
    /// [`MetricRegistry::from_json`].
    pub fn to_json(&self) -> EngineResult<String> {
        let configs: Vec<MetricDefinitionConfig> =
            self.definitions.values().map(MetricDefinitionConfig::from).collect();
        Ok(serde_json::to_string_pretty(&configs)?)
    }

    pub fn get(&self, key: &str) -> Option<&MetricDefinition> {
        self.definitions.get(key)
    }

    /// Like [`MetricRegistry::get`] but reports a missing key as an error.
    pub fn require(&self, key: &str) -> EngineResult<&MetricDefinition> {
        self.get(key).ok_or_else(|| TrendError::UnknownMetric { key: key.to_string() })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

// ---- Helper methods ----

fn builtin_definition(
    key: &str, name: &str, (lower, upper, precision): (f64, f64, u32), min_range: f64,
    favorable: FavorableDirection, threshold: Option<(f64, &str)>,
) -> MetricDefinition {
    MetricDefinition {
        key: key.to_string(),
        name: name.to_string(),
        bounds: ValueBounds { lower, upper, precision },
        polynomial_order: 2,
        min_range,
        favorable,
        threshold: threshold.map(|(threshold, description)| ThresholdForecast {
            direction: ThresholdDirection::Max,
            threshold,
            description: description.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify the built-in table and that every entry would also pass the
    // public validators.
    //
    // Given
    // -----
    // - `MetricRegistry::builtin()`.
    //
    // Expect
    // ------
    // - Six keys; each definition survives a config round trip unchanged.
    fn builtin_registry_is_complete_and_valid() {
        // Arrange
        let registry = MetricRegistry::builtin();

        // Act
        let keys: Vec<&str> = registry.keys().collect();

        // Assert
        assert_eq!(
            keys,
            [
                "CC",
                "CommentsDensity",
                "DuplicateCodePct",
                "LogicalLOC",
                "avLocPerClass",
                "avLocPerFunction"
            ]
        );
        for key in registry.keys() {
            let definition = registry.require(key).unwrap();
            let config = MetricDefinitionConfig::from(definition);
            assert_eq!(&MetricDefinition::try_from(config).unwrap(), definition);
        }
        assert!(registry.get("CommentsDensity").unwrap().threshold().is_none());
        assert_eq!(registry.get("CC").unwrap().threshold().unwrap().threshold(), 4.0);
    }

    #[test]
    // Purpose
    // -------
    // Duplicate keys are rejected.
    fn new_rejects_duplicate_keys() {
        // Arrange
        let registry = MetricRegistry::builtin();
        let cc = registry.require("CC").unwrap().clone();

        // Act
        let result = MetricRegistry::new([cc.clone(), cc]);

        // Assert
        assert_eq!(result, Err(TrendError::DuplicateMetric { key: "CC".to_string() }));
    }

    #[test]
    // Purpose
    // -------
    // `require` names the missing key.
    fn require_reports_unknown_metric() {
        let err = MetricRegistry::builtin().require("Halstead").unwrap_err();
        assert_eq!(err, TrendError::UnknownMetric { key: "Halstead".to_string() });
    }

    #[test]
    // Purpose
    // -------
    // JSON round trip reproduces the registry.
    //
    // Given
    // -----
    // - The built-in registry serialized with `to_json`.
    //
    // Expect
    // ------
    // - `from_json` yields an equal registry.
    fn json_round_trip_preserves_registry() {
        // Arrange
        let registry = MetricRegistry::builtin();

        // Act
        let json = registry.to_json().unwrap();
        let parsed = MetricRegistry::from_json(&json).unwrap();

        // Assert
        assert_eq!(parsed, registry);
    }

    #[test]
    // Purpose
    // -------
    // Invalid definitions inside JSON surface their validation error.
    //
    // Given
    // -----
    // - A definition whose lower bound exceeds its upper bound.
    //
    // Expect
    // ------
    // - `InvalidBounds`.
    fn from_json_surfaces_definition_errors() {
        let json = r#"[{"key":"x","lowerBound":5,"upperBound":1,"precision":0,
                        "polynomialOrder":1,"minRange":1}]"#;
        let err = MetricRegistry::from_json(json).unwrap_err();
        assert!(matches!(err, TrendError::InvalidBounds { .. }), "got {err:?}");
    }
}
