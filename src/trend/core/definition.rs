//! Metric definitions — static per-metric configuration consumed by the trend
//! engine.
//!
//! Purpose
//! -------
//! Describe one supported quality metric: its identity, value domain and
//! precision, the smoothing degree used for its historical curve, the
//! minimum span of its chart axis, which direction of change is favorable,
//! and an optional danger threshold whose crossing the engine forecasts.
//!
//! Key behaviors
//! -------------
//! - Build validated [`MetricDefinition`] values via
//!   [`MetricDefinition::new`] and [`MetricDefinition::with_threshold`].
//! - Round-trip definitions through [`MetricDefinitionConfig`], a plain
//!   serde carrier using the dashboard's camelCase field names, so registries
//!   can be loaded from JSON.
//!
//! Invariants & assumptions
//! ------------------------
//! - Keys are non-empty; bounds obey the [`ValueBounds`] invariants.
//! - `min_range` is finite and `>= 0`; threshold values are finite.
//! - `favorable` never influences computation; it is carried for the
//!   presentation layer.
//!
//! Testing notes
//! -------------
//! - Unit tests cover validation branches, threshold comparisons in both
//!   directions, and config conversion in both directions.
use crate::trend::{
    core::bounds::ValueBounds,
    errors::{EngineResult, TrendError},
};
use serde::{Deserialize, Serialize};

/// Which side of the threshold counts as "crossed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdDirection {
    /// Crossed when the value rises to or above the threshold.
    Max,
    /// Crossed when the value falls to or below the threshold.
    Min,
}

/// Which raw direction of change is good news for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavorableDirection {
    Up,
    Down,
    #[default]
    Neutral,
}

/// ThresholdForecast — a danger level whose crossing the engine predicts.
///
/// Fields
/// ------
/// - `direction`: [`ThresholdDirection`]
/// - `threshold`: `f64`, finite.
/// - `description`: free text for the forecast sentence shown to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdForecast {
    pub(crate) direction: ThresholdDirection,
    pub(crate) threshold: f64,
    #[serde(default)]
    pub(crate) description: String,
}

impl ThresholdForecast {
    /// Construct a validated threshold.
    ///
    /// Errors
    /// ------
    /// - `TrendError::InvalidThreshold` when `threshold` is not finite.
    pub fn new(
        direction: ThresholdDirection, threshold: f64, description: impl Into<String>,
    ) -> EngineResult<Self> {
        let forecast = ThresholdForecast { direction, threshold, description: description.into() };
        forecast.validate()?;
        Ok(forecast)
    }

    pub fn direction(&self) -> ThresholdDirection {
        self.direction
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `value` has reached the threshold from the dangerous side.
    pub fn is_crossed_by(&self, value: f64) -> bool {
        match self.direction {
            ThresholdDirection::Max => value >= self.threshold,
            ThresholdDirection::Min => value <= self.threshold,
        }
    }

    fn validate(&self) -> EngineResult<()> {
        if !self.threshold.is_finite() {
            return Err(TrendError::InvalidThreshold { value: self.threshold });
        }
        Ok(())
    }
}

/// MetricDefinition — validated configuration for one quality metric.
///
/// Purpose
/// -------
/// Carry everything the engine needs to turn a raw per-commit series of
/// this metric into a [`crate::trend::TrendResult`].
///
/// Fields
/// ------
/// - `key`: registry key (e.g. `"LogicalLOC"`).
/// - `name`: human-readable label.
/// - `bounds`: [`ValueBounds`] domain clamp and precision.
/// - `polynomial_order`: desired smoothing degree; the effective degree is
///   capped at `len − 1` for short series.
/// - `min_range`: minimum display-axis width.
/// - `favorable`: presentation hint only.
/// - `threshold`: optional [`ThresholdForecast`].
///
/// Notes
/// -----
/// - Fields are `pub(crate)` so the built-in registry can assemble
///   definitions from compile-time constants; external callers go through
///   [`MetricDefinition::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct MetricDefinition {
    pub(crate) key: String,
    pub(crate) name: String,
    pub(crate) bounds: ValueBounds,
    pub(crate) polynomial_order: usize,
    pub(crate) min_range: f64,
    pub(crate) favorable: FavorableDirection,
    pub(crate) threshold: Option<ThresholdForecast>,
}

impl MetricDefinition {
    /// Construct a validated definition without a threshold.
    ///
    /// Errors
    /// ------
    /// - `TrendError::EmptyMetricKey` when `key` is empty.
    /// - `TrendError::InvalidMinRange` when `min_range` is negative or not
    ///   finite.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use quality_trends::trend::core::{
    /// #     bounds::ValueBounds,
    /// #     definition::{
    /// #         FavorableDirection, MetricDefinition, ThresholdDirection, ThresholdForecast,
    /// #     },
    /// # };
    /// let cc = MetricDefinition::new(
    ///     "CC",
    ///     "Cyclomatic complexity",
    ///     ValueBounds::new(0.0, f64::INFINITY, 2).unwrap(),
    ///     2,
    ///     1.0,
    ///     FavorableDirection::Down,
    /// )
    /// .unwrap()
    /// .with_threshold(ThresholdForecast::new(ThresholdDirection::Max, 4.0, "complex").unwrap());
    /// assert_eq!(cc.threshold().map(|t| t.threshold()), Some(4.0));
    /// ```
    pub fn new(
        key: impl Into<String>, name: impl Into<String>, bounds: ValueBounds,
        polynomial_order: usize, min_range: f64, favorable: FavorableDirection,
    ) -> EngineResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(TrendError::EmptyMetricKey);
        }
        if !min_range.is_finite() || min_range < 0.0 {
            return Err(TrendError::InvalidMinRange { value: min_range });
        }
        Ok(MetricDefinition {
            key,
            name: name.into(),
            bounds,
            polynomial_order,
            min_range,
            favorable,
            threshold: None,
        })
    }

    /// Attach a danger threshold.
    pub fn with_threshold(mut self, threshold: ThresholdForecast) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &ValueBounds {
        &self.bounds
    }

    pub fn polynomial_order(&self) -> usize {
        self.polynomial_order
    }

    pub fn min_range(&self) -> f64 {
        self.min_range
    }

    pub fn favorable(&self) -> FavorableDirection {
        self.favorable
    }

    pub fn threshold(&self) -> Option<&ThresholdForecast> {
        self.threshold.as_ref()
    }
}

/// MetricDefinitionConfig — serde carrier for [`MetricDefinition`].
///
/// `lowerBound` / `upperBound` may be omitted for metrics with no natural
/// floor or ceiling; they then map to `-inf` / `+inf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDefinitionConfig {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
    pub precision: u32,
    pub polynomial_order: usize,
    pub min_range: f64,
    #[serde(default)]
    pub favorable: FavorableDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_forecast: Option<ThresholdForecast>,
}

impl TryFrom<MetricDefinitionConfig> for MetricDefinition {
    type Error = TrendError;

    fn try_from(config: MetricDefinitionConfig) -> EngineResult<Self> {
        let bounds = ValueBounds::new(
            config.lower_bound.unwrap_or(f64::NEG_INFINITY),
            config.upper_bound.unwrap_or(f64::INFINITY),
            config.precision,
        )?;
        let name = if config.name.is_empty() { config.key.clone() } else { config.name };
        let definition = MetricDefinition::new(
            config.key,
            name,
            bounds,
            config.polynomial_order,
            config.min_range,
            config.favorable,
        )?;
        match config.threshold_forecast {
            Some(threshold) => {
                threshold.validate()?;
                Ok(definition.with_threshold(threshold))
            }
            None => Ok(definition),
        }
    }
}

impl From<&MetricDefinition> for MetricDefinitionConfig {
    fn from(definition: &MetricDefinition) -> Self {
        let lower = definition.bounds.lower();
        let upper = definition.bounds.upper();
        MetricDefinitionConfig {
            key: definition.key.clone(),
            name: definition.name.clone(),
            lower_bound: lower.is_finite().then_some(lower),
            upper_bound: upper.is_finite().then_some(upper),
            precision: definition.bounds.precision(),
            polynomial_order: definition.polynomial_order,
            min_range: definition.min_range,
            favorable: definition.favorable,
            threshold_forecast: definition.threshold.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_bounds() -> ValueBounds {
        ValueBounds::new(0.0, 100.0, 1).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify that `new` rejects empty keys and bad minimum ranges.
    //
    // Given
    // -----
    // - An empty key; then `min_range` of −1 and NaN.
    //
    // Expect
    // ------
    // - `EmptyMetricKey`, then `InvalidMinRange` twice.
    fn metric_definition_new_rejects_invalid_inputs() {
        let empty = MetricDefinition::new("", "x", percent_bounds(), 2, 5.0, Default::default());
        assert_eq!(empty, Err(TrendError::EmptyMetricKey));

        for bad in [-1.0, f64::NAN] {
            match MetricDefinition::new("k", "x", percent_bounds(), 2, bad, Default::default()) {
                Err(TrendError::InvalidMinRange { .. }) => {}
                other => panic!("expected InvalidMinRange, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Check `is_crossed_by` for both directions, including equality.
    //
    // Given
    // -----
    // - Max threshold at 4 and Min threshold at 10.
    //
    // Expect
    // ------
    // - Max: 4 and 5 cross, 3.99 does not. Min: 10 and 2 cross, 11 does not.
    fn threshold_is_crossed_by_respects_direction() {
        // Arrange
        let max = ThresholdForecast::new(ThresholdDirection::Max, 4.0, "").unwrap();
        let min = ThresholdForecast::new(ThresholdDirection::Min, 10.0, "").unwrap();

        // Act / Assert
        assert!(max.is_crossed_by(4.0) && max.is_crossed_by(5.0) && !max.is_crossed_by(3.99));
        assert!(min.is_crossed_by(10.0) && min.is_crossed_by(2.0) && !min.is_crossed_by(11.0));
    }

    #[test]
    // Purpose
    // -------
    // Non-finite thresholds are rejected.
    fn threshold_new_rejects_non_finite_value() {
        let err = ThresholdForecast::new(ThresholdDirection::Max, f64::INFINITY, "").unwrap_err();
        assert!(matches!(err, TrendError::InvalidThreshold { .. }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure config → definition → config preserves every field, including
    // an open upper bound and a threshold.
    //
    // Given
    // -----
    // - A camelCase JSON object without `upperBound`.
    //
    // Expect
    // ------
    // - The definition has `upper = +inf`; converting back omits it again.
    fn config_conversion_preserves_fields() {
        // Arrange
        let json = r#"{
            "key": "CC",
            "name": "Cyclomatic complexity",
            "lowerBound": 0,
            "precision": 2,
            "polynomialOrder": 2,
            "minRange": 1,
            "favorable": "down",
            "thresholdForecast": { "direction": "max", "threshold": 4, "description": "hot" }
        }"#;
        let config: MetricDefinitionConfig = serde_json::from_str(json).unwrap();

        // Act
        let definition = MetricDefinition::try_from(config.clone()).unwrap();
        let back = MetricDefinitionConfig::from(&definition);

        // Assert
        assert_eq!(definition.bounds().upper(), f64::INFINITY);
        assert_eq!(definition.favorable(), FavorableDirection::Down);
        assert_eq!(definition.threshold().map(|t| t.direction()), Some(ThresholdDirection::Max));
        assert_eq!(back, config);
    }

    #[test]
    // Purpose
    // -------
    // An omitted `lowerBound` leaves the metric open below, like an omitted
    // `upperBound` leaves it open above.
    //
    // Given
    // -----
    // - A JSON object with only `upperBound: 10`.
    //
    // Expect
    // ------
    // - Bounds `(-inf, 10]`; negative values pass `clamp_round` untouched;
    //   converting back omits `lowerBound` again.
    fn config_without_lower_bound_is_open_below() {
        // Arrange
        let config: MetricDefinitionConfig = serde_json::from_str(
            r#"{"key":"Delta","name":"Churn delta","upperBound":10,
                "precision":1,"polynomialOrder":1,"minRange":1}"#,
        )
        .unwrap();

        // Act
        let definition = MetricDefinition::try_from(config.clone()).unwrap();
        let back = MetricDefinitionConfig::from(&definition);

        // Assert
        assert_eq!(definition.bounds().lower(), f64::NEG_INFINITY);
        assert_eq!(definition.bounds().clamp_round(-1234.56), -1234.6);
        assert_eq!(definition.bounds().clamp_round(12.0), 10.0);
        assert_eq!(back.lower_bound, None);
        assert_eq!(back, config);
    }

    #[test]
    // Purpose
    // -------
    // An empty `name` falls back to the key.
    fn config_without_name_uses_key() {
        let config: MetricDefinitionConfig = serde_json::from_str(
            r#"{"key":"LogicalLOC","precision":0,"polynomialOrder":2,"minRange":10}"#,
        )
        .unwrap();
        let definition = MetricDefinition::try_from(config).unwrap();
        assert_eq!(definition.name(), "LogicalLOC");
    }
}
