use serde_json::Value;
use std::str::FromStr;
use crate::error::{FlybyError, Result};
use crate::models::FlatRecord;

/// Default tolerance applied around a single target distance
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Meters per kilometer
const METERS_PER_KM: f64 = 1000.0;

/// Distance constraint, in kilometers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceSpec {
    /// Within `tol` of a target distance
    Around(f64),
    /// Strictly between two distances; tolerance is ignored
    Between(f64, f64),
}

/// Options shared by `ids` and `export`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOptions {
    /// `None` selects every record
    pub distance: Option<DistanceSpec>,
    pub tol: f64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            distance: None,
            tol: DEFAULT_TOLERANCE,
        }
    }
}

impl FilterOptions {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn around(km: f64) -> Self {
        Self {
            distance: Some(DistanceSpec::Around(km)),
            ..Self::default()
        }
    }

    pub fn between(low_km: f64, high_km: f64) -> Self {
        Self {
            distance: Some(DistanceSpec::Between(low_km, high_km)),
            ..Self::default()
        }
    }

    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Check that the tolerance lies in [0, 1] and every bound is finite
    pub fn validate(&self) -> Result<()> {
        if !self.tol.is_finite() || !(0.0..=1.0).contains(&self.tol) {
            return Err(FlybyError::invalid_argument(format!(
                "tol must be between 0 and 1, got {}",
                self.tol
            )));
        }

        match self.distance {
            Some(DistanceSpec::Around(km)) if !km.is_finite() => Err(
                FlybyError::invalid_argument(format!("distance must be finite, got {}", km)),
            ),
            Some(DistanceSpec::Between(low, high)) if !low.is_finite() || !high.is_finite() => {
                Err(FlybyError::invalid_argument(format!(
                    "distance range must be finite, got ({}, {})",
                    low, high
                )))
            }
            _ => Ok(()),
        }
    }
}

impl TryFrom<&Value> for DistanceSpec {
    type Error = FlybyError;

    /// Accepts a JSON number (single distance) or a two-element numeric array (range)
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(DistanceSpec::Around)
                .ok_or_else(|| FlybyError::invalid_argument(format!("unsupported distance {}", n))),
            Value::Array(items) if items.len() == 2 => {
                match (items[0].as_f64(), items[1].as_f64()) {
                    (Some(low), Some(high)) => Ok(DistanceSpec::Between(low, high)),
                    _ => Err(FlybyError::invalid_argument(format!(
                        "distance range must hold two numbers, got {}",
                        value
                    ))),
                }
            }
            other => Err(FlybyError::invalid_argument(format!(
                "distance must be a number or a (low, high) pair, got {}",
                other
            ))),
        }
    }
}

impl DistanceSpec {
    /// Parse an optional JSON distance; `null` or absent means no constraint
    pub fn from_optional_value(value: Option<&Value>) -> Result<Option<Self>> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(v) => DistanceSpec::try_from(v).map(Some),
        }
    }
}

impl FromStr for DistanceSpec {
    type Err = FlybyError;

    /// Parses `"100"` or `"90,110"`
    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| FlybyError::invalid_argument(format!("invalid distance '{}'", s)))
        };

        let parts: Vec<&str> = s.split(',').collect();
        match parts.as_slice() {
            [km] => parse(*km).map(DistanceSpec::Around),
            [low, high] => Ok(DistanceSpec::Between(parse(*low)?, parse(*high)?)),
            _ => Err(FlybyError::invalid_argument(format!(
                "distance must be a number or a 'low,high' pair, got '{}'",
                s
            ))),
        }
    }
}

/// Exclusive bounds in meters, or `None` when every record passes
#[inline]
pub fn distance_bounds(options: &FilterOptions) -> Option<(f64, f64)> {
    match options.distance? {
        DistanceSpec::Around(km) => {
            let meters = km * METERS_PER_KM;
            Some(((1.0 - options.tol) * meters, (1.0 + options.tol) * meters))
        }
        DistanceSpec::Between(low, high) => Some((low * METERS_PER_KM, high * METERS_PER_KM)),
    }
}

/// Build a predicate selecting records by their `distance` field
///
/// Both bounds are exclusive. Records without a numeric `distance` only
/// pass when no distance constraint is set.
pub fn distance_filter(options: &FilterOptions) -> impl Fn(&FlatRecord) -> bool {
    let bounds = distance_bounds(options);

    move |record: &FlatRecord| match bounds {
        None => true,
        Some((low, high)) => record
            .distance()
            .map_or(false, |meters| meters > low && meters < high),
    }
}
