use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Strava activity identifier
pub type ActivityId = u64;

/// Payload returned by the Flyby matches endpoint
///
/// `activity` and `athletes` are passed through untouched. All three keys
/// are required; a body missing any of them is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResponse {
    pub activity: Value,
    pub matches: Vec<Match>,
    pub athletes: Value,
}

/// One matched activity together with its correlation metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "otherActivity")]
    pub other_activity: Map<String, Value>,
    pub correlation: Map<String, Value>,
}

/// A match with `otherActivity` and `correlation` merged into one mapping
///
/// Well-known keys:
/// - `id`, `name`, `activityType`, `athleteId` (from the matched activity)
/// - `distance` (meters), `elapsedTime` (seconds), `closestDistance`,
///   `closestPoint`, `spatialCorrelation`, `startTime` (seconds since epoch)
///
/// Any other key the service returns is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatRecord(Map<String, Value>);

impl FlatRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    pub fn id(&self) -> Option<ActivityId> {
        self.get("id").and_then(Value::as_u64)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn activity_type(&self) -> Option<&str> {
        self.get("activityType").and_then(Value::as_str)
    }

    pub fn athlete_id(&self) -> Option<u64> {
        self.get("athleteId").and_then(Value::as_u64)
    }

    /// Overall distance of the matched activity in meters
    pub fn distance(&self) -> Option<f64> {
        self.get("distance").and_then(Value::as_f64)
    }

    /// Elapsed time of the matched activity in seconds
    pub fn elapsed_time(&self) -> Option<f64> {
        self.get("elapsedTime").and_then(Value::as_f64)
    }

    pub fn closest_distance(&self) -> Option<f64> {
        self.get("closestDistance").and_then(Value::as_f64)
    }

    pub fn spatial_correlation(&self) -> Option<f64> {
        self.get("spatialCorrelation").and_then(Value::as_f64)
    }

    /// Start of the matched activity, converted from seconds since epoch
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        let secs = self.get("startTime")?;
        let secs = secs
            .as_i64()
            .or_else(|| secs.as_f64().map(|s| s.trunc() as i64))?;
        DateTime::from_timestamp(secs, 0)
    }
}

impl From<Map<String, Value>> for FlatRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
