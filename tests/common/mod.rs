// Shared fixtures for Flyby tests

#![allow(dead_code)]

use serde_json::{json, Value};

/// Total number of matches in the generated payload
pub const FIXTURE_MATCHES: usize = 751;

/// Distances (meters) for the generated payload
///
/// - 68 records strictly inside 95km..105km
/// - 154 more strictly inside 90km..110km
/// - 529 records outside 90km..110km
///
/// No value sits on a 90/95/105/110 km boundary.
pub fn fixture_distances() -> Vec<f64> {
    let mut distances = Vec::with_capacity(FIXTURE_MATCHES);

    // Near 100 km, inside 5% tolerance
    distances.extend((0..68).map(|i| 95_500.0 + i as f64 * 130.0));
    // Inside 10% tolerance but outside 5%
    distances.extend((0..77).map(|i| 90_100.0 + i as f64 * 60.0));
    distances.extend((0..77).map(|i| 105_100.0 + i as f64 * 60.0));
    // Shorter and longer activities
    distances.extend((0..300).map(|i| 1_000.0 + i as f64 * 290.0));
    distances.extend((0..229).map(|i| 111_000.0 + i as f64 * 500.0));

    // Interleave so that filters cannot rely on input order
    let mut shuffled = Vec::with_capacity(distances.len());
    let stride = 7;
    for offset in 0..stride {
        shuffled.extend(distances.iter().skip(offset).step_by(stride).copied());
    }
    shuffled
}

pub fn match_record(id: u64, distance: f64) -> Value {
    json!({
        "otherActivity": {
            "id": id,
            "name": format!("Activity {}", id),
            "activityType": if id % 3 == 0 { "Run" } else { "Ride" },
            "athleteId": 1000 + id % 50,
        },
        "correlation": {
            "distance": distance,
            "elapsedTime": 3600 + id * 10,
            "closestDistance": 12.5,
            "closestPoint": [45.5, -122.6],
            "spatialCorrelation": 0.5,
            "startTime": 1_500_000_000u64 + id * 60,
        }
    })
}

/// Flyby payload with one match per distance, ids starting at 1
pub fn payload_with(distances: &[f64]) -> Value {
    let matches: Vec<Value> = distances
        .iter()
        .enumerate()
        .map(|(i, d)| match_record(i as u64 + 1, *d))
        .collect();

    json!({
        "activity": { "id": 12345, "name": "Requesting Ride", "athleteId": 1 },
        "matches": matches,
        "athletes": { "1000": { "id": 1000, "firstName": "Ann" } },
    })
}

pub fn fixture_payload() -> Value {
    payload_with(&fixture_distances())
}
