use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use crate::core::filters::{distance_filter, FilterOptions};
use crate::core::flatten::flatten_matches;
use crate::error::Result;
use crate::models::{ActivityId, FlatRecord, Match, RawResponse};

/// Results of a Flyby search
///
/// Wraps one immutable payload, or none for an empty view. Every query
/// re-derives its records from the payload, so repeated calls return the
/// same result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flyby {
    content: Option<RawResponse>,
}

impl Flyby {
    pub fn new(content: RawResponse) -> Self {
        Self {
            content: Some(content),
        }
    }

    /// An empty view, as if no lookup had been made
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<&RawResponse> {
        self.content.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Requesting activity
    pub fn activity(&self) -> Option<&Value> {
        self.content.as_ref().map(|c| &c.activity)
    }

    /// Matches exactly as returned by Flyby
    pub fn raw_matches(&self) -> Option<&[Match]> {
        self.content.as_ref().map(|c| c.matches.as_slice())
    }

    /// Athletes referenced by the matches
    pub fn athletes(&self) -> Option<&Value> {
        self.content.as_ref().map(|c| &c.athletes)
    }

    /// One merged record per match, in match order
    pub fn flatten(&self) -> Vec<FlatRecord> {
        self.raw_matches().map(flatten_matches).unwrap_or_default()
    }

    /// Ids of the matched activities passing the distance filter
    ///
    /// Records whose `id` is missing or not an unsigned integer are skipped,
    /// so the result can be shorter than `export` for the same options.
    pub fn ids(&self, options: &FilterOptions) -> Vec<ActivityId> {
        self.filtered(options)
            .iter()
            .filter_map(|record| {
                let id = record.id();
                if id.is_none() {
                    tracing::debug!("Skipping flyby record without a numeric id: {:?}", record.get("id"));
                }
                id
            })
            .collect()
    }

    /// Flattened records passing the distance filter
    pub fn export(&self, options: &FilterOptions) -> Vec<FlatRecord> {
        self.filtered(options)
    }

    /// Write the records passing the filter to `writer` as one JSON array
    pub fn export_to<W: Write>(&self, options: &FilterOptions, mut writer: W) -> Result<()> {
        let records = self.filtered(options);
        serde_json::to_writer(&mut writer, &records)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the records passing the filter to a file, replacing any existing content
    pub fn export_to_path<P: AsRef<Path>>(&self, options: &FilterOptions, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.export_to(options, BufWriter::new(file))?;

        tracing::debug!("Exported flyby records to {}", path.as_ref().display());

        Ok(())
    }

    fn filtered(&self, options: &FilterOptions) -> Vec<FlatRecord> {
        let pass = distance_filter(options);
        let records = self.flatten();
        let total = records.len();

        let selected: Vec<FlatRecord> = records.into_iter().filter(|r| pass(r)).collect();

        tracing::trace!(
            "Distance filter {:?} selected {} of {} records",
            options.distance,
            selected.len(),
            total
        );

        selected
    }
}

impl From<RawResponse> for Flyby {
    fn from(content: RawResponse) -> Self {
        Self::new(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Flyby {
        let raw: RawResponse = serde_json::from_value(json!({
            "activity": { "id": 1, "name": "Requesting Ride" },
            "matches": [
                {
                    "otherActivity": { "id": 10, "name": "A", "activityType": "Ride", "athleteId": 100 },
                    "correlation": { "distance": 50_000.0, "elapsedTime": 7200, "spatialCorrelation": 0.8 }
                },
                {
                    "otherActivity": { "id": 11, "name": "B", "activityType": "Ride", "athleteId": 101 },
                    "correlation": { "distance": 98_000.0, "elapsedTime": 14400, "spatialCorrelation": 0.4 }
                }
            ],
            "athletes": { "100": { "firstName": "Ann" }, "101": { "firstName": "Bo" } }
        }))
        .unwrap();

        Flyby::new(raw)
    }

    #[test]
    fn test_empty_view() {
        let fb = Flyby::empty();

        assert!(fb.is_empty());
        assert!(fb.activity().is_none());
        assert!(fb.raw_matches().is_none());
        assert!(fb.athletes().is_none());
        assert!(fb.flatten().is_empty());
        assert!(fb.ids(&FilterOptions::all()).is_empty());
        assert!(fb.ids(&FilterOptions::around(100.0)).is_empty());
    }

    #[test]
    fn test_accessors_pass_through() {
        let fb = sample();

        assert_eq!(fb.activity().unwrap()["name"], json!("Requesting Ride"));
        assert_eq!(fb.raw_matches().unwrap().len(), 2);
        assert_eq!(fb.athletes().unwrap()["101"]["firstName"], json!("Bo"));
    }

    #[test]
    fn test_ids_with_and_without_filter() {
        let fb = sample();

        assert_eq!(fb.ids(&FilterOptions::all()), vec![10, 11]);
        assert_eq!(fb.ids(&FilterOptions::around(100.0)), vec![11]);
        assert_eq!(fb.ids(&FilterOptions::between(40.0, 60.0)), vec![10]);
    }

    #[test]
    fn test_ids_skip_records_without_numeric_id() {
        let raw: RawResponse = serde_json::from_value(json!({
            "activity": {},
            "matches": [
                { "otherActivity": { "id": "abc" }, "correlation": { "distance": 1000.0 } },
                { "otherActivity": { "id": 12 }, "correlation": { "distance": 1000.0 } },
                { "otherActivity": { "name": "No id" }, "correlation": { "distance": 1000.0 } }
            ],
            "athletes": {}
        }))
        .unwrap();
        let fb = Flyby::new(raw);

        assert_eq!(fb.ids(&FilterOptions::all()), vec![12]);
        assert_eq!(fb.export(&FilterOptions::all()).len(), 3);
    }

    #[test]
    fn test_export_to_writer() {
        let fb = sample();
        let mut buf = Vec::new();

        fb.export_to(&FilterOptions::around(100.0), &mut buf).unwrap();

        let parsed: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            parsed,
            json!([{
                "id": 11, "name": "B", "activityType": "Ride", "athleteId": 101,
                "distance": 98_000.0, "elapsedTime": 14400, "spatialCorrelation": 0.4
            }])
        );
    }

    #[test]
    fn test_queries_are_repeatable() {
        let fb = sample();
        let options = FilterOptions::around(50.0);

        assert_eq!(fb.flatten(), fb.flatten());
        assert_eq!(fb.export(&options), fb.export(&options));
        assert_eq!(fb.raw_matches(), fb.raw_matches());
    }
}
