//! Flyby - client for the Strava Flyby matches service
//!
//! Fetches the matches recorded for an activity and exposes them through a
//! read-only result view. Matches can be flattened into single records and
//! filtered by the overall distance of the matched activity.
//!
//! ```no_run
//! # async fn run() -> flyby::Result<()> {
//! use flyby::{FilterOptions, FlybyClient};
//!
//! let client = FlybyClient::with_defaults()?;
//! let fb = client.lookup(12345).await?;
//! let century_rides = fb.ids(&FilterOptions::around(160.0).with_tol(0.05));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{distance_filter, DistanceSpec, FilterOptions, Flyby};
pub use error::{FlybyError, Result};
pub use models::{ActivityId, FlatRecord, Match, RawResponse};
pub use services::{flyby, FlybyClient};
