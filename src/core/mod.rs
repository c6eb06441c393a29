// Core exports
pub mod filters;
pub mod flatten;
pub mod view;

pub use filters::{distance_filter, DistanceSpec, FilterOptions, DEFAULT_TOLERANCE};
pub use flatten::{flatten_match, flatten_matches, merge_records};
pub use view::Flyby;
