// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ActivityId, FlatRecord, Match, RawResponse};
pub use requests::FlybyQuery;
pub use responses::{ErrorResponse, HealthResponse, IdsResponse};
