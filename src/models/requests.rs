use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string accepted by the flyby lookup endpoints
///
/// `distance` is either a single value in km (`"100"`) or a km range
/// (`"90,110"`). `tol` only applies to the single-value form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FlybyQuery {
    #[validate(length(min = 1))]
    pub distance: Option<String>,
    #[validate(range(min = 0.0, max = 1.0))]
    pub tol: Option<f64>,
}
