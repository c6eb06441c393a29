use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;
use crate::core::{DistanceSpec, FilterOptions};
use crate::error::FlybyError;
use crate::models::{ActivityId, ErrorResponse, FlybyQuery, HealthResponse, IdsResponse};
use crate::services::FlybyClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<FlybyClient>,
    pub default_tol: f64,
}

/// Configure all flyby routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/flyby/{activity_id}", web::get().to(get_records))
        .route("/flyby/{activity_id}/ids", web::get().to(get_ids))
        .route("/flyby/{activity_id}/raw", web::get().to(get_raw));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Flattened match records
///
/// GET /api/v1/flyby/{activity_id}?distance=100&tol=0.05
async fn get_records(
    state: web::Data<AppState>,
    path: web::Path<ActivityId>,
    query: web::Query<FlybyQuery>,
) -> HttpResponse {
    let activity_id = path.into_inner();

    let options = match filter_options(&query, state.default_tol) {
        Ok(options) => options,
        Err(e) => return error_response(&e),
    };

    match state.client.lookup(activity_id).await {
        Ok(fb) => HttpResponse::Ok().json(fb.export(&options)),
        Err(e) => error_response(&e),
    }
}

/// Ids of matched activities
///
/// GET /api/v1/flyby/{activity_id}/ids?distance=90,110
async fn get_ids(
    state: web::Data<AppState>,
    path: web::Path<ActivityId>,
    query: web::Query<FlybyQuery>,
) -> HttpResponse {
    let activity_id = path.into_inner();

    let options = match filter_options(&query, state.default_tol) {
        Ok(options) => options,
        Err(e) => return error_response(&e),
    };

    match state.client.lookup(activity_id).await {
        Ok(fb) => {
            let ids = fb.ids(&options);
            HttpResponse::Ok().json(IdsResponse {
                activity_id,
                total: ids.len(),
                ids,
            })
        }
        Err(e) => error_response(&e),
    }
}

/// Raw payload as returned by Flyby
async fn get_raw(state: web::Data<AppState>, path: web::Path<ActivityId>) -> HttpResponse {
    match state.client.fetch(path.into_inner()).await {
        Ok(raw) => HttpResponse::Ok().json(raw),
        Err(e) => error_response(&e),
    }
}

/// Turn query parameters into validated filter options
pub fn filter_options(query: &FlybyQuery, default_tol: f64) -> Result<FilterOptions, FlybyError> {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for flyby query: field_errors={:?}", errors);
        return Err(FlybyError::invalid_argument(errors.to_string()));
    }

    let distance = query
        .distance
        .as_deref()
        .map(str::parse::<DistanceSpec>)
        .transpose()?;

    let options = FilterOptions {
        distance,
        tol: query.tol.unwrap_or(default_tol),
    };
    options.validate()?;

    Ok(options)
}

fn error_response(err: &FlybyError) -> HttpResponse {
    let (status, error) = match err {
        FlybyError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
        FlybyError::Connectivity { .. } => (StatusCode::BAD_GATEWAY, "connectivity"),
        FlybyError::MalformedResponse(_) => (StatusCode::BAD_GATEWAY, "malformed_response"),
        FlybyError::Request(_) => (StatusCode::BAD_GATEWAY, "request_failed"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    };

    if err.is_upstream() {
        tracing::error!("Flyby lookup failed: {}", err);
    }

    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: status.as_u16(),
    })
}
