use actix_files::Files;
use actix_web::{get, guard, web, HttpRequest, HttpResponse};
use std::path::Path;

use crate::constants::{CERT_FILE, INDEX_FILE};
use crate::error::ApiError;
use crate::models::Coordinate;
use crate::risk::evaluate;
use crate::AppState;

/// Registers the API routes, CORS preflight and the static front-end.
///
/// Static files are the catch-all, so they are registered last.
pub fn configure(cfg: &mut web::ServiceConfig, static_root: &Path) {
    cfg.service(
        web::resource("/{tail:.*}")
            .guard(guard::Options())
            .to(preflight),
    )
    .service(analyze)
    .service(
        Files::new("/", static_root)
            .index_file(INDEX_FILE)
            // The static root is the working directory, which also holds the TLS key.
            .path_filter(|path, _| !path.ends_with(CERT_FILE)),
    );
}

#[get("/analyze")]
pub async fn analyze(data: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let coordinate = parse_coordinate(req.query_string())?;

    let series = data
        .forecaster
        .hourly_forecast(coordinate)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch forecast: {:#}", e);
            ApiError::Upstream(e)
        })?;

    let assessment = evaluate(&series);
    tracing::info!(
        "Assessed {}, {} as {:?} (protection index {})",
        coordinate.latitude,
        coordinate.longitude,
        assessment.status,
        assessment.protection_index
    );

    Ok(HttpResponse::Ok().json(assessment))
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Reads `lat` and `lon` from the query string. The first non-empty value of
/// each wins; both must parse as numbers.
fn parse_coordinate(query_string: &str) -> Result<Coordinate, ApiError> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string)
        .map_err(|_| ApiError::InvalidCoordinates)?
        .into_inner();

    let number = |key: &str| {
        pairs
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .and_then(|(_, v)| v.trim().parse::<f64>().ok())
    };

    match (number("lat"), number("lon")) {
        (Some(latitude), Some(longitude)) => Ok(Coordinate {
            latitude,
            longitude,
        }),
        _ => Err(ApiError::InvalidCoordinates),
    }
}
