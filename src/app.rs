//! Olympics analytics API.
//!
//! Routes HTTP requests to the query layer and serialises the results to JSON. Every handler
//! reads the shared prepared table; none of them write to it.

use crate::app_state::SharedAppState;
use crate::cli::CommandLineArgs;
use crate::error::MedalistError;
use crate::metrics;
use crate::models;
use crate::queries;
use crate::validated_query::ValidatedQuery;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower::{Layer, ServiceBuilder};
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// Welcome message returned from the root endpoint.
const WELCOME_MESSAGE: &str = "Welcome to the Olympics Analysis API";

/// Type alias for the service returned by [service].
pub type Service = NormalizePath<Router>;

/// Returns the [Service] for the application.
///
/// # Arguments
///
/// * `state`: Shared application state
pub fn service(state: SharedAppState) -> Service {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Returns the application [Router] with all routes and layers applied.
fn router(state: SharedAppState) -> Router {
    let cors = cors_layer(&state.args);
    Router::new()
        .route("/", get(root))
        .route("/stats", get(stats))
        .route("/medal_tally", get(medal_tally))
        .route("/nations_over_time", get(nations_over_time))
        .route("/years", get(years))
        .route("/metrics", get(metrics::metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .on_request(metrics::request_counter)
                        .on_response(metrics::record_response_metrics),
                )
                .layer(cors),
        )
        .with_state(state)
}

/// Returns a [CorsLayer] permitting requests from the configured dashboard origin.
fn cors_layer(args: &CommandLineArgs) -> CorsLayer {
    let origin = args
        .cors_origin
        .parse::<HeaderValue>()
        .expect("invalid CORS origin");
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Handler for `GET /`.
async fn root() -> Json<models::Welcome> {
    Json(models::Welcome::new(WELCOME_MESSAGE))
}

/// Handler for `GET /stats`.
async fn stats(State(state): State<SharedAppState>) -> Json<models::SummaryStats> {
    Json(queries::summary_stats(&state.table))
}

/// Handler for `GET /medal_tally`.
async fn medal_tally(
    State(state): State<SharedAppState>,
    ValidatedQuery(query): ValidatedQuery<models::TallyQuery>,
) -> Result<Json<Vec<models::TallyRow>>, MedalistError> {
    let selection = query.selection()?;
    Ok(Json(queries::medal_tally(&state.table, selection)))
}

/// Handler for `GET /nations_over_time`.
async fn nations_over_time(
    State(state): State<SharedAppState>,
) -> Json<Vec<models::NationCount>> {
    Json(queries::nations_over_time(&state.table))
}

/// Handler for `GET /years`.
async fn years(State(state): State<SharedAppState>) -> Json<Vec<models::YearEntry>> {
    Json(queries::years(&state.table))
}
