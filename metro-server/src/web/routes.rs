//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::domain::{CostMetric, StationId};
use crate::planner::{RouteError, RoutePlanner, RouteRequest};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cities", get(list_cities))
        .route("/stations", get(list_stations))
        .route("/route/plan", post(plan_route))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Web-layer errors, mapped to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request is malformed (bad station id, unknown city or metric)
    #[error("{message}")]
    BadRequest { message: String },

    /// No route exists for a well-formed request
    #[error("{message}")]
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<RouteError> for AppError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::Unreachable { .. } => AppError::NotFound {
                message: err.to_string(),
            },
            RouteError::EmptyGraph => AppError::BadRequest {
                message: err.to_string(),
            },
        }
    }
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the cities the server can route in.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let cities = state
        .catalog
        .cities()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(CitiesResponse { cities })
}

/// List a city's stations, sorted, for pickers and autocomplete.
async fn list_stations(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Result<Json<StationsResponse>, AppError> {
    let network = state.catalog.get(&query.city).ok_or_else(|| AppError::BadRequest {
        message: format!("unknown city: {}", query.city),
    })?;

    let mut stations: Vec<String> = network
        .graph()
        .stations()
        .map(|s| s.as_str().to_string())
        .collect();
    stations.sort_unstable();

    Ok(Json(StationsResponse {
        city: network.name().to_string(),
        stations,
    }))
}

/// Plan a route through a city's network.
async fn plan_route(
    State(state): State<AppState>,
    Json(request): Json<PlanRouteRequest>,
) -> Result<Json<RouteResult>, AppError> {
    let network = state.catalog.get(&request.city).ok_or_else(|| AppError::BadRequest {
        message: format!("unknown city: {}", request.city),
    })?;

    let source = parse_station(&request.source)?;
    let destination = parse_station(&request.destination)?;
    let waypoints = request
        .via
        .iter()
        .map(|s| parse_station(s))
        .collect::<Result<Vec<_>, _>>()?;

    let metric = match request.metric.as_deref() {
        Some(label) => CostMetric::parse(label).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?,
        None => CostMetric::default(),
    };

    tracing::debug!(
        city = network.name(),
        source = %source,
        destination = %destination,
        waypoints = waypoints.len(),
        metric = %metric,
        "planning route"
    );

    let planner = RoutePlanner::new(network.graph());
    let plan_request =
        RouteRequest::new(source, destination, metric).with_waypoints(waypoints);

    let route = planner.plan(&plan_request).inspect_err(|err| {
        tracing::warn!(city = network.name(), error = %err, "route planning failed");
    })?;

    Ok(Json(RouteResult::from_route(&route)))
}

/// Parse a station id from request input, trimming stray whitespace.
fn parse_station(s: &str) -> Result<StationId, AppError> {
    StationId::parse_normalized(s).map_err(|e| AppError::BadRequest {
        message: format!("{}: {:?}", e, s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{CityNetwork, MetroGraphBuilder, NetworkCatalog};

    fn test_state() -> AppState {
        let graph = MetroGraphBuilder::new()
            .connection("A", "B", 5, 2.0, 10)
            .connection("B", "C", 3, 1.5, 10)
            .connection("A", "C", 10, 4.0, 30)
            .build();

        let mut catalog = NetworkCatalog::new();
        catalog.insert(CityNetwork::new("Testville", graph).unwrap());
        AppState::new(catalog)
    }

    fn plan(city: &str, source: &str, destination: &str, via: &[&str]) -> PlanRouteRequest {
        PlanRouteRequest {
            city: city.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            via: via.iter().map(|s| s.to_string()).collect(),
            metric: None,
        }
    }

    #[tokio::test]
    async fn health_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn cities_listed() {
        let Json(response) = list_cities(State(test_state())).await;
        assert_eq!(response.cities, vec!["Testville"]);
    }

    #[tokio::test]
    async fn stations_listed_sorted() {
        let query = StationsQuery {
            city: "testville".to_string(),
        };
        let Json(response) = list_stations(State(test_state()), Query(query))
            .await
            .unwrap();

        assert_eq!(response.city, "Testville");
        assert_eq!(response.stations, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn stations_unknown_city() {
        let query = StationsQuery {
            city: "Atlantis".to_string(),
        };
        let result = list_stations(State(test_state()), Query(query)).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn plan_route_direct() {
        let request = plan("Testville", "A", "C", &[]);
        let Json(result) = plan_route(State(test_state()), Json(request))
            .await
            .unwrap();

        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.time, 8);
        assert_eq!(result.stops, 2);
        assert_eq!(result.metric, "fastest");
    }

    #[tokio::test]
    async fn plan_route_with_via() {
        // Routing A -> B via C forces the detour through C
        let request = plan("Testville", "A", "B", &["C"]);
        let Json(result) = plan_route(State(test_state()), Json(request))
            .await
            .unwrap();

        assert_eq!(result.path.first().map(String::as_str), Some("A"));
        assert_eq!(result.path.last().map(String::as_str), Some("B"));
        assert!(result.path.contains(&"C".to_string()));
    }

    #[tokio::test]
    async fn plan_route_unknown_city() {
        let request = plan("Atlantis", "A", "C", &[]);
        let result = plan_route(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn plan_route_invalid_station() {
        let request = plan("Testville", "", "C", &[]);
        let result = plan_route(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn plan_route_unreachable_is_not_found() {
        let request = plan("Testville", "A", "Z", &[]);
        let result = plan_route(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn plan_route_unknown_metric() {
        let mut request = plan("Testville", "A", "C", &[]);
        request.metric = Some("scenic".to_string());
        let result = plan_route(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn app_error_status_codes() {
        let bad = AppError::BadRequest {
            message: "nope".to_string(),
        };
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = AppError::NotFound {
            message: "no route".to_string(),
        };
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }
}
