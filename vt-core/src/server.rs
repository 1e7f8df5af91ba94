use crate::engine::{EngineStatus, MarketEngine};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use itertools::Itertools;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use vt_domain::{Commodity, FeaturedRouteSet, PriceError, PriceQuote, Station, StationSymbol, TradeRoute};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MarketEngine>,
}

/// Read-only JSON surface for trading/UI collaborators. Nothing here
/// mutates engine state; the reseed cycle runs on its own schedule.
pub fn build_router(engine: Arc<MarketEngine>) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .route("/commodities", get(get_commodities))
        .route("/stations", get(get_stations))
        .route("/stations/:station/quotes", get(get_station_quotes))
        .route("/quotes/:origin/:destination", get(get_route_quotes))
        .route("/routes", get(get_routes))
        .route("/featured-routes", get(get_featured_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { engine })
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<PriceError> for ApiError {
    fn from(err: PriceError) -> Self {
        ApiError::NotFound(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

async fn get_status(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(state.engine.status().await)
}

async fn get_commodities(State(state): State<AppState>) -> Json<Vec<Commodity>> {
    let commodities = state
        .engine
        .catalog()
        .iter()
        .cloned()
        .sorted_by_key(|c| c.symbol.clone())
        .collect_vec();
    Json(commodities)
}

async fn get_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    let registry = state.engine.registry_handle();
    let registry = registry.read().await;
    let stations = registry.iter().cloned().sorted_by_key(|s| s.symbol.clone()).collect_vec();
    Json(stations)
}

async fn get_station_quotes(Path(station): Path<String>, State(state): State<AppState>) -> Result<Json<Vec<PriceQuote>>, ApiError> {
    let quotes = state.engine.station_quotes(&StationSymbol::new(station)).await?;
    Ok(Json(quotes))
}

async fn get_route_quotes(
    Path((origin, destination)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceQuote>>, ApiError> {
    let quotes = state
        .engine
        .route_quotes(&StationSymbol::new(origin), &StationSymbol::new(destination))
        .await?;
    Ok(Json(quotes))
}

async fn get_routes(State(state): State<AppState>) -> Json<Vec<TradeRoute>> {
    Json(state.engine.arbitrage_routes().await)
}

async fn get_featured_routes(State(state): State<AppState>) -> Json<FeaturedRouteSet> {
    Json(state.engine.featured_routes().await)
}
