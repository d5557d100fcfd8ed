//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::Local;
use tower_http::trace::TraceLayer;

use crate::normalize::format_train_date;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/stations", get(stations))
        .route("/stations/:code", get(station_by_code))
        .route("/stations/:code/timetable", get(station_timetable))
        .route("/hacon-trains", get(hacon_trains))
        .route("/trains", get(trains))
        .route("/trains/:code", get(train_by_code))
        .route("/trains/:code/movements", get(train_movements))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        success: true,
        message: "You've reached the root path for this server.",
    })
}

/// All stations, optionally filtered by type.
async fn stations(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Json<StationsResponse> {
    let stations = match query.station_type.as_deref() {
        Some(t) => state.rail.stations_by_type(t).await,
        None => state.rail.all_stations().await,
    };

    Json(StationsResponse {
        success: true,
        stations,
    })
}

/// A station's identity merged with its live timetable.
async fn station_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<StationResponse> {
    let station = state.rail.station_by_code(&code).await;

    Json(StationResponse {
        success: true,
        station,
    })
}

/// The live timetable for a station.
async fn station_timetable(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<TimetableResponse> {
    let timetable = state.rail.station_timetable(&code).await;

    Json(TimetableResponse {
        success: true,
        timetable,
    })
}

/// Hacon train positions with resolved location names.
async fn hacon_trains(State(state): State<AppState>) -> Json<HaconTrainsResponse> {
    let trains = state.rail.hacon_trains().await;

    Json(HaconTrainsResponse {
        success: true,
        trains,
    })
}

/// Currently running trains, optionally filtered by type.
async fn trains(
    State(state): State<AppState>,
    Query(query): Query<TrainsQuery>,
) -> Json<TrainsResponse> {
    let trains = match query.train_type.as_deref() {
        Some(t) => state.rail.trains_by_type(t).await,
        None => state.rail.current_trains().await,
    };

    Json(TrainsResponse {
        success: true,
        trains,
    })
}

/// A single train by code, with today's movements attached on request.
///
/// The movements fetch is skipped when the train is not found; `train` is
/// null either way.
async fn train_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(query): Query<TrainQuery>,
) -> Json<TrainResponse> {
    let position = state.rail.train_by_code(&code).await;

    let train = match position {
        Some(position) => {
            let movements = if query.movements.as_deref() == Some("true") {
                let today = format_train_date(Local::now().date_naive());
                Some(state.rail.train_movements(&code, &today).await)
            } else {
                None
            };

            Some(TrainDetail {
                position,
                movements,
            })
        }
        None => None,
    };

    Json(TrainResponse {
        success: true,
        train,
    })
}

/// Today's stop events for a train.
async fn train_movements(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<MovementsResponse> {
    let today = format_train_date(Local::now().date_naive());
    let movements = state.rail.train_movements(&code, &today).await;

    Json(MovementsResponse {
        success: true,
        movements,
    })
}

/// Fallback for unmatched routes.
async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error_code: 404,
            error_message: "Route not found.",
        }),
    )
}
