//! HTTP route handlers

use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use crate::core::VehicleDetails;
use crate::lot::ParkingLot;
use crate::lot::snapshot::{LotSnapshot, TicketView};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupyRequest {
    pub slot_id: i64,
    pub car_number: String,
    pub owner_name: String,
    pub phone: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRequest {
    pub slot_id: i64,
}

/// Response to a successful release: the refreshed state plus the ticket
/// that was just closed, so the caller can show its duration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseResponse {
    pub state: LotSnapshot,
    pub released_ticket: Option<TicketView>,
}

/// Field-format validation, performed here so the core never re-checks it.
///
/// Mirrors what the browser form enforces: owner names are letters and
/// spaces, phones are digits, and the plate must be present.
fn validate_occupy(req: &OccupyRequest) -> std::result::Result<(), &'static str> {
    if req.car_number.trim().is_empty() {
        return Err("Car number is required");
    }
    if req.owner_name.trim().is_empty()
        || !req
            .owner_name
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ')
    {
        return Err("Owner name must contain letters only");
    }
    if req.phone.is_empty() || !req.phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("Phone must contain digits only");
    }
    Ok(())
}

async fn get_state(State(lot): State<Arc<ParkingLot>>) -> Json<LotSnapshot> {
    Json(lot.snapshot())
}

async fn occupy(
    State(lot): State<Arc<ParkingLot>>,
    Json(req): Json<OccupyRequest>,
) -> impl IntoResponse {
    if let Err(msg) = validate_occupy(&req) {
        return (StatusCode::BAD_REQUEST, msg.to_string()).into_response();
    }

    let vehicle = VehicleDetails {
        car_number: req.car_number,
        owner_name: req.owner_name,
        phone: req.phone,
    };

    match lot.occupy(req.slot_id, vehicle) {
        Ok(ticket) => Json(TicketView::from(&ticket)).into_response(),
        Err(err) => (StatusCode::BAD_REQUEST, err.user_message()).into_response(),
    }
}

async fn release(
    State(lot): State<Arc<ParkingLot>>,
    Json(req): Json<ReleaseRequest>,
) -> impl IntoResponse {
    match lot.release(req.slot_id) {
        Ok(_) => {
            let released_ticket = lot
                .most_recent_ticket(req.slot_id)
                .map(|t| TicketView::from(&t));
            Json(ReleaseResponse {
                state: lot.snapshot(),
                released_ticket,
            })
            .into_response()
        },
        Err(err) => (StatusCode::BAD_REQUEST, err.user_message()).into_response(),
    }
}

/// Builds the API router over a shared lot
pub fn routes(lot: Arc<ParkingLot>) -> Router {
    Router::new()
        .route("/api/parking/state", get(get_state))
        .route("/api/parking/occupy", post(occupy))
        .route("/api/parking/release", post(release))
        .layer(TraceLayer::new_for_http())
        .with_state(lot)
}
