use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{
    db::transfer::{create_transfer, get_all_transfers},
    errors::AppError,
    http::handlers::{parse_date, require},
    models::{
        response::CreatedResponse,
        transfer::{NewTransfer, Transfer},
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateTransferPayload {
    pub player_id: Option<i64>,
    pub from_team: Option<String>,
    pub to_team: Option<String>,
    pub transfer_date: Option<String>,
    // "summer" or "winter" by convention, not enforced at the data layer.
    pub transfer_window: Option<String>,
    pub fee: Option<f64>,
}

pub async fn add_transfer_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransferPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let transfer_date = parse_date(
        &require(payload.transfer_date, "transfer_date")?,
        "transfer_date",
    )?;

    let new_transfer = NewTransfer {
        player_id: require(payload.player_id, "player_id")?,
        from_team: require(payload.from_team, "from_team")?,
        to_team: require(payload.to_team, "to_team")?,
        transfer_date,
        transfer_window: require(payload.transfer_window, "transfer_window")?,
        fee: payload.fee,
    };

    match create_transfer(&state.db, new_transfer).await {
        Ok(id) => {
            tracing::info!("Transfer created (ID: {})", id);
            Ok((
                StatusCode::CREATED,
                Json(CreatedResponse {
                    message: "Transfer added successfully".to_string(),
                    id,
                }),
            ))
        }
        Err(err) => {
            tracing::error!("Error creating transfer: {}", err);
            Err(err)
        }
    }
}

pub async fn get_transfers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transfer>>, AppError> {
    let transfers = get_all_transfers(&state.db).await.map_err(|e| {
        tracing::error!("Error fetching transfers: {}", e);
        e
    })?;

    Ok(Json(transfers))
}
