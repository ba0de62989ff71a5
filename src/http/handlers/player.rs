use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::{
    db::player::{
        create_player, delete_player, get_all_players, get_player, search_players, update_player,
    },
    errors::AppError,
    http::handlers::{SearchParams, double_option, parse_date, require},
    models::{
        player::{NewPlayer, PlayerDetail, PlayerSearchResult, PlayerUpdate, PlayerWithTeam},
        response::{CreatedResponse, MessageResponse},
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreatePlayerPayload {
    pub name: Option<String>,
    pub position: Option<String>,
    pub price: Option<f64>,
    pub team: Option<String>,
    pub contract_duration: Option<i64>,
    pub years_left: Option<i64>,
    pub on_loan: Option<bool>,
    pub loan_team: Option<String>,
    pub statistics: Option<JsonValue>,
    pub contract_start_date: Option<String>,
    #[serde(default)]
    pub sell_on_clause: bool,
    pub sell_on_percentage: Option<f64>,
    pub signing_date: Option<String>,
    pub nationality: Option<String>,
    pub nationality_flag: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdatePlayerPayload {
    pub name: Option<String>,
    pub position: Option<String>,
    pub price: Option<f64>,
    pub team: Option<String>,
    pub contract_duration: Option<i64>,
    pub years_left: Option<i64>,
    pub on_loan: Option<bool>,
    #[serde(deserialize_with = "double_option")]
    pub loan_team: Option<Option<String>>,
    pub statistics: Option<JsonValue>,
    pub contract_start_date: Option<String>,
    pub sell_on_clause: Option<bool>,
    #[serde(deserialize_with = "double_option")]
    pub sell_on_percentage: Option<Option<f64>>,
    #[serde(deserialize_with = "double_option")]
    pub signing_date: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub nationality: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub nationality_flag: Option<Option<String>>,
}

pub async fn add_player_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlayerPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let contract_start_date = parse_date(
        &require(payload.contract_start_date, "contract_start_date")?,
        "contract_start_date",
    )?;
    let signing_date = payload
        .signing_date
        .as_deref()
        .map(|s| parse_date(s, "signing_date"))
        .transpose()?;

    let new_player = NewPlayer {
        name: require(payload.name, "name")?,
        position: require(payload.position, "position")?,
        price: require(payload.price, "price")?,
        team: require(payload.team, "team")?,
        contract_duration: require(payload.contract_duration, "contract_duration")?,
        years_left: require(payload.years_left, "years_left")?,
        on_loan: require(payload.on_loan, "on_loan")?,
        loan_team: payload.loan_team,
        statistics: require(payload.statistics, "statistics")?,
        contract_start_date,
        sell_on_clause: payload.sell_on_clause,
        sell_on_percentage: payload.sell_on_percentage,
        signing_date,
        nationality: payload.nationality,
        nationality_flag: payload.nationality_flag,
    };

    match create_player(&state.db, new_player).await {
        Ok(id) => {
            tracing::info!("Player created (ID: {})", id);
            Ok((
                StatusCode::CREATED,
                Json(CreatedResponse {
                    message: "Player added successfully".to_string(),
                    id,
                }),
            ))
        }
        Err(err) => {
            tracing::error!("Error creating player: {}", err);
            Err(err)
        }
    }
}

pub async fn get_players_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerWithTeam>>, AppError> {
    let players = get_all_players(&state.db).await.map_err(|e| {
        tracing::error!("Error fetching players: {}", e);
        e
    })?;

    Ok(Json(players))
}

pub async fn get_player_handler(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> Result<Json<PlayerDetail>, AppError> {
    let player = get_player(&state.db, player_id).await.map_err(|e| {
        tracing::error!("Error fetching player {}: {}", player_id, e);
        e
    })?;

    Ok(Json(player))
}

pub async fn update_player_handler(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Json(payload): Json<UpdatePlayerPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let contract_start_date = payload
        .contract_start_date
        .as_deref()
        .map(|s| parse_date(s, "contract_start_date"))
        .transpose()?;
    let signing_date = match payload.signing_date {
        Some(Some(s)) => Some(Some(parse_date(&s, "signing_date")?)),
        Some(None) => Some(None),
        None => None,
    };

    let changes = PlayerUpdate {
        name: payload.name,
        position: payload.position,
        price: payload.price,
        team: payload.team,
        contract_duration: payload.contract_duration,
        years_left: payload.years_left,
        on_loan: payload.on_loan,
        loan_team: payload.loan_team,
        statistics: payload.statistics,
        contract_start_date,
        sell_on_clause: payload.sell_on_clause,
        sell_on_percentage: payload.sell_on_percentage,
        signing_date,
        nationality: payload.nationality,
        nationality_flag: payload.nationality_flag,
    };

    match update_player(&state.db, player_id, changes).await {
        Ok(()) => {
            tracing::info!("Player {} updated", player_id);
            Ok(Json(MessageResponse {
                message: "Player updated successfully".to_string(),
            }))
        }
        Err(err) => {
            tracing::error!("Error updating player {}: {}", player_id, err);
            Err(err)
        }
    }
}

pub async fn delete_player_handler(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    match delete_player(&state.db, player_id).await {
        Ok(()) => {
            tracing::info!("Player {} deleted", player_id);
            Ok(Json(MessageResponse {
                message: "Player deleted successfully".to_string(),
            }))
        }
        Err(err) => {
            tracing::error!("Error deleting player {}: {}", player_id, err);
            Err(err)
        }
    }
}

pub async fn search_players_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PlayerSearchResult>>, AppError> {
    let players = search_players(&state.db, &params.query).await.map_err(|e| {
        tracing::error!("Error searching players: {}", e);
        e
    })?;

    Ok(Json(players))
}
