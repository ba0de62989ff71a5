use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    db::team::{create_team, delete_team, get_all_teams, get_team, search_teams, update_team},
    errors::AppError,
    http::handlers::{SearchParams, double_option, require},
    models::{
        response::{CreatedResponse, MessageResponse},
        team::{NewTeam, Team, TeamUpdate},
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateTeamPayload {
    pub name: Option<String>,
    pub team_logo: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateTeamPayload {
    pub name: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub team_logo: Option<Option<String>>,
}

pub async fn add_team_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let new_team = NewTeam {
        name: require(payload.name, "name")?,
        team_logo: payload.team_logo,
    };

    match create_team(&state.db, new_team).await {
        Ok(id) => {
            tracing::info!("Team created (ID: {})", id);
            Ok((
                StatusCode::CREATED,
                Json(CreatedResponse {
                    message: "Team added successfully".to_string(),
                    id,
                }),
            ))
        }
        Err(err) => {
            tracing::error!("Error creating team: {}", err);
            Err(err)
        }
    }
}

pub async fn get_teams_handler(State(state): State<AppState>) -> Result<Json<Vec<Team>>, AppError> {
    let teams = get_all_teams(&state.db).await.map_err(|e| {
        tracing::error!("Error fetching teams: {}", e);
        e
    })?;

    Ok(Json(teams))
}

pub async fn get_team_handler(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<Team>, AppError> {
    let team = get_team(&state.db, team_id).await.map_err(|e| {
        tracing::error!("Error fetching team {}: {}", team_id, e);
        e
    })?;

    Ok(Json(team))
}

pub async fn update_team_handler(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Json(payload): Json<UpdateTeamPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let changes = TeamUpdate {
        name: payload.name,
        team_logo: payload.team_logo,
    };

    match update_team(&state.db, team_id, changes).await {
        Ok(()) => {
            tracing::info!("Team {} updated", team_id);
            Ok(Json(MessageResponse {
                message: "Team updated successfully".to_string(),
            }))
        }
        Err(err) => {
            tracing::error!("Error updating team {}: {}", team_id, err);
            Err(err)
        }
    }
}

pub async fn delete_team_handler(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    match delete_team(&state.db, team_id).await {
        Ok(()) => {
            tracing::info!("Team {} deleted", team_id);
            Ok(Json(MessageResponse {
                message: "Team deleted successfully".to_string(),
            }))
        }
        Err(err) => {
            tracing::error!("Error deleting team {}: {}", team_id, err);
            Err(err)
        }
    }
}

pub async fn search_teams_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Team>>, AppError> {
    let teams = search_teams(&state.db, &params.query).await.map_err(|e| {
        tracing::error!("Error searching teams: {}", e);
        e
    })?;

    Ok(Json(teams))
}
