use sqlx::{SqliteConnection, SqlitePool};

use crate::{errors::AppError, models::team::Team};

pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<Team>, AppError> {
    sqlx::query_as::<_, Team>("SELECT id, name, team_logo FROM teams ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch teams: {}", e)))
}

pub async fn get_team(pool: &SqlitePool, team_id: i64) -> Result<Team, AppError> {
    sqlx::query_as::<_, Team>("SELECT id, name, team_logo FROM teams WHERE id = ?")
        .bind(team_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))
}

// Runs on a plain connection so callers inside a transaction can reuse it.
pub async fn find_team_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Team>, AppError> {
    sqlx::query_as::<_, Team>("SELECT id, name, team_logo FROM teams WHERE name = ?")
        .bind(name)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to look up team by name: {}", e)))
}

pub async fn search_teams(pool: &SqlitePool, query: &str) -> Result<Vec<Team>, AppError> {
    sqlx::query_as::<_, Team>(
        "SELECT id, name, team_logo FROM teams
         WHERE LOWER(name) LIKE '%' || LOWER(?) || '%'
         ORDER BY id",
    )
    .bind(query)
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to search teams: {}", e)))
}
