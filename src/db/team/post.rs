use sqlx::{SqliteConnection, SqlitePool};

use crate::{errors::AppError, models::team::NewTeam};

pub async fn create_team(pool: &SqlitePool, team: NewTeam) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO teams (name, team_logo) VALUES (?, ?)")
        .bind(&team.name)
        .bind(&team.team_logo)
        .execute(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create team: {}", e)))?;

    tracing::info!("Created team '{}'", team.name);

    Ok(result.last_insert_rowid())
}

// Resolves a team name to its row id, inserting a bare row when the name is
// new. Takes the caller's connection so the insert joins the caller's
// transaction and cannot outlive a failed parent insert.
pub async fn upsert_team_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<i64, AppError> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM teams WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to look up team by name: {}", e)))?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let result = sqlx::query("INSERT INTO teams (name) VALUES (?)")
        .bind(name)
        .execute(conn)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to create team '{}': {}", name, e)))?;

    tracing::info!("Auto-created team '{}'", name);

    Ok(result.last_insert_rowid())
}
