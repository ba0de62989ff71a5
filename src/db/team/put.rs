use sqlx::SqlitePool;

use crate::{
    errors::AppError,
    models::team::{Team, TeamUpdate},
};

pub async fn update_team(
    pool: &SqlitePool,
    team_id: i64,
    changes: TeamUpdate,
) -> Result<(), AppError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let team = sqlx::query_as::<_, Team>("SELECT id, name, team_logo FROM teams WHERE id = ?")
        .bind(team_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch team: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

    // Missing fields keep their prior value.
    let name = changes.name.unwrap_or(team.name);
    let team_logo = changes.team_logo.unwrap_or(team.team_logo);

    sqlx::query("UPDATE teams SET name = ?, team_logo = ? WHERE id = ?")
        .bind(&name)
        .bind(&team_logo)
        .bind(team_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update team: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit transaction: {}", e)))?;

    Ok(())
}
