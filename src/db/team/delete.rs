use sqlx::SqlitePool;

use crate::errors::AppError;

// No cascade: players that still reference the team keep their team_id,
// which then dangles. Transfer history is unaffected either way since it
// stores team names, not ids.
pub async fn delete_team(pool: &SqlitePool, team_id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM teams WHERE id = ?")
        .bind(team_id)
        .execute(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete team: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Team {} not found", team_id)));
    }

    Ok(())
}
