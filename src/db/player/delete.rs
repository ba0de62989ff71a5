use sqlx::SqlitePool;

use crate::errors::AppError;

// Hard delete. Transfer history rows keep their player_id for traceability;
// nothing cascades in application code.
pub async fn delete_player(pool: &SqlitePool, player_id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM players WHERE id = ?")
        .bind(player_id)
        .execute(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete player: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Player {} not found", player_id)));
    }

    Ok(())
}
