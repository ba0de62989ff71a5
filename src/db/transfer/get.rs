use sqlx::SqlitePool;

use crate::{errors::AppError, models::transfer::Transfer};

pub async fn get_all_transfers(pool: &SqlitePool) -> Result<Vec<Transfer>, AppError> {
    sqlx::query_as::<_, Transfer>(
        "SELECT id, player_id, from_team, to_team, transfer_date, transfer_window, fee
         FROM transfers
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch transfers: {}", e)))
}
