use sqlx::SqlitePool;

use crate::{db::team::upsert_team_by_name, errors::AppError, models::transfer::NewTransfer};

pub async fn create_transfer(pool: &SqlitePool, transfer: NewTransfer) -> Result<i64, AppError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    // Bookkeeping upserts only: the transfer row itself stores the plain
    // team names, so these inserts have no effect on its own fields.
    upsert_team_by_name(&mut tx, &transfer.from_team).await?;
    upsert_team_by_name(&mut tx, &transfer.to_team).await?;

    let result = sqlx::query(
        "INSERT INTO transfers (player_id, from_team, to_team, transfer_date, transfer_window, fee)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(transfer.player_id)
    .bind(&transfer.from_team)
    .bind(&transfer.to_team)
    .bind(transfer.transfer_date)
    .bind(&transfer.transfer_window)
    .bind(transfer.fee)
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create transfer: {}", e)))?;

    let transfer_id = result.last_insert_rowid();

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit transaction: {}", e)))?;

    Ok(transfer_id)
}
