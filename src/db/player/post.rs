use sqlx::{SqlitePool, types::Json};

use crate::{db::team::upsert_team_by_name, errors::AppError, models::player::NewPlayer};

pub async fn create_player(pool: &SqlitePool, player: NewPlayer) -> Result<i64, AppError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    // The team upsert and the player insert commit together, so a failed
    // insert cannot leave an orphaned auto-created team behind.
    let team_id = upsert_team_by_name(&mut tx, &player.team).await?;

    let result = sqlx::query(
        "INSERT INTO players (
            name, position, price, team_id, contract_duration, years_left,
            on_loan, loan_team, statistics, contract_start_date,
            sell_on_clause, sell_on_percentage, signing_date,
            nationality, nationality_flag
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&player.name)
    .bind(&player.position)
    .bind(player.price)
    .bind(team_id)
    .bind(player.contract_duration)
    .bind(player.years_left)
    .bind(player.on_loan)
    .bind(&player.loan_team)
    .bind(Json(&player.statistics))
    .bind(player.contract_start_date)
    .bind(player.sell_on_clause)
    .bind(player.sell_on_percentage)
    .bind(player.signing_date)
    .bind(&player.nationality)
    .bind(&player.nationality_flag)
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create player: {}", e)))?;

    let player_id = result.last_insert_rowid();

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit transaction: {}", e)))?;

    Ok(player_id)
}
