use sqlx::{SqlitePool, types::Json};

use crate::{
    db::team::find_team_by_name,
    errors::AppError,
    models::player::{Player, PlayerUpdate},
};

pub async fn update_player(
    pool: &SqlitePool,
    player_id: i64,
    changes: PlayerUpdate,
) -> Result<(), AppError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let player = sqlx::query_as::<_, Player>(
        "SELECT id, name, position, price, team_id, contract_duration, years_left,
                on_loan, loan_team, statistics, contract_start_date, sell_on_clause,
                sell_on_percentage, signing_date, nationality, nationality_flag, player_image
         FROM players WHERE id = ?",
    )
    .bind(player_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch player: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))?;

    // A team change only applies when the named team already exists; an
    // unknown name leaves the current team in place (auto-creation happens
    // on create, not update).
    let mut team_id = player.team_id;
    if let Some(team_name) = &changes.team {
        if let Some(team) = find_team_by_name(&mut tx, team_name).await? {
            team_id = team.id;
        }
    }

    let name = changes.name.unwrap_or(player.name);
    let position = changes.position.unwrap_or(player.position);
    let price = changes.price.unwrap_or(player.price);
    let contract_duration = changes.contract_duration.unwrap_or(player.contract_duration);
    let years_left = changes.years_left.unwrap_or(player.years_left);
    let on_loan = changes.on_loan.unwrap_or(player.on_loan);
    let loan_team = changes.loan_team.unwrap_or(player.loan_team);
    let statistics = changes.statistics.map(Json).unwrap_or(player.statistics);
    let contract_start_date = changes
        .contract_start_date
        .unwrap_or(player.contract_start_date);
    let sell_on_clause = changes.sell_on_clause.unwrap_or(player.sell_on_clause);
    let sell_on_percentage = changes
        .sell_on_percentage
        .unwrap_or(player.sell_on_percentage);
    let signing_date = changes.signing_date.unwrap_or(player.signing_date);
    let nationality = changes.nationality.unwrap_or(player.nationality);
    let nationality_flag = changes.nationality_flag.unwrap_or(player.nationality_flag);

    sqlx::query(
        "UPDATE players SET
            name = ?, position = ?, price = ?, team_id = ?,
            contract_duration = ?, years_left = ?, on_loan = ?, loan_team = ?,
            statistics = ?, contract_start_date = ?, sell_on_clause = ?,
            sell_on_percentage = ?, signing_date = ?, nationality = ?,
            nationality_flag = ?
         WHERE id = ?",
    )
    .bind(&name)
    .bind(&position)
    .bind(price)
    .bind(team_id)
    .bind(contract_duration)
    .bind(years_left)
    .bind(on_loan)
    .bind(&loan_team)
    .bind(statistics)
    .bind(contract_start_date)
    .bind(sell_on_clause)
    .bind(sell_on_percentage)
    .bind(signing_date)
    .bind(&nationality)
    .bind(&nationality_flag)
    .bind(player_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update player: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit transaction: {}", e)))?;

    Ok(())
}

pub async fn set_player_image(
    pool: &SqlitePool,
    player_id: i64,
    image_path: &str,
) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE players SET player_image = ? WHERE id = ?")
        .bind(image_path)
        .bind(player_id)
        .execute(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to update player image: {}", e)))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Player {} not found", player_id)));
    }

    Ok(())
}
