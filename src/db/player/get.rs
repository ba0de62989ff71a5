use sqlx::SqlitePool;

use crate::{
    errors::AppError,
    models::player::{Player, PlayerDetail, PlayerSearchResult, PlayerWithTeam},
    models::team::Team,
};

pub async fn get_all_players(pool: &SqlitePool) -> Result<Vec<PlayerWithTeam>, AppError> {
    sqlx::query_as::<_, PlayerWithTeam>(
        "SELECT p.id, p.name, p.position, p.price, t.name AS team,
                p.contract_duration, p.years_left, p.on_loan, p.loan_team,
                p.statistics, p.contract_start_date, p.sell_on_clause,
                p.sell_on_percentage, p.signing_date, p.nationality,
                p.nationality_flag, p.player_image
         FROM players p
         JOIN teams t ON t.id = p.team_id
         ORDER BY p.id",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch players: {}", e)))
}

pub async fn get_player(pool: &SqlitePool, player_id: i64) -> Result<PlayerDetail, AppError> {
    let player = sqlx::query_as::<_, Player>(
        "SELECT id, name, position, price, team_id, contract_duration, years_left,
                on_loan, loan_team, statistics, contract_start_date, sell_on_clause,
                sell_on_percentage, signing_date, nationality, nationality_flag, player_image
         FROM players WHERE id = ?",
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch player: {}", e)))?
    .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))?;

    let team = sqlx::query_as::<_, Team>("SELECT id, name, team_logo FROM teams WHERE id = ?")
        .bind(player.team_id)
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch player's team: {}", e)))?;

    Ok(PlayerDetail { player, team })
}

pub async fn search_players(
    pool: &SqlitePool,
    query: &str,
) -> Result<Vec<PlayerSearchResult>, AppError> {
    sqlx::query_as::<_, PlayerSearchResult>(
        "SELECT id, name, team_id FROM players
         WHERE LOWER(name) LIKE '%' || LOWER(?) || '%'
         ORDER BY id",
    )
    .bind(query)
    .fetch_all(pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to search players: {}", e)))
}
