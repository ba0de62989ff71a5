use sqlx::SqlitePool;

use crate::errors::AppError;

// Schema setup is limited to initial table creation; there is no further
// migration tooling.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS teams (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            team_logo TEXT
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create teams table: {}", e)))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS players (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            position TEXT NOT NULL,
            price REAL NOT NULL,
            team_id INTEGER NOT NULL REFERENCES teams(id),
            contract_duration INTEGER NOT NULL,
            years_left INTEGER NOT NULL,
            on_loan BOOLEAN NOT NULL,
            loan_team TEXT,
            statistics TEXT NOT NULL,
            contract_start_date DATE NOT NULL,
            sell_on_clause BOOLEAN NOT NULL DEFAULT 0,
            sell_on_percentage REAL,
            signing_date DATE,
            nationality TEXT,
            nationality_flag TEXT,
            player_image TEXT
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create players table: {}", e)))?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS transfers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            player_id INTEGER NOT NULL REFERENCES players(id),
            from_team TEXT NOT NULL,
            to_team TEXT NOT NULL,
            transfer_date DATE NOT NULL,
            transfer_window TEXT NOT NULL,
            fee REAL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create transfers table: {}", e)))?;

    Ok(())
}
