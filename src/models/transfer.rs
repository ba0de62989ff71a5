use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// from_team and to_team are stored as plain names rather than foreign keys,
// so renaming a team does not rewrite transfer history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transfer {
    pub id: i64,
    pub player_id: i64,
    pub from_team: String,
    pub to_team: String,
    pub transfer_date: NaiveDate,
    pub transfer_window: String,
    pub fee: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewTransfer {
    pub player_id: i64,
    pub from_team: String,
    pub to_team: String,
    pub transfer_date: NaiveDate,
    pub transfer_window: String,
    pub fee: Option<f64>,
}
