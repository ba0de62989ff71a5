use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::{FromRow, types::Json};

use super::team::Team;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub price: f64,
    pub team_id: i64,
    pub contract_duration: i64,
    pub years_left: i64,
    pub on_loan: bool,
    pub loan_team: Option<String>,
    pub statistics: Json<JsonValue>,
    pub contract_start_date: NaiveDate,
    pub sell_on_clause: bool,
    pub sell_on_percentage: Option<f64>,
    pub signing_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub nationality_flag: Option<String>,
    pub player_image: Option<String>,
}

/// List projection: the owning team is flattened to its name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlayerWithTeam {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub price: f64,
    pub team: String,
    pub contract_duration: i64,
    pub years_left: i64,
    pub on_loan: bool,
    pub loan_team: Option<String>,
    pub statistics: Json<JsonValue>,
    pub contract_start_date: NaiveDate,
    pub sell_on_clause: bool,
    pub sell_on_percentage: Option<f64>,
    pub signing_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub nationality_flag: Option<String>,
    pub player_image: Option<String>,
}

/// Detail projection: embeds the full team record instead of just its name.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub player: Player,
    pub team: Team,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlayerSearchResult {
    pub id: i64,
    pub name: String,
    pub team_id: i64,
}

#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub price: f64,
    pub team: String,
    pub contract_duration: i64,
    pub years_left: i64,
    pub on_loan: bool,
    pub loan_team: Option<String>,
    pub statistics: JsonValue,
    pub contract_start_date: NaiveDate,
    pub sell_on_clause: bool,
    pub sell_on_percentage: Option<f64>,
    pub signing_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub nationality_flag: Option<String>,
}

/// Partial update for a player. Outer `None` keeps the current value;
/// nullable columns use a nested option so an explicit null clears them.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub price: Option<f64>,
    pub team: Option<String>,
    pub contract_duration: Option<i64>,
    pub years_left: Option<i64>,
    pub on_loan: Option<bool>,
    pub loan_team: Option<Option<String>>,
    pub statistics: Option<JsonValue>,
    pub contract_start_date: Option<NaiveDate>,
    pub sell_on_clause: Option<bool>,
    pub sell_on_percentage: Option<Option<f64>>,
    pub signing_date: Option<Option<NaiveDate>>,
    pub nationality: Option<Option<String>>,
    pub nationality_flag: Option<Option<String>>,
}
