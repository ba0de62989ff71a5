pub mod player;
pub mod team;
pub mod transfer;
pub mod upload;

pub use player::{
    add_player_handler, delete_player_handler, get_player_handler, get_players_handler,
    search_players_handler, update_player_handler,
};

pub use team::{
    add_team_handler, delete_team_handler, get_team_handler, get_teams_handler,
    search_teams_handler, update_team_handler,
};

pub use transfer::{add_transfer_handler, get_transfers_handler};

pub use upload::upload_player_image_handler;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

// Required-field presence is the only payload validation this service does.
pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required field: {}", field)))
}

pub(crate) fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        AppError::BadRequest(format!(
            "Invalid {} format: {}. Expected format: YYYY-MM-DD",
            field, e
        ))
    })
}

// Wraps a nullable field so a key that is present-but-null deserializes to
// Some(None), while an absent key stays None via #[serde(default)].
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
