use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub team_logo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub team_logo: Option<String>,
}

/// Partial update for a team. `None` keeps the current value; the inner
/// option on `team_logo` distinguishes "clear the logo" from "leave it".
#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub team_logo: Option<Option<String>>,
}
