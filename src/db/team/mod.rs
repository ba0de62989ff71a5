pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub use delete::delete_team;
pub use get::{find_team_by_name, get_all_teams, get_team, search_teams};
pub use post::{create_team, upsert_team_by_name};
pub use put::update_team;
