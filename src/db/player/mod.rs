pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub use delete::delete_player;
pub use get::{get_all_players, get_player, search_players};
pub use post::create_player;
pub use put::{set_player_image, update_player};
