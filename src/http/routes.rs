use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{config::Config, http::handlers, state::AppState};

pub fn create_http_routes(state: AppState, config: &Config) -> Router {
    Router::new()
        .route(
            "/players",
            post(handlers::add_player_handler).get(handlers::get_players_handler),
        )
        .route("/players/search", get(handlers::search_players_handler))
        .route(
            "/players/{id}",
            get(handlers::get_player_handler)
                .put(handlers::update_player_handler)
                .delete(handlers::delete_player_handler),
        )
        .route(
            "/upload_player_image/{id}",
            post(handlers::upload_player_image_handler),
        )
        .route(
            "/teams",
            post(handlers::add_team_handler).get(handlers::get_teams_handler),
        )
        .route("/teams/search", get(handlers::search_teams_handler))
        .route(
            "/teams/{id}",
            get(handlers::get_team_handler)
                .put(handlers::update_team_handler)
                .delete(handlers::delete_team_handler),
        )
        .route(
            "/transfers",
            post(handlers::add_transfer_handler).get(handlers::get_transfers_handler),
        )
        .nest_service("/static/images", ServeDir::new(&config.static_dir))
        .with_state(state)
}
