use sqlx::SqlitePool;

use crate::assets::AssetStore;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub assets: AssetStore,
}
