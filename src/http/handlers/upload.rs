use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use serde::Serialize;

use crate::{db::player::set_player_image, errors::AppError, state::AppState};

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub image_url: String,
}

pub async fn upload_player_image_handler(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file: {}", e)))?;

        upload = Some((filename, data.to_vec()));
    }

    let Some((filename, data)) = upload else {
        return Err(AppError::BadRequest("No file part".to_string()));
    };

    if filename.is_empty() {
        return Err(AppError::BadRequest("No selected file".to_string()));
    }

    // The file lands on disk before the player lookup, matching the
    // create-then-record ordering of the upload flow; an unknown player
    // still returns NotFound.
    let image_url = state.assets.store(&filename, &data).await?;

    match set_player_image(&state.db, player_id, &image_url).await {
        Ok(()) => {
            tracing::info!("Stored image for player {} at {}", player_id, image_url);
            Ok(Json(UploadResponse {
                message: "Image uploaded successfully".to_string(),
                image_url,
            }))
        }
        Err(err) => {
            tracing::error!("Error recording image for player {}: {}", player_id, err);
            Err(err)
        }
    }
}
