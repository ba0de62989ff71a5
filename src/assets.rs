use std::path::PathBuf;

use crate::{config::Config, errors::AppError};

pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Filesystem store for uploaded player images, addressed by sanitized
/// filename under a fixed upload root.
#[derive(Debug, Clone)]
pub struct AssetStore {
    pub root: PathBuf,
    pub public_prefix: String,
}

impl AssetStore {
    pub fn new(config: &Config) -> Self {
        Self {
            root: config.upload_dir.clone(),
            public_prefix: "/static/images/players".to_string(),
        }
    }

    pub async fn ensure_upload_dir(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Persists an uploaded image and returns its public URL path.
    ///
    /// Filenames are not namespaced per player, so two uploads with the
    /// same name overwrite one another.
    pub async fn store(&self, filename: &str, data: &[u8]) -> Result<String, AppError> {
        if !allowed_file(filename) {
            return Err(AppError::BadRequest("Invalid file type".to_string()));
        }

        let safe_name = sanitize_filename(filename);
        if safe_name.is_empty() {
            return Err(AppError::BadRequest("Invalid file name".to_string()));
        }

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&safe_name), data).await?;

        Ok(format!("{}/{}", self.public_prefix, safe_name))
    }
}

pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

// Keeps only the final path component and reduces it to characters safe in
// both the filesystem and a URL, so input like "../../etc/passwd.png"
// cannot escape the upload root.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    base.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}
