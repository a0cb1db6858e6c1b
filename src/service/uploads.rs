use crate::config::UPLOAD_SUBDIR;
use crate::error::HubError;
use axum::body::Bytes;
use std::path::{Path, PathBuf};
use tracing::info;
use unicode_normalization::UnicodeNormalization;
use uuid::Uuid;

/// An image file received with a submission.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Writes avatars beneath `<static_dir>/uploads`.
#[derive(Debug, Clone)]
pub struct UploadStore {
    static_dir: PathBuf,
}

impl UploadStore {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
        }
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.static_dir.join(UPLOAD_SUBDIR)
    }

    pub async fn ensure_dir(&self) -> Result<(), HubError> {
        tokio::fs::create_dir_all(self.upload_dir()).await?;
        Ok(())
    }

    /// Persist `upload` and return its path relative to the static directory.
    pub async fn save(&self, public_id: &Uuid, upload: &AvatarUpload) -> Result<String, HubError> {
        let mut file_name = secure_filename(&format!("{public_id}_{}", upload.file_name));
        if file_name.is_empty() {
            file_name = public_id.to_string();
        }
        let path = self.upload_dir().join(&file_name);
        tokio::fs::write(&path, &upload.bytes).await?;
        info!(path = %path.display(), size = upload.bytes.len(), "avatar stored");
        Ok(format!("{UPLOAD_SUBDIR}/{file_name}"))
    }
}

/// Reduce a client-supplied file name to a flat, ASCII-only name that is
/// safe to join onto the upload directory. Accented letters fold to their
/// base letter; other non-ASCII characters are dropped.
pub fn secure_filename(name: &str) -> String {
    let flattened: String = name
        .nfkd()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .filter(char::is_ascii)
        .collect();
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}
