/// Media asset store
///
/// Uploads are handled by an external collaborator that hands the service an
/// opaque stored-path token. The only responsibility kept here is deleting
/// the underlying asset when its owning post is removed. Deletion on the
/// cascade path is best-effort: callers log and continue when it fails.
use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};

/// Disk-backed asset store addressed by stored-path tokens.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a stored-path token against the asset root.
    ///
    /// Tokens are plain file names; anything that could escape the root
    /// (separators, parent references) is rejected.
    fn resolve(&self, token: &str) -> Result<PathBuf> {
        if !is_valid_token(token) {
            return Err(AppError::BadRequest(format!(
                "invalid media token: {token}"
            )));
        }
        Ok(self.root.join(token))
    }

    /// Delete the asset behind a token. A missing file is a no-op so that
    /// retries of the owning operation stay safe.
    pub async fn delete(&self, token: &str) -> Result<()> {
        let path = self.resolve(token)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(token, "media asset deleted");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(token, "media asset already absent");
                Ok(())
            }
            Err(err) => Err(AppError::Internal(format!(
                "failed to delete media asset {token}: {err}"
            ))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_valid_token(token: &str) -> bool {
    !token.is_empty()
        && !token.contains('/')
        && !token.contains('\\')
        && token != "."
        && token != ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_path_traversal_tokens() {
        assert!(!is_valid_token(""));
        assert!(!is_valid_token(".."));
        assert!(!is_valid_token("../etc/passwd"));
        assert!(!is_valid_token("a/b.jpg"));
        assert!(!is_valid_token("a\\b.jpg"));
        assert!(is_valid_token("1700000000-cat.jpg"));
    }

    #[tokio::test]
    async fn delete_is_a_noop_for_missing_assets() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path());

        store.delete("never-stored.jpg").await.unwrap();
    }

    #[tokio::test]
    async fn delete_removes_an_existing_asset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"data").unwrap();

        let store = AssetStore::new(dir.path());
        store.delete("clip.mp4").await.unwrap();

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn delete_rejects_escaping_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path());

        let err = store.delete("../outside.jpg").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
