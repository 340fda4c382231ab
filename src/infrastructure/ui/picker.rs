use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::{ports::FilePicker, DomainError, Picture};

/// File picker backed by an optional path on disk.
#[derive(Debug, Clone, Default)]
pub struct PathPicker {
    path: Option<PathBuf>,
}

impl PathPicker {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FilePicker for PathPicker {
    async fn selected(&self) -> Result<Option<Picture>, DomainError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| DomainError::validation(format!("{}: {e}", path.display())))?;

        Ok(Some(Picture::from_path(path, bytes)))
    }
}
