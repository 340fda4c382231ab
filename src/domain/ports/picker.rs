use async_trait::async_trait;

use crate::domain::{errors::DomainError, Picture};

#[async_trait]
pub trait FilePicker: Send + Sync {
    /// The current selection, or `None` when nothing has been chosen.
    async fn selected(&self) -> Result<Option<Picture>, DomainError>;
}
