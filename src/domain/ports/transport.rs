use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{errors::DomainError, Picture, SearchRequest, VisionRequest};

/// Status and body of a completed upload, whatever the status was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReply {
    pub status: u16,
    pub body: String,
}

impl UploadReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Outbound calls to the picture backend.
///
/// `upload` only fails when no response arrives; `search` and `vision` also
/// fail when the body is not JSON.
#[async_trait]
pub trait PictureTransport: Send + Sync {
    async fn upload(&self, picture: &Picture) -> Result<UploadReply, DomainError>;
    async fn search(&self, request: &SearchRequest) -> Result<Value, DomainError>;
    async fn vision(&self, request: &VisionRequest) -> Result<Value, DomainError>;
}
