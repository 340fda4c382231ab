use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::domain::{
    ports::{PictureTransport, UploadReply},
    DomainError, Picture, SearchRequest, VisionRequest,
};
use crate::infrastructure::config::AppConfig;

/// Multipart field the backend reads the uploaded image from.
pub const UPLOAD_FIELD: &str = "file";

/// `reqwest` client for the picture backend. No request timeout is set.
pub struct HttpTransport {
    client: Client,
    pictures_url: String,
    search_url: String,
    vision_url: String,
}

impl HttpTransport {
    pub fn new(config: &AppConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(concat!("picture-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::internal(e.to_string()))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            pictures_url: config.pictures_url(),
            search_url: config.search_url(),
            vision_url: config.vision_url(),
        }
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<Value, DomainError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;
        debug!(url, status = status.as_u16(), bytes = text.len(), "response received");

        serde_json::from_str(&text).map_err(|e| DomainError::parse(e.to_string()))
    }
}

#[async_trait]
impl PictureTransport for HttpTransport {
    #[instrument(skip(self, picture), fields(file = %picture.file_name))]
    async fn upload(&self, picture: &Picture) -> Result<UploadReply, DomainError> {
        let part = Part::bytes(picture.bytes.clone())
            .file_name(picture.file_name.clone())
            .mime_str(&picture.content_type)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(&self.pictures_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::external(e.to_string()))?;

        Ok(UploadReply::new(status, body))
    }

    #[instrument(skip(self, request))]
    async fn search(&self, request: &SearchRequest) -> Result<Value, DomainError> {
        self.post_json(&self.search_url, request).await
    }

    #[instrument(skip(self, request))]
    async fn vision(&self, request: &VisionRequest) -> Result<Value, DomainError> {
        self.post_json(&self.vision_url, request).await
    }
}
