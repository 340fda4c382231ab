use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::{
    ports::{FilePicker, PictureTransport, TextRegion, Toggle},
    render_text, search_results_text, FeatureVector, SearchRequest, Session, VisionRequest,
    CALL_FAILED_MESSAGE,
};

/// Status shown when an upload never got a response.
const NO_RESPONSE_STATUS: u16 = 0;

/// UI handles resolved once and handed to [`SearchClient::new`].
#[derive(Clone)]
pub struct UiBindings {
    pub picker: Arc<dyn FilePicker>,
    pub vector: Arc<dyn TextRegion>,
    pub image_results: Arc<dyn TextRegion>,
    pub search_button: Arc<dyn Toggle>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    NoFile,
    VectorReady(FeatureVector),
    UploadFailed { status: u16 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    NoVector,
    ResultsShown(Value),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VisionOutcome {
    Shown(Value),
    Failed,
}

/// Upload, search and vision-compare handlers bound to one set of UI handles.
///
/// Handlers never return errors: every failure ends up as region text or a
/// log line, and nothing is retried.
pub struct SearchClient {
    transport: Arc<dyn PictureTransport>,
    ui: UiBindings,
    vision: VisionRequest,
}

impl SearchClient {
    pub fn new(transport: Arc<dyn PictureTransport>, ui: UiBindings) -> Self {
        ui.search_button.set_enabled(false);
        Self {
            transport,
            ui,
            vision: VisionRequest::default(),
        }
    }

    pub fn with_vision_request(mut self, vision: VisionRequest) -> Self {
        self.vision = vision;
        self
    }

    pub fn search_enabled(&self) -> bool {
        self.ui.search_button.is_enabled()
    }

    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub async fn submit(&self, session: &mut Session) -> SubmitOutcome {
        let picture = match self.ui.picker.selected().await {
            Ok(Some(picture)) => picture,
            Ok(None) => {
                info!("no file selected");
                return SubmitOutcome::NoFile;
            }
            Err(e) => {
                warn!(error = %e, "could not read selected file");
                return SubmitOutcome::NoFile;
            }
        };

        info!(file = %picture.file_name, size = picture.size(), "posting file");

        let reply = match self.transport.upload(&picture).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "upload got no response");
                self.ui.vector.set_text(&NO_RESPONSE_STATUS.to_string());
                return SubmitOutcome::UploadFailed {
                    status: NO_RESPONSE_STATUS,
                };
            }
        };

        if !reply.is_ok() {
            info!(status = reply.status, "upload rejected");
            self.ui.vector.set_text(&reply.status.to_string());
            return SubmitOutcome::UploadFailed {
                status: reply.status,
            };
        }

        let vector = FeatureVector::new(reply.body);
        info!(dimension = ?vector.dimension(), "vector received");
        self.ui.vector.set_text(vector.as_str());
        session.store_vector(vector.clone());
        self.ui.search_button.set_enabled(true);

        SubmitOutcome::VectorReady(vector)
    }

    #[instrument(skip(self, session), fields(session_id = %session.id))]
    pub async fn search(&self, session: &Session) -> SearchOutcome {
        let Some(vector) = session.last_vector() else {
            warn!("search requested before any successful upload");
            return SearchOutcome::NoVector;
        };

        let request = SearchRequest::new(vector.clone());
        match self.transport.search(&request).await {
            Ok(results) => {
                info!(results = %results, "search succeeded");
                self.ui.image_results.set_text(&search_results_text(&results));
                SearchOutcome::ResultsShown(results)
            }
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                self.ui.image_results.set_text(CALL_FAILED_MESSAGE);
                SearchOutcome::Failed
            }
        }
    }

    #[instrument(skip(self, target))]
    pub async fn vision_compare(&self, target: &dyn TextRegion) -> VisionOutcome {
        match self.transport.vision(&self.vision).await {
            Ok(result) => {
                info!(result = %result, "vision compare succeeded");
                target.set_text(&render_text(&result));
                VisionOutcome::Shown(result)
            }
            Err(e) => {
                tracing::error!(error = %e, "vision compare failed");
                target.set_text(CALL_FAILED_MESSAGE);
                VisionOutcome::Failed
            }
        }
    }
}
