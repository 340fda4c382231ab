use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::application::{SearchClient, SubmitOutcome, UiBindings};
use crate::cli::{Cli, Command};
use crate::domain::{ports::PictureTransport, FeatureVector, Session, VisionRequest};
use crate::infrastructure::{AppConfig, ConsoleRegion, HttpTransport, PathPicker, SwitchToggle};

/// The regions and controls a command writes into.
pub struct Page {
    pub vector: Arc<ConsoleRegion>,
    pub image_results: Arc<ConsoleRegion>,
    pub vision_results: Arc<ConsoleRegion>,
    pub search_button: Arc<SwitchToggle>,
}

impl Page {
    pub fn console() -> Self {
        Self {
            vector: Arc::new(ConsoleRegion::new("vector")),
            image_results: Arc::new(ConsoleRegion::new("imageResults")),
            vision_results: Arc::new(ConsoleRegion::new("visionResults")),
            search_button: Arc::new(SwitchToggle::new("search", false)),
        }
    }

    pub fn quiet() -> Self {
        Self {
            vector: Arc::new(ConsoleRegion::quiet("vector")),
            image_results: Arc::new(ConsoleRegion::quiet("imageResults")),
            vision_results: Arc::new(ConsoleRegion::quiet("visionResults")),
            search_button: Arc::new(SwitchToggle::new("search", false)),
        }
    }

    fn bindings(&self, file: Option<PathBuf>) -> UiBindings {
        UiBindings {
            picker: Arc::new(PathPicker::new(file)),
            vector: self.vector.clone(),
            image_results: self.image_results.clone(),
            search_button: self.search_button.clone(),
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(origin) = cli.origin {
        config = config.with_origin(origin);
    }
    info!(origin = %config.server.origin, "using backend");

    let transport = Arc::new(HttpTransport::new(&config)?);
    execute(cli.command, &config, transport, &Page::console()).await;
    Ok(())
}

/// Runs one command; handler failures end up in `page`, never as errors.
pub async fn execute(
    command: Command,
    config: &AppConfig,
    transport: Arc<dyn PictureTransport>,
    page: &Page,
) {
    let vision = config.vision_request();

    match command {
        Command::Upload { file } => {
            let client = SearchClient::new(transport, page.bindings(file));
            client.submit(&mut Session::new()).await;
        }
        Command::Search { vector } => {
            let client = SearchClient::new(transport, page.bindings(None));
            let session = Session::new().with_vector(FeatureVector::new(vector));
            client.search(&session).await;
        }
        Command::Vision { picture1, picture2 } => {
            let request = VisionRequest::new(
                picture1.unwrap_or(vision.picture1),
                picture2.unwrap_or(vision.picture2),
            );
            let client =
                SearchClient::new(transport, page.bindings(None)).with_vision_request(request);
            client.vision_compare(&*page.vision_results).await;
        }
        Command::Run { file } => {
            let client = SearchClient::new(transport, page.bindings(file));
            let mut session = Session::new();
            let outcome = client.submit(&mut session).await;

            if client.search_enabled() {
                client.search(&session).await;
            } else if !matches!(outcome, SubmitOutcome::NoFile) {
                info!(?outcome, "search stays disabled");
            }
        }
    }
}
