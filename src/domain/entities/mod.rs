mod payload;
mod picture;
mod session;

pub use payload::{
    render_text, search_results_text, SearchRequest, VisionRequest, CALL_FAILED_MESSAGE,
    DEFAULT_VISION_PICTURE1, DEFAULT_VISION_PICTURE2,
};
pub use picture::{FeatureVector, Picture};
pub use session::Session;
