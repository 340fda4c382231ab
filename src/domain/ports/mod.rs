mod picker;
mod surface;
mod transport;

pub use picker::FilePicker;
pub use surface::{TextRegion, Toggle};
pub use transport::{PictureTransport, UploadReply};
