mod http;

pub use http::{HttpTransport, UPLOAD_FIELD};
