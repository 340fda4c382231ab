use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// An image chosen by the user, held in memory until it is uploaded.
#[derive(Debug, Clone)]
pub struct Picture {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Picture {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn from_path(path: &Path, bytes: Vec<u8>) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Self::new(file_name, bytes)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Embedding text exactly as the upload endpoint returned it.
///
/// The client never interprets the contents; [`FeatureVector::dimension`]
/// only peeks at it for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(String);

impl FeatureVector {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of components when the text is a JSON array of numbers.
    pub fn dimension(&self) -> Option<usize> {
        serde_json::from_str::<Vec<f64>>(&self.0)
            .ok()
            .map(|components| components.len())
    }
}

impl From<String> for FeatureVector {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for FeatureVector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picture_guesses_content_type() {
        let picture = Picture::new("cat.png", vec![1, 2, 3]);
        assert_eq!(picture.content_type, "image/png");
        assert_eq!(picture.size(), 3);

        let unknown = Picture::new("blob", vec![]);
        assert_eq!(unknown.content_type, "application/octet-stream");
    }

    #[test]
    fn test_picture_from_path_uses_file_name() {
        let picture = Picture::from_path(Path::new("/tmp/photos/dog.jpg"), vec![0]);
        assert_eq!(picture.file_name, "dog.jpg");
        assert_eq!(picture.content_type, "image/jpeg");
    }

    #[test]
    fn test_vector_dimension() {
        assert_eq!(FeatureVector::new("[0.5, -1, 2e-3]").dimension(), Some(3));
        assert_eq!(FeatureVector::new("v1").dimension(), None);
    }

    #[test]
    fn test_vector_serializes_as_plain_string() {
        let json = serde_json::to_string(&FeatureVector::new("[1, 2]")).unwrap();
        assert_eq!(json, r#""[1, 2]""#);
    }
}
