use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FeatureVector;

/// Client-side state shared between the upload and search actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub last_vector: Option<FeatureVector>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            last_vector: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_vector(mut self, vector: FeatureVector) -> Self {
        self.store_vector(vector);
        self
    }

    /// Replaces the last vector; only a successful upload should call this.
    pub fn store_vector(&mut self, vector: FeatureVector) {
        self.last_vector = Some(vector);
        self.updated_at = Utc::now();
    }

    pub fn last_vector(&self) -> Option<&FeatureVector> {
        self.last_vector.as_ref()
    }

    pub fn has_vector(&self) -> bool {
        self.last_vector.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
