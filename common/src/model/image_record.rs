use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted image entry as served by the collection listing.
///
/// Records are immutable once created. The UI only ever holds read-only copies
/// of what the store returned, in the order the store returned them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Location of the uploaded asset.
    pub url: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(rename = "ts")]
    pub created_at: i64,
}

/// Payload of the persistence call made by the submission pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewImageRecord {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// One page of the collection listing. `after` is the cursor of the next page,
/// `None` on the last one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImagePage {
    pub data: Vec<ImageRecord>,
    #[serde(default)]
    pub after: Option<String>,
}
