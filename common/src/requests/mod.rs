use serde::{Deserialize, Serialize};

use crate::model::image_record::RecordId;

/// Reply of the asset store to an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
}

/// Reply of the record store to a create call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRecord {
    pub id: RecordId,
}

impl CreatedRecord {
    /// Reads the record id from a successful create reply.
    ///
    /// The record is stored once the store answers 2xx; a body without an id
    /// only means the id is unknown.
    pub fn id_from_reply(body: &str) -> Option<RecordId> {
        match serde_json::from_str::<CreatedRecord>(body) {
            Ok(created) => Some(created.id),
            Err(err) => {
                log::debug!("create reply carries no record id: {}", err);
                None
            }
        }
    }
}
