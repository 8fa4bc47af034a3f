//! Contracts of the external collaborators driven by the submission pipeline.
//!
//! All of them run on the single-threaded UI event loop, so the async methods
//! return non-`Send` futures.
#![allow(async_fn_in_trait)]

use crate::model::image_record::{NewImageRecord, RecordId};
use crate::model::notification::Notification;

use super::error::CollaboratorError;

/// Stores binary image content and hands back a retrievable URL.
pub trait AssetStore {
    /// Handle to the file as the rendering layer knows it.
    type File;

    async fn upload(&self, file: &Self::File) -> Result<String, CollaboratorError>;
}

/// Durable storage of image metadata.
pub trait RecordStore {
    /// Persists `record`. `Ok(None)` means it was stored but the store did
    /// not report its id.
    async fn create_record(
        &self,
        record: &NewImageRecord,
    ) -> Result<Option<RecordId>, CollaboratorError>;

    /// Marks every cached read of `collection_key` as stale.
    fn invalidate(&self, collection_key: &str);
}

pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// The form hosting a submission. `reset_and_close` empties its pending
/// upload and closes it.
pub trait FormLifecycle {
    fn reset_and_close(&self);
}
