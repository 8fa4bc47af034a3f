//! Transient state of the add-image form.
//!
//! `PendingUpload` lives from form mount until the form is reset. The remote
//! asset URL is only reachable through [`UploadPhase::Ready`], so a submission
//! can never read a URL that an upload has not produced yet.

use serde::{Deserialize, Serialize};

use super::image_record::NewImageRecord;

/// Metadata of a file picked in the file input. The blob itself stays with
/// the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

/// Identifies one asset upload. Completions carrying an outdated ticket are
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading(UploadTicket),
    Ready { remote_url: String },
}

#[derive(Debug, Clone, Default)]
pub struct PendingUpload {
    pub selected_file: Option<SelectedFile>,
    pub title: String,
    pub description: String,
    phase: UploadPhase,
    // Survives `reset` so uploads started before a reset stay stale.
    last_ticket: u64,
}

impl PendingUpload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploading(_))
    }

    /// The uploaded asset URL, available only once the upload finished.
    pub fn remote_url(&self) -> Option<&str> {
        match &self.phase {
            UploadPhase::Ready { remote_url } if !remote_url.is_empty() => Some(remote_url),
            _ => None,
        }
    }

    /// Replaces the selected file without uploading it (e.g. the file failed
    /// validation or the selection was cleared). Any upload in progress
    /// becomes stale.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.selected_file = file;
        self.phase = UploadPhase::Idle;
    }

    /// Selects `file` and enters the uploading phase. The returned ticket
    /// must be handed back to [`PendingUpload::complete_upload`].
    pub fn begin_upload(&mut self, file: SelectedFile) -> UploadTicket {
        self.last_ticket += 1;
        let ticket = UploadTicket(self.last_ticket);
        self.selected_file = Some(file);
        self.phase = UploadPhase::Uploading(ticket);
        log::debug!("asset upload {} started", ticket.0);
        ticket
    }

    /// Applies the outcome of the upload identified by `ticket`.
    ///
    /// Returns `false` when the ticket is no longer current, in which case
    /// nothing changes. A failed upload falls back to `Idle` and keeps the
    /// selected file.
    pub fn complete_upload<E: std::fmt::Display>(
        &mut self,
        ticket: UploadTicket,
        outcome: Result<String, E>,
    ) -> bool {
        if self.phase != UploadPhase::Uploading(ticket) {
            log::debug!("discarding stale asset upload {}", ticket.0);
            return false;
        }

        self.phase = match outcome {
            Ok(remote_url) if !remote_url.is_empty() => UploadPhase::Ready { remote_url },
            Ok(_) => {
                log::warn!("asset upload {} returned an empty url", ticket.0);
                UploadPhase::Idle
            }
            Err(err) => {
                log::warn!("asset upload {} failed: {}", ticket.0, err);
                UploadPhase::Idle
            }
        };
        true
    }

    /// The record to persist, if the asset is ready. Text fields are sent
    /// trimmed, as they were measured by validation.
    pub fn to_new_record(&self) -> Option<NewImageRecord> {
        self.remote_url().map(|url| NewImageRecord {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            url: url.to_string(),
        })
    }

    /// Clears every user-visible field and the upload phase.
    pub fn reset(&mut self) {
        *self = Self {
            last_ticket: self.last_ticket,
            ..Self::default()
        };
    }

    pub fn is_empty(&self) -> bool {
        self.selected_file.is_none()
            && self.title.is_empty()
            && self.description.is_empty()
            && self.phase == UploadPhase::Idle
    }
}
