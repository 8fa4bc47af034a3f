//! Submission pipeline of the add-image form.
//!
//! Steps, each short-circuiting:
//! 1. validate every field (blocking errors abort, the form stays open);
//! 2. require the uploaded asset URL (`MissingAsset`);
//! 3. persist `{ title, description, url }` through the record store;
//! 4. on success invalidate the record collection, then notify;
//! 5. on failure notify with a generic message.
//!
//! Once past step 1 the form is reset and closed exactly once, whatever the
//! outcome.

use std::cell::Cell;

use crate::config::GalleryConfig;
use crate::model::image_record::RecordId;
use crate::model::notification::Notification;
use crate::model::pending_upload::PendingUpload;
use crate::validation::RuleSet;

use super::collaborators::{FormLifecycle, NotificationSink, RecordStore};
use super::error::SubmissionError;

pub struct SubmissionPipeline<R, N> {
    rules: RuleSet,
    records: R,
    notifier: N,
    collection_key: String,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag when the submission future completes or is dropped.
struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<R: RecordStore, N: NotificationSink> SubmissionPipeline<R, N> {
    pub fn new(rules: RuleSet, records: R, notifier: N, collection_key: impl Into<String>) -> Self {
        Self {
            rules,
            records,
            notifier,
            collection_key: collection_key.into(),
            in_flight: Cell::new(false),
        }
    }

    pub fn from_config(config: &GalleryConfig, records: R, notifier: N) -> Self {
        Self::new(
            RuleSet::new(config.limits.clone()),
            records,
            notifier,
            config.collection_key.clone(),
        )
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    /// Runs one submission of `pending` on behalf of `form`.
    ///
    /// Only one submission may be in flight; a concurrent call fails with
    /// [`SubmissionError::InFlight`] without touching the form or the stores.
    pub async fn submit<F>(
        &self,
        pending: &PendingUpload,
        form: &F,
    ) -> Result<Option<RecordId>, SubmissionError>
    where
        F: FormLifecycle + ?Sized,
    {
        if self.in_flight.replace(true) {
            log::debug!("submission rejected: another one is in flight");
            return Err(SubmissionError::InFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let blocking = self.rules.validate_upload(pending).blocking_errors();
        if !blocking.is_empty() {
            log::debug!("submission stopped by {} invalid field(s)", blocking.len());
            return Err(SubmissionError::ValidationFailed(blocking));
        }

        let outcome = self.persist(pending).await;
        form.reset_and_close();
        outcome
    }

    async fn persist(&self, pending: &PendingUpload) -> Result<Option<RecordId>, SubmissionError> {
        let Some(record) = pending.to_new_record() else {
            log::warn!("submission blocked: image asset is not uploaded");
            self.notifier
                .notify(Notification::error("Oops", "The image is required!"));
            return Err(SubmissionError::MissingAsset);
        };

        match self.records.create_record(&record).await {
            Ok(id) => {
                self.records.invalidate(&self.collection_key);
                match &id {
                    Some(id) => log::info!("image record {} created", id),
                    None => log::info!("image record created"),
                }
                self.notifier.notify(Notification::success(
                    "Success!",
                    "The image was registered successfully!",
                ));
                Ok(id)
            }
            Err(err) => {
                log::warn!("creating image record failed: {}", err);
                self.notifier.notify(Notification::error(
                    "Oops",
                    "Error sending the image, try again!",
                ));
                Err(SubmissionError::PersistenceFailed(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::model::image_record::NewImageRecord;
    use crate::model::notification::NotificationStatus;
    use crate::model::pending_upload::SelectedFile;
    use crate::requests::CreatedRecord;
    use crate::submission::error::CollaboratorError;
    use crate::validation::Field;

    type Log = Rc<RefCell<Vec<String>>>;

    #[derive(Clone, Copy)]
    enum Reply {
        Created,
        CreatedWithoutId,
        Failed,
    }

    struct FakeRecords {
        log: Log,
        created: RefCell<Vec<NewImageRecord>>,
        reply: Reply,
    }

    impl RecordStore for FakeRecords {
        async fn create_record(
            &self,
            record: &NewImageRecord,
        ) -> Result<Option<RecordId>, CollaboratorError> {
            self.log.borrow_mut().push("create".to_string());
            self.created.borrow_mut().push(record.clone());
            // Suspend once, like a real request would.
            tokio::task::yield_now().await;
            match self.reply {
                Reply::Created => Ok(Some(RecordId("rec-1".to_string()))),
                Reply::CreatedWithoutId => Ok(CreatedRecord::id_from_reply(r#"{"success":true}"#)),
                Reply::Failed => Err(CollaboratorError::Status {
                    code: 500,
                    body: "boom".to_string(),
                }),
            }
        }

        fn invalidate(&self, collection_key: &str) {
            self.log.borrow_mut().push(format!("invalidate:{collection_key}"));
        }
    }

    struct FakeNotifier {
        log: Log,
        sent: RefCell<Vec<Notification>>,
    }

    impl NotificationSink for FakeNotifier {
        fn notify(&self, notification: Notification) {
            self.log.borrow_mut().push("notify".to_string());
            self.sent.borrow_mut().push(notification);
        }
    }

    #[derive(Default)]
    struct FakeForm {
        pending: RefCell<PendingUpload>,
        closed: Cell<u32>,
    }

    impl FormLifecycle for FakeForm {
        fn reset_and_close(&self) {
            self.pending.borrow_mut().reset();
            self.closed.set(self.closed.get() + 1);
        }
    }

    impl FakeForm {
        fn snapshot(&self) -> PendingUpload {
            self.pending.borrow().clone()
        }
    }

    fn pipeline(reply: Reply) -> (SubmissionPipeline<FakeRecords, FakeNotifier>, Log) {
        let log = Log::default();
        let pipeline = SubmissionPipeline::from_config(
            &GalleryConfig::default(),
            FakeRecords {
                log: log.clone(),
                created: RefCell::default(),
                reply,
            },
            FakeNotifier {
                log: log.clone(),
                sent: RefCell::default(),
            },
        );
        (pipeline, log)
    }

    fn cat_jpg() -> SelectedFile {
        SelectedFile {
            name: "cat.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            size: 2 * 1024 * 1024,
        }
    }

    fn filled_form(uploaded: bool) -> FakeForm {
        let form = FakeForm::default();
        {
            let mut pending = form.pending.borrow_mut();
            pending.title = "Cat".to_string();
            pending.description = "A cat".to_string();
            let ticket = pending.begin_upload(cat_jpg());
            if uploaded {
                pending.complete_upload::<String>(ticket, Ok("https://cdn.test/cat.jpg".to_string()));
            }
        }
        form
    }

    #[tokio::test]
    async fn successful_submission_persists_invalidates_and_resets() {
        let (pipeline, log) = pipeline(Reply::Created);
        let form = filled_form(true);

        let id = pipeline.submit(&form.snapshot(), &form).await.unwrap();

        assert_eq!(id, Some(RecordId("rec-1".to_string())));
        assert_eq!(
            *pipeline.records.created.borrow(),
            vec![NewImageRecord {
                title: "Cat".to_string(),
                description: "A cat".to_string(),
                url: "https://cdn.test/cat.jpg".to_string(),
            }]
        );
        assert_eq!(*log.borrow(), vec!["create", "invalidate:images", "notify"]);

        let sent = pipeline.notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].status, NotificationStatus::Success);

        assert!(form.pending.borrow().is_empty());
        assert_eq!(form.closed.get(), 1);
        assert!(!pipeline.is_submitting());
    }

    #[tokio::test]
    async fn stored_record_without_id_still_counts_as_success() {
        let (pipeline, log) = pipeline(Reply::CreatedWithoutId);
        let form = filled_form(true);

        let id = pipeline.submit(&form.snapshot(), &form).await.unwrap();

        assert_eq!(id, None);
        assert_eq!(*log.borrow(), vec!["create", "invalidate:images", "notify"]);
        assert_eq!(
            pipeline.notifier.sent.borrow()[0],
            Notification::success("Success!", "The image was registered successfully!")
        );
        assert_eq!(form.closed.get(), 1);
    }

    #[tokio::test]
    async fn missing_file_makes_no_store_calls() {
        let (pipeline, log) = pipeline(Reply::Created);
        let form = FakeForm::default();
        {
            let mut pending = form.pending.borrow_mut();
            pending.title = "Cat".to_string();
            pending.description = "A cat".to_string();
        }

        let err = pipeline.submit(&form.snapshot(), &form).await.unwrap_err();

        assert_eq!(err, SubmissionError::MissingAsset);
        assert!(pipeline.records.created.borrow().is_empty());
        assert_eq!(*log.borrow(), vec!["notify"]);

        let sent = pipeline.notifier.sent.borrow();
        assert_eq!(sent[0].status, NotificationStatus::Error);
        assert!(sent[0].description.to_lowercase().contains("image is required"));

        assert!(form.pending.borrow().is_empty());
        assert_eq!(form.closed.get(), 1);
    }

    #[tokio::test]
    async fn upload_still_running_counts_as_missing_asset() {
        let (pipeline, _) = pipeline(Reply::Created);
        let form = filled_form(false);

        let err = pipeline.submit(&form.snapshot(), &form).await.unwrap_err();

        assert_eq!(err, SubmissionError::MissingAsset);
        assert!(pipeline.records.created.borrow().is_empty());
        assert_eq!(form.closed.get(), 1);
    }

    #[tokio::test]
    async fn invalid_fields_keep_the_form_open() {
        let (pipeline, log) = pipeline(Reply::Created);
        let form = filled_form(true);
        form.pending.borrow_mut().title = "x".to_string();

        let err = pipeline.submit(&form.snapshot(), &form).await.unwrap_err();

        match err {
            SubmissionError::ValidationFailed(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, Field::Title);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(log.borrow().is_empty());
        assert_eq!(form.closed.get(), 0);
        assert_eq!(form.pending.borrow().title, "x");
        assert!(!pipeline.is_submitting());
    }

    #[tokio::test]
    async fn persistence_failure_reports_generic_error_and_resets() {
        let (pipeline, log) = pipeline(Reply::Failed);
        let form = filled_form(true);

        let err = pipeline.submit(&form.snapshot(), &form).await.unwrap_err();

        assert!(matches!(err, SubmissionError::PersistenceFailed(CollaboratorError::Status { code: 500, .. })));
        assert_eq!(*log.borrow(), vec!["create", "notify"]);
        assert_eq!(
            pipeline.notifier.sent.borrow()[0],
            Notification::error("Oops", "Error sending the image, try again!")
        );
        assert!(form.pending.borrow().is_empty());
        assert_eq!(form.closed.get(), 1);
    }

    #[tokio::test]
    async fn concurrent_submission_is_rejected() {
        let (pipeline, _) = pipeline(Reply::Created);
        let form = filled_form(true);
        let pending = form.snapshot();

        let (first, second) = tokio::join!(
            pipeline.submit(&pending, &form),
            pipeline.submit(&pending, &form)
        );

        let outcomes = [first, second];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(outcomes.contains(&Err(SubmissionError::InFlight)));
        assert_eq!(pipeline.records.created.borrow().len(), 1);
        assert_eq!(form.closed.get(), 1);
    }

    #[tokio::test]
    async fn pipeline_accepts_new_submission_after_previous_one() {
        let (pipeline, _) = pipeline(Reply::Created);

        let form = filled_form(true);
        pipeline.submit(&form.snapshot(), &form).await.unwrap();
        let form = filled_form(true);
        pipeline.submit(&form.snapshot(), &form).await.unwrap();

        assert_eq!(pipeline.records.created.borrow().len(), 2);
    }
}
