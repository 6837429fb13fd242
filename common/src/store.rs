//! # Feedback Store Seam
//!
//! The portal never persists feedback itself. Records live in an external
//! store reached over HTTP (see `frontend::services::http_store`) which offers
//! three operations: list everything, create one record, delete one by id.
//!
//! On top of that seam this module provides the operations the views use:
//!
//! - [`submit_feedback`]: validate, then create.
//! - [`load_feedback`]: list and normalize.
//! - [`clear_all`]: list, then delete every record concurrently.
//! - [`clear_all_and_refresh`]: [`clear_all`] followed by a fresh listing, for
//!   callers that want the authoritative state instead of assuming "empty".
//!
//! All futures are single-threaded (`!Send` in the browser); none of the
//! operations retry.

use futures_util::future::join_all;
use log::{info, warn};

use crate::error::{ClearError, NetworkError, SubmitError};
use crate::model::feedback::{FeedbackRecord, FeedbackSubmission, NormalizedFeedback};
use crate::normalize::FeedbackNormalizer;

#[allow(async_fn_in_trait)]
pub trait FeedbackStore {
    async fn list(&self) -> Result<Vec<FeedbackRecord>, NetworkError>;
    async fn create(&self, submission: &FeedbackSubmission) -> Result<(), NetworkError>;
    async fn delete(&self, id: &str) -> Result<(), NetworkError>;
}

/// Validates `submission` and sends it to the store.
///
/// A validation failure returns before any request is made, so the caller can
/// keep the entered values and let the user correct them.
pub async fn submit_feedback<S: FeedbackStore>(
    store: &S,
    submission: &FeedbackSubmission,
) -> Result<(), SubmitError> {
    submission.validate()?;
    store.create(submission).await?;
    Ok(())
}

pub async fn load_feedback<S: FeedbackStore>(
    store: &S,
    normalizer: &FeedbackNormalizer,
) -> Result<Vec<NormalizedFeedback>, NetworkError> {
    let records = store.list().await?;
    Ok(normalizer.normalize_all(&records))
}

/// Deletes every record currently in the store.
///
/// One delete is issued per record and all of them are awaited, whatever the
/// outcome of the others. Returns the number of records deleted.
///
/// This is optimistic: on success the caller may clear its local list without
/// re-reading. On [`ClearError::PartialBulkFailure`] the deletes that
/// succeeded stay deleted and the caller must re-fetch to learn what is left.
pub async fn clear_all<S: FeedbackStore>(store: &S) -> Result<usize, ClearError> {
    let records = store.list().await.map_err(ClearError::Fetch)?;
    let total = records.len();

    let results = join_all(records.iter().map(|r| store.delete(&r.id))).await;
    let mut failures = results.into_iter().filter_map(Result::err);

    if let Some(first) = failures.next() {
        let failed = 1 + failures.count();
        warn!("clearing feedback: {failed} of {total} deletes failed, first error: {first}");
        return Err(ClearError::PartialBulkFailure {
            failed,
            total,
            first,
        });
    }

    info!("cleared {total} feedback records");
    Ok(total)
}

/// [`clear_all`], then lists the store again and returns what remains.
pub async fn clear_all_and_refresh<S: FeedbackStore>(
    store: &S,
) -> Result<Vec<FeedbackRecord>, ClearError> {
    clear_all(store).await?;
    store.list().await.map_err(ClearError::Refresh)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;

    use super::*;
    use crate::model::feedback::{Answers, RawTimestamp};

    #[derive(Default)]
    struct FakeStore {
        records: RefCell<Vec<FeedbackRecord>>,
        failing_ids: HashSet<String>,
        list_fails: bool,
        list_calls: Cell<usize>,
        delete_calls: Cell<usize>,
        created: RefCell<Vec<FeedbackSubmission>>,
    }

    impl FakeStore {
        fn with_ids(ids: &[&str]) -> Self {
            let records = ids
                .iter()
                .map(|id| FeedbackRecord {
                    id: id.to_string(),
                    answers: None,
                    created_at: Some(RawTimestamp::Millis(0)),
                })
                .collect();
            Self {
                records: RefCell::new(records),
                ..Self::default()
            }
        }

        fn remaining(&self) -> Vec<String> {
            self.records.borrow().iter().map(|r| r.id.clone()).collect()
        }
    }

    impl FeedbackStore for FakeStore {
        async fn list(&self) -> Result<Vec<FeedbackRecord>, NetworkError> {
            self.list_calls.set(self.list_calls.get() + 1);
            if self.list_fails {
                return Err(NetworkError::Transport("connection refused".into()));
            }
            Ok(self.records.borrow().clone())
        }

        async fn create(&self, submission: &FeedbackSubmission) -> Result<(), NetworkError> {
            self.created.borrow_mut().push(submission.clone());
            let id = format!("r{}", self.records.borrow().len() + 1);
            self.records.borrow_mut().push(FeedbackRecord {
                id,
                answers: Some(Answers::from(submission)),
                created_at: Some(RawTimestamp::Millis(0)),
            });
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), NetworkError> {
            self.delete_calls.set(self.delete_calls.get() + 1);
            if self.failing_ids.contains(id) {
                return Err(NetworkError::Status {
                    status: 500,
                    body: "boom".into(),
                });
            }
            // Let the other deletes interleave before this one lands.
            tokio::task::yield_now().await;
            self.records.borrow_mut().retain(|r| r.id != id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn clear_all_deletes_every_record() {
        let store = FakeStore::with_ids(&["a", "b", "c"]);
        assert_eq!(clear_all(&store).await.unwrap(), 3);
        assert_eq!(store.delete_calls.get(), 3);
        assert!(store.remaining().is_empty());
    }

    #[tokio::test]
    async fn clear_all_on_empty_store_issues_no_deletes() {
        let store = FakeStore::default();
        assert_eq!(clear_all(&store).await.unwrap(), 0);
        assert_eq!(store.delete_calls.get(), 0);
    }

    #[tokio::test]
    async fn one_failed_delete_does_not_stop_the_others() {
        let mut store = FakeStore::with_ids(&["a", "b", "c", "d"]);
        store.failing_ids.insert("b".to_string());

        let err = clear_all(&store).await.unwrap_err();
        match err {
            ClearError::PartialBulkFailure {
                failed,
                total,
                first,
            } => {
                assert_eq!((failed, total), (1, 4));
                assert!(matches!(first, NetworkError::Status { status: 500, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.delete_calls.get(), 4);
        assert_eq!(store.remaining(), ["b"]);
    }

    #[tokio::test]
    async fn failed_listing_deletes_nothing() {
        let store = FakeStore {
            list_fails: true,
            ..FakeStore::with_ids(&["a"])
        };
        assert!(matches!(clear_all(&store).await, Err(ClearError::Fetch(_))));
        assert_eq!(store.delete_calls.get(), 0);
    }

    #[tokio::test]
    async fn refresh_reports_authoritative_state() {
        let store = FakeStore::with_ids(&["a", "b"]);
        let remaining = clear_all_and_refresh(&store).await.unwrap();
        assert!(remaining.is_empty());
        assert_eq!(store.list_calls.get(), 2);
    }

    #[tokio::test]
    async fn invalid_submission_is_not_sent() {
        let store = FakeStore::default();
        let submission = FeedbackSubmission::for_template(None, "", "a@x.io", 3, "");
        assert!(matches!(
            submit_feedback(&store, &submission).await,
            Err(SubmitError::Validation(_))
        ));
        assert!(store.created.borrow().is_empty());
    }

    #[tokio::test]
    async fn submitted_feedback_comes_back_normalized() {
        let store = FakeStore::default();
        let submission = FeedbackSubmission::for_template(None, "Ann", "a@x.io", 4, "");
        submit_feedback(&store, &submission).await.unwrap();

        let feedback = load_feedback(&store, &FeedbackNormalizer::utc()).await.unwrap();
        assert_eq!(feedback.len(), 1);
        assert_eq!(feedback[0].name, "Ann");
        assert_eq!(feedback[0].rating, 4);
        assert_eq!(feedback[0].comments, "No comments provided");
        assert_eq!(feedback[0].created_at, "1/1/1970, 12:00:00 AM");
    }
}
