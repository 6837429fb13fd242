//! HTTP client for the feedback record store.
//!
//! Implements `common::store::FeedbackStore` on top of `gloo_net`. Each client
//! owns an `AbortController` whose signal is attached to every request it
//! sends; a view calls [`HttpFeedbackStore::abort`] from `destroy` so nothing
//! keeps running after the view is gone. Clones share the controller.

use common::error::NetworkError;
use common::model::feedback::{FeedbackRecord, FeedbackSubmission};
use common::requests::{feedback_collection_url, feedback_item_url};
use common::store::FeedbackStore;
use gloo_net::http::{Request, Response};
use web_sys::{AbortController, AbortSignal};

#[derive(Clone)]
pub struct HttpFeedbackStore {
    base_url: String,
    controller: Option<AbortController>,
}

impl HttpFeedbackStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            controller: AbortController::new().ok(),
        }
    }

    /// Cancels every in-flight and future request made through this client.
    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }

    fn transport_error(&self, err: gloo_net::Error) -> NetworkError {
        match self.signal() {
            Some(signal) if signal.aborted() => NetworkError::Aborted,
            _ => NetworkError::Transport(err.to_string()),
        }
    }
}

/// Turns any non-2xx response into `NetworkError::Status`.
async fn ensure_success(response: Response) -> Result<Response, NetworkError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(NetworkError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

impl FeedbackStore for HttpFeedbackStore {
    async fn list(&self) -> Result<Vec<FeedbackRecord>, NetworkError> {
        let signal = self.signal();
        let response = Request::get(&feedback_collection_url(&self.base_url))
            .abort_signal(signal.as_ref())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        ensure_success(response)
            .await?
            .json::<Vec<FeedbackRecord>>()
            .await
            .map_err(|e| NetworkError::Decode(e.to_string()))
    }

    async fn create(&self, submission: &FeedbackSubmission) -> Result<(), NetworkError> {
        let signal = self.signal();
        let request = Request::post(&feedback_collection_url(&self.base_url))
            .abort_signal(signal.as_ref())
            .json(submission)
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        ensure_success(response).await.map(|_| ())
    }

    async fn delete(&self, id: &str) -> Result<(), NetworkError> {
        let signal = self.signal();
        let response = Request::delete(&feedback_item_url(&self.base_url, id))
            .abort_signal(signal.as_ref())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        ensure_success(response).await.map(|_| ())
    }
}
