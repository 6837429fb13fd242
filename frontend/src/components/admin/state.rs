//! Runtime state of the admin dashboard.
//!
//! The dashboard owns the `FormCatalog` (backed by `localStorage`) and the
//! normalized feedback list. `analytics` is derived from `feedbacks` and is
//! recomputed every time the list changes; it is never stored.

use common::analytics::aggregate;
use common::catalog::FormCatalog;
use common::model::analytics::AnalyticsGroup;
use common::model::feedback::NormalizedFeedback;
use common::model::template::FormTemplate;
use common::normalize::FeedbackNormalizer;

use crate::config::api_base_url;
use crate::helpers::{browser_normalizer, show_toast};
use crate::services::http_store::HttpFeedbackStore;
use crate::services::local_storage::LocalStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    /// Terminal error screen with a manual retry.
    Failed(String),
    Ready,
}

/// Draft of a template being edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingForm {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl From<FormTemplate> for EditingForm {
    fn from(form: FormTemplate) -> Self {
        Self {
            id: form.id,
            title: form.title,
            description: form.description.unwrap_or_default(),
        }
    }
}

pub struct AdminDashboard {
    pub load_state: LoadState,
    pub feedbacks: Vec<NormalizedFeedback>,
    pub analytics: Vec<AnalyticsGroup>,
    /// `None` when the stored catalog could not be read.
    pub catalog: Option<FormCatalog<LocalStorage>>,
    pub new_title: String,
    pub new_description: String,
    pub editing: Option<EditingForm>,
    pub clearing: bool,
    pub store: HttpFeedbackStore,
    pub normalizer: FeedbackNormalizer,
}

impl AdminDashboard {
    pub fn new() -> Self {
        let catalog = match FormCatalog::load_or_initialize(LocalStorage) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                gloo_console::error!(format!("Could not load feedback forms: {}", e));
                show_toast("Could not load feedback forms.");
                None
            }
        };

        Self {
            load_state: LoadState::Loading,
            feedbacks: Vec::new(),
            analytics: Vec::new(),
            catalog,
            new_title: String::new(),
            new_description: String::new(),
            editing: None,
            clearing: false,
            store: HttpFeedbackStore::new(api_base_url()),
            normalizer: browser_normalizer(),
        }
    }

    pub fn forms(&self) -> &[FormTemplate] {
        self.catalog.as_ref().map(|c| c.forms()).unwrap_or(&[])
    }

    pub fn set_feedbacks(&mut self, feedbacks: Vec<NormalizedFeedback>) {
        self.analytics = aggregate(&feedbacks);
        self.feedbacks = feedbacks;
    }
}
