//! Runtime state of the visitor-facing submission page.

use common::catalog::FormCatalog;
use common::model::feedback::FeedbackSubmission;
use common::model::template::FormTemplate;

use crate::config::api_base_url;
use crate::helpers::show_toast;
use crate::services::http_store::HttpFeedbackStore;
use crate::services::local_storage::LocalStorage;

pub struct FeedbackFormComponent {
    /// Templates offered on the landing grid.
    pub forms: Vec<FormTemplate>,
    /// `None` while the visitor is still choosing a form.
    pub selected: Option<FormTemplate>,
    pub name: String,
    pub email: String,
    /// 0 means "not rated yet".
    pub rating: u8,
    /// Star under the pointer, used only for highlighting.
    pub hovered: u8,
    pub comments: String,
    pub submitting: bool,
    pub submitted: bool,
    pub store: HttpFeedbackStore,
}

impl FeedbackFormComponent {
    /// Loads the catalog (creating the default form on first visit).
    pub fn new() -> Self {
        let forms = match FormCatalog::load_or_initialize(LocalStorage) {
            Ok(catalog) => catalog.forms().to_vec(),
            Err(e) => {
                gloo_console::error!(format!("Could not load feedback forms: {}", e));
                show_toast("Could not load feedback forms.");
                Vec::new()
            }
        };

        Self {
            forms,
            selected: None,
            name: String::new(),
            email: String::new(),
            rating: 0,
            hovered: 0,
            comments: String::new(),
            submitting: false,
            submitted: false,
            store: HttpFeedbackStore::new(api_base_url()),
        }
    }

    pub fn submission(&self) -> FeedbackSubmission {
        FeedbackSubmission::for_template(
            self.selected.as_ref(),
            self.name.trim(),
            self.email.trim(),
            self.rating,
            self.comments.clone(),
        )
    }

    pub fn reset(&mut self) {
        self.selected = None;
        self.name.clear();
        self.email.clear();
        self.rating = 0;
        self.hovered = 0;
        self.comments.clear();
        self.submitting = false;
        self.submitted = false;
    }
}
