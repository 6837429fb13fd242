use common::model::feedback::{FeedbackRecord, NormalizedFeedback};
use common::model::template::FormTemplate;

pub enum Msg {
    /// (Re)fetches all feedback; also the "Retry" action of the error screen.
    Reload,
    FeedbackLoaded(Vec<NormalizedFeedback>),
    LoadFailed(String),

    UpdateNewTitle(String),
    UpdateNewDescription(String),
    AddForm,
    StartEdit(FormTemplate),
    UpdateEditTitle(String),
    UpdateEditDescription(String),
    SaveEdit,
    CancelEdit,
    DeleteForm(String),

    ClearAnalytics,
    /// Records still present after the clear, as re-read from the store.
    ClearFinished(Vec<FeedbackRecord>),
    ClearFailed,

    Logout,
}
