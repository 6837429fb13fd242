use common::model::template::FormTemplate;

#[derive(Clone)]
pub enum Msg {
    SelectForm(FormTemplate),
    UpdateName(String),
    UpdateEmail(String),
    UpdateComments(String),
    SetRating(u8),
    HoverRating(u8),
    Submit,
    SubmitSucceeded,
    SubmitFailed,
    /// Leaves the selected form and clears everything entered.
    Back,
}
