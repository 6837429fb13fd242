use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedbackFormProps {
    /// Invoked by the "Admin Login" button in the navigation bar.
    pub on_admin_login: Callback<()>,
}
