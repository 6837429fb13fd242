use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminDashboardProps {
    /// Invoked after the session flag has been cleared.
    pub on_logout: Callback<()>,
}
