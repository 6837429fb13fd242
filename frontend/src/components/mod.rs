pub mod admin;
pub mod feedback_form;
