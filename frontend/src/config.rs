/// Base URL of the feedback API, fixed at build time through
/// `FEEDBACK_API_URL`. Empty means "same origin as the page", which is the
/// case when the backend serves the bundle itself.
pub fn api_base_url() -> &'static str {
    option_env!("FEEDBACK_API_URL").unwrap_or("")
}
