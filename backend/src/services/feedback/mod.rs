//! # Feedback Service Module
//!
//! HTTP surface of the feedback record store. Everything lives under
//! `/api/feedback` (see `common::requests::FEEDBACK_API_PATH`), so the
//! frontend client and these routes share one definition of the paths.
//!
//! ## Sub-modules:
//! - `create`: stores a new submission.
//! - `list`: returns every stored record.
//! - `delete`: removes one record by id.

mod create;
mod delete;
mod list;

use actix_web::web::{delete, get, post, scope};
use actix_web::Scope;
use common::requests::FEEDBACK_API_PATH;

/// Configures and returns the Actix `Scope` for the feedback routes.
///
/// # Registered Routes:
///
/// *   **`POST /api/feedback`**:
///     - **Handler**: `create::process`
///     - **Description**: Expects a JSON `FeedbackSubmission`
///       (`{name, email, rating, comments, formType}`). Stores it with a new
///       UUID and the current time and answers `201 Created` with the stored
///       `FeedbackRecord`. Missing name/email or a rating above 5 yields
///       `400 Bad Request`.
///
/// *   **`GET /api/feedback`**:
///     - **Handler**: `list::process`
///     - **Description**: Returns the JSON array of all `FeedbackRecord`s
///       (`{id, answers, createdAt}`) in the order they were submitted.
///
/// *   **`DELETE /api/feedback/{feedback_id}`**:
///     - **Handler**: `delete::process`
///     - **Description**: Deletes the record with that id. `204 No Content` on
///       success, `404 Not Found` when the id is unknown.
///
/// Database failures are reported as `503 Service Unavailable`.
pub fn configure_routes() -> Scope {
    scope(FEEDBACK_API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{feedback_id}", delete().to(delete::process))
}
