use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use rusqlite::params;

use crate::db::Database;

pub async fn process(db: web::Data<Database>, feedback_id: web::Path<String>) -> impl Responder {
    match delete_feedback(&db, &feedback_id) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body("Feedback not found"),
        Err(e) => {
            error!("Error deleting feedback {}: {}", feedback_id, e);
            HttpResponse::ServiceUnavailable().body(format!("Error deleting feedback: {}", e))
        }
    }
}

/// Deletes one record. `Ok(false)` means no record had that id.
pub fn delete_feedback(db: &Database, feedback_id: &str) -> Result<bool, String> {
    let conn = db.connect()?;
    let removed = conn
        .execute("DELETE FROM feedback WHERE id = ?1", params![feedback_id])
        .map_err(|e| e.to_string())?;
    if removed > 0 {
        info!("Deleted feedback {}", feedback_id);
    }
    Ok(removed > 0)
}
