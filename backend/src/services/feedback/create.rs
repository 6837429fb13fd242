use actix_web::{web, HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};
use common::model::feedback::{Answers, FeedbackRecord, FeedbackSubmission, RawTimestamp};
use log::{error, warn};
use rusqlite::params;
use uuid::Uuid;

use crate::db::Database;

pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<FeedbackSubmission>,
) -> impl Responder {
    let submission = payload.into_inner();
    if let Err(e) = submission.validate() {
        warn!("Rejected feedback submission: {}", e);
        return HttpResponse::BadRequest().body(e.to_string());
    }

    match create_feedback(&db, &submission) {
        Ok(record) => HttpResponse::Created().json(record),
        Err(e) => {
            error!("Error storing feedback: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error storing feedback: {}", e))
        }
    }
}

/// Stores a submission under a fresh id, stamped with the current UTC time.
pub fn create_feedback(
    db: &Database,
    submission: &FeedbackSubmission,
) -> Result<FeedbackRecord, String> {
    let answers = Answers::from(submission);
    let answers_json = serde_json::to_string(&answers).map_err(|e| e.to_string())?;
    let id = Uuid::new_v4().to_string();
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let conn = db.connect()?;
    conn.execute(
        "INSERT INTO feedback (id, answers, created_at) VALUES (?1, ?2, ?3)",
        params![&id, &answers_json, &created_at],
    )
    .map_err(|e| e.to_string())?;

    Ok(FeedbackRecord {
        id,
        answers: Some(answers),
        created_at: Some(RawTimestamp::Text(created_at)),
    })
}
