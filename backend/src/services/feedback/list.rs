use actix_web::{web, HttpResponse, Responder};
use common::model::feedback::{FeedbackRecord, RawTimestamp};
use log::error;

use crate::db::Database;

pub async fn process(db: web::Data<Database>) -> impl Responder {
    match list_feedback(&db) {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            error!("Error listing feedback: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error listing feedback: {}", e))
        }
    }
}

/// Returns every stored record in insertion order.
///
/// A row whose `answers` column is not valid JSON is still listed, with no
/// answers, so clients fall back to their defaults for it.
pub fn list_feedback(db: &Database) -> Result<Vec<FeedbackRecord>, String> {
    let conn = db.connect()?;
    let mut stmt = conn
        .prepare("SELECT id, answers, created_at FROM feedback ORDER BY rowid")
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map([], |row| {
            let answers: String = row.get(1)?;
            Ok(FeedbackRecord {
                id: row.get(0)?,
                answers: serde_json::from_str(&answers).ok(),
                created_at: Some(RawTimestamp::Text(row.get(2)?)),
            })
        })
        .map_err(|e| e.to_string())?;

    let records = rows
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    Ok(records)
}
