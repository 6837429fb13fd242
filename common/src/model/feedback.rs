//! Feedback as it travels through the portal.
//!
//! - [`FeedbackSubmission`]: what the submission form sends to `POST /api/feedback`.
//! - [`FeedbackRecord`]: what the store hands back from `GET /api/feedback`. Every
//!   answer is optional because records written by older clients may lack fields.
//! - [`NormalizedFeedback`]: a record after defaults and coercion have been applied
//!   by the [`FeedbackNormalizer`](crate::normalize::FeedbackNormalizer).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ValidationError;
use crate::model::template::{DEFAULT_FORM_TITLE, FormTemplate};

pub const MAX_RATING: u8 = 5;

const RATING_LABELS: [&str; 5] = ["Very Poor", "Poor", "Average", "Good", "Excellent"];

/// Human label shown under the star picker; `None` for "no rating yet" (0) and
/// anything outside the 1..=5 scale.
pub fn rating_label(rating: i64) -> Option<&'static str> {
    match rating {
        1..=5 => Some(RATING_LABELS[(rating - 1) as usize]),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub comments: String,
    pub form_type: String,
}

impl FeedbackSubmission {
    /// Builds a submission for the selected template, falling back to the
    /// "General Feedback" form type when nothing is selected.
    pub fn for_template(
        selected: Option<&FormTemplate>,
        name: impl Into<String>,
        email: impl Into<String>,
        rating: u8,
        comments: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            rating,
            comments: comments.into(),
            form_type: selected
                .map(|t| t.title.clone())
                .unwrap_or_else(|| DEFAULT_FORM_TITLE.to_string()),
        }
    }

    /// Name and email are required; comments are optional and a rating of 0
    /// means "not rated".
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::empty("email"));
        }
        if self.rating > MAX_RATING {
            return Err(ValidationError::out_of_range("rating"));
        }
        Ok(())
    }
}

/// Answers of a stored record. The rating is kept as raw JSON because older
/// clients stored it as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    #[serde(default, deserialize_with = "lenient_text")]
    pub form_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default)]
    pub rating: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub comments: Option<String>,
}

impl From<&FeedbackSubmission> for Answers {
    fn from(s: &FeedbackSubmission) -> Self {
        Self {
            form_type: Some(s.form_type.clone()),
            name: Some(s.name.clone()),
            email: Some(s.email.clone()),
            rating: Some(Value::from(s.rating)),
            comments: Some(s.comments.clone()),
        }
    }
}

/// Creation time as stored: either a date-time string or epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    #[serde(deserialize_with = "crate::model::id::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_answers")]
    pub answers: Option<Answers>,
    #[serde(default)]
    pub created_at: Option<RawTimestamp>,
}

/// A record with every field filled in, ready for analytics and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFeedback {
    pub id: String,
    pub form_type: String,
    pub name: String,
    pub email: String,
    pub rating: i64,
    pub comments: String,
    pub created_at: String,
}

/// Reads strings as-is and scalars as their text form; anything else counts as
/// absent so that one odd record does not fail the whole listing.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// An `answers` value that is not an object (legacy string payloads, arrays)
/// reads as absent so the record still normalizes with defaults.
fn lenient_answers<'de, D>(deserializer: D) -> Result<Option<Answers>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_uses_selected_template_title() {
        let form = FormTemplate {
            id: "7".into(),
            title: "Checkout".into(),
            description: None,
        };
        let s = FeedbackSubmission::for_template(Some(&form), "Ann", "a@x.io", 4, "ok");
        assert_eq!(s.form_type, "Checkout");

        let s = FeedbackSubmission::for_template(None, "Ann", "a@x.io", 4, "ok");
        assert_eq!(s.form_type, "General Feedback");
    }

    #[test]
    fn submission_serializes_camel_case() {
        let s = FeedbackSubmission::for_template(None, "Ann", "a@x.io", 3, "");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["formType"], "General Feedback");
        assert_eq!(json["rating"], 3);
    }

    #[test]
    fn validation_requires_name_and_email() {
        let mut s = FeedbackSubmission::for_template(None, " ", "a@x.io", 3, "");
        assert_eq!(s.validate(), Err(ValidationError::empty("name")));
        s.name = "Ann".into();
        s.email = String::new();
        assert_eq!(s.validate(), Err(ValidationError::empty("email")));
        s.email = "a@x.io".into();
        assert!(s.validate().is_ok());
        s.rating = 6;
        assert_eq!(s.validate(), Err(ValidationError::out_of_range("rating")));
    }

    #[test]
    fn labels_cover_one_to_five_only() {
        assert_eq!(rating_label(1), Some("Very Poor"));
        assert_eq!(rating_label(5), Some("Excellent"));
        assert_eq!(rating_label(0), None);
        assert_eq!(rating_label(6), None);
    }

    #[test]
    fn record_tolerates_missing_and_odd_fields() {
        let json = r#"[
            {"id": 12, "createdAt": 1700000000000},
            {"id": "b", "answers": {"name": 42, "rating": "4", "comments": ["x"]}, "createdAt": "2024-01-01T00:00:00Z"}
        ]"#;
        let records: Vec<FeedbackRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].id, "12");
        assert!(records[0].answers.is_none());
        assert_eq!(records[0].created_at, Some(RawTimestamp::Millis(1_700_000_000_000)));

        let answers = records[1].answers.as_ref().unwrap();
        assert_eq!(answers.name.as_deref(), Some("42"));
        assert_eq!(answers.rating, Some(Value::from("4")));
        assert_eq!(answers.comments, None);
    }

    #[test]
    fn non_object_answers_do_not_fail_the_listing() {
        let json = r#"[
            {"id": "a", "answers": {"rating": 5}},
            {"id": "b", "answers": "legacy"},
            {"id": "c", "answers": [1, 2]},
            {"id": "d", "answers": null}
        ]"#;
        let records: Vec<FeedbackRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].answers.as_ref().unwrap().rating, Some(Value::from(5)));
        assert!(records[1..].iter().all(|r| r.answers.is_none()));
    }
}
