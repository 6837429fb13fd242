//! # Feedback Normalizer
//!
//! Maps a [`FeedbackRecord`] as returned by the store into the
//! [`NormalizedFeedback`] shape used by analytics and the admin view.
//!
//! ## Defaults
//!
//! | field      | when absent or empty       |
//! |------------|----------------------------|
//! | `formType` | `"General Feedback"`       |
//! | `name`     | `"Anonymous"`              |
//! | `email`    | `"N/A"`                    |
//! | `rating`   | `0`                        |
//! | `comments` | `"No comments provided"`   |
//!
//! The rating is coerced to an integer; anything non-numeric becomes 0.
//! Values outside 1..=5 are passed through untouched and it is up to the
//! analytics to ignore them in the histogram.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use serde_json::Value;

use crate::model::feedback::{FeedbackRecord, NormalizedFeedback, RawTimestamp};
use crate::model::template::DEFAULT_FORM_TITLE;

pub const DEFAULT_NAME: &str = "Anonymous";
pub const DEFAULT_EMAIL: &str = "N/A";
pub const DEFAULT_COMMENTS: &str = "No comments provided";
pub const INVALID_DATE: &str = "Invalid Date";

/// en-US style, e.g. `3/7/2024, 9:05:00 PM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Offset lookup for a given instant, e.g. the browser's local zone including
/// daylight saving. `None` falls back to UTC.
pub type ZoneLookup = fn(DateTime<Utc>) -> Option<FixedOffset>;

#[derive(Debug, Clone, Copy)]
enum Zone {
    Fixed(FixedOffset),
    PerInstant(ZoneLookup),
}

/// Pure record-to-display mapping. The only configuration is the zone used
/// when rendering `createdAt`, so output is deterministic for a given record
/// and zone.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackNormalizer {
    zone: Zone,
}

impl Default for FeedbackNormalizer {
    fn default() -> Self {
        Self::utc()
    }
}

impl FeedbackNormalizer {
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            zone: Zone::Fixed(offset),
        }
    }

    /// Renders each timestamp with the offset `lookup` reports for that
    /// instant, so records on either side of a DST change both show local time.
    pub fn with_zone(lookup: ZoneLookup) -> Self {
        Self {
            zone: Zone::PerInstant(lookup),
        }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    pub fn normalize(&self, record: &FeedbackRecord) -> NormalizedFeedback {
        let answers = record.answers.clone().unwrap_or_default();

        NormalizedFeedback {
            id: record.id.clone(),
            form_type: or_default(answers.form_type, DEFAULT_FORM_TITLE),
            name: or_default(answers.name, DEFAULT_NAME),
            email: or_default(answers.email, DEFAULT_EMAIL),
            rating: coerce_rating(answers.rating.as_ref()),
            comments: or_default(answers.comments, DEFAULT_COMMENTS),
            created_at: self.format_timestamp(record.created_at.as_ref()),
        }
    }

    pub fn normalize_all(&self, records: &[FeedbackRecord]) -> Vec<NormalizedFeedback> {
        records.iter().map(|r| self.normalize(r)).collect()
    }

    fn format_timestamp(&self, raw: Option<&RawTimestamp>) -> String {
        match raw.and_then(parse_timestamp) {
            Some(at) => at
                .with_timezone(&self.offset_at(at))
                .format(DISPLAY_FORMAT)
                .to_string(),
            None => INVALID_DATE.to_string(),
        }
    }

    fn offset_at(&self, at: DateTime<Utc>) -> FixedOffset {
        match self.zone {
            Zone::Fixed(offset) => offset,
            Zone::PerInstant(lookup) => lookup(at).unwrap_or_else(|| Utc.fix()),
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Numeric conversion of a stored rating: numbers and numeric strings are
/// accepted, booleans count as 1/0, everything else is 0. Fractions are
/// truncated toward zero.
pub fn coerce_rating(raw: Option<&Value>) -> i64 {
    let number = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() { Some(0.0) } else { s.parse::<f64>().ok() }
        }
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => n.trunc() as i64,
        _ => 0,
    }
}

fn parse_timestamp(raw: &RawTimestamp) -> Option<DateTime<Utc>> {
    match raw {
        RawTimestamp::Millis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms),
        RawTimestamp::Text(s) => {
            let s = s.trim();
            if let Ok(at) = DateTime::parse_from_rfc3339(s) {
                return Some(at.with_timezone(&Utc));
            }
            if let Ok(at) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(at.and_utc());
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|at| at.and_utc())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::feedback::Answers;

    fn record(answers: Option<Answers>, created_at: Option<RawTimestamp>) -> FeedbackRecord {
        FeedbackRecord {
            id: "r1".into(),
            answers,
            created_at,
        }
    }

    #[test]
    fn missing_answers_get_defaults() {
        let n = FeedbackNormalizer::utc().normalize(&record(None, None));
        assert_eq!(n.form_type, "General Feedback");
        assert_eq!(n.name, "Anonymous");
        assert_eq!(n.email, "N/A");
        assert_eq!(n.rating, 0);
        assert_eq!(n.comments, "No comments provided");
        assert_eq!(n.created_at, "Invalid Date");
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let answers = Answers {
            form_type: Some(String::new()),
            name: Some(String::new()),
            email: Some("ann@example.com".into()),
            rating: Some(Value::from(5)),
            comments: Some(String::new()),
        };
        let n = FeedbackNormalizer::utc().normalize(&record(Some(answers), None));
        assert_eq!(n.form_type, "General Feedback");
        assert_eq!(n.name, "Anonymous");
        assert_eq!(n.email, "ann@example.com");
        assert_eq!(n.rating, 5);
        assert_eq!(n.comments, "No comments provided");
    }

    #[test]
    fn rating_coercion() {
        let cases = [
            (Some(Value::from(4)), 4),
            (Some(Value::from("3")), 3),
            (Some(Value::from(" 2 ")), 2),
            (Some(Value::from("")), 0),
            (Some(Value::from("great")), 0),
            (Some(Value::from(4.7)), 4),
            (Some(Value::from(true)), 1),
            (Some(Value::Null), 0),
            (Some(serde_json::json!([5])), 0),
            (Some(Value::from("inf")), 0),
            (None, 0),
        ];
        for (raw, expected) in cases {
            assert_eq!(coerce_rating(raw.as_ref()), expected, "raw = {raw:?}");
        }
    }

    #[test]
    fn out_of_range_ratings_pass_through() {
        assert_eq!(coerce_rating(Some(&Value::from(9))), 9);
        assert_eq!(coerce_rating(Some(&Value::from("-1"))), -1);
        assert_eq!(coerce_rating(Some(&Value::from("1e18"))), 1_000_000_000_000_000_000);
        assert_eq!(coerce_rating(Some(&Value::from(1e300))), i64::MAX);
    }

    #[test]
    fn timestamps_render_in_offset() {
        let at = Some(RawTimestamp::Text("2024-03-07T21:05:00Z".into()));
        let utc = FeedbackNormalizer::utc().normalize(&record(None, at.clone()));
        assert_eq!(utc.created_at, "3/7/2024, 9:05:00 PM");

        let east = FeedbackNormalizer::new(FixedOffset::east_opt(5 * 3600).unwrap());
        assert_eq!(east.normalize(&record(None, at)).created_at, "3/8/2024, 2:05:00 AM");
    }

    /// UTC+1 in winter, UTC+2 from 2024-03-31 01:00 UTC.
    fn central_europe(at: DateTime<Utc>) -> Option<FixedOffset> {
        let switch = DateTime::parse_from_rfc3339("2024-03-31T01:00:00Z").unwrap();
        let hours = if at < switch { 1 } else { 2 };
        FixedOffset::east_opt(hours * 3600)
    }

    #[test]
    fn zone_lookup_applies_per_record() {
        let n = FeedbackNormalizer::with_zone(central_europe);
        let winter = record(None, Some(RawTimestamp::Text("2024-03-30T12:00:00Z".into())));
        let summer = record(None, Some(RawTimestamp::Text("2024-04-01T12:00:00Z".into())));
        assert_eq!(n.normalize(&winter).created_at, "3/30/2024, 1:00:00 PM");
        assert_eq!(n.normalize(&summer).created_at, "4/1/2024, 2:00:00 PM");

        let unknown = FeedbackNormalizer::with_zone(|_| None);
        assert_eq!(unknown.normalize(&winter).created_at, "3/30/2024, 12:00:00 PM");
    }

    #[test]
    fn alternate_timestamp_shapes() {
        let n = FeedbackNormalizer::utc();
        let millis = record(None, Some(RawTimestamp::Millis(0)));
        assert_eq!(n.normalize(&millis).created_at, "1/1/1970, 12:00:00 AM");

        let sqlite = record(None, Some(RawTimestamp::Text("2024-01-02 13:14:15".into())));
        assert_eq!(n.normalize(&sqlite).created_at, "1/2/2024, 1:14:15 PM");

        let garbage = record(None, Some(RawTimestamp::Text("yesterday".into())));
        assert_eq!(n.normalize(&garbage).created_at, "Invalid Date");
    }

    #[test]
    fn normalization_is_deterministic() {
        let r = record(
            Some(Answers {
                name: Some("Bo".into()),
                rating: Some(Value::from("5")),
                ..Answers::default()
            }),
            Some(RawTimestamp::Millis(1_700_000_000_000)),
        );
        let n = FeedbackNormalizer::utc();
        assert_eq!(n.normalize(&r), n.normalize(&r));
        assert_eq!(n.normalize_all(&[r.clone(), r]).len(), 2);
    }
}
