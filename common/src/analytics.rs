//! # Analytics Engine
//!
//! Groups normalized feedback by form type and derives, per group:
//!
//! - `total`: number of submissions,
//! - `avg`: mean rating rounded to one decimal place (`"3.4"`),
//! - `rating_counts`: a histogram over the ratings 5, 4, 3, 2, 1 (in that order).
//!
//! Groups appear in the order their form type is first seen in the input.
//!
//! A rating outside 1..=5 (typically 0, "not rated") still counts towards
//! `total` and pulls `avg` down, but is not part of any histogram bucket. The
//! bucket counts of a group can therefore sum to less than `total`.

use crate::model::analytics::{AnalyticsGroup, RatingCount};
use crate::model::feedback::NormalizedFeedback;
use crate::model::template::DEFAULT_FORM_TITLE;

/// Histogram buckets, highest first.
pub const RATING_BUCKETS: [u8; 5] = [5, 4, 3, 2, 1];

pub fn aggregate(records: &[NormalizedFeedback]) -> Vec<AnalyticsGroup> {
    let mut groups: Vec<(String, Vec<NormalizedFeedback>)> = Vec::new();

    for record in records {
        let key = if record.form_type.is_empty() {
            DEFAULT_FORM_TITLE
        } else {
            record.form_type.as_str()
        };
        match groups.iter_mut().find(|(form_type, _)| form_type == key) {
            Some((_, members)) => members.push(record.clone()),
            None => groups.push((key.to_string(), vec![record.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(form_type, feedbacks)| summarize(form_type, feedbacks))
        .collect()
}

fn summarize(form_type: String, feedbacks: Vec<NormalizedFeedback>) -> AnalyticsGroup {
    let total = feedbacks.len();
    let sum: i128 = feedbacks.iter().map(|f| i128::from(f.rating)).sum();
    let rating_counts = RATING_BUCKETS
        .iter()
        .map(|&rating| RatingCount {
            rating,
            count: feedbacks
                .iter()
                .filter(|f| f.rating == i64::from(rating))
                .count(),
        })
        .collect();

    AnalyticsGroup {
        form_type,
        total,
        avg: format_average(sum, total),
        rating_counts,
        feedbacks,
    }
}

/// `sum / total` with one decimal place, halves rounded away from zero
/// (`-0.25` becomes `"-0.3"`).
///
/// Computed in integer tenths on the exact fraction, so the result never
/// depends on float representation and cannot overflow for any sum of `i64`
/// ratings. An empty group averages to `"0"`.
pub fn format_average(sum: i128, total: usize) -> String {
    if total == 0 {
        return "0".to_string();
    }
    let total = total as u128;
    let tenths = sum
        .unsigned_abs()
        .saturating_mul(20)
        .saturating_add(total)
        / (2 * total);
    let sign = if sum < 0 { "-" } else { "" };
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}
