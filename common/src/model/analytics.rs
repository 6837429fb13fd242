use serde::Serialize;

use crate::model::feedback::NormalizedFeedback;

/// One bar of a rating histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingCount {
    pub rating: u8,
    pub count: usize,
}

impl RatingCount {
    /// Fraction of `total` this bar represents, for sizing histogram bars.
    pub fn share_of(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

/// Summary of every submission made against one form type.
///
/// `avg` is pre-formatted with one decimal place. `rating_counts` always holds
/// the buckets 5, 4, 3, 2, 1 in that order; ratings outside 1..=5 count towards
/// `total` and `avg` but land in no bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsGroup {
    pub form_type: String,
    pub total: usize,
    pub avg: String,
    pub rating_counts: Vec<RatingCount>,
    pub feedbacks: Vec<NormalizedFeedback>,
}
