use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_FORM_TITLE: &str = "General Feedback";
pub const DEFAULT_FORM_DESCRIPTION: &str = "Share your thoughts about our service or platform.";

/// A named feedback form end users can pick before submitting.
///
/// The whole list of templates is persisted as one JSON array by
/// [`FormCatalog`](crate::catalog::FormCatalog); the `id` never changes after
/// creation, only `title` and `description` can be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTemplate {
    #[serde(deserialize_with = "crate::model::id::string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FormTemplate {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description,
        }
    }

    /// The template materialized when the catalog is empty on first load.
    pub fn default_template() -> Self {
        Self::new(DEFAULT_FORM_TITLE, Some(DEFAULT_FORM_DESCRIPTION.to_string()))
    }

    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "No description provided.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_legacy_numeric_ids() {
        let json = r#"[{"id":1718000000000,"title":"Support","description":""}]"#;
        let forms: Vec<FormTemplate> = serde_json::from_str(json).unwrap();
        assert_eq!(forms[0].id, "1718000000000");
        assert_eq!(forms[0].description_or_placeholder(), "No description provided.");
    }

    #[test]
    fn default_template_has_fixed_text() {
        let t = FormTemplate::default_template();
        assert_eq!(t.title, "General Feedback");
        assert_eq!(
            t.description.as_deref(),
            Some("Share your thoughts about our service or platform.")
        );
        assert!(!t.id.is_empty());
    }

    #[test]
    fn missing_description_is_omitted_on_write() {
        let t = FormTemplate {
            id: "1".into(),
            title: "Bugs".into(),
            description: None,
        };
        assert_eq!(
            serde_json::to_string(&t).unwrap(),
            r#"{"id":"1","title":"Bugs"}"#
        );
    }
}
