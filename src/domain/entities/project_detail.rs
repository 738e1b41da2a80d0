//! Project detail entity

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Text field that may be authored as one paragraph or as a list.
///
/// Shape is decided once at load time; anything that is neither a string nor
/// a list of strings is kept as `Unsupported` so the page still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapedText {
    Text(String),
    Items(Vec<String>),
    Unsupported(serde_json::Value),
}

impl ShapedText {
    /// Human description of an unsupported value, for warnings
    pub fn describe_unsupported(&self) -> Option<&'static str> {
        match self {
            ShapedText::Unsupported(value) => Some(match value {
                serde_json::Value::Null => "null",
                serde_json::Value::Bool(_) => "a boolean",
                serde_json::Value::Number(_) => "a number",
                serde_json::Value::String(_) => "text",
                serde_json::Value::Array(_) => "a list with non-text items",
                serde_json::Value::Object(_) => "an object",
            }),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ShapedText::Text(text) => text.trim().is_empty(),
            ShapedText::Items(items) => items.is_empty(),
            ShapedText::Unsupported(_) => false,
        }
    }
}

impl From<&str> for ShapedText {
    fn from(text: &str) -> Self {
        ShapedText::Text(text.to_string())
    }
}

impl From<Vec<String>> for ShapedText {
    fn from(items: Vec<String>) -> Self {
        ShapedText::Items(items)
    }
}

/// Detail-view content for one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub context: String,
    pub system_design: String,
    pub key_decisions: Vec<String>,

    #[serde(
        default,
        deserialize_with = "present_shaped",
        skip_serializing_if = "Option::is_none"
    )]
    pub governance_risk: Option<ShapedText>,

    #[serde(
        default,
        deserialize_with = "present_shaped",
        skip_serializing_if = "Option::is_none"
    )]
    pub outcome: Option<ShapedText>,

    /// Named external URLs (e.g. `github`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<BTreeMap<String, String>>,
}

/// A key that is present always yields `Some`; an explicit `null` becomes
/// `Unsupported` instead of reading as an absent section.
fn present_shaped<'de, D>(deserializer: D) -> Result<Option<ShapedText>, D::Error>
where
    D: Deserializer<'de>,
{
    ShapedText::deserialize(deserializer).map(Some)
}

impl ProjectDetail {
    pub fn new(
        context: impl Into<String>,
        system_design: impl Into<String>,
        key_decisions: Vec<String>,
    ) -> Self {
        Self {
            context: context.into(),
            system_design: system_design.into(),
            key_decisions,
            governance_risk: None,
            outcome: None,
            links: None,
        }
    }

    pub fn with_governance_risk(mut self, value: impl Into<ShapedText>) -> Self {
        self.governance_risk = Some(value.into());
        self
    }

    pub fn with_outcome(mut self, value: impl Into<ShapedText>) -> Self {
        self.outcome = Some(value.into());
        self
    }

    pub fn with_link(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.links
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shaped_text_accepts_string_and_list() {
        let text: ShapedText = serde_json::from_str(r#""No client data shown.""#).unwrap();
        assert_eq!(text, ShapedText::Text("No client data shown.".into()));

        let items: ShapedText = serde_json::from_str(r#"["a", "b", "c"]"#).unwrap();
        assert_eq!(
            items,
            ShapedText::Items(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn shaped_text_keeps_other_shapes_as_unsupported() {
        let number: ShapedText = serde_json::from_str("42").unwrap();
        assert_eq!(number.describe_unsupported(), Some("a number"));

        let mixed: ShapedText = serde_json::from_str(r#"["a", 1]"#).unwrap();
        assert_eq!(mixed.describe_unsupported(), Some("a list with non-text items"));
    }

    #[test]
    fn detail_deserializes_with_optional_fields_absent() {
        let json = r#"{
            "context": "c",
            "systemDesign": "s",
            "keyDecisions": ["d1"]
        }"#;
        let detail: ProjectDetail = serde_json::from_str(json).unwrap();
        assert!(detail.governance_risk.is_none());
        assert!(detail.outcome.is_none());
        assert!(detail.links.is_none());
    }

    #[test]
    fn explicit_null_is_unsupported_not_absent() {
        let json = r#"{
            "context": "c",
            "systemDesign": "s",
            "keyDecisions": ["d1"],
            "outcome": null
        }"#;
        let detail: ProjectDetail = serde_json::from_str(json).unwrap();
        assert_eq!(
            detail.outcome,
            Some(ShapedText::Unsupported(serde_json::Value::Null))
        );
        assert!(detail.governance_risk.is_none());
    }

    #[test]
    fn detail_requires_key_decisions() {
        let json = r#"{"context": "c", "systemDesign": "s"}"#;
        assert!(serde_json::from_str::<ProjectDetail>(json).is_err());
    }
}
