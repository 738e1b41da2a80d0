//! Section renderer
//!
//! Turns a resolved (record, detail) pair into the detail view's sections.
//! The order is fixed; each section is present only when its data is. Bad
//! data never aborts the page: the section is dropped and a warning is
//! recorded for the content author.

use serde::Serialize;

use crate::domain::entities::{ContentRecord, ProjectDetail, ShapedText};
use crate::domain::value_objects::{ContentWarning, Slug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Context,
    SystemDesign,
    KeyDecisions,
    GovernanceRisk,
    Outcome,
    Links,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 6] = [
        SectionKind::Context,
        SectionKind::SystemDesign,
        SectionKind::KeyDecisions,
        SectionKind::GovernanceRisk,
        SectionKind::Outcome,
        SectionKind::Links,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Context => "Context",
            SectionKind::SystemDesign => "System Design",
            SectionKind::KeyDecisions => "Key Decisions",
            SectionKind::GovernanceRisk => "Governance & Risk",
            SectionKind::Outcome => "Outcome",
            SectionKind::Links => "Links",
        }
    }

    /// Field name in the project document
    pub fn field(&self) -> &'static str {
        match self {
            SectionKind::Context => "context",
            SectionKind::SystemDesign => "systemDesign",
            SectionKind::KeyDecisions => "keyDecisions",
            SectionKind::GovernanceRisk => "governanceRisk",
            SectionKind::Outcome => "outcome",
            SectionKind::Links => "links",
        }
    }

    /// CSS class used for itemized bodies
    pub fn list_class(&self) -> &'static str {
        match self {
            SectionKind::KeyDecisions => "decision-list",
            SectionKind::GovernanceRisk => "governance-list",
            SectionKind::Outcome => "outcome-list",
            SectionKind::Context | SectionKind::SystemDesign | SectionKind::Links => "detail-list",
        }
    }
}

/// One call-to-action built from a named link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAction {
    pub name: String,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum SectionBody {
    Text(String),
    Items(Vec<String>),
    Links(Vec<LinkAction>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub body: SectionBody,
}

/// Everything the detail page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub slug: Slug,
    pub title: String,
    pub summary: String,
    pub sections: Vec<Section>,
    #[serde(skip)]
    pub warnings: Vec<ContentWarning>,
}

impl DetailView {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}

/// Call-to-action label for a named link
pub fn link_label(name: &str) -> String {
    match name {
        "github" => "View on GitHub".to_string(),
        "demo" | "live" => "Open Live Demo".to_string(),
        "writeup" | "article" | "medium" => "Read the Write-up".to_string(),
        "docs" | "documentation" => "Read the Docs".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => format!("Open {}{}", first.to_uppercase(), chars.as_str()),
                None => "Open Link".to_string(),
            }
        }
    }
}

/// Render the detail view for a joined record and detail
pub fn render_detail(record: &ContentRecord, detail: &ProjectDetail) -> DetailView {
    let subject = record.id.as_str();
    let mut sections = Vec::new();
    let mut warnings = Vec::new();

    for kind in SectionKind::ORDER {
        let body = match kind {
            SectionKind::Context => text_block(subject, kind, &detail.context, &mut warnings),
            SectionKind::SystemDesign => {
                text_block(subject, kind, &detail.system_design, &mut warnings)
            }
            SectionKind::KeyDecisions => {
                if detail.key_decisions.is_empty() {
                    warnings.push(ContentWarning::empty_field(subject, kind.field()));
                    None
                } else {
                    Some(SectionBody::Items(detail.key_decisions.clone()))
                }
            }
            SectionKind::GovernanceRisk => {
                shaped(subject, kind, detail.governance_risk.as_ref(), &mut warnings)
            }
            SectionKind::Outcome => shaped(subject, kind, detail.outcome.as_ref(), &mut warnings),
            SectionKind::Links => link_actions(detail),
        };

        if let Some(body) = body {
            sections.push(Section { kind, body });
        }
    }

    DetailView {
        slug: record.id.clone(),
        title: record.title.clone(),
        summary: record.summary.clone(),
        sections,
        warnings,
    }
}

fn text_block(
    subject: &str,
    kind: SectionKind,
    text: &str,
    warnings: &mut Vec<ContentWarning>,
) -> Option<SectionBody> {
    if text.trim().is_empty() {
        warnings.push(ContentWarning::empty_field(subject, kind.field()));
        return None;
    }
    Some(SectionBody::Text(text.to_string()))
}

fn shaped(
    subject: &str,
    kind: SectionKind,
    value: Option<&ShapedText>,
    warnings: &mut Vec<ContentWarning>,
) -> Option<SectionBody> {
    let value = value?;
    match value {
        ShapedText::Text(text) => text_block(subject, kind, text, warnings),
        ShapedText::Items(items) if items.is_empty() => {
            warnings.push(ContentWarning::empty_field(subject, kind.field()));
            None
        }
        ShapedText::Items(items) => Some(SectionBody::Items(items.clone())),
        ShapedText::Unsupported(_) => {
            let found = value.describe_unsupported().unwrap_or("an unsupported value");
            warnings.push(ContentWarning::shape_mismatch(subject, kind.field(), found));
            None
        }
    }
}

fn link_actions(detail: &ProjectDetail) -> Option<SectionBody> {
    let links = detail.links.as_ref()?;
    let actions: Vec<LinkAction> = links
        .iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(name, url)| LinkAction {
            name: name.clone(),
            label: link_label(name),
            url: url.clone(),
        })
        .collect();

    if actions.is_empty() {
        None
    } else {
        Some(SectionBody::Links(actions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::WarningKind;

    fn record() -> ContentRecord {
        ContentRecord::new(
            Slug::parse("governed-data").unwrap(),
            "Governed Data Systems",
            "Summary",
        )
    }

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn governed_data_scenario_omits_links() {
        let detail = ProjectDetail::new("ctx", "design", items(&["d1", "d2", "d3"]))
            .with_governance_risk("No client data shown.")
            .with_outcome(items(&["o1", "o2"]));

        let view = render_detail(&record(), &detail);

        assert_eq!(
            view.kinds(),
            vec![
                SectionKind::Context,
                SectionKind::SystemDesign,
                SectionKind::KeyDecisions,
                SectionKind::GovernanceRisk,
                SectionKind::Outcome,
            ]
        );
        assert_eq!(
            view.section(SectionKind::KeyDecisions).unwrap().body,
            SectionBody::Items(items(&["d1", "d2", "d3"]))
        );
        assert_eq!(
            view.section(SectionKind::GovernanceRisk).unwrap().body,
            SectionBody::Text("No client data shown.".into())
        );
        assert_eq!(
            view.section(SectionKind::Outcome).unwrap().body,
            SectionBody::Items(items(&["o1", "o2"]))
        );
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn governance_list_keeps_input_order() {
        let detail = ProjectDetail::new("c", "s", items(&["d"]))
            .with_governance_risk(items(&["c", "a", "b"]));
        let view = render_detail(&record(), &detail);
        assert_eq!(
            view.section(SectionKind::GovernanceRisk).unwrap().body,
            SectionBody::Items(items(&["c", "a", "b"]))
        );
    }

    #[test]
    fn empty_context_is_omitted_with_warning() {
        let detail = ProjectDetail::new("  ", "s", items(&["d"]));
        let view = render_detail(&record(), &detail);
        assert!(view.section(SectionKind::Context).is_none());
        assert!(view.section(SectionKind::SystemDesign).is_some());
        assert_eq!(view.warnings.len(), 1);
        assert_eq!(view.warnings[0].kind, WarningKind::EmptyField);
        assert_eq!(view.warnings[0].field.as_deref(), Some("context"));
    }

    #[test]
    fn unsupported_outcome_is_skipped_with_shape_warning() {
        let mut detail = ProjectDetail::new("c", "s", items(&["d"]));
        detail.outcome = Some(ShapedText::Unsupported(serde_json::json!({"a": 1})));
        let view = render_detail(&record(), &detail);
        assert!(view.section(SectionKind::Outcome).is_none());
        assert_eq!(view.warnings.len(), 1);
        assert_eq!(view.warnings[0].kind, WarningKind::ShapeMismatch);
    }

    #[test]
    fn links_render_one_action_per_present_link() {
        let detail = ProjectDetail::new("c", "s", items(&["d"]))
            .with_link("github", "https://github.com/x/y")
            .with_link("demo", "");
        let view = render_detail(&record(), &detail);
        let links = view.section(SectionKind::Links).unwrap();
        match &links.body {
            SectionBody::Links(actions) => {
                assert_eq!(actions.len(), 1);
                assert_eq!(actions[0].label, "View on GitHub");
            }
            other => panic!("expected links, got {:?}", other),
        }
    }

    #[test]
    fn links_section_absent_when_all_links_blank() {
        let detail = ProjectDetail::new("c", "s", items(&["d"])).with_link("github", " ");
        let view = render_detail(&record(), &detail);
        assert!(view.section(SectionKind::Links).is_none());
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn link_label_falls_back_to_capitalized_name() {
        assert_eq!(link_label("slides"), "Open Slides");
        assert_eq!(link_label("github"), "View on GitHub");
    }
}
