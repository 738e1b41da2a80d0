//! Editorial lint rules behind `folio check`
//!
//! Each rule yields one item: a pass, or a warning/error listing offenders in
//! `details`.

use crate::domain::entities::{ContentRecord, ContentStore};
use crate::domain::services::{render_detail, SlugResolver};

const TECH_TAGS: &[&str] = &[
    "Python",
    "JavaScript",
    "SQL",
    "React",
    "Node",
    "TypeScript",
    "CSS",
    "HTML",
    "API",
];

const HEDGING_WORDS: &[&str] = &[
    "might",
    "could",
    "sometimes",
    "perhaps",
    "maybe",
    "possibly",
    "potentially",
    "often",
    "usually",
];

const MIN_ASSERTIONS: usize = 5;
const MAX_ASSERTIONS: usize = 9;
const MAX_CLAIM_WORDS: usize = 10;
const MIN_EXPLAINER_WORDS: usize = 15;
const MAX_EXPLAINER_WORDS: usize = 60;
const MAX_RISK_WORDS: usize = 20;
const MIN_HEADLINE_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintStatus {
    Pass,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintItem {
    /// Grouping shown as a heading (e.g. "Projects")
    pub area: String,
    pub name: String,
    pub status: LintStatus,
    pub message: String,
    pub recommendation: Option<String>,
    pub details: Vec<String>,
}

impl LintItem {
    fn from_offenders(
        area: &str,
        name: &str,
        failing: LintStatus,
        pass_message: &str,
        fail_message: &str,
        recommendation: &str,
        details: Vec<String>,
    ) -> Self {
        let failed = !details.is_empty();
        Self {
            area: area.to_string(),
            name: name.to_string(),
            status: if failed { failing } else { LintStatus::Pass },
            message: if failed {
                format!("{} ({})", fail_message, details.len())
            } else {
                pass_message.to_string()
            },
            recommendation: failed.then(|| recommendation.to_string()),
            details,
        }
    }
}

/// Run every lint rule over the store
pub fn lint_content(store: &ContentStore) -> Vec<LintItem> {
    let mut items = Vec::new();
    lint_projects(store, &mut items);
    lint_assertions(store, &mut items);
    lint_hero(store, &mut items);
    items
}

fn lint_projects(store: &ContentStore, items: &mut Vec<LintItem>) {
    const AREA: &str = "Projects";
    let resolver = SlugResolver::new(store);
    let records: Vec<&ContentRecord> = std::iter::once(store.featured())
        .chain(store.professional().iter())
        .collect();

    let dangling: Vec<String> = resolver
        .dangling_records()
        .iter()
        .map(|r| format!("{} has no projectDetails entry", r.id))
        .collect();
    items.push(LintItem::from_offenders(
        AREA,
        "detail pages",
        LintStatus::Error,
        "every listed project has a detail page",
        "listed projects without detail",
        "Add a projectDetails entry keyed by the project id",
        dangling,
    ));

    let orphans: Vec<String> = resolver
        .orphan_details()
        .iter()
        .map(|slug| format!("projectDetails.{} is not listed", slug))
        .collect();
    items.push(LintItem::from_offenders(
        AREA,
        "orphan details",
        LintStatus::Warning,
        "no unused detail entries",
        "detail entries without a listed project",
        "Remove the entry or add the project to `professional`",
        orphans,
    ));

    let mut tag_issues = Vec::new();
    let mut tech_tags = Vec::new();
    for record in &records {
        let tags = &record.domain_tags;
        if tags.is_empty() {
            tag_issues.push(format!("{} has no domainTags", record.id));
            continue;
        }
        if !(2..=4).contains(&tags.len()) {
            tag_issues.push(format!("{} has {} domainTags", record.id, tags.len()));
        }
        for tag in tags {
            let len = tag.chars().count();
            if len <= 2 || len >= 30 {
                tag_issues.push(format!("{}: tag '{}' is {} chars", record.id, tag, len));
            }
            if TECH_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                tech_tags.push(format!("{}: '{}'", record.id, tag));
            }
        }
    }
    items.push(LintItem::from_offenders(
        AREA,
        "domain tags",
        LintStatus::Warning,
        "2-4 domain tags per project",
        "projects with unusual domain tags",
        "Use 2-4 short domain tags (3-29 characters)",
        tag_issues,
    ));
    items.push(LintItem::from_offenders(
        AREA,
        "tech tags",
        LintStatus::Warning,
        "tags describe domains, not tools",
        "tech-stack tags found",
        "Replace tool names with the domain they serve",
        tech_tags,
    ));

    let risk: Vec<String> = store
        .professional()
        .iter()
        .filter_map(|r| {
            let words = word_count(r.risk_prevented.as_deref()?);
            (words > MAX_RISK_WORDS).then(|| format!("{}: {} words", r.id, words))
        })
        .collect();
    items.push(LintItem::from_offenders(
        AREA,
        "risk framing",
        LintStatus::Warning,
        "risk statements are concise",
        "long riskPrevented statements",
        "Keep riskPrevented under 20 words",
        risk,
    ));

    let section_warnings: Vec<String> = resolver
        .resolvable()
        .iter()
        .flat_map(|p| render_detail(p.record, p.detail).warnings)
        .map(|w| w.to_string())
        .collect();
    items.push(LintItem::from_offenders(
        AREA,
        "detail sections",
        LintStatus::Warning,
        "all detail sections render",
        "sections skipped during rendering",
        "Fix the listed fields in projectDetails",
        section_warnings,
    ));
}

fn lint_assertions(store: &ContentStore, items: &mut Vec<LintItem>) {
    const AREA: &str = "Assertions";
    let assertions = &store.site().assertions;

    let count = assertions.len();
    let count_issue = if (MIN_ASSERTIONS..=MAX_ASSERTIONS).contains(&count) {
        Vec::new()
    } else {
        vec![format!("{} assertions", count)]
    };
    items.push(LintItem::from_offenders(
        AREA,
        "count",
        LintStatus::Warning,
        "5-9 assertions",
        "assertion count out of range",
        "Consolidate to between 5 and 9 assertions",
        count_issue,
    ));

    let empty: Vec<String> = assertions
        .iter()
        .filter(|a| a.claim.trim().is_empty() || a.explainer.trim().is_empty())
        .map(|a| format!("{} is missing its claim or explainer", a.id))
        .collect();
    items.push(LintItem::from_offenders(
        AREA,
        "accordion content",
        LintStatus::Error,
        "every assertion has a claim and an explainer",
        "assertions that cannot expand",
        "Fill in both claim and explainer",
        empty,
    ));

    let claims: Vec<String> = assertions
        .iter()
        .filter_map(|a| {
            let words = word_count(&a.claim);
            if words > MAX_CLAIM_WORDS {
                Some(format!("{}: claim is {} words", a.id, words))
            } else {
                hedging_word(&a.claim).map(|w| format!("{}: claim hedges with '{}'", a.id, w))
            }
        })
        .collect();
    items.push(LintItem::from_offenders(
        AREA,
        "claims",
        LintStatus::Warning,
        "claims are short and declarative",
        "claims to tighten",
        "Keep claims to 10 words and drop hedging language",
        claims,
    ));

    let explainers: Vec<String> = assertions
        .iter()
        .filter(|a| !a.explainer.trim().is_empty())
        .filter_map(|a| {
            let words = word_count(&a.explainer);
            (!(MIN_EXPLAINER_WORDS..=MAX_EXPLAINER_WORDS).contains(&words))
                .then(|| format!("{}: explainer is {} words", a.id, words))
        })
        .collect();
    items.push(LintItem::from_offenders(
        AREA,
        "explainers",
        LintStatus::Warning,
        "explainers are 15-60 words",
        "explainers out of range",
        "Aim for 15-60 words per explainer",
        explainers,
    ));
}

fn lint_hero(store: &ContentStore, items: &mut Vec<LintItem>) {
    const AREA: &str = "Hero";
    let hero = &store.site().hero;

    let headline_len = hero.headline.chars().count();
    let headline = if headline_len > MIN_HEADLINE_CHARS {
        Vec::new()
    } else {
        vec![format!("headline is {} chars", headline_len)]
    };
    items.push(LintItem::from_offenders(
        AREA,
        "headline",
        LintStatus::Warning,
        "headline leads the page",
        "headline too short",
        "Write a headline longer than 10 characters",
        headline,
    ));

    let spine: Vec<String> = hero
        .narrative_spine
        .as_deref()
        .and_then(hedging_word)
        .map(|w| vec![format!("narrative spine hedges with '{}'", w)])
        .unwrap_or_default();
    items.push(LintItem::from_offenders(
        AREA,
        "narrative spine",
        LintStatus::Warning,
        "narrative spine is declarative",
        "hedging in narrative spine",
        "State the claim without qualifiers",
        spine,
    ));
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn hedging_word(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    lower
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .find_map(|word| HEDGING_WORDS.iter().copied().find(|h| *h == word))
}
