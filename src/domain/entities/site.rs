//! Site-level copy: hero, about, assertions, footer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCta {
    pub primary: CallToAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<CallToAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    /// One declarative sentence shown under the headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative_spine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<HeroCta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub location: String,
    pub experience: String,
    pub focus: String,
}

/// Expandable claim in the assertions list.
///
/// The claim is the always-visible header; the explainer (and optional
/// mechanism) is the collapsible body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    pub id: String,
    pub claim: String,
    pub explainer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledList {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingLink {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
}

impl FooterLinks {
    /// Present links in display order, as (label, url)
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("GitHub", self.github.as_deref()),
            ("LinkedIn", self.linkedin.as_deref()),
            ("Medium", self.medium.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| match url {
            Some(url) if !url.trim().is_empty() => Some((label, url)),
            _ => None,
        })
        .collect()
    }
}

/// The site document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCopy {
    /// Name used in the page title and the footer copyright line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    pub hero: Hero,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertions_title: Option<String>,

    pub assertions: Vec<Assertion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<TitledList>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judgment_calls: Option<TitledList>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub writing: Vec<WritingLink>,

    #[serde(default)]
    pub links: FooterLinks,

    /// Confidentiality note printed in the footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclosure: Option<String>,
}
