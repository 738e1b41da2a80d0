//! Test fixtures - reusable content documents.

/// Site copy with two assertions and a footer link
pub const SITE_JSON: &str = r#"{
  "owner": "Jordan Reyes",
  "hero": {
    "headline": "Governance before automation",
    "subheadline": "Data systems people can trust"
  },
  "assertionsTitle": "How I work",
  "assertions": [
    {
      "id": "authority",
      "claim": "Data must be authoritative first",
      "explainer": "Automation amplifies whatever it is fed, so the source of truth comes first.",
      "mechanism": "Single owner per dataset"
    },
    {
      "id": "boundaries",
      "claim": "Boundaries are part of the design",
      "explainer": "Every system states what it refuses to do before it states what it does."
    }
  ],
  "links": {
    "github": "https://github.com/example"
  }
}
"#;

/// Featured project (id omitted) plus `governed-data`, both with details
pub const PROJECTS_JSON: &str = r#"{
  "marquee": {
    "title": "Health Coach",
    "problem": "Weekly coaching without guardrails"
  },
  "professional": [
    {
      "id": "governed-data",
      "title": "Governed Data Platform",
      "problem": "Reports nobody trusted",
      "domainTags": ["Data Governance", "Reporting"]
    }
  ],
  "projectDetails": {
    "health-coach": {
      "context": "Coaching plans drifted week to week.",
      "systemDesign": "A rules engine checks every plan before it ships.",
      "keyDecisions": ["Rules before models"],
      "links": {
        "github": "https://github.com/example/coach"
      }
    },
    "governed-data": {
      "context": "Finance reports disagreed.",
      "systemDesign": "One governed model feeds every report.",
      "keyDecisions": ["Single owner per metric", "Reconcile before publish"],
      "governanceRisk": ["No client data shown", "Access reviewed quarterly", "Lineage recorded"],
      "outcome": "Reports became authoritative"
    }
  }
}
"#;

/// `governed-data` with an outcome of the wrong shape
pub const PROJECTS_JSON_BAD_OUTCOME: &str = r#"{
  "marquee": {
    "title": "Health Coach",
    "problem": "Weekly coaching without guardrails"
  },
  "professional": [
    {
      "id": "governed-data",
      "title": "Governed Data Platform",
      "problem": "Reports nobody trusted"
    }
  ],
  "projectDetails": {
    "health-coach": {
      "context": "c",
      "systemDesign": "s",
      "keyDecisions": ["k"]
    },
    "governed-data": {
      "context": "Finance reports disagreed.",
      "systemDesign": "One governed model feeds every report.",
      "keyDecisions": ["Single owner per metric"],
      "outcome": 42
    }
  }
}
"#;

/// A professional record with no detail
pub const PROJECTS_JSON_MISSING_DETAIL: &str = r#"{
  "marquee": {
    "title": "Health Coach",
    "problem": "Weekly coaching without guardrails"
  },
  "professional": [
    {
      "id": "lonely",
      "title": "Lonely Record",
      "problem": "No detail was ever written"
    }
  ],
  "projectDetails": {
    "health-coach": {
      "context": "c",
      "systemDesign": "s",
      "keyDecisions": ["k"]
    }
  }
}
"#;
