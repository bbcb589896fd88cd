//! Data model for the maintainers registry and the chart index

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Suffix marking a chart that only ships custom resource definitions
pub const CRD_SUFFIX: &str = "-crd";

/// A team or individual owning a set of charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintainerRecord {
    pub name: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub charts: Vec<ChartDeclaration>,
}

impl MaintainerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: ContactInfo::default(),
            charts: Vec::new(),
        }
    }

    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }

    pub fn with_chart(mut self, chart: ChartDeclaration) -> Self {
        self.charts.push(chart);
        self
    }
}

/// How to reach a maintainer. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ContactInfo {
    pub fn email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }
}

/// A chart claimed by a maintainer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDeclaration {
    pub name: String,
    /// Whether issues are generated for this chart individually
    #[serde(default)]
    pub generate_issue: bool,
    /// Labels applied to generated GitHub issues, in declaration order
    #[serde(default)]
    pub github_labels: Vec<String>,
}

impl ChartDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generate_issue: false,
            github_labels: Vec::new(),
        }
    }

    pub fn generate_issue(mut self, generate_issue: bool) -> Self {
        self.generate_issue = generate_issue;
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.github_labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Whether this chart only ships custom resource definitions
    pub fn is_crd(&self) -> bool {
        self.name.ends_with(CRD_SUFFIX)
    }
}

/// Names of the charts published in a chart index
///
/// Entry values are never inspected, so only the keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartIndex {
    entries: BTreeSet<String>,
}

impl ChartIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, chart: &str) -> bool {
        self.entries.contains(chart)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Chart names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ChartIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Wire shape of the index document
#[derive(Debug, Default, Deserialize)]
pub(crate) struct IndexDocument {
    #[serde(default)]
    entries: Option<BTreeMap<String, IgnoredAny>>,
}

impl From<IndexDocument> for ChartIndex {
    fn from(doc: IndexDocument) -> Self {
        doc.entries
            .map(|entries| entries.into_keys().collect())
            .unwrap_or_default()
    }
}
