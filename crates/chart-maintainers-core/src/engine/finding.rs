//! Findings produced by the consistency rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of inconsistency, independent of the chart it concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    InvalidCrdIssueFlag,
    DuplicateLabel,
    DuplicateChartOwnership,
    EmptyIndex,
    MissingFromMaintainers,
    MissingFromIndex,
    AssetMissingFromMaintainers,
}

impl FindingKind {
    /// Stable identifier used in rendered output
    pub fn code(&self) -> &'static str {
        match self {
            FindingKind::InvalidCrdIssueFlag => "MC001",
            FindingKind::DuplicateLabel => "MC002",
            FindingKind::DuplicateChartOwnership => "MC003",
            FindingKind::EmptyIndex => "MC004",
            FindingKind::MissingFromMaintainers => "MC005",
            FindingKind::MissingFromIndex => "MC006",
            FindingKind::AssetMissingFromMaintainers => "MC007",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKind::InvalidCrdIssueFlag => write!(f, "invalid_crd_issue_flag"),
            FindingKind::DuplicateLabel => write!(f, "duplicate_label"),
            FindingKind::DuplicateChartOwnership => write!(f, "duplicate_chart_ownership"),
            FindingKind::EmptyIndex => write!(f, "empty_index"),
            FindingKind::MissingFromMaintainers => write!(f, "missing_from_maintainers"),
            FindingKind::MissingFromIndex => write!(f, "missing_from_index"),
            FindingKind::AssetMissingFromMaintainers => write!(f, "asset_missing_from_maintainers"),
        }
    }
}

/// A single inconsistency between the maintainers registry and the chart index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// A `-crd` chart asks for its own issue
    InvalidCrdIssueFlag { chart: String },
    /// A label is repeated in one chart's label list
    DuplicateLabel { chart: String, label: String },
    /// A chart is declared more than once across the registry
    DuplicateChartOwnership { chart: String },
    /// The index has no entries at all
    EmptyIndex { index_path: String },
    /// A published chart has no maintainer
    MissingFromMaintainers { chart: String, maintainers_path: String },
    /// A maintained chart is not published
    MissingFromIndex { chart: String, index_path: String },
    /// An assets directory belongs to no maintained chart
    AssetMissingFromMaintainers { asset: String, maintainers_path: String },
}

impl Finding {
    pub fn kind(&self) -> FindingKind {
        match self {
            Finding::InvalidCrdIssueFlag { .. } => FindingKind::InvalidCrdIssueFlag,
            Finding::DuplicateLabel { .. } => FindingKind::DuplicateLabel,
            Finding::DuplicateChartOwnership { .. } => FindingKind::DuplicateChartOwnership,
            Finding::EmptyIndex { .. } => FindingKind::EmptyIndex,
            Finding::MissingFromMaintainers { .. } => FindingKind::MissingFromMaintainers,
            Finding::MissingFromIndex { .. } => FindingKind::MissingFromIndex,
            Finding::AssetMissingFromMaintainers { .. } => FindingKind::AssetMissingFromMaintainers,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The chart (or asset directory) the finding is about, if any
    pub fn chart(&self) -> Option<&str> {
        match self {
            Finding::InvalidCrdIssueFlag { chart }
            | Finding::DuplicateLabel { chart, .. }
            | Finding::DuplicateChartOwnership { chart }
            | Finding::MissingFromMaintainers { chart, .. }
            | Finding::MissingFromIndex { chart, .. } => Some(chart),
            Finding::AssetMissingFromMaintainers { asset, .. } => Some(asset),
            Finding::EmptyIndex { .. } => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Finding::DuplicateLabel { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Suggested fix
    pub fn suggestion(&self) -> String {
        match self {
            Finding::InvalidCrdIssueFlag { chart } => {
                format!("Set generateIssue: false for '{}'", chart)
            }
            Finding::DuplicateLabel { chart, label } => {
                format!("Remove the repeated label '{}' from '{}'", label, chart)
            }
            Finding::DuplicateChartOwnership { chart } => {
                format!("Keep '{}' under exactly one maintainer", chart)
            }
            Finding::EmptyIndex { index_path } => {
                format!("Regenerate '{}' or point at the correct index", index_path)
            }
            Finding::MissingFromMaintainers { chart, maintainers_path } => {
                format!("Assign '{}' to a maintainer in '{}'", chart, maintainers_path)
            }
            Finding::MissingFromIndex { chart, index_path } => {
                format!(
                    "Publish '{}' to '{}' or remove it from the maintainers file",
                    chart, index_path
                )
            }
            Finding::AssetMissingFromMaintainers { asset, maintainers_path } => {
                format!(
                    "Assign '{}' to a maintainer in '{}' or remove its assets",
                    asset, maintainers_path
                )
            }
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::InvalidCrdIssueFlag { chart } => write!(
                f,
                "crd chart [{}] has field [generateIssue: true] which is incorrect as crd charts are not tracked in issues separately",
                chart
            ),
            Finding::DuplicateLabel { chart, label } => {
                write!(f, "chart [{}] has duplicate label [{}]", chart, label)
            }
            Finding::DuplicateChartOwnership { chart } => write!(
                f,
                "chart [{}] is a duplicate or wrongly set as maintained by more than one team",
                chart
            ),
            Finding::EmptyIndex { index_path } => {
                write!(f, "index file [{}] has no chart entries", index_path)
            }
            Finding::MissingFromMaintainers { chart, maintainers_path } => write!(
                f,
                "chart [{}] is missing from maintainers file [{}]",
                chart, maintainers_path
            ),
            Finding::MissingFromIndex { chart, index_path } => write!(
                f,
                "chart [{}] does not exist in index file [{}]",
                chart, index_path
            ),
            Finding::AssetMissingFromMaintainers { asset, maintainers_path } => write!(
                f,
                "asset [{}] is missing from maintainers file [{}]",
                asset, maintainers_path
            ),
        }
    }
}
