//! Consistency validation engine
//!
//! Walks the maintainers registry once, applying the per-chart rules while
//! collecting every declared chart name, then reconciles those names with
//! the chart index (and, optionally, the assets directory).
//!
//! Validation never fails on content: every inconsistency becomes a
//! [`Finding`]. The engine keeps no state between calls.

pub mod finding;
pub mod rules;

pub use finding::{Finding, FindingKind};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::loader::{DEFAULT_INDEX_PATH, DEFAULT_MAINTAINERS_PATH};
use crate::model::{ChartIndex, MaintainerRecord};
use rules::OwnershipTracker;

/// Where the inputs came from, plus the optional assets listing
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Maintainers file path, as shown in findings
    pub maintainers_path: String,
    /// Index file path, as shown in findings
    pub index_path: String,
    /// Chart asset directory names to check against the registry
    pub assets: Option<BTreeSet<String>>,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            maintainers_path: DEFAULT_MAINTAINERS_PATH.to_string(),
            index_path: DEFAULT_INDEX_PATH.to_string(),
            assets: None,
        }
    }
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maintainers_path(mut self, path: impl Into<String>) -> Self {
        self.maintainers_path = path.into();
        self
    }

    pub fn with_index_path(mut self, path: impl Into<String>) -> Self {
        self.index_path = path.into();
        self
    }

    pub fn with_assets(mut self, assets: BTreeSet<String>) -> Self {
        self.assets = Some(assets);
        self
    }
}

/// Outcome of one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Findings in discovery order
    pub findings: Vec<Finding>,
    pub maintainers_checked: usize,
    /// Chart declarations seen, duplicates included
    pub charts_declared: usize,
    /// Distinct chart names declared
    pub charts_maintained: usize,
    pub index_entries: usize,
}

impl ValidationReport {
    /// Whether the registry and the index agree
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings.iter().filter(|f| f.kind() == kind).count()
    }
}

/// Cross-validates a maintainers registry against a chart index
#[derive(Debug, Clone, Default)]
pub struct Validator {
    context: ValidationContext,
}

impl Validator {
    pub fn new(context: ValidationContext) -> Self {
        Self { context }
    }

    /// Run every rule over the inputs
    ///
    /// Deterministic: the same inputs always give the same findings in the
    /// same order. Neither input is modified.
    pub fn validate(
        &self,
        maintainers: &[MaintainerRecord],
        index: &ChartIndex,
    ) -> ValidationReport {
        let mut findings = Vec::new();
        let mut tracker = OwnershipTracker::new();
        let mut charts_declared = 0;

        for maintainer in maintainers {
            for chart in &maintainer.charts {
                charts_declared += 1;

                findings.extend(rules::check_crd_issue_flag(chart));
                findings.extend(rules::check_duplicate_labels(chart));
                findings.extend(tracker.record(&chart.name));
            }
        }

        let maintained = tracker.into_maintained();

        findings.extend(rules::check_empty_index(index, &self.context.index_path));
        findings.extend(rules::check_membership(
            &maintained,
            index,
            &self.context.maintainers_path,
            &self.context.index_path,
        ));
        if let Some(assets) = &self.context.assets {
            findings.extend(rules::check_assets(
                &maintained,
                assets,
                &self.context.maintainers_path,
            ));
        }

        for finding in &findings {
            debug!(code = finding.code(), kind = %finding.kind(), "{}", finding);
        }
        info!(
            maintainers = maintainers.len(),
            charts = maintained.len(),
            index_entries = index.len(),
            findings = findings.len(),
            "validation complete"
        );

        ValidationReport {
            findings,
            maintainers_checked: maintainers.len(),
            charts_declared,
            charts_maintained: maintained.len(),
            index_entries: index.len(),
        }
    }
}

/// Validate with the conventional input paths and no assets check
pub fn validate(maintainers: &[MaintainerRecord], index: &ChartIndex) -> Vec<Finding> {
    Validator::default().validate(maintainers, index).findings
}
