//! Individual consistency rules
//!
//! Per-chart rules ([`check_crd_issue_flag`], [`check_duplicate_labels`] and
//! [`OwnershipTracker::record`]) run while the registry is walked. The
//! cross-document rules run once the whole registry has been seen.

use std::collections::{BTreeSet, HashSet};

use super::finding::Finding;
use crate::model::{ChartDeclaration, ChartIndex};

/// CRD charts are never tracked through individual issues
pub fn check_crd_issue_flag(chart: &ChartDeclaration) -> Option<Finding> {
    (chart.is_crd() && chart.generate_issue).then(|| Finding::InvalidCrdIssueFlag {
        chart: chart.name.clone(),
    })
}

/// One finding per repeated occurrence of a label; first occurrences are fine
pub fn check_duplicate_labels(chart: &ChartDeclaration) -> Vec<Finding> {
    let mut seen = HashSet::new();
    chart
        .github_labels
        .iter()
        .filter(|label| !seen.insert(label.as_str()))
        .map(|label| Finding::DuplicateLabel {
            chart: chart.name.clone(),
            label: label.clone(),
        })
        .collect()
}

/// Tracks which chart names have been declared across the whole registry
#[derive(Debug, Default)]
pub struct OwnershipTracker {
    maintained: BTreeSet<String>,
    duplicates: BTreeSet<String>,
}

impl OwnershipTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration of `chart`
    ///
    /// Returns a finding the first time a name is declared a second time.
    /// Later repeats of the same name stay silent.
    pub fn record(&mut self, chart: &str) -> Option<Finding> {
        if self.maintained.insert(chart.to_string()) {
            return None;
        }
        self.duplicates
            .insert(chart.to_string())
            .then(|| Finding::DuplicateChartOwnership {
                chart: chart.to_string(),
            })
    }

    /// Every chart name declared so far, sorted
    pub fn maintained(&self) -> &BTreeSet<String> {
        &self.maintained
    }

    pub fn into_maintained(self) -> BTreeSet<String> {
        self.maintained
    }
}

pub fn check_empty_index(index: &ChartIndex, index_path: &str) -> Option<Finding> {
    index.is_empty().then(|| Finding::EmptyIndex {
        index_path: index_path.to_string(),
    })
}

/// Reconcile the maintained charts with the published ones
///
/// Index charts without a maintainer come first, then maintained charts that
/// are not published. Both groups are in lexicographic order. Neither input
/// is modified.
pub fn check_membership(
    maintained: &BTreeSet<String>,
    index: &ChartIndex,
    maintainers_path: &str,
    index_path: &str,
) -> Vec<Finding> {
    let unmaintained = index
        .names()
        .filter(|name| !maintained.contains(*name))
        .map(|name| Finding::MissingFromMaintainers {
            chart: name.to_string(),
            maintainers_path: maintainers_path.to_string(),
        });

    let unpublished = maintained
        .iter()
        .filter(|name| !index.contains(name))
        .map(|name| Finding::MissingFromIndex {
            chart: name.clone(),
            index_path: index_path.to_string(),
        });

    unmaintained.chain(unpublished).collect()
}

/// Every chart asset directory must belong to a maintained chart
pub fn check_assets(
    maintained: &BTreeSet<String>,
    assets: &BTreeSet<String>,
    maintainers_path: &str,
) -> Vec<Finding> {
    assets
        .difference(maintained)
        .map(|asset| Finding::AssetMissingFromMaintainers {
            asset: asset.clone(),
            maintainers_path: maintainers_path.to_string(),
        })
        .collect()
}
