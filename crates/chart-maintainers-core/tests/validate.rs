//! Integration tests for loading and validating registry/index pairs
//!
//! Covers:
//! - Loading YAML and JSON fixtures from disk
//! - The documented rule properties end to end
//! - Determinism of repeated runs (property-based)

use chart_maintainers_core::{
    load_asset_names, load_index, load_maintainers, validate, ChartDeclaration, ChartIndex,
    Finding, FindingKind, MaintainerRecord, ValidationContext, Validator,
};
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MAINTAINERS_YAML: &str = r##"
- name: team-fleet
  contact:
    email: fleet@example.com
    slackChannel: "#fleet"
  charts:
    - name: fleet
      generateIssue: true
      githubLabels: [area/fleet, team/fleet, area/fleet]
    - name: fleet-crd
      generateIssue: true
      githubLabels: [area/fleet]
- name: team-storage
  contact:
    email: storage@example.com
    url: https://example.com/storage
  charts:
    - name: longhorn
      generateIssue: true
      githubLabels: [area/storage]
    - name: fleet
      generateIssue: false
      githubLabels: []
    - name: unpublished
      generateIssue: false
      githubLabels: []
"##;

const INDEX_YAML: &str = r#"
apiVersion: v1
entries:
  fleet:
    - name: fleet
      version: 102.0.0
  fleet-crd:
    - name: fleet-crd
      version: 102.0.0
  longhorn:
    - name: longhorn
      version: 1.5.1
  rancher-backup:
    - name: rancher-backup
      version: 3.1.0
generated: "2023-01-01T00:00:00Z"
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn context_for(maintainers: &Path, index: &Path) -> ValidationContext {
    ValidationContext::new()
        .with_maintainers_path(maintainers.display().to_string())
        .with_index_path(index.display().to_string())
}

#[test]
fn test_fixture_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let maintainers_path = write(&dir, "maintainers.yaml", MAINTAINERS_YAML);
    let index_path = write(&dir, "index.yaml", INDEX_YAML);

    let maintainers = load_maintainers(&maintainers_path).unwrap();
    let index = load_index(&index_path).unwrap();
    let report =
        Validator::new(context_for(&maintainers_path, &index_path)).validate(&maintainers, &index);

    let summary: Vec<_> = report
        .findings
        .iter()
        .map(|f| (f.kind(), f.chart().unwrap_or_default().to_string()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (FindingKind::DuplicateLabel, "fleet".to_string()),
            (FindingKind::InvalidCrdIssueFlag, "fleet-crd".to_string()),
            (FindingKind::DuplicateChartOwnership, "fleet".to_string()),
            (FindingKind::MissingFromMaintainers, "rancher-backup".to_string()),
            (FindingKind::MissingFromIndex, "unpublished".to_string()),
        ]
    );
    assert_eq!(report.maintainers_checked, 2);
    assert_eq!(report.charts_declared, 5);
    assert_eq!(report.charts_maintained, 4);
    assert_eq!(report.index_entries, 4);

    let missing = report.findings[3].to_string();
    assert!(missing.contains("chart [rancher-backup] is missing from maintainers file"));
    assert!(missing.contains(&maintainers_path.display().to_string()));
}

#[test]
fn test_json_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let maintainers_path = write(
        &dir,
        "maintainers.json",
        r#"[{"name": "team-a", "contact": {"email": "a@example.com"},
            "charts": [{"name": "fleet", "generateIssue": false, "githubLabels": []}]}]"#,
    );
    let index_path = write(
        &dir,
        "index.json",
        r#"{"entries": {"fleet": [{"version": "1.0.0"}]}}"#,
    );

    let maintainers = load_maintainers(&maintainers_path).unwrap();
    let index = load_index(&index_path).unwrap();
    assert!(validate(&maintainers, &index).is_empty());
}

#[test]
fn test_empty_index_file() {
    let dir = tempfile::tempdir().unwrap();
    let index_path = write(&dir, "index.yaml", "apiVersion: v1\nentries: {}\n");
    let index = load_index(&index_path).unwrap();

    let context = ValidationContext::new().with_index_path(index_path.display().to_string());
    let findings = Validator::new(context).validate(&[], &index).findings;

    assert_eq!(
        findings,
        vec![Finding::EmptyIndex {
            index_path: index_path.display().to_string()
        }]
    );
}

#[test]
fn test_null_index_file_is_empty_index() {
    let dir = tempfile::tempdir().unwrap();
    let index_path = write(&dir, "index.yaml", "~\n");
    let index = load_index(&index_path).unwrap();
    assert!(index.is_empty());

    let findings = validate(&[], &index);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind(), FindingKind::EmptyIndex);
}

#[test]
fn test_assets_directory() {
    let dir = tempfile::tempdir().unwrap();
    let assets_dir = dir.path().join("assets");
    for name in ["fleet", "logos", "neuvector"] {
        std::fs::create_dir_all(assets_dir.join(name)).unwrap();
    }

    let maintainers =
        vec![MaintainerRecord::new("team-a").with_chart(ChartDeclaration::new("fleet"))];
    let index: ChartIndex = ["fleet"].into_iter().collect();
    let context = ValidationContext::new().with_assets(load_asset_names(&assets_dir).unwrap());
    let findings = Validator::new(context).validate(&maintainers, &index).findings;

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind(), FindingKind::AssetMissingFromMaintainers);
    assert_eq!(findings[0].chart(), Some("neuvector"));
}

#[test]
fn test_malformed_maintainers_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "maintainers.yaml", "- name: team-a\n  charts: not-a-list\n");

    let err = load_maintainers(&path).unwrap_err();
    assert!(!err.is_io());
    assert!(err.to_string().contains("maintainers file"));
}

fn arb_chart() -> impl Strategy<Value = ChartDeclaration> {
    (
        prop_oneof!["[a-d]", "[a-d]-crd"],
        any::<bool>(),
        prop::collection::vec("[x-z]", 0..4),
    )
        .prop_map(|(name, generate_issue, labels)| {
            ChartDeclaration::new(name)
                .generate_issue(generate_issue)
                .with_labels(labels)
        })
}

fn arb_maintainers() -> impl Strategy<Value = Vec<MaintainerRecord>> {
    prop::collection::vec(
        prop::collection::vec(arb_chart(), 0..4).prop_map(|charts| {
            charts
                .into_iter()
                .fold(MaintainerRecord::new("team"), |m, c| m.with_chart(c))
        }),
        0..4,
    )
}

fn arb_index() -> impl Strategy<Value = ChartIndex> {
    prop::collection::btree_set(prop_oneof!["[a-f]", "[a-d]-crd"], 0..6)
        .prop_map(|names| names.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_validation_is_deterministic(maintainers in arb_maintainers(), index in arb_index()) {
        let first = validate(&maintainers, &index);
        let second = validate(&maintainers, &index);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_each_duplicate_chart_reported_once(
        maintainers in arb_maintainers(),
        index in arb_index(),
    ) {
        let findings = validate(&maintainers, &index);
        let mut reported = std::collections::HashSet::new();
        let duplicates = findings
            .iter()
            .filter(|f| f.kind() == FindingKind::DuplicateChartOwnership);
        for finding in duplicates {
            prop_assert!(reported.insert(finding.chart().unwrap_or_default().to_string()));
        }
    }

    #[test]
    fn prop_membership_findings_sorted(maintainers in arb_maintainers(), index in arb_index()) {
        let findings = validate(&maintainers, &index);
        for kind in [FindingKind::MissingFromMaintainers, FindingKind::MissingFromIndex] {
            let charts: Vec<_> = findings
                .iter()
                .filter(|f| f.kind() == kind)
                .filter_map(Finding::chart)
                .collect();
            let mut sorted = charts.clone();
            sorted.sort_unstable();
            prop_assert_eq!(charts, sorted);
        }
    }

    #[test]
    fn prop_matching_registry_is_clean(names in prop::collection::btree_set("[a-h]{1,6}", 1..8)) {
        let maintainers = vec![names.iter().fold(MaintainerRecord::new("team"), |m, n| {
            m.with_chart(ChartDeclaration::new(n.as_str()))
        })];
        let index: ChartIndex = names.iter().cloned().collect();
        prop_assert!(validate(&maintainers, &index).is_empty());
    }
}
