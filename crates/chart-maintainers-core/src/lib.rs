//! Chart Maintainers Core
//!
//! Consistency rules that cross-validate a chart repository's maintainers
//! registry against its chart index.
//!
//! ## Rules
//!
//! Per chart, while walking the registry in input order:
//!
//! - `-crd` charts must not set `generateIssue`
//! - a chart's GitHub labels must not repeat
//! - a chart name must be declared only once across the registry
//!
//! Across documents, once the registry has been walked:
//!
//! - the index must have at least one entry
//! - every indexed chart must have a maintainer, and every maintained chart
//!   must be in the index
//! - optionally, every chart assets directory must belong to a maintained chart
//!
//! ## Example
//!
//! ```rust
//! use chart_maintainers_core::loader::{index_from_str, maintainers_from_str, DocumentFormat};
//! use chart_maintainers_core::{validate, FindingKind};
//!
//! let maintainers = maintainers_from_str(
//!     r#"
//! - name: team-a
//!   contact:
//!     email: team-a@example.com
//!   charts:
//!     - name: fleet
//!       generateIssue: true
//!       githubLabels: [team/a]
//! "#,
//!     DocumentFormat::Yaml,
//! )
//! .unwrap();
//! let index =
//!     index_from_str("entries:\n  fleet: []\n  longhorn: []\n", DocumentFormat::Yaml).unwrap();
//!
//! let findings = validate(&maintainers, &index);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].kind(), FindingKind::MissingFromMaintainers);
//! ```

pub mod engine;
pub mod error;
pub mod loader;
pub mod model;

pub use engine::{validate, Finding, FindingKind, ValidationContext, ValidationReport, Validator};
pub use error::DecodeError;
pub use loader::{load_asset_names, load_index, load_maintainers, DocumentFormat};
pub use model::{ChartDeclaration, ChartIndex, ContactInfo, MaintainerRecord};
