//! Loading of the maintainers registry, the chart index and the assets listing
//!
//! Loading is purely structural. Nothing here judges whether the registry
//! is consistent; that is the job of [`crate::engine`].

use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DecodeError, Result};
use crate::model::{ChartIndex, IndexDocument, MaintainerRecord};

/// Conventional location of the maintainers registry
pub const DEFAULT_MAINTAINERS_PATH: &str = "./maintainers.yaml";

/// Conventional location of the chart index
pub const DEFAULT_INDEX_PATH: &str = "./charts/index.yaml";

/// Asset directory that holds shared images rather than chart assets
const LOGOS_DIR: &str = "logos";

const MAINTAINERS_DOCUMENT: &str = "maintainers file";
const INDEX_DOCUMENT: &str = "index file";

/// Serialization format of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Load the maintainers registry from a file
pub fn load_maintainers(path: impl AsRef<Path>) -> Result<Vec<MaintainerRecord>> {
    let path = path.as_ref();
    let content = read(MAINTAINERS_DOCUMENT, path)?;
    let maintainers = decode_maintainers(&content, DocumentFormat::from_path(path), path)?;

    debug!(
        path = %path.display(),
        maintainers = maintainers.len(),
        "loaded maintainers file"
    );
    for m in &maintainers {
        debug!(
            maintainer = %m.name,
            email = %m.contact.email,
            slack_channel = m.contact.slack_channel.as_deref().unwrap_or(""),
            url = m.contact.url.as_deref().unwrap_or(""),
            charts = m.charts.len(),
            "decoded maintainer"
        );
    }

    Ok(maintainers)
}

/// Load the chart index from a file
pub fn load_index(path: impl AsRef<Path>) -> Result<ChartIndex> {
    let path = path.as_ref();
    let content = read(INDEX_DOCUMENT, path)?;
    let index = decode_index(&content, DocumentFormat::from_path(path), path)?;

    debug!(path = %path.display(), entries = index.len(), "loaded index file");
    Ok(index)
}

/// Decode a maintainers registry held in memory
pub fn maintainers_from_str(
    content: &str,
    format: DocumentFormat,
) -> Result<Vec<MaintainerRecord>> {
    decode_maintainers(content, format, Path::new("<memory>"))
}

/// Decode a chart index held in memory
pub fn index_from_str(content: &str, format: DocumentFormat) -> Result<ChartIndex> {
    decode_index(content, format, Path::new("<memory>"))
}

/// List the chart asset directories under `dir`
///
/// Only sub-directories count, and the shared `logos` directory is skipped.
pub fn load_asset_names(dir: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    let dir = dir.as_ref();
    let to_error = |source| DecodeError::AssetsDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut assets = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(to_error)? {
        let entry = entry.map_err(to_error)?;
        if !entry.file_type().map_err(to_error)?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.eq_ignore_ascii_case(LOGOS_DIR) {
            continue;
        }
        assets.insert(name);
    }

    debug!(path = %dir.display(), assets = assets.len(), "listed assets directory");
    Ok(assets)
}

fn read(document: &'static str, path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DecodeError::Io {
        document,
        path: path.to_path_buf(),
        source,
    })
}

fn decode_maintainers(
    content: &str,
    format: DocumentFormat,
    path: &Path,
) -> Result<Vec<MaintainerRecord>> {
    // An empty or null registry document decodes to no maintainers
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let maintainers: Option<Vec<MaintainerRecord>> =
        decode(MAINTAINERS_DOCUMENT, content, format, path)?;
    Ok(maintainers.unwrap_or_default())
}

fn decode_index(content: &str, format: DocumentFormat, path: &Path) -> Result<ChartIndex> {
    if content.trim().is_empty() {
        return Ok(ChartIndex::new());
    }
    let doc: Option<IndexDocument> = decode(INDEX_DOCUMENT, content, format, path)?;
    Ok(doc.map(ChartIndex::from).unwrap_or_default())
}

fn decode<T: DeserializeOwned>(
    document: &'static str,
    content: &str,
    format: DocumentFormat,
    path: &Path,
) -> Result<T> {
    let path: PathBuf = path.to_path_buf();
    match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|source| DecodeError::Yaml {
            document,
            path,
            source,
        }),
        DocumentFormat::Json => serde_json::from_str(content).map_err(|source| DecodeError::Json {
            document,
            path,
            source,
        }),
    }
}
