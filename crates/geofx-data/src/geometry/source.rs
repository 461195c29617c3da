//! Ordered geometry sources.
//!
//! A [`SourceChain`] asks each source in turn for a region's outlines and
//! returns the first collection that loads. When every source fails, the
//! caller gets every failure back, in order.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SourceError;

use super::FeatureCollection;

/// Somewhere region outlines can be loaded from.
pub trait GeometrySource {
    /// Short name used in reports.
    fn name(&self) -> &str;

    /// Load the outlines of the children of region `adcode`.
    fn load(&self, adcode: u32) -> Result<FeatureCollection, SourceError>;
}

/// Reads `{root}/{adcode}.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    name: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = format!("dir:{}", root.display());
        Self { root, name }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file for `adcode`.
    pub fn path_for(&self, adcode: u32) -> PathBuf {
        self.root.join(format!("{}.json", adcode))
    }
}

impl GeometrySource for DirectorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, adcode: u32) -> Result<FeatureCollection, SourceError> {
        let path = self.path_for(adcode);
        if !path.is_file() {
            return Err(SourceError::NotFound { adcode });
        }
        let text = std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        FeatureCollection::from_json(&text).map_err(|source| SourceError::Parse { adcode, source })
    }
}

/// Fetches `{base_url}/{adcode}.json` over HTTP.
///
/// A 404 is reported as [`SourceError::NotFound`] so the chain moves on the
/// same way it does for a missing file.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    name: String,
    agent: ureq::Agent,
}

impl HttpSource {
    /// Request timeout used by [`HttpSource::new`].
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let name = format!("http:{}", base_url);
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            base_url,
            name,
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the collection for `adcode`.
    pub fn url_for(&self, adcode: u32) -> String {
        format!("{}/{}.json", self.base_url, adcode)
    }
}

impl GeometrySource for HttpSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, adcode: u32) -> Result<FeatureCollection, SourceError> {
        let url = self.url_for(adcode);
        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => return Err(SourceError::NotFound { adcode }),
            Err(ureq::Error::Status(status, _)) => {
                return Err(SourceError::HttpStatus { url, status })
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(SourceError::Http {
                    url,
                    message: transport.to_string(),
                })
            }
        };
        serde_json::from_reader(response.into_reader())
            .map_err(|source| SourceError::Parse { adcode, source })
    }
}

/// Collections held in memory, e.g. compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedSource {
    collections: HashMap<u32, FeatureCollection>,
}

impl EmbeddedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, adcode: u32, collection: FeatureCollection) -> Self {
        self.insert(adcode, collection);
        self
    }

    pub fn insert(&mut self, adcode: u32, collection: FeatureCollection) {
        self.collections.insert(adcode, collection);
    }

    /// Parse and add a collection from GeoJSON text.
    pub fn insert_json(&mut self, adcode: u32, json: &str) -> Result<(), SourceError> {
        let collection = FeatureCollection::from_json(json)
            .map_err(|source| SourceError::Parse { adcode, source })?;
        self.insert(adcode, collection);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl GeometrySource for EmbeddedSource {
    fn name(&self) -> &str {
        "embedded"
    }

    fn load(&self, adcode: u32) -> Result<FeatureCollection, SourceError> {
        self.collections
            .get(&adcode)
            .cloned()
            .ok_or(SourceError::NotFound { adcode })
    }
}

/// A collection and the source that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub source: String,
    pub collection: FeatureCollection,
}

/// Every source failed.
#[derive(Debug)]
pub struct ChainError {
    pub adcode: u32,
    /// `(source name, failure)` in chain order. Empty when the chain has no sources.
    pub failures: Vec<(String, SourceError)>,
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "no geometry sources configured for region {}", self.adcode);
        }
        write!(f, "no source could load region {}", self.adcode)?;
        for (name, failure) in &self.failures {
            write!(f, "; {}: {}", name, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ChainError {}

/// Sources tried in order; the first success wins.
#[derive(Default)]
pub struct SourceChain {
    sources: Vec<Box<dyn GeometrySource>>,
}

impl SourceChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source to the end of the chain.
    pub fn with_source(mut self, source: impl GeometrySource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Source names, in order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn load(&self, adcode: u32) -> Result<Loaded, ChainError> {
        let mut failures = Vec::new();
        for source in &self.sources {
            match source.load(adcode) {
                Ok(collection) => {
                    return Ok(Loaded {
                        source: source.name().to_string(),
                        collection,
                    })
                }
                Err(err) => failures.push((source.name().to_string(), err)),
            }
        }
        Err(ChainError { adcode, failures })
    }
}

impl fmt::Debug for SourceChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceChain")
            .field("sources", &self.source_names())
            .finish()
    }
}
