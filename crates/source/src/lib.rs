//! Input document sources for the pipeline.
//!
//! A run reads four JSON documents: one summary per domain and the
//! cross-domain advanced-analysis result set. This crate turns them into an
//! [`InputSet`].
//!
//! ## Available Sources
//!
//! - [`FileAggregateSource`]: Reads the documents from fixed paths under a project root
//! - [`InMemoryAggregateSource`]: Documents supplied as JSON values (tests, embedding)
//!
//! ## Failure scopes
//!
//! A document that cannot be read or is not valid JSON of the right top-level
//! type is fatal ([`SourceError`]). A single entry of a domain document that
//! does not match the aggregate shape is not: it is kept as a [`RecordError`]
//! next to the entries that did parse.

use serde_json::Value;
use shelfplot_types::{AdvancedAggregate, Domain, RawAggregate};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal input errors: the run cannot start without every document.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read input '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input '{path}' is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input '{path}' has the wrong shape: expected {expected}")]
    Shape { path: PathBuf, expected: &'static str },
}

/// One entry of a domain document that could not be read as an aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordError {
    pub domain: Domain,
    /// Zero-based position in the domain document.
    pub index: usize,
    pub message: String,
}

/// The parsed entries of one domain summary document, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainDocument {
    pub domain: Domain,
    pub records: Vec<Result<RawAggregate, RecordError>>,
}

impl DomainDocument {
    /// Parses a domain document from its top-level JSON value.
    ///
    /// `origin` is only used for error messages.
    pub fn from_value(domain: Domain, value: Value, origin: &Path) -> Result<Self, SourceError> {
        let Value::Array(entries) = value else {
            return Err(SourceError::Shape {
                path: origin.to_path_buf(),
                expected: "an array of sheet aggregates",
            });
        };

        let records = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<RawAggregate>(entry).map_err(|e| {
                    log::warn!("Skipping {domain} record #{index}: {e}");
                    RecordError {
                        domain,
                        index,
                        message: e.to_string(),
                    }
                })
            })
            .collect();

        Ok(Self { domain, records })
    }
}

/// Every document a run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSet {
    /// Domain documents in canonical domain order.
    pub domains: Vec<DomainDocument>,
    pub advanced: AdvancedAggregate,
}

impl InputSet {
    pub fn domain(&self, domain: Domain) -> Option<&DomainDocument> {
        self.domains.iter().find(|doc| doc.domain == domain)
    }
}

/// A source of input documents.
pub trait AggregateSource: Send + Sync {
    /// Loads and parses every input document.
    fn load(&self) -> Result<InputSet, SourceError>;

    /// Returns a human-readable name for this source (for logging).
    fn name(&self) -> &'static str;
}

/// Relative locations of the input documents under a project root.
#[derive(Debug, Clone, PartialEq)]
pub struct InputPaths {
    pub movies: PathBuf,
    pub books: PathBuf,
    pub games: PathBuf,
    pub advanced: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            movies: PathBuf::from("data/eda_results/summary_movies_results.json"),
            books: PathBuf::from("data/eda_results/summary_books_results.json"),
            games: PathBuf::from("data/eda_results/summary_games_results.json"),
            advanced: PathBuf::from(
                "data/advanced_analysis_results/advanced_analysis_results.json",
            ),
        }
    }
}

impl InputPaths {
    pub fn domain(&self, domain: Domain) -> &Path {
        match domain {
            Domain::Movies => &self.movies,
            Domain::Books => &self.books,
            Domain::Games => &self.games,
        }
    }
}

/// Reads the input documents from disk.
#[derive(Debug, Clone)]
pub struct FileAggregateSource {
    root: PathBuf,
    paths: InputPaths,
}

impl FileAggregateSource {
    pub fn new<P: AsRef<Path>>(root: P, paths: InputPaths) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            paths,
        }
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            self.root.join(relative)
        }
    }

    fn read_json(&self, relative: &Path) -> Result<(PathBuf, Value), SourceError> {
        let path = self.resolve(relative);
        let text = fs::read_to_string(&path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?;
        let value = serde_json::from_str(&text).map_err(|source| SourceError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("Loaded {}", path.display());
        Ok((path, value))
    }
}

impl AggregateSource for FileAggregateSource {
    fn load(&self) -> Result<InputSet, SourceError> {
        let mut domains = Vec::with_capacity(Domain::ALL.len());
        for domain in Domain::ALL {
            let (path, value) = self.read_json(self.paths.domain(domain))?;
            domains.push(DomainDocument::from_value(domain, value, &path)?);
        }

        let (path, value) = self.read_json(&self.paths.advanced)?;
        let advanced = advanced_from_value(&value, &path)?;

        Ok(InputSet { domains, advanced })
    }

    fn name(&self) -> &'static str {
        "FileAggregateSource"
    }
}

/// Input documents held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryAggregateSource {
    movies: Value,
    books: Value,
    games: Value,
    advanced: Value,
}

impl InMemoryAggregateSource {
    pub fn new(movies: Value, books: Value, games: Value, advanced: Value) -> Self {
        Self {
            movies,
            books,
            games,
            advanced,
        }
    }

    fn document(&self, domain: Domain) -> &Value {
        match domain {
            Domain::Movies => &self.movies,
            Domain::Books => &self.books,
            Domain::Games => &self.games,
        }
    }
}

impl AggregateSource for InMemoryAggregateSource {
    fn load(&self) -> Result<InputSet, SourceError> {
        let domains = Domain::ALL
            .into_iter()
            .map(|domain| {
                let origin = PathBuf::from(format!("<memory:{domain}>"));
                DomainDocument::from_value(domain, self.document(domain).clone(), &origin)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let advanced = advanced_from_value(&self.advanced, Path::new("<memory:advanced>"))?;
        Ok(InputSet { domains, advanced })
    }

    fn name(&self) -> &'static str {
        "InMemoryAggregateSource"
    }
}

fn advanced_from_value(value: &Value, origin: &Path) -> Result<AdvancedAggregate, SourceError> {
    value
        .as_object()
        .map(AdvancedAggregate::from_document)
        .ok_or_else(|| SourceError::Shape {
            path: origin.to_path_buf(),
            expected: "an object of analysis sections",
        })
}
