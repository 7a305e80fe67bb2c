#![allow(dead_code)]

pub mod fixtures;

use serde_json::Value;
use shelfplot::{
    InMemoryAggregateSource, InMemoryArtifactStore, PipelineBuilder, PipelineError,
    ReportPipeline,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A project root on disk laid out the way the upstream job writes it.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new(movies: &Value, books: &Value, games: &Value, advanced: &Value) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let eda = dir.path().join("data/eda_results");
        let advanced_dir = dir.path().join("data/advanced_analysis_results");
        fs::create_dir_all(&eda)?;
        fs::create_dir_all(&advanced_dir)?;

        fs::write(eda.join("summary_movies_results.json"), movies.to_string())?;
        fs::write(eda.join("summary_books_results.json"), books.to_string())?;
        fs::write(eda.join("summary_games_results.json"), games.to_string())?;
        fs::write(
            advanced_dir.join("advanced_analysis_results.json"),
            advanced.to_string(),
        )?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("output_html")
    }

    pub fn pipeline(&self) -> Result<ReportPipeline, PipelineError> {
        PipelineBuilder::new().with_project_root(self.root()).build()
    }

    pub fn read_output(&self, name: &str) -> std::io::Result<String> {
        fs::read_to_string(self.output_dir().join(name))
    }

    /// File names in the output directory, sorted.
    pub fn output_files(&self) -> std::io::Result<Vec<String>> {
        let mut names = fs::read_dir(self.output_dir())?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        names.sort();
        Ok(names)
    }

    /// Every output file with its contents, sorted by name.
    pub fn snapshot(&self) -> std::io::Result<Vec<(String, String)>> {
        let mut files = Vec::new();
        for name in self.output_files()? {
            let contents = self.read_output(&name)?;
            files.push((name, contents));
        }
        Ok(files)
    }
}

/// A pipeline reading `movies` and `advanced` from memory and writing into `store`.
pub fn in_memory_pipeline(
    movies: Value,
    advanced: Value,
    store: Arc<InMemoryArtifactStore>,
) -> Result<ReportPipeline, PipelineError> {
    let source = InMemoryAggregateSource::new(
        movies,
        serde_json::json!([]),
        serde_json::json!([]),
        advanced,
    );
    PipelineBuilder::new()
        .with_source(Box::new(source))
        .with_store(store)
        .build()
}

/// The `href` targets of the index page, in document order.
pub fn index_links(page: &str) -> Vec<String> {
    page.split("<a href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
