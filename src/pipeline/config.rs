use std::path::{Path, PathBuf};

pub use shelfplot_render_core::RenderConfig;
pub use shelfplot_source::InputPaths;

/// Output directory used when none is configured, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "output_html";
/// File name of the index page inside the output directory.
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Everything a run needs to know about where things live.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub project_root: PathBuf,
    /// Input document locations, relative to `project_root` unless absolute.
    pub inputs: InputPaths,
    /// Output directory, relative to `project_root` unless absolute.
    pub output_dir: PathBuf,
    pub index_file_name: String,
    pub render: RenderConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            inputs: InputPaths::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            index_file_name: DEFAULT_INDEX_FILE.to_string(),
            render: RenderConfig::default(),
        }
    }
}

impl ReportConfig {
    /// The directory artifacts and the index are written to.
    pub fn output_root(&self) -> PathBuf {
        resolve(&self.project_root, &self.output_dir)
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_root_is_relative_to_project_root() {
        let config = ReportConfig {
            project_root: PathBuf::from("/srv/stats"),
            ..ReportConfig::default()
        };
        assert_eq!(config.output_root(), PathBuf::from("/srv/stats/output_html"));
    }

    #[test]
    fn absolute_output_dir_is_kept() {
        let config = ReportConfig {
            project_root: PathBuf::from("/srv/stats"),
            output_dir: PathBuf::from("/tmp/charts"),
            ..ReportConfig::default()
        };
        assert_eq!(config.output_root(), PathBuf::from("/tmp/charts"));
    }
}
