use crate::error::PipelineError;
use handlebars::Handlebars;
use serde::Serialize;
use shelfplot_traits::ArtifactStore;
use shelfplot_types::ExportRecord;
use std::path::PathBuf;

const INDEX_TEMPLATE_NAME: &str = "index";
const INDEX_TITLE: &str = "Chart index";

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<title>{{title}}</title>
<style>
body { font-family: Arial, sans-serif; margin: 20px; }
.plot-list { list-style: none; padding: 0; }
.plot-list li { margin: 10px 0; }
.plot-list a { text-decoration: none; color: #2196F3; }
.plot-list a:hover { text-decoration: underline; }
</style>
</head>
<body>
<h1>{{title}}</h1>
<ul class="plot-list">
{{#each entries}}
<li><a href="{{href}}">{{title}}</a></li>
{{/each}}
</ul>
</body>
</html>
"#;

/// One link of the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub title: String,
    /// The artifact file name, relative to the index page.
    pub href: String,
}

/// The navigation page listing every exported chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDocument {
    pub title: String,
    pub entries: Vec<IndexEntry>,
    /// Where the page was written, once it has been.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

/// Builds the index page from export records and writes it next to the charts.
#[derive(Debug)]
pub struct IndexBuilder {
    engine: Handlebars<'static>,
    file_name: String,
}

impl IndexBuilder {
    pub fn new(file_name: impl Into<String>) -> Result<Self, PipelineError> {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);
        engine.register_template_string(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self {
            engine,
            file_name: file_name.into(),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Lists the successful records, in the order they were exported.
    pub fn build_index(&self, records: &[ExportRecord]) -> IndexDocument {
        let entries = records
            .iter()
            .filter(|record| record.is_success())
            .map(|record| IndexEntry {
                title: record.title.clone(),
                href: record.file_name.clone(),
            })
            .collect();
        IndexDocument {
            title: INDEX_TITLE.to_string(),
            entries,
            path: None,
        }
    }

    pub fn render(&self, document: &IndexDocument) -> Result<String, PipelineError> {
        Ok(self.engine.render(INDEX_TEMPLATE_NAME, document)?)
    }

    /// Renders `document` and writes it to the store, replacing any previous index.
    pub fn write(
        &self,
        mut document: IndexDocument,
        store: &dyn ArtifactStore,
    ) -> Result<IndexDocument, PipelineError> {
        let page = self.render(&document)?;
        let path = store.write(&self.file_name, page.as_bytes())?;
        log::info!(
            "Index with {} entries written to {}",
            document.entries.len(),
            path.display()
        );
        document.path = Some(path);
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfplot_traits::InMemoryArtifactStore;
    use shelfplot_types::OutputId;

    fn success(id: &str, title: &str) -> ExportRecord {
        ExportRecord::success(
            OutputId::from(id),
            title,
            format!("{id}.html"),
            PathBuf::from(format!("{id}.html")),
        )
    }

    #[test]
    fn failures_are_left_out_and_order_is_kept() {
        let records = vec![
            success("b", "Second"),
            ExportRecord::failure(OutputId::from("x"), "Broken", "x.html", "disk full"),
            success("a", "First"),
        ];
        let builder = IndexBuilder::new("index.html").unwrap();
        let document = builder.build_index(&records);
        let hrefs: Vec<&str> = document.entries.iter().map(|e| e.href.as_str()).collect();
        assert_eq!(hrefs, vec!["b.html", "a.html"]);
    }

    #[test]
    fn page_links_every_entry_and_escapes_titles() {
        let builder = IndexBuilder::new("index.html").unwrap();
        let document = builder.build_index(&[success("m", "Tom & Jerry <Top 5>")]);
        let page = builder.render(&document).unwrap();
        assert!(page.contains("<title>Chart index</title>"));
        assert!(page.contains(r#"<ul class="plot-list">"#));
        assert!(page.contains(r#"<a href="m.html">Tom &amp; Jerry &lt;Top 5&gt;</a>"#));
    }

    #[test]
    fn writing_replaces_the_previous_index() {
        let store = InMemoryArtifactStore::new();
        let builder = IndexBuilder::new("index.html").unwrap();

        builder
            .write(builder.build_index(&[success("old", "Old")]), &store)
            .unwrap();
        let written = builder
            .write(builder.build_index(&[success("new", "New")]), &store)
            .unwrap();

        assert_eq!(written.path, Some(PathBuf::from("index.html")));
        let page = String::from_utf8(store.get("index.html").unwrap().to_vec()).unwrap();
        assert!(page.contains("new.html"));
        assert!(!page.contains("old.html"));
    }
}
