use crate::error::RenderError;
use crate::figure::Figure;
use crate::traits::DocumentRenderer;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

const CHART_TEMPLATE_NAME: &str = "chart";

const CHART_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <title>{{title}}</title>
    <script src="{{plotly_src}}" charset="utf-8"></script>
</head>
<body>
    <div id="{{element_id}}" class="plotly-graph-div" style="height:100%; width:100%;"></div>
    <script type="text/javascript">
        Plotly.newPlot("{{element_id}}", {{{data}}}, {{{layout}}}, {{{config}}});
    </script>
</body>
</html>
"#;

/// Options shared by every rendered chart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Where the page loads plotly.js from.
    pub plotly_src: String,
    pub display_mode_bar: bool,
    pub scroll_zoom: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            plotly_src: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
            display_mode_bar: true,
            scroll_zoom: true,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlotConfig {
    display_mode_bar: bool,
    scroll_zoom: bool,
    responsive: bool,
}

/// Renders a figure as a self-contained HTML page drawn by plotly.js.
///
/// The page contains no timestamps or random ids, so re-rendering the same
/// figure yields byte-identical output.
#[derive(Debug)]
pub struct PlotlyHtmlRenderer {
    config: RenderConfig,
    engine: Handlebars<'static>,
}

impl PlotlyHtmlRenderer {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);
        engine.register_template_string(CHART_TEMPLATE_NAME, CHART_TEMPLATE)?;
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            display_mode_bar: self.config.display_mode_bar,
            scroll_zoom: self.config.scroll_zoom,
            responsive: true,
        }
    }
}

impl DocumentRenderer for PlotlyHtmlRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, figure: &Figure, output_id: &str) -> Result<Vec<u8>, RenderError> {
        let element_id = slug::slugify(output_id);
        if element_id.is_empty() {
            return Err(RenderError::Other(format!(
                "output id '{output_id}' yields an empty element id"
            )));
        }

        let context = json!({
            "title": figure.title(),
            "plotly_src": self.config.plotly_src,
            "element_id": element_id,
            "data": script_json(&figure.data)?,
            "layout": script_json(&figure.layout)?,
            "config": script_json(&self.plot_config())?,
        });
        let page = self.engine.render(CHART_TEMPLATE_NAME, &context)?;
        Ok(page.into_bytes())
    }
}

/// Serializes `value` for embedding inside an inline `<script>` block.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    let raw = serde_json::to_string(value)?;
    Ok(raw.replace("</", "<\\/"))
}
