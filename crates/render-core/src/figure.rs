//! Declarative figure model.
//!
//! The structs serialize to the JSON figure format understood by plotly.js
//! (`{"data": [...], "layout": {...}}`). Optional attributes are omitted when
//! unset so the engine's defaults apply.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "h")]
    Horizontal,
}

/// A single axis value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Datum {
    Text(String),
    Count(u64),
    Number(f64),
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Text(s.to_string())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::Text(s)
    }
}

impl From<u64> for Datum {
    fn from(n: u64) -> Self {
        Datum::Count(n)
    }
}

impl From<f64> for Datum {
    fn from(n: f64) -> Self {
        Datum::Number(n)
    }
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<Datum>,
    pub y: Vec<Datum>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Trace {
    pub fn new(kind: TraceKind, x: Vec<Datum>, y: Vec<Datum>) -> Self {
        Self {
            kind,
            name: None,
            x,
            y,
            orientation: None,
            mode: None,
            xaxis: None,
            yaxis: None,
            legendgroup: None,
            showlegend: None,
        }
    }

    pub fn bar(x: Vec<Datum>, y: Vec<Datum>) -> Self {
        Self::new(TraceKind::Bar, x, y)
    }

    pub fn scatter(x: Vec<Datum>, y: Vec<Datum>) -> Self {
        Self::new(TraceKind::Scatter, x, y)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Some(Orientation::Horizontal);
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Places the trace on the subplot drawn by axis pair number `index` (1-based).
    pub fn on_axes(mut self, index: usize) -> Self {
        self.xaxis = Some(axis_ref("x", index));
        self.yaxis = Some(axis_ref("y", index));
        self
    }

    pub fn in_legend_group(mut self, group: impl Into<String>, show: bool) -> Self {
        self.legendgroup = Some(group.into());
        self.showlegend = Some(show);
        self
    }

    pub fn hide_legend(mut self) -> Self {
        self.showlegend = Some(false);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Some(Title::new(text)),
            ..Self::default()
        }
    }

    pub fn categorical(mut self) -> Self {
        self.kind = Some(AxisType::Category);
        self
    }

    /// Draws the axis from high to low, so the first category sits at the top.
    pub fn reversed(mut self) -> Self {
        self.autorange = Some("reversed".to_string());
        self
    }

    pub fn spanning(mut self, domain: [f64; 2], anchor: impl Into<String>) -> Self {
        self.domain = Some(domain);
        self.anchor = Some(anchor.into());
        self
    }
}

/// A paper-positioned text label, used for subplot titles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xref: String,
    pub yref: String,
    pub xanchor: String,
    pub yanchor: String,
    pub showarrow: bool,
}

impl Annotation {
    /// A title centered above the point (`x`, `y`) in paper coordinates.
    pub fn panel_title(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            xref: "paper".to_string(),
            yref: "paper".to_string(),
            xanchor: "center".to_string(),
            yanchor: "bottom".to_string(),
            showarrow: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    /// `xaxis`, `yaxis`, `xaxis2`, ... keyed the way the engine expects them.
    #[serde(flatten)]
    pub axes: BTreeMap<String, Axis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

impl Layout {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
            barmode: None,
            height: None,
            showlegend: None,
            legend: None,
            axes: BTreeMap::new(),
            annotations: Vec::new(),
        }
    }

    /// Sets the x axis of subplot `index` (1-based).
    pub fn set_x_axis(&mut self, index: usize, axis: Axis) {
        self.axes.insert(axis_key("xaxis", index), axis);
    }

    /// Sets the y axis of subplot `index` (1-based).
    pub fn set_y_axis(&mut self, index: usize, axis: Axis) {
        self.axes.insert(axis_key("yaxis", index), axis);
    }

    pub fn x_axis(&self, index: usize) -> Option<&Axis> {
        self.axes.get(&axis_key("xaxis", index))
    }

    pub fn y_axis(&self, index: usize) -> Option<&Axis> {
        self.axes.get(&axis_key("yaxis", index))
    }
}

/// `xaxis`, `xaxis2`, ... : the first subplot's axis carries no number.
fn axis_key(prefix: &str, index: usize) -> String {
    if index <= 1 {
        prefix.to_string()
    } else {
        format!("{prefix}{index}")
    }
}

/// `x`, `x2`, ... as referenced from traces and anchors.
pub fn axis_ref(prefix: &str, index: usize) -> String {
    axis_key(prefix, index)
}
