//! Bar charts of category counts.
//!
//! Every chart is an explicit [`BarChart`] value: build one from ranked counts, show it on a
//! [`ChartViewer`], then save it with [`BarChart::save`]. Nothing is kept between calls.
//!
//! [`render_top_n_bar_chart`] and [`render_cultural_bar_chart`] do all three steps.
//!
//! ```no_run
//! use business_categories::charts::{render_top_n_bar_chart, ChartOptions};
//! use business_categories::ingestion::read_table;
//!
//! # fn main() -> Result<(), business_categories::DataError> {
//! let table = read_table("business.json")?;
//! render_top_n_bar_chart(&table, 10, "top10.png", &ChartOptions::default())?;
//! # Ok(())
//! # }
//! ```

mod render;
mod viewer;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analytics::{count_categories, cultural_counts, top_n_categories, CategoryCount};
use crate::error::{DataError, DataResult};
use crate::types::RecordTable;

pub use render::ImageFormat;
pub use viewer::{ChartViewer, NullViewer, TerminalViewer};

const COUNT_AXIS: &str = "Number of Businesses In Category";

/// Output image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

/// Options controlling chart output.
///
/// Use [`Default`] for common cases. The default viewer is a [`TerminalViewer`].
#[derive(Clone)]
pub struct ChartOptions {
    /// Saved image size.
    pub size: ChartSize,
    /// Font family for caption, labels and axis descriptions.
    pub font_family: String,
    /// Pixels reserved under the x axis for the rotated category labels.
    pub x_label_area: u32,
    /// Where the chart is shown before saving; `None` skips showing.
    pub viewer: Option<Arc<dyn ChartViewer>>,
}

impl fmt::Debug for ChartOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartOptions")
            .field("size", &self.size)
            .field("font_family", &self.font_family)
            .field("x_label_area", &self.x_label_area)
            .field("viewer_set", &self.viewer.is_some())
            .finish()
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            size: ChartSize::default(),
            font_family: "sans-serif".to_string(),
            x_label_area: 220,
            viewer: Some(Arc::new(TerminalViewer::default())),
        }
    }
}

/// A vertical bar chart: one bar per label, heights are counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    /// Caption drawn above the plot.
    pub title: String,
    /// X axis description.
    pub x_desc: String,
    /// Y axis description.
    pub y_desc: String,
    /// Bar labels, left to right.
    pub labels: Vec<String>,
    /// Bar heights, parallel to `labels`.
    pub heights: Vec<u64>,
}

impl BarChart {
    /// Chart with one bar per entry of `bars`, in order.
    pub fn new(
        title: impl Into<String>,
        x_desc: impl Into<String>,
        y_desc: impl Into<String>,
        bars: &[CategoryCount],
    ) -> Self {
        Self {
            title: title.into(),
            x_desc: x_desc.into(),
            y_desc: y_desc.into(),
            labels: bars.iter().map(|c| c.label.clone()).collect(),
            heights: bars.iter().map(|c| c.count).collect(),
        }
    }

    /// The "`n` most popular" chart. The title names `n` even when fewer bars are available.
    pub fn top_n(n: usize, ranked: &[CategoryCount]) -> Self {
        Self::new(
            format!("{n} Most Popular Business Categories"),
            "Category",
            COUNT_AXIS,
            ranked,
        )
    }

    /// The cultural categories chart.
    pub fn cultural(counts: &[CategoryCount]) -> Self {
        Self::new(
            "Number of Businesses in Cultural Categories",
            "Culture",
            COUNT_AXIS,
            counts,
        )
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Render to `path`, with the image format taken from its extension.
    pub fn save(&self, path: impl AsRef<Path>, options: &ChartOptions) -> DataResult<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        self.ensure_drawable()?;
        render::save(self, path, format, options)?;
        info!("saved chart '{}' ({} bars) to {}", self.title, self.len(), path.display());
        Ok(())
    }

    fn ensure_drawable(&self) -> DataResult<()> {
        if self.is_empty() {
            return Err(DataError::Plot(format!("chart '{}' has no bars", self.title)));
        }
        Ok(())
    }
}

/// Chart the `n` most frequent categories: show it on `options.viewer`, then save to `output_path`.
pub fn render_top_n_bar_chart(
    table: &RecordTable,
    n: usize,
    output_path: impl AsRef<Path>,
    options: &ChartOptions,
) -> DataResult<()> {
    let ranked = top_n_categories(table, n)?;
    debug!("top {n} categories: {} available", ranked.len());
    present(&BarChart::top_n(n, &ranked), output_path.as_ref(), options)
}

/// Chart the five fixed cultural categories: show it on `options.viewer`, then save to `output_path`.
///
/// Fails with [`DataError::MissingCategory`] before anything is shown if any of the five is absent.
pub fn render_cultural_bar_chart(
    table: &RecordTable,
    output_path: impl AsRef<Path>,
    options: &ChartOptions,
) -> DataResult<()> {
    let counts = cultural_counts(&count_categories(table)?)?;
    present(&BarChart::cultural(&counts), output_path.as_ref(), options)
}

fn present(chart: &BarChart, path: &Path, options: &ChartOptions) -> DataResult<()> {
    ImageFormat::from_path(path)?;
    chart.ensure_drawable()?;
    if let Some(viewer) = options.viewer.as_ref() {
        viewer.show(chart)?;
    }
    chart.save(path, options)
}
