//! Bar chart drawing with [`plotters`].

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{DataError, DataResult};

use super::{BarChart, ChartOptions};

/// Image formats a chart can be saved as, chosen from the output extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Bitmap,
}

impl ImageFormat {
    /// Pick a format from `path`'s extension (case-insensitive).
    pub fn from_path(path: &Path) -> DataResult<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("svg") => Ok(ImageFormat::Svg),
            Some("png" | "bmp" | "jpg" | "jpeg") => Ok(ImageFormat::Bitmap),
            _ => Err(DataError::UnsupportedImageFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn plot_err(e: impl std::fmt::Display) -> DataError {
    DataError::Plot(e.to_string())
}

pub(super) fn save(chart: &BarChart, path: &Path, format: ImageFormat, options: &ChartOptions) -> DataResult<()> {
    let size = (options.size.width, options.size.height);
    match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_bars(chart, &root, options)?;
            root.present().map_err(plot_err)
        }
        ImageFormat::Bitmap => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_bars(chart, &root, options)?;
            root.present().map_err(plot_err)
        }
    }
}

/// One semi-transparent vertical bar per label, labels rotated under the x axis.
fn draw_bars<DB: DrawingBackend>(
    chart: &BarChart,
    root: &DrawingArea<DB, Shift>,
    options: &ChartOptions,
) -> DataResult<()> {
    root.fill(&WHITE).map_err(plot_err)?;

    let font = options.font_family.as_str();
    let bars = chart.len() as u32;
    let y_max = chart.heights.iter().copied().max().unwrap_or(0);
    // Headroom above the tallest bar.
    let y_top = y_max + (y_max / 10).max(1);

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (font, 32))
        .margin(20)
        .x_label_area_size(options.x_label_area)
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..bars).into_segmented(), 0u64..y_top)
        .map_err(plot_err)?;

    let labels = &chart.labels;
    let label_for = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            labels.get(*i as usize).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(chart.len())
        .x_label_formatter(&label_for)
        .x_label_style((font, 16).into_font().transform(FontTransform::Rotate90))
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .axis_desc_style((font, 20))
        .label_style((font, 16))
        .draw()
        .map_err(plot_err)?;

    let style = BLUE.mix(0.5).filled();
    ctx.draw_series(chart.heights.iter().enumerate().map(|(i, &h)| {
        let i = i as u32;
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), h)],
            style,
        );
        bar.set_margin(0, 0, 8, 8);
        bar
    }))
    .map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("top.svg")).unwrap(), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("top.PNG")).unwrap(), ImageFormat::Bitmap);
        assert_eq!(ImageFormat::from_path(Path::new("a/b.jpeg")).unwrap(), ImageFormat::Bitmap);
        assert!(matches!(
            ImageFormat::from_path(Path::new("top.pdf")),
            Err(DataError::UnsupportedImageFormat { .. })
        ));
        assert!(ImageFormat::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn formats_without_an_encoder_are_rejected() {
        for name in ["top.gif", "top.tiff", "top.tif", "top.webp"] {
            assert!(
                matches!(
                    ImageFormat::from_path(Path::new(name)),
                    Err(DataError::UnsupportedImageFormat { .. })
                ),
                "{name} should be rejected"
            );
        }
    }
}
