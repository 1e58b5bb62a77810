//! Display surfaces a chart is shown on before it is saved.

use std::io::Write;

use crate::error::DataResult;

use super::BarChart;

/// Something that can show a chart to a user.
pub trait ChartViewer: Send + Sync {
    /// Present `chart`; an error aborts the render before anything is saved.
    fn show(&self, chart: &BarChart) -> DataResult<()>;
}

/// Draws the chart as horizontal text bars on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalViewer {
    /// Width in characters of the longest bar.
    pub bar_width: usize,
}

impl Default for TerminalViewer {
    fn default() -> Self {
        Self { bar_width: 40 }
    }
}

impl TerminalViewer {
    /// Render `chart` to text: the title, then one `label | bar count` line per bar.
    ///
    /// Bars are scaled so the tallest is `bar_width` characters; any non-zero count gets at least
    /// one character.
    pub fn render_to_string(&self, chart: &BarChart) -> String {
        let label_width = chart.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let max = chart.heights.iter().copied().max().unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("{}\n", chart.title));
        for (label, &height) in chart.labels.iter().zip(&chart.heights) {
            let len = if max == 0 || height == 0 {
                0
            } else {
                ((height as f64 / max as f64) * self.bar_width as f64).round().max(1.0) as usize
            };
            out.push_str(&format!("{label:<label_width$} | {} {height}\n", "#".repeat(len)));
        }
        out
    }
}

impl ChartViewer for TerminalViewer {
    fn show(&self, chart: &BarChart) -> DataResult<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.render_to_string(chart).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Shows nothing. For headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullViewer;

impl ChartViewer for NullViewer {
    fn show(&self, _chart: &BarChart) -> DataResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::CategoryCount;

    #[test]
    fn terminal_rendering_scales_to_tallest_bar() {
        let chart = BarChart::top_n(
            3,
            &[
                CategoryCount::new("Restaurants", 10),
                CategoryCount::new("Bars", 5),
                CategoryCount::new("Delis", 0),
            ],
        );
        let viewer = TerminalViewer { bar_width: 10 };
        assert_eq!(
            viewer.render_to_string(&chart),
            "3 Most Popular Business Categories\n\
             Restaurants | ########## 10\n\
             Bars        | ##### 5\n\
             Delis       |  0\n"
        );
    }

    #[test]
    fn small_counts_still_get_a_bar() {
        let chart = BarChart::top_n(
            2,
            &[CategoryCount::new("A", 1000), CategoryCount::new("B", 1)],
        );
        let text = TerminalViewer { bar_width: 10 }.render_to_string(&chart);
        assert!(text.contains("B | # 1\n"));
    }
}
