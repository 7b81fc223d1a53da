//! Self-contained HTML chart for a completed sweep.
//!
//! Emits a single HTML file with an embedded Plotly.js line+marker trace
//! of the `average_rank` series over the swept fractions, plus a dashed
//! vertical reference line at the theoretical 1/e fraction. The file is
//! the interactive artifact; open it in any browser. Plotly.js loads from
//! its CDN on first view.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use chrono::Utc;

use crate::sim::sweep::{SweepPoint, THEORETICAL_OPTIMUM_FRACTION};

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

/// Render the chart page for `points`.
pub fn render_chart_html(points: &[SweepPoint]) -> String {
    let fractions = join_values(points.iter().map(|p| p.fraction));
    let average_ranks = join_values(points.iter().map(|p| p.average_rank));

    // Reference line spans the plotted series vertically.
    let (y_min, y_max) = points
        .iter()
        .map(|p| p.average_rank)
        .fold(None, |span: Option<(f64, f64)>, value| match span {
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
            None => Some((value, value)),
        })
        .unwrap_or((0.0, 1.0));

    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html><head><meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>Secretary Problem Simulation</title>");
    let _ = writeln!(out, "<script src=\"{PLOTLY_CDN}\"></script>");
    let _ = writeln!(out, "</head><body>");
    let _ = writeln!(
        out,
        "<div id=\"sweep-chart\" style=\"width:900px;height:560px;\"></div>"
    );
    let _ = writeln!(out, "<script>");
    let _ = writeln!(out, "const fractions = [{fractions}];");
    let _ = writeln!(out, "const averageRanks = [{average_ranks}];");
    let _ = writeln!(
        out,
        "const simulated = {{ x: fractions, y: averageRanks, mode: 'lines+markers', \
         name: 'Simulated Success Rate' }};"
    );
    let _ = writeln!(
        out,
        "const reference = {{ x: [{frac}, {frac}], y: [{y_min}, {y_max}], mode: 'lines', \
         line: {{ dash: 'dash', color: 'red' }}, name: 'Theoretical 1/e \u{2248} {frac:.3}' }};",
        frac = THEORETICAL_OPTIMUM_FRACTION,
    );
    let _ = writeln!(
        out,
        "const layout = {{ title: 'Secretary Problem Simulation', \
         xaxis: {{ title: 'Skip fraction (r/n)', showgrid: true }}, \
         yaxis: {{ title: 'Success Probability', showgrid: true }}, \
         showlegend: true }};"
    );
    let _ = writeln!(
        out,
        "Plotly.newPlot('sweep-chart', [simulated, reference], layout);"
    );
    let _ = writeln!(out, "</script>");
    let _ = writeln!(
        out,
        "<p>Generated {} UTC</p>",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "</body></html>");
    out
}

/// Render and write the chart page to `path`.
pub fn write_chart_html<P: AsRef<Path>>(path: P, points: &[SweepPoint]) -> io::Result<()> {
    fs::write(path, render_chart_html(points))
}

fn join_values(values: impl Iterator<Item = f64>) -> String {
    let mut out = String::new();
    for (index, value) in values.enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<SweepPoint> {
        vec![
            SweepPoint {
                fraction: 0.0,
                skip_count: 0,
                success_rate: 0.01,
                average_rank: 49.5,
            },
            SweepPoint {
                fraction: 0.35,
                skip_count: 35,
                success_rate: 0.37,
                average_rank: 85.0,
            },
        ]
    }

    #[test]
    fn chart_embeds_series_axes_and_reference_line() {
        let html = render_chart_html(&sample_points());
        assert!(html.contains("const fractions = [0, 0.35];"));
        assert!(html.contains("const averageRanks = [49.5, 85];"));
        assert!(html.contains("Skip fraction (r/n)"));
        assert!(html.contains("Success Probability"));
        assert!(html.contains("dash: 'dash'"));
        assert!(html.contains("Theoretical 1/e \u{2248} 0.368"));
        assert!(html.contains("lines+markers"));
    }

    #[test]
    fn empty_sweep_still_renders_a_page() {
        let html = render_chart_html(&[]);
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("const fractions = [];"));
    }
}
