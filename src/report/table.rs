//! Fixed-width console report for a completed sweep.

use std::fmt::Write as _;

use crate::sim::sweep::{optimal_point, SweepPoint, THEORETICAL_OPTIMUM_FRACTION};

/// Render the per-fraction table followed by the optimum summary block.
pub fn render_report(points: &[SweepPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Summary of Results ---");
    let _ = writeln!(out, "Rejection Fraction | Success Rate | Average Rank");
    let _ = writeln!(out, "-------------------|--------------|-------------");
    for point in points {
        let _ = writeln!(
            out,
            "{:18.2} | {:11.2}% | {:12.2}",
            point.fraction,
            point.success_rate * 100.0,
            point.average_rank
        );
    }

    if let Some(optimum) = optimal_point(points) {
        let _ = writeln!(out);
        let _ = writeln!(out, "Optimal Rejection Fraction: {:.3}", optimum.fraction);
        let _ = writeln!(out, "Optimal Success Rate: {:.3}", optimum.success_rate);
        let _ = writeln!(out, "Optimal Average Rank: {:.3}", optimum.average_rank);
        let _ = writeln!(
            out,
            "Theoretical optimal fraction (1/e): {:.3}",
            THEORETICAL_OPTIMUM_FRACTION
        );
    }
    out
}
