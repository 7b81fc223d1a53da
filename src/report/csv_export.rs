//! CSV export of sweep points, one row per fraction.

use std::path::Path;

use crate::sim::sweep::SweepPoint;

/// Write `points` to `path` as CSV with a header row
/// (`fraction,skip_count,success_rate,average_rank`).
pub fn write_sweep_csv<P: AsRef<Path>>(path: P, points: &[SweepPoint]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
