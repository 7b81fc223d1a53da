pub mod chart;
pub mod csv_export;
pub mod table;

pub use chart::{render_chart_html, write_chart_html};
pub use csv_export::write_sweep_csv;
pub use table::render_report;
