pub mod chart;
pub mod chart_display;
pub mod dashboard;
pub mod error_banner;
pub mod filters_panel;

pub use chart_display::{ChartDisplay, ChartPanel};
pub use dashboard::Dashboard;
pub use filters_panel::FiltersPanel;
