pub mod catalog;
pub mod chart;
pub mod dashboard;
pub mod error;
