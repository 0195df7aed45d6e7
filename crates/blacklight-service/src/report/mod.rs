//! Admin reporting.

pub mod dashboard;

pub use dashboard::{DashboardService, DashboardSummary};
