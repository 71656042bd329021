//! Reports for farmdesk
//!
//! Each report is generated from the store, rendered for the terminal, and
//! where it makes sense exported to CSV.

pub mod dashboard;
pub mod expenses;

pub use dashboard::DashboardReport;
pub use expenses::ExpenseReport;
