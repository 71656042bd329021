//! farmdesk - farm-management dashboard core
//!
//! This library holds the data and analytics behind a small farm dashboard:
//! farms, crops, field tasks and expenses kept in an in-memory store, with
//! date-based classification of tasks and crops and aggregation of expenses
//! into chart-ready series.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `analytics`: Temporal classification, expense sanitising and aggregation
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (farms, crops, tasks, expenses)
//! - `storage`: In-memory repositories and the JSON seed file
//! - `services`: CRUD layer over the store
//! - `display`: Terminal formatting helpers
//! - `reports`: Dashboard and expense reports
//! - `cli`: Command handlers for the `farmdesk` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use farmdesk::analytics::ExpenseAggregator;
//! use farmdesk::storage::{SeedData, Store};
//!
//! let store = Store::with_seed(SeedData::load("seed.json")?)?;
//! let aggregator = ExpenseAggregator::from_expenses(&store.expenses.get_all()?);
//! println!("{}", aggregator.total());
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FarmdeskError, FarmdeskResult};
