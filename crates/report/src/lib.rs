//! `grocer-report` — loads product data, validates it and renders the report.

pub mod config;
pub mod loader;
pub mod report;

pub use config::ReportConfig;
pub use loader::{load_products, parse_products_json, LoadError};
pub use report::Report;
