//! Storage crate: local flat-JSON files for catalogs, templates, and results.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Problem, TemplateEntry, TestConfig, TestRecord
//! - [`paths`] – DataPaths (directory layout under one data root)
//! - [`catalog`] – CatalogStore (problems and tool descriptors)
//! - [`templates`] – TemplateStore (saved system/user prompt pairs)
//! - [`results`] – ResultStore (one JSON record per completed generation)
//!
//! One bad file never aborts a load: per-file I/O and decode errors are
//! logged and skipped.

mod catalog;
mod error;
mod models;
mod paths;
mod results;
mod templates;

pub use catalog::CatalogStore;
pub use error::StorageError;
pub use models::{Problem, TemplateEntry, TestConfig, TestRecord};
pub use paths::DataPaths;
pub use results::ResultStore;
pub use templates::TemplateStore;
