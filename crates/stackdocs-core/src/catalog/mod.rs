//! Service catalog discovery
//!
//! The catalog is the shared, read-only data source for every generator:
//! a walk of the service-definition tree produces a name-keyed map of
//! [`ServiceDefinition`] values, each already carrying its derived
//! category. The catalog is computed once per run and never mutated.

pub mod error;
pub mod loader;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use loader::{category_from_path, Catalog, CatalogLoader, Format, DEFAULT_ANCHOR, OTHER_CATEGORY};
pub use service::{DocExample, PortMapping, ServiceDefinition, ServiceDocs, WebInterface};
