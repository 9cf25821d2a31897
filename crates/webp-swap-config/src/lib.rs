pub mod discovery;
pub mod error;
pub mod layered;
pub mod options;
pub mod validation;

mod helpers;

// Re-export main types
pub use error::*;
pub use options::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover};
pub use validation::{ConfigValidator, SchemaValidator, validate_schema};
