// Modules
pub mod config;
pub mod data;
pub mod drift;
pub mod errors;
pub mod pipeline;
pub mod schema;
pub mod validation;

// Individual classes, and functions
pub use config::DataValidationConfig;
pub use data::Frame;
pub use drift::{DriftDetector, DriftReport};
pub use errors::DriftwatchError;
pub use pipeline::{DataValidator, ValidationArtifact};
pub use schema::DatasetSchema;
