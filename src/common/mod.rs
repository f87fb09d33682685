// Common module - shared types and content guards used by every domain module

pub mod content;
pub mod validation;

// Re-export commonly used types for convenience
pub use validation::{FieldResult, FieldValue, FormData, FormValidationResult};
