//! Error types for class graph construction.

use thiserror::Error;

/// Error type for class graph operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A class with the same fully qualified interop name already exists.
    #[error("class '{name}' is already defined in the graph")]
    ClassExists {
        /// Fully qualified interop name.
        name: String,
    },
}

impl GraphError {
    /// Creates a duplicate class error.
    pub fn class_exists(name: impl Into<String>) -> Self {
        Self::ClassExists { name: name.into() }
    }
}
