//! Error types for interop model compilation.

use jsigen_graph::GraphError;
use thiserror::Error;

/// Error type for class graph compilation.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A referenced type name could not be resolved anywhere: not as a
    /// native type, not in the schema class set, not in the schema enum
    /// set. Fatal; the run must not emit a partially-typed graph.
    #[error("failed to resolve type '{type_name}' referenced by '{owner}'")]
    UnresolvedType {
        /// The unresolved type name.
        type_name: String,
        /// Fully qualified name of the schema class that referenced it.
        owner: String,
    },

    /// Class graph construction error.
    #[error("class graph error: {0}")]
    Graph(#[from] GraphError),
}

impl BuildError {
    /// Creates an unresolved type error.
    pub fn unresolved(type_name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::UnresolvedType {
            type_name: type_name.into(),
            owner: owner.into(),
        }
    }
}
