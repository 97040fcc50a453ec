//! # jsigen
//!
//! Compiler from an already-parsed schema class model to an isomorphic
//! target class graph decorated for JS-interop code generation.
//!
//! The input model describes classes, properties, inheritance, enums, and
//! namespace placement as produced by an external schema parser. The
//! output is a class graph whose members carry the metadata and accessor
//! shapes a host runtime with only primitives, arrays, and opaque objects
//! can work with.
//!
//! ## Quick Start
//!
//! ```
//! use jsigen::prelude::*;
//!
//! let mut model = SchemaModel::new();
//! model.map_package("com.example", "EXAMPLE");
//! model.add_class(SchemaClass::new(
//!     "com.example.Invoice".to_string(),
//!     "Invoice".to_string(),
//!     "com.example".to_string(),
//! ));
//!
//! let mut graph = ClassGraph::new();
//! let output = build_all(&model, &mut graph, BuildOptions::default())?;
//! assert!(output.registry.contains_key("com.example.Invoice"));
//! # Ok::<(), jsigen::codegen::BuildError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Input schema class model
//! - [`graph`] - Target class graph construction primitives
//! - [`codegen`] - The compiler itself

pub mod prelude;

/// Input schema class model.
pub mod model {
    pub use jsigen_model::*;
}

/// Target class graph primitives.
pub mod graph {
    pub use jsigen_graph::*;
}

/// Compilation of schema models into target class graphs.
pub mod codegen {
    pub use jsigen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use jsigen_codegen::{BuildError, BuildOptions, BuildOutput, build_all};
pub use jsigen_graph::{ClassGraph, ClassId, TargetClass, TypeRef};
pub use jsigen_model::{SchemaClass, SchemaEnum, SchemaModel};
