//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use jsigen::prelude::*;
//! ```

// Model types
pub use jsigen_model::{
    ClassParent, EnumConstant, PropertyDef, PropertyTarget, QualifiedName, SchemaClass, SchemaEnum,
    SchemaModel,
};

// Graph types
pub use jsigen_graph::{
    Annotation, AnnotationValue, ClassGraph, ClassId, ClassKind, GraphError, Method, Primitive,
    TargetClass, TypeRef, Visibility,
};

// Compiler entry points and outputs
pub use jsigen_codegen::{
    BuildError, BuildOptions, BuildOutput, ClassGraphBuilder, ConstructorDescriptor, DescriptorMap,
    PropertyShape, build_all,
};
