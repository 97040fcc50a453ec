//! # jsigen Codegen
//!
//! Compilation of parsed schema class models into decorated target class
//! graphs for JS-interop code generation.
//!
//! This crate provides:
//! - The graph builder orchestrating memoized, cycle-safe class builds
//! - Inheritance and containment/namespace resolution
//! - Property materialization with shape-specific accessor emission
//! - Enumeration materialization
//! - Per-module constructor descriptors for downstream factory emission

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod property;

mod enums;
mod inheritance;
mod placement;

pub use builder::{BuildOptions, ClassGraphBuilder, build_all};
pub use descriptor::{BuildOutput, ConstructorDescriptor, DescriptorMap};
pub use error::BuildError;
pub use property::PropertyShape;
