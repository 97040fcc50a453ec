//! # jsigen Model
//!
//! Schema class model consumed by the jsigen interop compiler.
//!
//! This crate provides:
//! - Class, property, and enum definitions as produced by an external schema parser
//! - Qualified type names for run-time name lookup
//! - The full schema universe with name-keyed lookup and the package/module map

pub mod classes;
pub mod enums;
pub mod model;
pub mod qname;

pub use classes::{ClassParent, PropertyDef, PropertyTarget, SchemaClass};
pub use enums::{EnumConstant, SchemaEnum};
pub use model::SchemaModel;
pub use qname::QualifiedName;
