//! Constructor descriptors accumulated during a compilation run.

use std::collections::{BTreeMap, HashMap};

use jsigen_graph::ClassId;

/// Descriptor recorded for every target class built, consumed by the
/// downstream stage that emits factory/registration code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    /// Type-name constant baked into the generated class.
    pub type_name_constant: String,
    /// Interop type name used to reach the runtime constructor.
    pub interop_type_name: String,
    /// Namespace string; present only for nested classes.
    pub namespace: Option<String>,
}

impl ConstructorDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(
        type_name_constant: String,
        interop_type_name: String,
        namespace: Option<String>,
    ) -> Self {
        Self {
            type_name_constant,
            interop_type_name,
            namespace,
        }
    }
}

/// Per-module descriptor lists. Each list preserves insertion order, which
/// is part of the downstream contract.
pub type DescriptorMap = BTreeMap<String, Vec<ConstructorDescriptor>>;

/// Result of a full compilation run, handed off wholesale to the emission
/// stage.
#[derive(Debug)]
pub struct BuildOutput {
    /// Schema fully-qualified name to built target class.
    pub registry: HashMap<String, ClassId>,
    /// Constructor descriptors grouped by module.
    pub descriptors: DescriptorMap,
}
