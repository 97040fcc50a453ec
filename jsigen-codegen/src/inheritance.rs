//! Base type resolution.

use jsigen_graph::{TypeRef, native_ref};
use jsigen_model::SchemaClass;

use crate::builder::ClassGraphBuilder;
use crate::error::BuildError;

impl ClassGraphBuilder<'_> {
    /// Determines the base type of a schema class, if any.
    ///
    /// The explicit extends override is consulted first, but a genuine
    /// schema-derived base class overwrites it whenever both are present:
    /// customization hints are advisory and structural schema inheritance
    /// wins. An unregistered schema base class is built recursively before
    /// being returned.
    ///
    /// # Errors
    /// Returns [`BuildError::UnresolvedType`] if the schema base class is
    /// not part of the model, or propagates any failure from building it.
    pub(crate) fn resolve_base(
        &mut self,
        class: &SchemaClass,
    ) -> Result<Option<TypeRef>, BuildError> {
        let mut base = class
            .extends_override
            .as_deref()
            .map(|name| self.parse_type_name(name));
        if let Some(base_name) = class.base_class.as_deref() {
            let base_class = self
                .model
                .class(base_name)
                .ok_or_else(|| BuildError::unresolved(base_name, &class.full_name))?;
            let id = self.build_class(base_class)?;
            base = Some(TypeRef::Class(id));
        }
        Ok(base)
    }

    /// Generic type-name parser used for the extends override.
    ///
    /// An already-built class wins, then a well-known native type; anything
    /// else is referenced as an external runtime class by name.
    pub(crate) fn parse_type_name(&self, name: &str) -> TypeRef {
        if let Some(&id) = self.registry.get(name) {
            return TypeRef::Class(id);
        }
        if let Some(native) = native_ref(name, false) {
            return native;
        }
        TypeRef::Named(name.to_string())
    }
}
