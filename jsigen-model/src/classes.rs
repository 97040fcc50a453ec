//! Schema class and property definitions.
//!
//! This module contains the class-shaped part of the parsed schema model:
//! classes, their placement (top-level or nested), and their properties.

use crate::qname::QualifiedName;

/// Class-shaped type definition derived from a schema.
///
/// Identity is the fully qualified schema name, which is unique across the
/// whole model and is the key the compiler memoizes on.
#[derive(Debug, Clone)]
pub struct SchemaClass {
    /// Fully qualified schema name (unique key).
    pub full_name: String,
    /// Short (unqualified) name.
    pub short_name: String,
    /// Owning package.
    pub package: String,
    /// Schema-derived base class, by fully qualified name.
    pub base_class: Option<String>,
    /// Annotation-driven base-class override naming an arbitrary runtime
    /// class. Superseded by `base_class` whenever both are present.
    pub extends_override: Option<String>,
    /// Containment parent: a package marker or an enclosing class.
    pub parent: ClassParent,
    /// Ordered property list.
    pub properties: Vec<PropertyDef>,
    /// Whether the class declares an open attribute bag.
    pub attribute_wildcard: bool,
    /// Qualified type name used for run-time name lookup, if any.
    pub type_name: Option<QualifiedName>,
}

impl SchemaClass {
    /// Creates a new top-level schema class with no properties.
    #[must_use]
    pub fn new(full_name: String, short_name: String, package: String) -> Self {
        Self {
            full_name,
            short_name,
            package,
            base_class: None,
            extends_override: None,
            parent: ClassParent::Package,
            properties: Vec::new(),
            attribute_wildcard: false,
            type_name: None,
        }
    }

    /// Adds a property to the class.
    pub fn add_property(&mut self, property: PropertyDef) {
        self.properties.push(property);
    }

    /// Returns true if the class is declared inside another class.
    #[must_use]
    pub fn has_class_parent(&self) -> bool {
        matches!(self.parent, ClassParent::Class(_))
    }
}

/// Containment parent of a schema class.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassParent {
    /// The class sits at the top level of its package.
    #[default]
    Package,
    /// The class is declared inside another class, by fully qualified name.
    Class(String),
}

impl ClassParent {
    /// Returns the enclosing class name, if the parent is a class.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Package => None,
            Self::Class(name) => Some(name),
        }
    }
}

/// Property definition within a schema class.
#[derive(Debug, Clone)]
pub struct PropertyDef {
    /// Public spelling of the property name, used in accessor names.
    pub public_name: String,
    /// Private spelling, used as the underlying runtime field name.
    pub private_name: String,
    /// Whether the property holds a collection of values.
    pub collection: bool,
    /// The type the property points at.
    pub target: PropertyTarget,
}

impl PropertyDef {
    /// Creates a new scalar property.
    #[must_use]
    pub fn new(public_name: String, private_name: String, target: PropertyTarget) -> Self {
        Self {
            public_name,
            private_name,
            collection: false,
            target,
        }
    }
}

/// Type reference carried by a property.
///
/// A property either names its type directly or goes through a wrapping
/// reference that has to be unwrapped to find the real target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyTarget {
    /// Plain value property with a declared type, when the parser resolved one.
    Value {
        /// Fully qualified or native type name.
        type_name: Option<String>,
    },
    /// Reference property wrapping element declarations.
    Reference {
        /// Declared type of the first wrapped element, if any.
        element_type: Option<String>,
        /// Base type of the reference, consulted when no element is wrapped.
        base_type: Option<String>,
    },
}

impl PropertyTarget {
    /// Creates a value target with a known type name.
    #[must_use]
    pub fn value(type_name: impl Into<String>) -> Self {
        Self::Value {
            type_name: Some(type_name.into()),
        }
    }

    /// Creates a value target whose type the parser could not determine.
    #[must_use]
    pub fn unresolved() -> Self {
        Self::Value { type_name: None }
    }

    /// Returns the effective target type name, unwrapping reference targets.
    ///
    /// For references the wrapped element type wins over the base type.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Value { type_name } => type_name.as_deref(),
            Self::Reference {
                element_type,
                base_type,
            } => element_type.as_deref().or(base_type.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_class_creation() {
        let mut class = SchemaClass::new(
            "com.example.Invoice".to_string(),
            "Invoice".to_string(),
            "com.example".to_string(),
        );
        class.add_property(PropertyDef::new(
            "Number".to_string(),
            "number".to_string(),
            PropertyTarget::value("string"),
        ));

        assert_eq!(class.full_name, "com.example.Invoice");
        assert_eq!(class.properties.len(), 1);
        assert!(!class.has_class_parent());
        assert!(!class.attribute_wildcard);
    }

    #[test]
    fn test_class_parent() {
        let parent = ClassParent::Class("com.example.Invoice".to_string());
        assert_eq!(parent.class_name(), Some("com.example.Invoice"));
        assert_eq!(ClassParent::Package.class_name(), None);
    }

    #[test]
    fn test_property_target_value() {
        let target = PropertyTarget::value("com.example.Item");
        assert_eq!(target.type_name(), Some("com.example.Item"));

        assert_eq!(PropertyTarget::unresolved().type_name(), None);
    }

    #[test]
    fn test_property_target_reference_unwrapping() {
        let target = PropertyTarget::Reference {
            element_type: Some("com.example.Item".to_string()),
            base_type: Some("com.example.Base".to_string()),
        };
        assert_eq!(target.type_name(), Some("com.example.Item"));

        let base_only = PropertyTarget::Reference {
            element_type: None,
            base_type: Some("com.example.Base".to_string()),
        };
        assert_eq!(base_only.type_name(), Some("com.example.Base"));

        let empty = PropertyTarget::Reference {
            element_type: None,
            base_type: None,
        };
        assert_eq!(empty.type_name(), None);
    }
}
