//! The full schema universe handed to the compiler.

use std::collections::HashMap;

use crate::classes::SchemaClass;
use crate::enums::SchemaEnum;

/// Complete parsed schema model.
///
/// Holds every schema class and enumeration in declaration order, with
/// name-keyed lookup maps built as entries are added, plus the read-only
/// package/module map consulted for namespace computation.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    /// Schema classes in declaration order.
    pub classes: Vec<SchemaClass>,
    /// Schema enumerations in declaration order.
    pub enums: Vec<SchemaEnum>,
    /// Package identifier to human-readable module name.
    pub package_modules: HashMap<String, String>,
    /// Class lookup map (built as classes are added).
    class_map: HashMap<String, usize>,
    /// Enum lookup map (built as enums are added).
    enum_map: HashMap<String, usize>,
}

impl SchemaModel {
    /// Creates a new empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schema class to the model.
    pub fn add_class(&mut self, class: SchemaClass) {
        let name = class.full_name.clone();
        let index = self.classes.len();
        self.classes.push(class);
        self.class_map.insert(name, index);
    }

    /// Adds a schema enumeration to the model.
    pub fn add_enum(&mut self, enum_def: SchemaEnum) {
        let name = enum_def.full_name.clone();
        let index = self.enums.len();
        self.enums.push(enum_def);
        self.enum_map.insert(name, index);
    }

    /// Maps a package identifier to a module name.
    pub fn map_package(&mut self, package: impl Into<String>, module: impl Into<String>) {
        self.package_modules.insert(package.into(), module.into());
    }

    /// Looks up a schema class by fully qualified name.
    #[must_use]
    pub fn class(&self, full_name: &str) -> Option<&SchemaClass> {
        self.class_map.get(full_name).map(|&idx| &self.classes[idx])
    }

    /// Looks up a schema enumeration by fully qualified name.
    #[must_use]
    pub fn enum_def(&self, full_name: &str) -> Option<&SchemaEnum> {
        self.enum_map.get(full_name).map(|&idx| &self.enums[idx])
    }

    /// Returns true if a class with the given name exists.
    #[must_use]
    pub fn has_class(&self, full_name: &str) -> bool {
        self.class_map.contains_key(full_name)
    }

    /// Returns true if an enumeration with the given name exists.
    #[must_use]
    pub fn has_enum(&self, full_name: &str) -> bool {
        self.enum_map.contains_key(full_name)
    }

    /// Returns the module name mapped to a package, if any.
    #[must_use]
    pub fn module_name(&self, package: &str) -> Option<&str> {
        self.package_modules.get(package).map(String::as_str)
    }
}
