//! Identity-keyed arena of target classes.

use std::collections::HashMap;

use crate::class::{ClassKind, TargetClass};
use crate::error::GraphError;

/// Handle to a class stored in a [`ClassGraph`].
///
/// Ids are only ever issued by the owning graph, so indexing with one
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(usize);

/// Arena holding every target class built during a compilation run.
///
/// Creation is identity-checked: defining two classes with the same fully
/// qualified interop name is an error, which is what lets callers rely on
/// "create once, reference many times".
#[derive(Debug, Default)]
pub struct ClassGraph {
    classes: Vec<TargetClass>,
    name_map: HashMap<String, ClassId>,
}

impl ClassGraph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a new top-level class.
    ///
    /// The short name and package are split off the last `.` segment of
    /// `full_name`.
    ///
    /// # Errors
    /// Returns [`GraphError::ClassExists`] if the name is already defined.
    pub fn new_class(&mut self, full_name: &str) -> Result<ClassId, GraphError> {
        self.insert(full_name.to_string(), ClassKind::Class, None)
    }

    /// Defines a new top-level enumeration.
    ///
    /// # Errors
    /// Returns [`GraphError::ClassExists`] if the name is already defined.
    pub fn new_enum(&mut self, full_name: &str) -> Result<ClassId, GraphError> {
        self.insert(full_name.to_string(), ClassKind::Enum, None)
    }

    /// Defines a new class nested inside an already-defined one.
    ///
    /// The nested class lives in its parent's package and its fully
    /// qualified interop name is `<parent>.<short_name>`.
    ///
    /// # Errors
    /// Returns [`GraphError::ClassExists`] if the name is already defined.
    pub fn new_nested_class(
        &mut self,
        outer: ClassId,
        short_name: &str,
    ) -> Result<ClassId, GraphError> {
        let full_name = format!("{}.{}", self.class(outer).full_name, short_name);
        self.insert(full_name, ClassKind::Class, Some(outer))
    }

    fn insert(
        &mut self,
        full_name: String,
        kind: ClassKind,
        outer: Option<ClassId>,
    ) -> Result<ClassId, GraphError> {
        if self.name_map.contains_key(&full_name) {
            return Err(GraphError::class_exists(full_name));
        }
        let (package, short_name) = match outer {
            Some(outer_id) => {
                let package = self.class(outer_id).package.clone();
                let short = full_name
                    .rsplit('.')
                    .next()
                    .unwrap_or(full_name.as_str())
                    .to_string();
                (package, short)
            }
            None => split_full_name(&full_name),
        };
        let id = ClassId(self.classes.len());
        let mut class = TargetClass::new(full_name.clone(), short_name, package, kind);
        class.outer = outer;
        self.classes.push(class);
        self.name_map.insert(full_name, id);
        Ok(id)
    }

    /// Returns the class for an id.
    #[must_use]
    pub fn class(&self, id: ClassId) -> &TargetClass {
        &self.classes[id.0]
    }

    /// Returns the class for an id, mutably.
    #[must_use]
    pub fn class_mut(&mut self, id: ClassId) -> &mut TargetClass {
        &mut self.classes[id.0]
    }

    /// Looks up a class id by fully qualified interop name.
    #[must_use]
    pub fn find(&self, full_name: &str) -> Option<ClassId> {
        self.name_map.get(full_name).copied()
    }

    /// Returns true if a class with the given interop name is defined.
    #[must_use]
    pub fn contains(&self, full_name: &str) -> bool {
        self.name_map.contains_key(full_name)
    }

    /// Number of classes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the graph holds no classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates over all classes with their ids, in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &TargetClass)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(idx, class)| (ClassId(idx), class))
    }
}

/// Splits a fully qualified name into package and short name.
fn split_full_name(full_name: &str) -> (String, String) {
    match full_name.rsplit_once('.') {
        Some((package, short)) => (package.to_string(), short.to_string()),
        None => (String::new(), full_name.to_string()),
    }
}
