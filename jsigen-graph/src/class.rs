//! Target class members: fields, methods, constructors, enum constants.

use crate::expr::{Annotation, Expr, Stmt};
use crate::graph::ClassId;
use crate::types::TypeRef;

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Public member.
    #[default]
    Public,
    /// Package-private member.
    Package,
    /// Private member.
    Private,
}

/// Kind of a target class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// Ordinary class.
    Class,
    /// Enumeration.
    Enum,
}

/// Field of a target class.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: TypeRef,
    /// Visibility.
    pub visibility: Visibility,
    /// Static modifier.
    pub is_static: bool,
    /// Final modifier.
    pub is_final: bool,
    /// Initializer expression, if any.
    pub init: Option<Expr>,
    /// Annotations on the field.
    pub annotations: Vec<Annotation>,
}

impl Field {
    /// Creates a public non-static field with no initializer.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            init: None,
            annotations: Vec::new(),
        }
    }
}

/// Method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

impl Param {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Method of a target class.
#[derive(Debug, Clone)]
pub struct Method {
    /// Method name.
    pub name: String,
    /// Return type; `None` for void.
    pub return_type: Option<TypeRef>,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    /// Visibility.
    pub visibility: Visibility,
    /// Static modifier.
    pub is_static: bool,
    /// Final modifier.
    pub is_final: bool,
    /// Whether the method is a bodiless native member of the host runtime.
    pub is_native: bool,
    /// Body statements; empty for native members.
    pub body: Vec<Stmt>,
    /// Annotations on the method.
    pub annotations: Vec<Annotation>,
    /// Doc comment, if any.
    pub doc: Option<String>,
}

impl Method {
    /// Creates a public instance method with an empty body.
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: Option<TypeRef>) -> Self {
        Self {
            name: name.into(),
            return_type,
            params: Vec::new(),
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
            is_native: false,
            body: Vec::new(),
            annotations: Vec::new(),
            doc: None,
        }
    }
}

/// Constructor of a target class.
#[derive(Debug, Clone)]
pub struct Constructor {
    /// Visibility.
    pub visibility: Visibility,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    /// Body statements.
    pub body: Vec<Stmt>,
}

/// Enum constant of a target enumeration.
#[derive(Debug, Clone)]
pub struct EnumConstantDef {
    /// Constant name.
    pub name: String,
    /// Constructor arguments, if the enumeration carries a value field.
    pub args: Vec<Expr>,
}

/// Class in the target graph, decorated while the compiler builds it.
///
/// Identity is the fully qualified interop name, unique within the graph.
#[derive(Debug, Clone)]
pub struct TargetClass {
    /// Fully qualified interop name.
    pub full_name: String,
    /// Short name.
    pub short_name: String,
    /// Owning package.
    pub package: String,
    /// Class or enumeration.
    pub kind: ClassKind,
    /// Base class reference, if the class extends one.
    pub base: Option<TypeRef>,
    /// Enclosing class for nested classes.
    pub outer: Option<ClassId>,
    /// Doc comment, if any.
    pub doc: Option<String>,
    /// Annotations on the class.
    pub annotations: Vec<Annotation>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Constructors in declaration order.
    pub constructors: Vec<Constructor>,
    /// Methods in declaration order.
    pub methods: Vec<Method>,
    /// Enum constants, for enumerations.
    pub enum_constants: Vec<EnumConstantDef>,
}

impl TargetClass {
    pub(crate) fn new(
        full_name: String,
        short_name: String,
        package: String,
        kind: ClassKind,
    ) -> Self {
        Self {
            full_name,
            short_name,
            package,
            kind,
            base: None,
            outer: None,
            doc: None,
            annotations: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            enum_constants: Vec::new(),
        }
    }

    /// Adds an annotation to the class.
    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Adds a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Adds a method.
    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// Adds a constructor.
    pub fn add_constructor(&mut self, constructor: Constructor) {
        self.constructors.push(constructor);
    }

    /// Adds an enum constant.
    pub fn add_enum_constant(&mut self, constant: EnumConstantDef) {
        self.enum_constants.push(constant);
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }

    /// Returns true if a method with the given name exists.
    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }

    /// Looks up a class annotation by name.
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations
            .iter()
            .find(|annotation| annotation.name == name)
    }
}
