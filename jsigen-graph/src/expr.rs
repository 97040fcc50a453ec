//! Annotations and the expression model for generated member bodies.

use crate::types::TypeRef;

/// Annotation with named parameters, attached to classes, fields, or methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Annotation name.
    pub name: String,
    /// Named parameters in declaration order.
    pub params: Vec<(String, AnnotationValue)>,
}

impl Annotation {
    /// Creates a new annotation with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Adds a named parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.params.push((name.into(), value));
        self
    }

    /// Returns the value of a named parameter, if present.
    #[must_use]
    pub fn param_value(&self, name: &str) -> Option<&AnnotationValue> {
        self.params
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value)
    }
}

/// Annotation parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    /// String literal.
    Str(String),
    /// Boolean literal.
    Bool(bool),
    /// The process-wide global namespace marker.
    GlobalNamespace,
}

/// Expression within a generated member body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// String literal.
    Str(String),
    /// The receiver.
    This,
    /// Reference to a local variable or parameter.
    Var(String),
    /// Field access on a target expression.
    FieldRef {
        /// Target expression; `None` for an unqualified reference.
        target: Option<Box<Expr>>,
        /// Field name.
        name: String,
    },
    /// Construction of a new instance.
    New(TypeRef),
    /// Instance method call.
    Call {
        /// Receiver expression.
        target: Box<Expr>,
        /// Method name.
        method: String,
        /// Arguments.
        args: Vec<Expr>,
    },
    /// Static method call on a class.
    StaticCall {
        /// Class owning the method.
        class: TypeRef,
        /// Method name.
        method: String,
        /// Arguments.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Creates a string literal expression.
    #[must_use]
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Creates a variable reference.
    #[must_use]
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Creates an instance method call on this expression.
    #[must_use]
    pub fn call(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Call {
            target: Box::new(self),
            method: method.into(),
            args,
        }
    }

    /// Creates a static method call.
    #[must_use]
    pub fn static_call(class: TypeRef, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::StaticCall {
            class,
            method: method.into(),
            args,
        }
    }
}

/// Statement within a generated member body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Local variable declaration with initializer.
    Decl {
        /// Variable name.
        name: String,
        /// Variable type.
        ty: TypeRef,
        /// Initializer expression.
        init: Expr,
    },
    /// Assignment.
    Assign {
        /// Assignment target.
        target: Expr,
        /// Assigned value.
        value: Expr,
    },
    /// Bare expression statement.
    Expr(Expr),
    /// Return statement.
    Return(Expr),
}
