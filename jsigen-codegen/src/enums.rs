//! Enumeration materialization.

use jsigen_graph::{
    Annotation, AnnotationValue, ClassId, Constructor, EnumConstantDef, Expr, Field, Method, Param,
    Stmt, TargetClass, TypeRef, Visibility,
};
use jsigen_model::SchemaEnum;

use crate::builder::ClassGraphBuilder;
use crate::error::BuildError;

impl ClassGraphBuilder<'_> {
    /// Builds the target enumeration for a schema enum.
    ///
    /// One constant is emitted per schema constant; when the enumeration
    /// needs a value field, each constant carries its lexical value as a
    /// constructor argument and the value field, constructor, and getter
    /// are added.
    ///
    /// The operation is unconditional: callers consult the registry before
    /// invoking it, mirroring the idempotency contract of class builds.
    ///
    /// # Errors
    /// Returns [`BuildError`] if the interop name is already defined.
    pub fn build_enum(&mut self, enum_def: &SchemaEnum) -> Result<ClassId, BuildError> {
        tracing::debug!(enum_name = %enum_def.full_name, "building target enum");
        let full_name = format!(
            "{}.{}{}",
            enum_def.package, self.options.class_prefix, enum_def.short_name
        );
        let id = self.graph.new_enum(&full_name)?;
        {
            let class = self.graph.class_mut(id);
            class.doc = Some(format!("Interop adapter for `{}`", enum_def.short_name));
            class.annotate(
                Annotation::new("JsType")
                    .param("name", AnnotationValue::Str(enum_def.short_name.clone())),
            );
        }
        self.registry.insert(enum_def.full_name.clone(), id);

        let class = self.graph.class_mut(id);
        for constant in &enum_def.constants {
            let args = if enum_def.needs_value_field {
                vec![Expr::str(constant.lexical_value.as_str())]
            } else {
                Vec::new()
            };
            class.add_enum_constant(EnumConstantDef {
                name: constant.name.clone(),
                args,
            });
        }
        if enum_def.needs_value_field {
            add_value_field(class);
        }
        Ok(id)
    }
}

/// Private value field, assigning constructor, and getter for enumerations
/// whose constant names are not literally usable as values.
fn add_value_field(class: &mut TargetClass) {
    let mut field = Field::new("value", TypeRef::String);
    field.visibility = Visibility::Private;
    field.is_final = true;
    class.add_field(field);

    class.add_constructor(Constructor {
        visibility: Visibility::Package,
        params: vec![Param::new("value", TypeRef::String)],
        body: vec![Stmt::Assign {
            target: Expr::FieldRef {
                target: Some(Box::new(Expr::This)),
                name: "value".to_string(),
            },
            value: Expr::var("value"),
        }],
    });

    let mut getter = Method::new("value", Some(TypeRef::String));
    getter.body.push(Stmt::Return(Expr::FieldRef {
        target: Some(Box::new(Expr::This)),
        name: "value".to_string(),
    }));
    class.add_method(getter);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BuildOptions, ClassGraphBuilder};
    use jsigen_graph::{ClassGraph, ClassKind};
    use jsigen_model::{EnumConstant, SchemaModel};

    fn fixture_enum(needs_value_field: bool) -> SchemaEnum {
        let mut status = SchemaEnum::new(
            "com.example.Status".to_string(),
            "Status".to_string(),
            "com.example".to_string(),
        );
        status.add_constant(EnumConstant::new("OPEN".to_string(), "open".to_string()));
        status.add_constant(EnumConstant::new("CLOSED".to_string(), "closed".to_string()));
        status.needs_value_field = needs_value_field;
        status
    }

    #[test]
    fn test_plain_enum_has_no_value_field() {
        let model = SchemaModel::new();
        let mut graph = ClassGraph::new();
        let mut builder = ClassGraphBuilder::new(&model, &mut graph, BuildOptions::default());

        let id = builder.build_enum(&fixture_enum(false)).expect("build");
        let class = graph.class(id);

        assert_eq!(class.kind, ClassKind::Enum);
        assert_eq!(class.full_name, "com.example.JSIStatus");
        assert_eq!(class.enum_constants.len(), 2);
        assert!(class.enum_constants.iter().all(|c| c.args.is_empty()));
        assert!(class.field("value").is_none());
        assert!(class.constructors.is_empty());
        assert!(!class.has_method("value"));
    }

    #[test]
    fn test_value_field_gating() {
        let model = SchemaModel::new();
        let mut graph = ClassGraph::new();
        let mut builder = ClassGraphBuilder::new(&model, &mut graph, BuildOptions::default());

        let id = builder.build_enum(&fixture_enum(true)).expect("build");
        let class = graph.class(id);

        assert_eq!(class.enum_constants[0].args, vec![Expr::str("open")]);
        assert_eq!(class.enum_constants[1].args, vec![Expr::str("closed")]);

        let field = class.field("value").expect("value field");
        assert_eq!(field.visibility, Visibility::Private);
        assert!(field.is_final);

        assert_eq!(class.constructors.len(), 1);
        assert_eq!(class.constructors[0].visibility, Visibility::Package);
        assert!(class.has_method("value"));
    }

    #[test]
    fn test_enum_annotation_uses_short_name() {
        let model = SchemaModel::new();
        let mut graph = ClassGraph::new();
        let mut builder = ClassGraphBuilder::new(&model, &mut graph, BuildOptions::default());

        let id = builder.build_enum(&fixture_enum(false)).expect("build");
        let class = graph.class(id);

        let js_type = class.annotation("JsType").expect("JsType annotation");
        assert_eq!(
            js_type.param_value("name"),
            Some(&AnnotationValue::Str("Status".to_string()))
        );
    }

    #[test]
    fn test_enum_is_registered() {
        let model = SchemaModel::new();
        let mut graph = ClassGraph::new();
        let mut builder = ClassGraphBuilder::new(&model, &mut graph, BuildOptions::default());

        let id = builder.build_enum(&fixture_enum(false)).expect("build");
        assert_eq!(builder.registry().get("com.example.Status"), Some(&id));
    }
}
