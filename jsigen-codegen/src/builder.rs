//! Graph builder orchestrating the compilation of schema classes into
//! decorated target classes.
//!
//! The builder owns the registry that memoizes every build by schema
//! fully-qualified name. A class is registered as soon as its identity and
//! namespace are known, before its properties are materialized; that
//! ordering is the only thing preventing infinite recursion on cyclic
//! schema references.

use std::collections::HashMap;

use jsigen_graph::{
    Annotation, AnnotationValue, ClassGraph, ClassId, Expr, Field, Method, Param, Primitive, Stmt,
    TypeRef,
};
use jsigen_model::{QualifiedName, SchemaClass, SchemaModel};

use crate::descriptor::{BuildOutput, ConstructorDescriptor, DescriptorMap};
use crate::error::BuildError;
use crate::placement::{Placement, interop_type_name};
use crate::property::{add_native_getter, add_native_setter};

/// Options steering class naming and the runtime support classes.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Prefix prepended to every generated class name.
    pub class_prefix: String,
    /// Runtime utility class providing type-tag and collection helpers.
    pub utils_class: String,
    /// Runtime record class carrying a qualified name.
    pub name_class: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            class_prefix: "JSI".to_string(),
            utils_class: "JsUtils".to_string(),
            name_class: "JSIName".to_string(),
        }
    }
}

/// Compiles every class of the model into the target graph.
///
/// Classes are visited in declaration order; classes already materialized
/// through recursion are skipped by the registry fast path.
///
/// # Errors
/// Returns [`BuildError`] on the first unresolvable type reference; no
/// partial output is handed back.
pub fn build_all(
    model: &SchemaModel,
    graph: &mut ClassGraph,
    options: BuildOptions,
) -> Result<BuildOutput, BuildError> {
    tracing::debug!("generating interop class graph");
    let mut builder = ClassGraphBuilder::new(model, graph, options);
    for class in &model.classes {
        builder.build_class(class)?;
    }
    Ok(builder.finish())
}

/// Builder for the target class graph of one compilation run.
pub struct ClassGraphBuilder<'a> {
    pub(crate) model: &'a SchemaModel,
    pub(crate) graph: &'a mut ClassGraph,
    pub(crate) options: BuildOptions,
    /// Schema fully-qualified name to already-built target class. Fresh per
    /// run; the single source of truth for "has this node been visited".
    pub(crate) registry: HashMap<String, ClassId>,
    descriptors: DescriptorMap,
}

impl<'a> ClassGraphBuilder<'a> {
    /// Creates a builder with an empty registry.
    pub fn new(model: &'a SchemaModel, graph: &'a mut ClassGraph, options: BuildOptions) -> Self {
        Self {
            model,
            graph,
            options,
            registry: HashMap::new(),
            descriptors: DescriptorMap::new(),
        }
    }

    /// Returns the registry of builds completed so far.
    #[must_use]
    pub fn registry(&self) -> &HashMap<String, ClassId> {
        &self.registry
    }

    /// Consumes the builder, handing back registry and descriptors.
    #[must_use]
    pub fn finish(self) -> BuildOutput {
        BuildOutput {
            registry: self.registry,
            descriptors: self.descriptors,
        }
    }

    /// Builds the target class for a schema class.
    ///
    /// Idempotent on identity: if the schema name is already registered the
    /// existing class is returned without any re-decoration.
    ///
    /// # Errors
    /// Returns [`BuildError`] if a referenced type cannot be resolved or a
    /// duplicate interop name is defined.
    pub fn build_class(&mut self, class: &SchemaClass) -> Result<ClassId, BuildError> {
        if let Some(&existing) = self.registry.get(&class.full_name) {
            return Ok(existing);
        }
        tracing::debug!(class = %class.full_name, "building target class");

        let base = self.resolve_base(class)?;
        let placement = self.resolve_placement(class);

        let (id, module_name, namespace, interop_name, parent_short_name) = match placement {
            Placement::Nested {
                parent,
                parent_short_name,
            } => {
                let nested_short = format!("{}{}", self.options.class_prefix, class.short_name);
                let id = self.graph.new_nested_class(parent, &nested_short)?;
                let (parent_package, parent_full) = {
                    let parent_class = self.graph.class(parent);
                    (parent_class.package.clone(), parent_class.full_name.clone())
                };
                let module = self.model.module_name(&parent_package).map(str::to_string);
                let namespace =
                    interop_type_name(module.as_deref(), &parent_package, &parent_full);
                (
                    id,
                    module,
                    Some(namespace),
                    class.short_name.clone(),
                    Some(parent_short_name),
                )
            }
            Placement::TopLevel { full_name } => {
                let id = self.graph.new_class(&full_name)?;
                let module = self.model.module_name(&class.package).map(str::to_string);
                let interop = interop_type_name(module.as_deref(), &class.package, &full_name);
                (id, module, None, interop, None)
            }
        };
        if let Some(base) = base {
            self.graph.class_mut(id).base = Some(base);
        }

        // Register before materializing properties: a property typed as the
        // enclosing class (or an ancestor in a reference cycle) must find
        // this entry instead of recursing forever.
        self.registry.insert(class.full_name.clone(), id);

        self.graph.class_mut(id).doc = Some(format!("Interop adapter for `{}`", class.short_name));
        let namespace_value = match &namespace {
            Some(ns) => AnnotationValue::Str(ns.clone()),
            None => AnnotationValue::GlobalNamespace,
        };
        self.graph.class_mut(id).annotate(
            Annotation::new("JsType")
                .param("namespace", namespace_value)
                .param("name", AnnotationValue::Str("Object".to_string()))
                .param("isNative", AnnotationValue::Bool(true)),
        );

        let type_name_constant = [
            module_name.as_deref(),
            parent_short_name.as_deref(),
            Some(class.short_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(".");

        self.descriptors
            .entry(module_name.unwrap_or_default())
            .or_default()
            .push(ConstructorDescriptor::new(
                type_name_constant.clone(),
                interop_name,
                namespace,
            ));

        self.add_type_constant(id, &type_name_constant);
        self.add_instance_of(id);
        if let Some(type_name) = &class.type_name {
            self.add_qualified_name_getter(id, type_name);
        }
        self.add_type_name_accessor(id);

        for property in &class.properties {
            self.add_property(id, class, property)?;
        }
        if class.attribute_wildcard {
            self.add_other_attributes(id);
        }
        Ok(id)
    }

    pub(crate) fn utils_ref(&self) -> TypeRef {
        TypeRef::Named(self.options.utils_class.clone())
    }

    /// Public static final string constant carrying the type tag.
    fn add_type_constant(&mut self, id: ClassId, value: &str) {
        let mut field = Field::new("TYPE", TypeRef::String);
        field.is_static = true;
        field.is_final = true;
        field.init = Some(Expr::str(value));
        field.annotations.push(Annotation::new("JsOverlay"));
        self.graph.class_mut(id).add_field(field);
    }

    /// Static predicate comparing the runtime type tag with the `TYPE`
    /// constant.
    fn add_instance_of(&mut self, id: ClassId) {
        let utils = self.utils_ref();
        let mut method = Method::new("instanceOf", Some(TypeRef::Primitive(Primitive::Boolean)));
        method.is_static = true;
        method.params.push(Param::new("instance", TypeRef::Object));
        method.annotations.push(Annotation::new("JsOverlay"));
        method.body.push(Stmt::Return(
            Expr::FieldRef {
                target: None,
                name: "TYPE".to_string(),
            }
            .call(
                "equals",
                vec![Expr::static_call(
                    utils,
                    "getTypeName",
                    vec![Expr::var("instance")],
                )],
            ),
        ));
        self.graph.class_mut(id).add_method(method);
    }

    /// Static accessor building the qualified name record on demand.
    fn add_qualified_name_getter(&mut self, id: ClassId, type_name: &QualifiedName) {
        tracing::debug!(
            class = %self.graph.class(id).full_name,
            "adding qualified name accessor"
        );
        let name_class = TypeRef::Named(self.options.name_class.clone());
        let mut method = Method::new("getJSIName", Some(name_class.clone()));
        method.is_static = true;
        method.annotations.push(Annotation::new("JsOverlay"));
        method.doc = Some(format!("Getter for the specific `{}`", self.options.name_class));

        let to_return = Expr::var("toReturn");
        let prefix = type_name.prefix.clone().unwrap_or_default();
        method.body.push(Stmt::Decl {
            name: "toReturn".to_string(),
            ty: name_class.clone(),
            init: Expr::New(name_class),
        });
        method.body.push(Stmt::Expr(to_return.clone().call(
            "setNamespaceURI",
            vec![Expr::str(type_name.namespace_uri.as_str())],
        )));
        method.body.push(Stmt::Expr(to_return.clone().call(
            "setLocalPart",
            vec![Expr::str(type_name.local_part.as_str())],
        )));
        method
            .body
            .push(Stmt::Expr(to_return.clone().call("setPrefix", vec![Expr::str(prefix)])));
        method.body.push(Stmt::Expr(
            to_return
                .clone()
                .call("setKey", vec![Expr::str(type_name.key())]),
        ));
        method.body.push(Stmt::Expr(to_return.clone().call(
            "setString",
            vec![Expr::str(type_name.composite_string())],
        )));
        method.body.push(Stmt::Return(to_return));
        self.graph.class_mut(id).add_method(method);
    }

    /// Native getter bound to the conventional `TYPE_NAME` runtime field.
    fn add_type_name_accessor(&mut self, id: ClassId) {
        add_native_getter(
            self.graph.class_mut(id),
            TypeRef::String,
            "TYPE_NAME",
            "TYPE_NAME",
        );
    }

    /// Wildcard-attributes accessor pair plus the static helper extracting
    /// the bag from an instance in normalized key/value form.
    fn add_other_attributes(&mut self, id: ClassId) {
        tracing::debug!(
            class = %self.graph.class(id).full_name,
            "adding attribute wildcard accessors"
        );
        let utils = self.utils_ref();
        let class = self.graph.class_mut(id);
        add_native_getter(class, TypeRef::AttributeMap, "OtherAttributes", "otherAttributes");
        add_native_setter(class, TypeRef::AttributeMap, "OtherAttributes", "otherAttributes");

        let mut method = Method::new("getOtherAttributesMap", Some(TypeRef::AttributeMap));
        method.is_static = true;
        method.params.push(Param::new("instance", TypeRef::Class(id)));
        method.annotations.push(Annotation::new("JsOverlay"));
        method.body.push(Stmt::Return(Expr::static_call(
            utils,
            "toAttributesMap",
            vec![Expr::var("instance").call("getOtherAttributes", vec![])],
        )));
        class.add_method(method);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsigen_graph::AnnotationValue;
    use jsigen_model::{ClassParent, QualifiedName};

    fn fixture_class(short_name: &str) -> SchemaClass {
        SchemaClass::new(
            format!("com.example.{short_name}"),
            short_name.to_string(),
            "com.example".to_string(),
        )
    }

    fn fixture_model(classes: Vec<SchemaClass>) -> SchemaModel {
        let mut model = SchemaModel::new();
        model.map_package("com.example", "EXAMPLE");
        for class in classes {
            model.add_class(class);
        }
        model
    }

    #[test]
    fn test_idempotent_registration() {
        let model = fixture_model(vec![fixture_class("Invoice")]);
        let mut graph = ClassGraph::new();
        let mut builder = ClassGraphBuilder::new(&model, &mut graph, BuildOptions::default());

        let class = model.class("com.example.Invoice").expect("class");
        let first = builder.build_class(class).expect("first build");
        let second = builder.build_class(class).expect("second build");

        assert_eq!(first, second);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_decoration_set() {
        let mut invoice = fixture_class("Invoice");
        invoice.type_name = Some(QualifiedName::with_prefix(
            "http://example.com/ns".to_string(),
            "invoice".to_string(),
            "ex".to_string(),
        ));
        let model = fixture_model(vec![invoice]);
        let mut graph = ClassGraph::new();
        let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");

        let id = output.registry["com.example.Invoice"];
        let class = graph.class(id);
        assert_eq!(class.full_name, "com.example.JSIInvoice");

        let type_field = class.field("TYPE").expect("TYPE constant");
        assert!(type_field.is_static && type_field.is_final);
        assert_eq!(type_field.init, Some(Expr::str("EXAMPLE.Invoice")));

        assert!(class.has_method("instanceOf"));
        assert!(class.has_method("getTYPE_NAME"));
        assert!(class.has_method("getJSIName"));

        let js_type = class.annotation("JsType").expect("JsType annotation");
        assert_eq!(
            js_type.param_value("namespace"),
            Some(&AnnotationValue::GlobalNamespace)
        );
        assert_eq!(
            js_type.param_value("isNative"),
            Some(&AnnotationValue::Bool(true))
        );
    }

    #[test]
    fn test_qualified_name_accessor_is_gated() {
        let model = fixture_model(vec![fixture_class("Invoice")]);
        let mut graph = ClassGraph::new();
        let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");

        let class = graph.class(output.registry["com.example.Invoice"]);
        assert!(!class.has_method("getJSIName"));
    }

    #[test]
    fn test_attribute_wildcard_accessors() {
        let mut invoice = fixture_class("Invoice");
        invoice.attribute_wildcard = true;
        let model = fixture_model(vec![invoice]);
        let mut graph = ClassGraph::new();
        let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");

        let class = graph.class(output.registry["com.example.Invoice"]);
        assert!(class.has_method("getOtherAttributes"));
        assert!(class.has_method("setOtherAttributes"));
        let helper = class.method("getOtherAttributesMap").expect("static helper");
        assert!(helper.is_static);
        assert_eq!(helper.return_type, Some(TypeRef::AttributeMap));
    }

    #[test]
    fn test_descriptor_grouping_and_order() {
        let model = fixture_model(vec![fixture_class("Alpha"), fixture_class("Beta")]);
        let mut graph = ClassGraph::new();
        let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");

        let descriptors = &output.descriptors["EXAMPLE"];
        let constants: Vec<&str> = descriptors
            .iter()
            .map(|d| d.type_name_constant.as_str())
            .collect();
        assert_eq!(constants, vec!["EXAMPLE.Alpha", "EXAMPLE.Beta"]);
        assert_eq!(descriptors[0].interop_type_name, "EXAMPLE.JSIAlpha");
        assert_eq!(descriptors[0].namespace, None);
    }

    #[test]
    fn test_unmapped_package_skips_constant_segment() {
        let mut model = SchemaModel::new();
        model.add_class(fixture_class("Invoice"));
        let mut graph = ClassGraph::new();
        let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");

        let class = graph.class(output.registry["com.example.Invoice"]);
        let type_field = class.field("TYPE").expect("TYPE constant");
        assert_eq!(type_field.init, Some(Expr::str("Invoice")));
        assert!(output.descriptors.contains_key(""));
    }

    #[test]
    fn test_nested_class_placement_and_constant() {
        let mut line = fixture_class("Line");
        line.parent = ClassParent::Class("com.example.Invoice".to_string());
        let model = fixture_model(vec![fixture_class("Invoice"), line]);
        let mut graph = ClassGraph::new();
        let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");

        let line_class = graph.class(output.registry["com.example.Line"]);
        assert_eq!(line_class.full_name, "com.example.JSIInvoice.JSILine");
        assert_eq!(line_class.outer, Some(output.registry["com.example.Invoice"]));

        let type_field = line_class.field("TYPE").expect("TYPE constant");
        assert_eq!(type_field.init, Some(Expr::str("EXAMPLE.Invoice.Line")));

        let js_type = line_class.annotation("JsType").expect("JsType annotation");
        assert_eq!(
            js_type.param_value("namespace"),
            Some(&AnnotationValue::Str("EXAMPLE.JSIInvoice".to_string()))
        );

        let descriptor = output.descriptors["EXAMPLE"]
            .iter()
            .find(|d| d.interop_type_name == "Line")
            .expect("nested descriptor");
        assert_eq!(descriptor.namespace.as_deref(), Some("EXAMPLE.JSIInvoice"));
    }
}
