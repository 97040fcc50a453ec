//! Containment and namespace resolution.

use jsigen_graph::ClassId;
use jsigen_model::SchemaClass;

use crate::builder::ClassGraphBuilder;

/// Placement decision for a schema class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Placement {
    /// The class nests inside an already-built parent.
    Nested {
        /// The built parent class.
        parent: ClassId,
        /// Schema short name of the parent, used in the type-name constant.
        parent_short_name: String,
    },
    /// The class sits at the top level of its package.
    TopLevel {
        /// Fully qualified interop name, `<package>.<prefix><short>`.
        full_name: String,
    },
}

impl ClassGraphBuilder<'_> {
    /// Decides whether a class nests inside its declared containing class.
    ///
    /// Nesting applies only when the containing class is a real class
    /// parent *and* has already been registered at this point of the
    /// traversal. Otherwise the class degrades to a top-level placement;
    /// the would-be parent then only survives through the computed
    /// namespace string. The fallback is deliberate: nesting is
    /// best-effort and build-order dependent.
    pub(crate) fn resolve_placement(&self, class: &SchemaClass) -> Placement {
        if let Some(parent_name) = class.parent.class_name() {
            if let (Some(&parent), Some(parent_class)) = (
                self.registry.get(parent_name),
                self.model.class(parent_name),
            ) {
                return Placement::Nested {
                    parent,
                    parent_short_name: parent_class.short_name.clone(),
                };
            }
        }
        Placement::TopLevel {
            full_name: format!(
                "{}.{}{}",
                class.package, self.options.class_prefix, class.short_name
            ),
        }
    }
}

/// Computes the interop type name of a class: the module name joined with
/// the package-stripped, dot-separated class name chain.
pub(crate) fn interop_type_name(module: Option<&str>, package: &str, full_name: &str) -> String {
    let local = full_name
        .strip_prefix(package)
        .map(|rest| rest.trim_start_matches('.'))
        .unwrap_or(full_name);
    match module {
        Some(module) => format!("{module}.{local}"),
        None => local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{BuildOptions, build_all};
    use jsigen_graph::ClassGraph;
    use jsigen_model::{ClassParent, SchemaModel};

    fn fixture_class(short_name: &str) -> SchemaClass {
        SchemaClass::new(
            format!("com.example.{short_name}"),
            short_name.to_string(),
            "com.example".to_string(),
        )
    }

    #[test]
    fn test_interop_type_name() {
        assert_eq!(
            interop_type_name(Some("EXAMPLE"), "com.example", "com.example.JSIInvoice"),
            "EXAMPLE.JSIInvoice"
        );
        assert_eq!(
            interop_type_name(
                Some("EXAMPLE"),
                "com.example",
                "com.example.JSIInvoice.JSILine"
            ),
            "EXAMPLE.JSIInvoice.JSILine"
        );
        assert_eq!(
            interop_type_name(None, "com.example", "com.example.JSIInvoice"),
            "JSIInvoice"
        );
    }

    #[test]
    fn test_nesting_applies_when_parent_already_built() {
        let mut line = fixture_class("Line");
        line.parent = ClassParent::Class("com.example.Invoice".to_string());
        let mut model = SchemaModel::new();
        model.map_package("com.example", "EXAMPLE");
        model.add_class(fixture_class("Invoice"));
        model.add_class(line);

        let mut graph = ClassGraph::new();
        let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");

        let line_class = graph.class(output.registry["com.example.Line"]);
        assert_eq!(line_class.full_name, "com.example.JSIInvoice.JSILine");
        assert!(line_class.outer.is_some());
    }

    #[test]
    fn test_nesting_falls_back_when_parent_not_yet_built() {
        // The nested class is declared before its parent, so at the moment
        // it is processed the parent is unregistered and the class lands at
        // the top level.
        let mut line = fixture_class("Line");
        line.parent = ClassParent::Class("com.example.Invoice".to_string());
        let mut model = SchemaModel::new();
        model.map_package("com.example", "EXAMPLE");
        model.add_class(line);
        model.add_class(fixture_class("Invoice"));

        let mut graph = ClassGraph::new();
        let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");

        let line_class = graph.class(output.registry["com.example.Line"]);
        assert_eq!(line_class.full_name, "com.example.JSILine");
        assert!(line_class.outer.is_none());

        let invoice_class = graph.class(output.registry["com.example.Invoice"]);
        assert_eq!(invoice_class.full_name, "com.example.JSIInvoice");
    }

    #[test]
    fn test_nested_and_fallback_namespaces_differ() {
        use jsigen_graph::AnnotationValue;

        let nested_ns = {
            let mut line = fixture_class("Line");
            line.parent = ClassParent::Class("com.example.Invoice".to_string());
            let mut model = SchemaModel::new();
            model.map_package("com.example", "EXAMPLE");
            model.add_class(fixture_class("Invoice"));
            model.add_class(line);
            let mut graph = ClassGraph::new();
            let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");
            graph
                .class(output.registry["com.example.Line"])
                .annotation("JsType")
                .and_then(|a| a.param_value("namespace").cloned())
                .expect("namespace param")
        };
        let fallback_ns = {
            let mut line = fixture_class("Line");
            line.parent = ClassParent::Class("com.example.Invoice".to_string());
            let mut model = SchemaModel::new();
            model.map_package("com.example", "EXAMPLE");
            model.add_class(line);
            model.add_class(fixture_class("Invoice"));
            let mut graph = ClassGraph::new();
            let output = build_all(&model, &mut graph, BuildOptions::default()).expect("build");
            graph
                .class(output.registry["com.example.Line"])
                .annotation("JsType")
                .and_then(|a| a.param_value("namespace").cloned())
                .expect("namespace param")
        };

        assert_eq!(
            nested_ns,
            AnnotationValue::Str("EXAMPLE.JSIInvoice".to_string())
        );
        assert_eq!(fallback_ns, AnnotationValue::GlobalNamespace);
    }
}
