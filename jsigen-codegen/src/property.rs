//! Property materialization: target type resolution and accessor emission.

use jsigen_graph::{
    Annotation, AnnotationValue, ClassId, Expr, Method, Param, Primitive, Stmt, TargetClass,
    TypeRef, native_ref,
};
use jsigen_model::{PropertyDef, SchemaClass};

use crate::builder::ClassGraphBuilder;
use crate::error::BuildError;

/// Calendar/date-time schema type always mapped to the generic date type.
const CALENDAR_TYPE: &str = "calendar";
const DATE_TYPE: &str = "date";
const OBJECT_TYPE: &str = "object";

/// Resolved shape of a property, decided once during resolution and
/// consumed by shape-specific accessor emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyShape {
    /// Single value of the given type.
    Scalar(TypeRef),
    /// Native array of an unboxed primitive.
    PrimitiveArray(Primitive),
    /// Array-like wrapper around a reference element type.
    ReferenceArrayLike(TypeRef),
}

impl ClassGraphBuilder<'_> {
    /// Materializes one property: resolves its shape and emits the paired
    /// accessors on the target class.
    ///
    /// # Errors
    /// Propagates [`BuildError`] from type resolution unchanged; no partial
    /// accessors are left behind on failure.
    pub(crate) fn add_property(
        &mut self,
        id: ClassId,
        owner: &SchemaClass,
        property: &PropertyDef,
    ) -> Result<(), BuildError> {
        let shape = self.resolve_property_shape(owner, property)?;
        let utils = self.utils_ref();
        let public_name = &property.public_name;
        let private_name = &property.private_name;
        let class = self.graph.class_mut(id);
        match shape {
            PropertyShape::Scalar(ty) => {
                add_native_getter(class, ty.clone(), public_name, private_name);
                add_native_setter(class, ty, public_name, private_name);
            }
            PropertyShape::PrimitiveArray(primitive) => {
                let ty = TypeRef::Primitive(primitive).array();
                add_native_getter(class, ty.clone(), public_name, private_name);
                add_native_setter(class, ty, public_name, private_name);
            }
            PropertyShape::ReferenceArrayLike(element) => {
                let native_name = format!("Native{public_name}");
                add_list_getter(class, &utils, element.clone(), public_name, &native_name);
                add_add_method(class, &utils, element.clone(), public_name, &native_name);
                add_add_all_method(class, &utils, element.clone(), public_name, &native_name);
                add_remove_method(class, &utils, public_name, &native_name);
                add_list_setter(class, &utils, element.clone(), public_name, &native_name);
                let native_ty = element.array_like();
                add_native_getter(class, native_ty.clone(), &native_name, private_name);
                add_native_setter(class, native_ty, &native_name, private_name);
            }
        }
        Ok(())
    }

    /// Resolves a property's declared type into its final shape.
    ///
    /// Collections of a primitive collapse to a native array; collections
    /// of a reference type become the array-like wrapper; scalars are
    /// normalized to their unboxed form.
    pub(crate) fn resolve_property_shape(
        &mut self,
        owner: &SchemaClass,
        property: &PropertyDef,
    ) -> Result<PropertyShape, BuildError> {
        let type_name = property_type_name(owner, property);
        let resolved = self.resolve_type_ref(&type_name, owner, !property.collection)?;
        if property.collection {
            match resolved.clone().unboxify() {
                TypeRef::Primitive(primitive) => Ok(PropertyShape::PrimitiveArray(primitive)),
                _ => Ok(PropertyShape::ReferenceArrayLike(resolved)),
            }
        } else {
            Ok(PropertyShape::Scalar(resolved.unboxify()))
        }
    }

    /// Looks up or builds the target type behind a resolved type name.
    ///
    /// Native types win; otherwise the registry is consulted, then the
    /// schema class and enum sets, recursing into the graph builder for
    /// anything not yet materialized.
    fn resolve_type_ref(
        &mut self,
        name: &str,
        owner: &SchemaClass,
        unbox: bool,
    ) -> Result<TypeRef, BuildError> {
        if let Some(native) = native_ref(name, unbox) {
            return Ok(native);
        }
        if let Some(&id) = self.registry.get(name) {
            return Ok(TypeRef::Class(id));
        }
        if let Some(class) = self.model.class(name) {
            return self.build_class(class).map(TypeRef::Class);
        }
        if let Some(enum_def) = self.model.enum_def(name) {
            return self.build_enum(enum_def).map(TypeRef::Class);
        }
        Err(BuildError::unresolved(name, &owner.full_name))
    }
}

/// Determines the declared type name of a property, substituting the
/// universal object type when the parser left no usable reference.
fn property_type_name(owner: &SchemaClass, property: &PropertyDef) -> String {
    let type_name = match property.target.type_name() {
        Some(name) => name,
        None => {
            tracing::warn!(
                property = %property.private_name,
                class = %owner.full_name,
                "no resolvable target type, substituting the universal object type"
            );
            OBJECT_TYPE
        }
    };
    if type_name == CALENDAR_TYPE {
        DATE_TYPE.to_string()
    } else {
        type_name.to_string()
    }
}

/// Adds a native getter bound to the given runtime field.
pub(crate) fn add_native_getter(
    class: &mut TargetClass,
    ty: TypeRef,
    public_name: &str,
    private_name: &str,
) {
    let mut method = Method::new(format!("get{public_name}"), Some(ty));
    method.is_native = true;
    method.annotations.push(
        Annotation::new("JsProperty").param("name", AnnotationValue::Str(private_name.to_string())),
    );
    class.add_method(method);
}

/// Adds a native setter bound to the given runtime field.
pub(crate) fn add_native_setter(
    class: &mut TargetClass,
    ty: TypeRef,
    public_name: &str,
    private_name: &str,
) {
    let mut method = Method::new(format!("set{public_name}"), None);
    method.is_native = true;
    method.params.push(Param::new(private_name, ty));
    method.annotations.push(
        Annotation::new("JsProperty").param("name", AnnotationValue::Str(private_name.to_string())),
    );
    class.add_method(method);
}

/// Friendly list-style getter over the native array-like representation.
fn add_list_getter(
    class: &mut TargetClass,
    utils: &TypeRef,
    element: TypeRef,
    public_name: &str,
    native_name: &str,
) {
    let mut method = Method::new(format!("get{public_name}"), Some(element.list()));
    method.is_final = true;
    method.annotations.push(Annotation::new("JsOverlay"));
    method.body.push(Stmt::Return(Expr::static_call(
        utils.clone(),
        "toList",
        vec![Expr::This.call(format!("get{native_name}"), vec![])],
    )));
    class.add_method(method);
}

/// Appends a single element to the native representation.
fn add_add_method(
    class: &mut TargetClass,
    utils: &TypeRef,
    element: TypeRef,
    public_name: &str,
    native_name: &str,
) {
    let mut method = Method::new(format!("add{public_name}"), None);
    method.is_final = true;
    method.annotations.push(Annotation::new("JsOverlay"));
    method.params.push(Param::new("element", element));
    method.body.push(Stmt::Expr(Expr::static_call(
        utils.clone(),
        "add",
        vec![
            Expr::This.call(format!("get{native_name}"), vec![]),
            Expr::var("element"),
        ],
    )));
    class.add_method(method);
}

/// Appends a batch of elements to the native representation.
fn add_add_all_method(
    class: &mut TargetClass,
    utils: &TypeRef,
    element: TypeRef,
    public_name: &str,
    native_name: &str,
) {
    let mut method = Method::new(format!("addAll{public_name}"), None);
    method.is_final = true;
    method.annotations.push(Annotation::new("JsOverlay"));
    method.params.push(Param::new("elements", element.array()));
    method.body.push(Stmt::Expr(Expr::static_call(
        utils.clone(),
        "addAll",
        vec![
            Expr::This.call(format!("get{native_name}"), vec![]),
            Expr::var("elements"),
        ],
    )));
    class.add_method(method);
}

/// Removes the element at an index from the native representation.
fn add_remove_method(
    class: &mut TargetClass,
    utils: &TypeRef,
    public_name: &str,
    native_name: &str,
) {
    let mut method = Method::new(format!("remove{public_name}"), None);
    method.is_final = true;
    method.annotations.push(Annotation::new("JsOverlay"));
    method
        .params
        .push(Param::new("index", TypeRef::Primitive(Primitive::Int)));
    method.body.push(Stmt::Expr(Expr::static_call(
        utils.clone(),
        "remove",
        vec![
            Expr::This.call(format!("get{native_name}"), vec![]),
            Expr::var("index"),
        ],
    )));
    class.add_method(method);
}

/// Friendly list-style setter feeding the native representation.
fn add_list_setter(
    class: &mut TargetClass,
    utils: &TypeRef,
    element: TypeRef,
    public_name: &str,
    native_name: &str,
) {
    let mut method = Method::new(format!("set{public_name}"), None);
    method.is_final = true;
    method.annotations.push(Annotation::new("JsOverlay"));
    method.params.push(Param::new("value", element.list()));
    method.body.push(Stmt::Expr(Expr::This.call(
        format!("set{native_name}"),
        vec![Expr::static_call(
            utils.clone(),
            "toArrayLike",
            vec![Expr::var("value")],
        )],
    )));
    class.add_method(method);
}
