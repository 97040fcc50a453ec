//! Compiles a small schema model and prints the resulting class graph.

use jsigen::prelude::*;

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut model = SchemaModel::new();
    model.map_package("com.example", "EXAMPLE");

    let base = SchemaClass::new(
        "com.example.Base".to_string(),
        "Base".to_string(),
        "com.example".to_string(),
    );
    model.add_class(base);

    let mut derived = SchemaClass::new(
        "com.example.Derived".to_string(),
        "Derived".to_string(),
        "com.example".to_string(),
    );
    derived.base_class = Some("com.example.Base".to_string());
    derived.add_property(PropertyDef::new(
        "Name".to_string(),
        "name".to_string(),
        PropertyTarget::value("string"),
    ));
    let mut tags = PropertyDef::new(
        "Tags".to_string(),
        "tags".to_string(),
        PropertyTarget::value("com.example.Base"),
    );
    tags.collection = true;
    derived.add_property(tags);
    model.add_class(derived);

    let mut graph = ClassGraph::new();
    let output = build_all(&model, &mut graph, BuildOptions::default())?;

    for (_, class) in graph.iter() {
        println!(
            "{} ({} fields, {} methods)",
            class.full_name,
            class.fields.len(),
            class.methods.len()
        );
    }
    for (module, descriptors) in &output.descriptors {
        for descriptor in descriptors {
            println!(
                "module {module}: {} -> {}",
                descriptor.type_name_constant, descriptor.interop_type_name
            );
        }
    }
    Ok(())
}
