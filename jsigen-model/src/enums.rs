//! Schema enumeration definitions.

/// Enumeration definition derived from a schema.
#[derive(Debug, Clone)]
pub struct SchemaEnum {
    /// Fully qualified schema name (unique key).
    pub full_name: String,
    /// Short (unqualified) name.
    pub short_name: String,
    /// Owning package.
    pub package: String,
    /// Ordered constants.
    pub constants: Vec<EnumConstant>,
    /// Whether constants carry an explicit value field, i.e. the constant
    /// names are not literally usable as values.
    pub needs_value_field: bool,
}

impl SchemaEnum {
    /// Creates a new enumeration with no constants.
    #[must_use]
    pub fn new(full_name: String, short_name: String, package: String) -> Self {
        Self {
            full_name,
            short_name,
            package,
            constants: Vec::new(),
            needs_value_field: false,
        }
    }

    /// Adds a constant to the enumeration.
    pub fn add_constant(&mut self, constant: EnumConstant) {
        self.constants.push(constant);
    }
}

/// Constant within a schema enumeration.
#[derive(Debug, Clone)]
pub struct EnumConstant {
    /// Constant name.
    pub name: String,
    /// Lexical value as written in the schema.
    pub lexical_value: String,
}

impl EnumConstant {
    /// Creates a new enumeration constant.
    #[must_use]
    pub fn new(name: String, lexical_value: String) -> Self {
        Self {
            name,
            lexical_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_enum() {
        let mut status = SchemaEnum::new(
            "com.example.Status".to_string(),
            "Status".to_string(),
            "com.example".to_string(),
        );
        status.add_constant(EnumConstant::new("OPEN".to_string(), "open".to_string()));
        status.add_constant(EnumConstant::new("CLOSED".to_string(), "closed".to_string()));

        assert_eq!(status.constants.len(), 2);
        assert_eq!(status.constants[0].lexical_value, "open");
        assert!(!status.needs_value_field);
    }
}
