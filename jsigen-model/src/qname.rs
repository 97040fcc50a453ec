//! Qualified type names.

/// Namespace-qualified type name attached to a schema class.
///
/// Used by the compiler to synthesize the run-time name record of a
/// generated class (namespace URI, local part, optional prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Namespace URI.
    pub namespace_uri: String,
    /// Local part of the name.
    pub local_part: String,
    /// Namespace prefix, if one is bound.
    pub prefix: Option<String>,
}

impl QualifiedName {
    /// Creates a qualified name without a prefix.
    #[must_use]
    pub fn new(namespace_uri: String, local_part: String) -> Self {
        Self {
            namespace_uri,
            local_part,
            prefix: None,
        }
    }

    /// Creates a qualified name with a bound prefix.
    #[must_use]
    pub fn with_prefix(namespace_uri: String, local_part: String, prefix: String) -> Self {
        Self {
            namespace_uri,
            local_part,
            prefix: Some(prefix),
        }
    }

    /// Returns the namespace key, `{namespaceURI}`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{{{}}}", self.namespace_uri)
    }

    /// Returns the composite string form of the name.
    ///
    /// `{namespaceURI}prefix:localPart` when a non-empty prefix is bound,
    /// `{namespaceURI}localPart` otherwise.
    #[must_use]
    pub fn composite_string(&self) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => {
                format!("{{{}}}{}:{}", self.namespace_uri, prefix, self.local_part)
            }
            _ => format!("{{{}}}{}", self.namespace_uri, self.local_part),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key() {
        let name = QualifiedName::new("http://example.com/ns".to_string(), "item".to_string());
        assert_eq!(name.key(), "{http://example.com/ns}");
    }

    #[test]
    fn test_composite_string_without_prefix() {
        let name = QualifiedName::new("http://example.com/ns".to_string(), "item".to_string());
        assert_eq!(name.composite_string(), "{http://example.com/ns}item");
    }

    #[test]
    fn test_composite_string_with_prefix() {
        let name = QualifiedName::with_prefix(
            "http://example.com/ns".to_string(),
            "item".to_string(),
            "ex".to_string(),
        );
        assert_eq!(name.composite_string(), "{http://example.com/ns}ex:item");
    }

    #[test]
    fn test_composite_string_with_empty_prefix() {
        let mut name = QualifiedName::new("http://example.com/ns".to_string(), "item".to_string());
        name.prefix = Some(String::new());
        assert_eq!(name.composite_string(), "{http://example.com/ns}item");
    }
}
