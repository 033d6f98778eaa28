//! Type-tag registry mapping placeholder tags to value kinds

use std::collections::BTreeMap;

use crate::value::ValueKind;

/// The five tags every registry provides
pub const DEFAULT_TAGS: [(&str, ValueKind); 5] = [
    ("string", ValueKind::String),
    ("number", ValueKind::Number),
    ("boolean", ValueKind::Boolean),
    ("null", ValueKind::Null),
    ("undefined", ValueKind::Undefined),
];

/// Registry of the tags a template family may use
///
/// Built as a layered map: the default tags first, then custom entries, which
/// win on conflict. Builder methods consume the registry, so it is fixed once
/// handed to a compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRegistry {
    tags: BTreeMap<String, ValueKind>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS
                .iter()
                .map(|(tag, kind)| (tag.to_string(), *kind))
                .collect(),
        }
    }
}

impl TypeRegistry {
    /// Create a registry holding only the default tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a tag to a kind, replacing any earlier binding
    pub fn with_tag(mut self, tag: impl Into<String>, kind: ValueKind) -> Self {
        self.tags.insert(tag.into(), kind);
        self
    }

    /// Bind a tag to a custom Rust type
    ///
    /// # Example
    ///
    /// ```rust
    /// use typed_template::{TypeRegistry, ValueKind};
    ///
    /// #[derive(Debug)]
    /// struct Coordinates(f64, f64);
    ///
    /// let registry = TypeRegistry::new().with_type::<Coordinates>("coords");
    /// assert_eq!(registry.get("coords"), Some(&ValueKind::custom::<Coordinates>()));
    /// assert!(registry.contains("string"));
    /// ```
    pub fn with_type<T: 'static>(self, tag: impl Into<String>) -> Self {
        self.with_tag(tag, ValueKind::custom::<T>())
    }

    /// Get the kind a tag denotes
    pub fn get(&self, tag: &str) -> Option<&ValueKind> {
        self.tags.get(tag)
    }

    /// Check if a tag exists
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// All tag names, sorted
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Coordinates;

    #[test]
    fn test_default_tags() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.get("string"), Some(&ValueKind::String));
        assert_eq!(registry.get("number"), Some(&ValueKind::Number));
        assert_eq!(registry.get("boolean"), Some(&ValueKind::Boolean));
        assert_eq!(registry.get("null"), Some(&ValueKind::Null));
        assert_eq!(registry.get("undefined"), Some(&ValueKind::Undefined));
        assert_eq!(registry.get("coords"), None);
    }

    #[test]
    fn test_custom_tags_extend_defaults() {
        let registry = TypeRegistry::new()
            .with_type::<Coordinates>("coords")
            .with_tag("id", ValueKind::Number);
        assert_eq!(registry.len(), 7);
        assert!(registry.contains("coords"));
        assert!(registry.contains("undefined"));
        assert_eq!(registry.get("id"), Some(&ValueKind::Number));
    }

    #[test]
    fn test_custom_tag_overrides_default() {
        let registry = TypeRegistry::new().with_tag("number", ValueKind::String);
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.get("number"), Some(&ValueKind::String));
    }

    #[test]
    fn test_tags_sorted() {
        let registry = TypeRegistry::new().with_type::<Coordinates>("coords");
        let tags: Vec<_> = registry.tags().collect();
        assert_eq!(
            tags,
            vec!["boolean", "coords", "null", "number", "string", "undefined"]
        );
    }
}
