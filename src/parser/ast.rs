//! Syntax tree types for template sources and placeholder tokens

pub use crate::error::Span;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A placeholder name or tag as written in the token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `name:tag` placeholder token
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Argument name the value is looked up by
    pub name: Spanned<Identifier>,
    /// Type tag, resolved against the active registry
    pub tag: Spanned<Identifier>,
}

impl Placeholder {
    pub fn name(&self) -> &str {
        self.name.node.as_str()
    }

    pub fn tag(&self) -> &str {
        self.tag.node.as_str()
    }

    /// Span covering the whole token
    pub fn span(&self) -> Span {
        self.name.span.start..self.tag.span.end
    }
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name.node, self.tag.node)
    }
}

/// A template split into literal segments and the placeholders between them
///
/// Always holds exactly one more segment than placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSource {
    pub segments: Vec<String>,
    pub placeholders: Vec<Placeholder>,
}

impl TemplateSource {
    /// A source with a single empty segment and no placeholders
    pub fn empty() -> Self {
        Self {
            segments: vec![String::new()],
            placeholders: Vec::new(),
        }
    }
}
