//! Template compilation: placeholder tokens to a checked template and its schema

use std::path::Path;

use crate::config::{CompileConfig, ConfigError, DuplicatePolicy, FamilyConfig};
use crate::parser::{parse_source, split_placeholder, TemplateSource};
use crate::registry::TypeRegistry;

use super::error::TemplateError;
use super::render::Template;
use super::schema::{Schema, SchemaField};
use super::typed::{TemplateArgs, TypedTemplate};

/// Compiles templates for one family: a fixed registry and config
#[derive(Debug, Clone, Default)]
pub struct TemplateCompiler {
    registry: TypeRegistry,
    config: CompileConfig,
}

impl TemplateCompiler {
    /// Create a compiler over the given registry with default options
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry,
            config: CompileConfig::default(),
        }
    }

    /// Set the compile options
    pub fn with_config(mut self, config: CompileConfig) -> Self {
        self.config = config;
        self
    }

    /// Create a compiler from a loaded family config
    pub fn from_family(family: &FamilyConfig) -> Self {
        Self::new(family.registry()).with_config(family.compile.clone())
    }

    /// Load a family config from TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_family(&FamilyConfig::from_str(content)?))
    }

    /// Load a family config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::from_family(&FamilyConfig::from_file(path)?))
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Compile literal segments interleaved with `name:tag` tokens
    ///
    /// There must be exactly one more segment than tokens. Each token is split
    /// at its first `:`; the name is any non-empty text before it and the tag
    /// is looked up exactly as written.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typed_template::{args, TemplateCompiler, TypeRegistry};
    ///
    /// let compiler = TemplateCompiler::new(TypeRegistry::new());
    /// let template = compiler
    ///     .compile(&["Dear ", ", see you ", "."], &["name:string", "day:string"])
    ///     .unwrap();
    ///
    /// let text = template.render(&args! { name: "Bob", day: "Monday" }).unwrap();
    /// assert_eq!(text, "Dear Bob, see you Monday.");
    /// ```
    pub fn compile<S, T>(&self, segments: &[S], tokens: &[T]) -> Result<Template, TemplateError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        if segments.len() != tokens.len() + 1 {
            return Err(TemplateError::segment_mismatch(segments.len(), tokens.len()));
        }

        let placeholders = tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                split_placeholder(token).map_err(|errors| TemplateError::InvalidPlaceholder {
                    token: token.to_string(),
                    errors,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let source = TemplateSource {
            segments: segments.iter().map(|s| s.as_ref().to_string()).collect(),
            placeholders,
        };

        // Token spans are relative to each token, not to a shared source
        self.build(source, false)
    }

    /// Compile template source text such as `"Dear {name:string}!"`
    ///
    /// Inside braces, names and tags are identifiers and surrounding
    /// whitespace is ignored.
    pub fn parse(&self, source: &str) -> Result<Template, TemplateError> {
        let parsed = parse_source(source)?;
        self.build(parsed, true)
    }

    /// Compile source text and bind it to a statically typed argument record
    pub fn typed<A: TemplateArgs>(&self, source: &str) -> Result<TypedTemplate<A>, TemplateError> {
        TypedTemplate::new(self.parse(source)?)
    }

    fn build(&self, source: TemplateSource, spanned: bool) -> Result<Template, TemplateError> {
        let schema = self.infer_schema(&source, spanned)?;

        tracing::debug!(
            segments = source.segments.len(),
            placeholders = source.placeholders.len(),
            arguments = schema.len(),
            "compiled template"
        );

        Ok(Template::from_parts(source, schema, self.config.strict_args))
    }

    /// Resolve every tag and fold repeated names into one field each
    fn infer_schema(&self, source: &TemplateSource, spanned: bool) -> Result<Schema, TemplateError> {
        let mut schema = Schema::new();

        for placeholder in &source.placeholders {
            let span = if spanned { Some(placeholder.span()) } else { None };

            let kind = match self.registry.get(placeholder.tag()) {
                Some(kind) => *kind,
                None => {
                    return Err(TemplateError::unknown_tag(
                        placeholder,
                        self.registry.tags(),
                        span,
                    ))
                }
            };

            let existing = schema.get(placeholder.name()).cloned();
            match existing {
                None => schema.push(SchemaField {
                    name: placeholder.name().to_string(),
                    tag: placeholder.tag().to_string(),
                    kind,
                }),
                Some(field) if field.kind == kind => {}
                Some(field) => match self.config.duplicate_tags {
                    DuplicatePolicy::Reject => {
                        return Err(TemplateError::conflicting_tags(
                            field.name,
                            field.tag,
                            placeholder.tag(),
                            span,
                        ))
                    }
                    DuplicatePolicy::FirstWins => {
                        tracing::warn!(
                            placeholder = placeholder.name(),
                            kept = %field.tag,
                            ignored = placeholder.tag(),
                            "placeholder name reused with a different tag, keeping the first"
                        );
                    }
                },
            }
        }

        Ok(schema)
    }
}

/// Compile segments and tokens against a registry with default options
pub fn compile_template<S, T>(
    registry: &TypeRegistry,
    segments: &[S],
    tokens: &[T],
) -> Result<Template, TemplateError>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    TemplateCompiler::new(registry.clone()).compile(segments, tokens)
}

/// Compile template source text against a registry with default options
pub fn parse_template(registry: &TypeRegistry, source: &str) -> Result<Template, TemplateError> {
    TemplateCompiler::new(registry.clone()).parse(source)
}
