//! Errors raised while compiling or rendering templates

use thiserror::Error;

use crate::error::{format_report, ParseError, Span};
use crate::parser::Placeholder;
use crate::value::ValueKind;

/// Errors that can occur during template operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TemplateError {
    /// Template source could not be parsed
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// A token is not of the form `name:tag`
    #[error("invalid placeholder '{token}': {}", format_parse_errors(.errors))]
    InvalidPlaceholder {
        token: String,
        errors: Vec<ParseError>,
    },

    /// Placeholder tag missing from the registry
    #[error("unknown type tag '{tag}' in placeholder '{token}' (known tags: {known})")]
    UnknownTag {
        token: String,
        tag: String,
        known: String,
        span: Option<Span>,
    },

    /// One name used with tags of different kinds
    #[error("placeholder '{name}' is declared as both '{first}' and '{second}'")]
    ConflictingTags {
        name: String,
        first: String,
        second: String,
        span: Option<Span>,
    },

    /// Literal segments and tokens do not interleave
    #[error("expected {expected} literal segments for {placeholders} placeholders, got {segments}")]
    SegmentMismatch {
        segments: usize,
        placeholders: usize,
        expected: usize,
    },

    /// Argument record lacks a name the template uses
    #[error("missing argument '{name}'")]
    MissingArgument { name: String },

    /// Argument value has the wrong kind
    #[error("argument '{name}' must be {expected}, got {found}")]
    TypeMismatch {
        name: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Argument record carries a name the template does not use
    #[error("unexpected argument '{name}'")]
    UnexpectedArgument { name: String },
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl TemplateError {
    /// Create an unknown tag error listing the tags that do exist
    pub fn unknown_tag<'a>(
        placeholder: &Placeholder,
        known: impl Iterator<Item = &'a str>,
        span: Option<Span>,
    ) -> Self {
        Self::UnknownTag {
            token: placeholder.to_string(),
            tag: placeholder.tag().to_string(),
            known: known.collect::<Vec<_>>().join(", "),
            span,
        }
    }

    /// Create a conflicting tags error
    pub fn conflicting_tags(
        name: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::ConflictingTags {
            name: name.into(),
            first: first.into(),
            second: second.into(),
            span,
        }
    }

    pub fn segment_mismatch(segments: usize, placeholders: usize) -> Self {
        Self::SegmentMismatch {
            segments,
            placeholders,
            expected: placeholders + 1,
        }
    }

    /// Create a missing argument error
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(name: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
            found,
        }
    }

    pub fn unexpected_argument(name: impl Into<String>) -> Self {
        Self::UnexpectedArgument { name: name.into() }
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::UnknownTag { span, .. } => span.as_ref(),
            Self::ConflictingTags { span, .. } => span.as_ref(),
            _ => None,
        }
    }

    /// Format the error against the template source using ariadne
    ///
    /// Errors without a source location fall back to their display form.
    pub fn report(&self, source: &str, filename: &str) -> String {
        match self {
            Self::Parse(errors) => errors
                .iter()
                .map(|e| e.format(source, filename))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => match self.span() {
                Some(span) => {
                    let message = self.to_string();
                    format_report(source, filename, span, &message, &message)
                }
                None => self.to_string(),
            },
        }
    }
}

impl From<Vec<ParseError>> for TemplateError {
    fn from(errors: Vec<ParseError>) -> Self {
        TemplateError::Parse(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_placeholder;

    #[test]
    fn test_unknown_tag_display() {
        let placeholder = parse_placeholder("at:coords").expect("Should parse");
        let err = TemplateError::unknown_tag(&placeholder, ["number", "string"].into_iter(), None);
        assert_eq!(
            err.to_string(),
            "unknown type tag 'coords' in placeholder 'at:coords' (known tags: number, string)"
        );
    }

    #[test]
    fn test_segment_mismatch_display() {
        let err = TemplateError::segment_mismatch(1, 2);
        assert_eq!(
            err.to_string(),
            "expected 3 literal segments for 2 placeholders, got 1"
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = TemplateError::type_mismatch("age", ValueKind::Number, ValueKind::String);
        assert_eq!(err.to_string(), "argument 'age' must be number, got string");
    }

    #[test]
    fn test_report_without_span_is_display() {
        let err = TemplateError::missing_argument("name");
        assert_eq!(err.report("Hi {name:string}", "greeting"), "missing argument 'name'");
    }

    #[test]
    fn test_report_with_span_names_file() {
        let err = TemplateError::conflicting_tags("n", "string", "number", Some(3..11));
        let report = err.report("Hi {n:string} {n:number}", "greeting");
        assert!(report.contains("greeting"));
        assert!(report.contains("declared as both"));
    }
}
