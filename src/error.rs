//! Error types for parsing template sources and placeholder tokens

use ariadne::{Color, Label, Report, ReportKind, Source};
use chumsky::error::{Rich, RichPattern, RichReason};
use thiserror::Error;

use crate::parser::lexer::{SourceToken, Token};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
    /// Source range the error points at
    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                let label = format!("{}{}", message, expected_str);
                format_report(source, filename, span, message, &label)
            }
        }
    }
}

/// Render a single-label ariadne report into a string
pub(crate) fn format_report(
    source: &str,
    filename: &str,
    span: &Span,
    message: &str,
    label: &str,
) -> String {
    let mut buf = Vec::new();
    let written = Report::build(ReportKind::Error, filename, span.start)
        .with_message(message)
        .with_label(
            Label::new((filename, span.clone()))
                .with_message(label)
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(source)), &mut buf);

    match written {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => message.to_string(),
    }
}

impl<'a> From<Rich<'a, Token>> for ParseError {
    fn from(err: Rich<'a, Token>) -> Self {
        from_rich(err, format_token)
    }
}

impl<'a> From<Rich<'a, SourceToken>> for ParseError {
    fn from(err: Rich<'a, SourceToken>) -> Self {
        from_rich(err, format_source_token)
    }
}

fn from_rich<T>(err: Rich<'_, T>, describe: fn(&T) -> String) -> ParseError {
    let message = match err.reason() {
        RichReason::Custom(msg) => msg.to_string(),
        _ => match err.found() {
            Some(tok) => format!("Unexpected {}", describe(tok)),
            None => "Unexpected end of input".to_string(),
        },
    };

    let expected: Vec<String> = err
        .expected()
        .filter_map(|e| match e {
            RichPattern::Token(tok) => Some(describe(tok)),
            RichPattern::Label(label) => Some(label.to_string()),
            RichPattern::EndOfInput => Some("end of input".to_string()),
            _ => None,
        })
        .collect();

    ParseError::Syntax {
        span: err.span().into_range(),
        message,
        expected,
    }
}

/// Format a placeholder token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Ident(s) => format!("identifier '{}'", s),
        Token::Colon => "':'".to_string(),
        Token::Invalid(s) => format!("character '{}'", s),
    }
}

fn format_source_token(tok: &SourceToken) -> String {
    match tok {
        SourceToken::Open => "'{'".to_string(),
        SourceToken::Close => "'}'".to_string(),
        SourceToken::Text(s) => format!("text \"{}\"", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_points_at_source() {
        let err = ParseError::Syntax {
            span: 6..7,
            message: "Unexpected '}'".to_string(),
            expected: vec!["text".to_string()],
        };
        let report = err.format("Hello {}", "greeting");
        assert!(report.contains("Unexpected '}'"));
        assert!(report.contains("greeting"));
        assert!(report.contains("Expected: text"));
    }

    #[test]
    fn test_display_includes_span() {
        let err = ParseError::Syntax {
            span: 0..1,
            message: "Unexpected ':'".to_string(),
            expected: vec![],
        };
        assert_eq!(err.to_string(), "Parse error at 0..1: Unexpected ':'");
        assert_eq!(err.span(), &(0..1));
    }
}
