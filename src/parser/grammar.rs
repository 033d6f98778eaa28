//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::{ParseError, Span};
use crate::parser::ast::*;
use crate::parser::lexer::{lex, lex_source, SourceToken, Token};

/// A run of literal text or the raw contents of a `{...}` slot
#[derive(Debug, Clone)]
enum Piece {
    Text(String),
    Slot(String, Span),
}

/// Parse a single `name:tag` placeholder token
pub fn parse_placeholder(input: &str) -> Result<Placeholder, Vec<ParseError>> {
    parse_placeholder_at(input, 0)
}

/// Split an explicit `name:tag` token at its first `:`
///
/// Unlike the source form, the name may be any non-empty text without a `:`
/// and the tag is kept exactly as written, whitespace included.
pub fn split_placeholder(token: &str) -> Result<Placeholder, Vec<ParseError>> {
    let Some(colon) = token.find(':') else {
        return Err(vec![ParseError::Syntax {
            span: token.len()..token.len(),
            message: "Missing ':' between name and tag".to_string(),
            expected: vec!["':'".to_string()],
        }]);
    };

    if colon == 0 {
        return Err(vec![ParseError::Syntax {
            span: 0..0,
            message: "Empty placeholder name".to_string(),
            expected: vec!["name".to_string()],
        }]);
    }

    let tag_start = colon + 1;
    Ok(Placeholder {
        name: Spanned::new(Identifier::new(&token[..colon]), 0..colon),
        tag: Spanned::new(Identifier::new(&token[tag_start..]), tag_start..token.len()),
    })
}

/// Parse a placeholder token that starts `offset` bytes into a larger source
pub(crate) fn parse_placeholder_at(
    input: &str,
    offset: usize,
) -> Result<Placeholder, Vec<ParseError>> {
    let eoi = offset + input.len();

    let token_iter = lex(input).map(move |(tok, span)| {
        let span: SimpleSpan = (span.start + offset..span.end + offset).into();
        (tok, span)
    });

    let token_stream =
        Stream::from_iter(token_iter).map((eoi..eoi).into(), |(t, s): (_, _)| (t, s));

    placeholder_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Parse template source text such as `"Dear {name:string}!"`
///
/// `{{` and `}}` stand for literal braces.
pub fn parse_source(input: &str) -> Result<TemplateSource, Vec<ParseError>> {
    let len = input.len();

    let token_iter = lex_source(input).map(|(tok, span)| {
        let span: SimpleSpan = span.into();
        (tok, span)
    });

    let token_stream =
        Stream::from_iter(token_iter).map((len..len).into(), |(t, s): (_, _)| (t, s));

    let pieces = source_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(ParseError::from).collect::<Vec<_>>())?;

    let mut source = TemplateSource::empty();
    let mut errors = Vec::new();

    for piece in pieces {
        match piece {
            Piece::Text(text) => {
                if let Some(segment) = source.segments.last_mut() {
                    segment.push_str(&text);
                }
            }
            Piece::Slot(text, span) => match parse_placeholder_at(&text, span.start) {
                Ok(placeholder) => {
                    source.placeholders.push(placeholder);
                    source.segments.push(String::new());
                }
                Err(errs) => errors.extend(errs),
            },
        }
    }

    if errors.is_empty() {
        Ok(source)
    } else {
        Err(errors)
    }
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> Span {
    e.start()..e.end()
}

fn placeholder_parser<'a, I>() -> impl Parser<'a, I, Placeholder, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let identifier = select! {
        Token::Ident(s) => Identifier::new(s),
    }
    .map_with(|id, e| Spanned::new(id, span_range(&e.span())));

    identifier
        .clone()
        .then_ignore(just(Token::Colon))
        .then(identifier)
        .then_ignore(end())
        .map(|(name, tag)| Placeholder { name, tag })
}

fn source_parser<'a, I>() -> impl Parser<'a, I, Vec<Piece>, extra::Err<Rich<'a, SourceToken>>> + Clone
where
    I: ValueInput<'a, Token = SourceToken, Span = SimpleSpan>,
{
    let text = select! {
        SourceToken::Text(s) => s,
    };

    // Slot must be tried before the escapes so `{{{x:string}}}` keeps its placeholder
    let slot = just(SourceToken::Open)
        .ignore_then(text.clone().map_with(|s, e| Piece::Slot(s, span_range(&e.span()))))
        .then_ignore(just(SourceToken::Close));

    let open_brace = just(SourceToken::Open)
        .then(just(SourceToken::Open))
        .to(Piece::Text("{".to_string()));

    let close_brace = just(SourceToken::Close)
        .then(just(SourceToken::Close))
        .to(Piece::Text("}".to_string()));

    choice((slot, open_brace, close_brace, text.map(Piece::Text)))
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
}
