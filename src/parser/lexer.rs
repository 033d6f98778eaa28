//! Lexers for template sources and placeholder tokens using logos

use logos::Logos;

use crate::error::Span;

/// Tokens inside a single `name:tag` placeholder
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    #[token(":")]
    Colon,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Anything that cannot start an identifier, so the grammar can report it
    #[regex(r"[^a-zA-Z_: \t\n\r]", |lex| lex.slice().to_string())]
    Invalid(String),
}

/// Tokens of a whole template source
///
/// Brace escapes (`{{`, `}}`) are resolved by the grammar, not here, so that
/// `{{{name:string}}}` splits as brace, placeholder, brace.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum SourceToken {
    #[token("{")]
    Open,
    #[token("}")]
    Close,

    #[regex(r"[^{}]+", |lex| lex.slice().to_string())]
    Text(String),
}

/// Lex a placeholder token into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input).spanned().map(move |(tok, span)| {
        let tok = tok.unwrap_or_else(|_| Token::Invalid(input[span.clone()].to_string()));
        (tok, span)
    })
}

/// Lex a template source into tokens with spans
pub fn lex_source(input: &str) -> impl Iterator<Item = (SourceToken, Span)> + '_ {
    SourceToken::lexer(input).spanned().map(move |(tok, span)| {
        let tok = tok.unwrap_or_else(|_| SourceToken::Text(input[span.clone()].to_string()));
        (tok, span)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_tokens() {
        let tokens: Vec<_> = lex("name:string").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("name".to_string()),
                Token::Colon,
                Token::Ident("string".to_string())
            ]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        let tokens: Vec<_> = lex(" n : null ").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("n".to_string()),
                Token::Colon,
                Token::Ident("null".to_string())
            ]
        );
    }

    #[test]
    fn test_invalid_characters() {
        let tokens: Vec<_> = lex("a-b").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("a".to_string()),
                Token::Invalid("-".to_string()),
                Token::Ident("b".to_string())
            ]
        );
    }

    #[test]
    fn test_leading_digit_is_invalid() {
        let tokens: Vec<_> = lex("1st").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::Invalid("1".to_string()), Token::Ident("st".to_string())]
        );
    }

    #[test]
    fn test_source_tokens() {
        let tokens: Vec<_> = lex_source("Dear {name:string}!").collect();
        assert_eq!(
            tokens,
            vec![
                (SourceToken::Text("Dear ".to_string()), 0..5),
                (SourceToken::Open, 5..6),
                (SourceToken::Text("name:string".to_string()), 6..17),
                (SourceToken::Close, 17..18),
                (SourceToken::Text("!".to_string()), 18..19),
            ]
        );
    }

    #[test]
    fn test_source_braces_are_single_tokens() {
        let tokens: Vec<_> = lex_source("{{}}").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                SourceToken::Open,
                SourceToken::Open,
                SourceToken::Close,
                SourceToken::Close
            ]
        );
    }

    #[test]
    fn test_source_unicode_text() {
        let tokens: Vec<_> = lex_source("héllo ✓").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![SourceToken::Text("héllo ✓".to_string())]);
    }
}
