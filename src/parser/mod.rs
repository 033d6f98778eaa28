//! Parser for template sources and `name:tag` placeholder tokens

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::{parse_placeholder, parse_source, split_placeholder};
