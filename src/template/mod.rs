//! Typed templates: compilation, schema inference and rendering
//!
//! A template family is a [`TemplateCompiler`] holding a [`TypeRegistry`].
//! Compiling resolves every `name:tag` placeholder against the registry and
//! infers the [`Schema`] an argument record must satisfy.
//!
//! # Example
//!
//! ```text
//! Dear {name:string}, your order {order:number} ships {when:date}.
//! ```
//!
//! With `date` registered as a custom type, rendering needs exactly
//! `name` (string), `order` (number) and `when` (the date type).
//!
//! [`TypeRegistry`]: crate::TypeRegistry

mod compiler;
mod error;
mod render;
mod schema;
mod typed;

pub use compiler::{compile_template, parse_template, TemplateCompiler};
pub use error::TemplateError;
pub use render::Template;
pub use schema::{Schema, SchemaField};
pub use typed::{ArgsOf, HasArgs, TemplateArgs, TypedTemplate};
