//! Typed Template - string templates with named, typed placeholders
//!
//! A template is written once with `name:tag` placeholders. Compiling it
//! against a type registry checks every tag and derives the exact argument
//! record the template needs; rendering substitutes each value's textual form.
//!
//! # Example
//!
//! ```rust
//! use typed_template::{args, compile};
//!
//! let template = compile("Hello {name:string}, you have {count:number} messages").unwrap();
//! let text = template.render(&args! { name: "Ada", count: 3 }).unwrap();
//! assert_eq!(text, "Hello Ada, you have 3 messages");
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod registry;
pub mod template;
pub mod value;

pub use config::{CompileConfig, ConfigError, DuplicatePolicy, FamilyConfig};
pub use error::ParseError;
pub use registry::TypeRegistry;
pub use template::{
    compile_template, parse_template, ArgsOf, HasArgs, Schema, SchemaField, Template,
    TemplateArgs, TemplateCompiler, TemplateError, TypedTemplate,
};
pub use value::{ArgValue, Args, CustomKind, CustomValue, Null, Undefined, Value, ValueKind};

/// Compile template source with the default registry
///
/// # Example
///
/// ```rust
/// use typed_template::{args, compile, Null, Undefined};
///
/// let template = compile("{n:null} and {u:undefined}").unwrap();
/// let text = template.render(&args! { n: Null, u: Undefined }).unwrap();
/// assert_eq!(text, "null and undefined");
/// ```
pub fn compile(source: &str) -> Result<Template, TemplateError> {
    parse_template(&TypeRegistry::default(), source)
}

/// Compile and render template source in one step with the default registry
///
/// # Example
///
/// ```rust
/// use typed_template::{args, render};
///
/// let text = render("{flag:boolean}", &args! { flag: false }).unwrap();
/// assert_eq!(text, "false");
/// ```
pub fn render(source: &str, args: &Args) -> Result<String, TemplateError> {
    compile(source)?.render(args)
}
