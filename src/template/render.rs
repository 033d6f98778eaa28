//! The compiled template object and its substitution walk

use std::borrow::Borrow;
use std::fmt;

use crate::parser::{Placeholder, TemplateSource};
use crate::value::{Args, Value};

use super::error::TemplateError;
use super::schema::Schema;

/// An immutable compiled template
///
/// Holds literal segments interleaved with placeholders plus the schema the
/// argument record must satisfy. Rendering never mutates it, so one template
/// can be shared freely across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    segments: Vec<String>,
    placeholders: Vec<Placeholder>,
    schema: Schema,
    strict_args: bool,
}

impl Template {
    pub(crate) fn from_parts(source: TemplateSource, schema: Schema, strict_args: bool) -> Self {
        Self {
            segments: source.segments,
            placeholders: source.placeholders,
            schema,
            strict_args,
        }
    }

    /// Literal text segments, one more than there are placeholders
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// The argument record shape this template requires
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Render with a dynamic argument record
    ///
    /// The record is checked against the schema first, so a missing or
    /// wrongly typed argument fails without producing partial output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typed_template::{args, compile, TemplateError};
    ///
    /// let template = compile("Dear {name:string}, have a great day {name:string}").unwrap();
    /// assert_eq!(
    ///     template.render(&args! { name: "Bob" }).unwrap(),
    ///     "Dear Bob, have a great day Bob"
    /// );
    /// assert_eq!(
    ///     template.render(&args! {}),
    ///     Err(TemplateError::missing_argument("name"))
    /// );
    /// ```
    pub fn render(&self, args: &Args) -> Result<String, TemplateError> {
        self.schema.check(args, self.strict_args)?;
        self.substitute(|name| args.get(name))
    }

    /// Walk segments left to right, appending each placeholder's value
    ///
    /// Every looked-up value is checked against its schema kind.
    pub(crate) fn substitute<V, F>(&self, mut lookup: F) -> Result<String, TemplateError>
    where
        V: Borrow<Value>,
        F: FnMut(&str) -> Option<V>,
    {
        let mut out = String::new();

        for (i, segment) in self.segments.iter().enumerate() {
            out.push_str(segment);
            if let Some(placeholder) = self.placeholders.get(i) {
                let name = placeholder.name();
                let value = lookup(name).ok_or_else(|| TemplateError::missing_argument(name))?;
                let value = value.borrow();
                if let Some(field) = self.schema.get(name) {
                    if !value.is_kind(&field.kind) {
                        return Err(TemplateError::type_mismatch(name, field.kind, value.kind()));
                    }
                }
                out.push_str(&value.to_string());
            }
        }

        Ok(out)
    }
}

/// Prints the template back in source form, braces escaped
impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            f.write_str(&segment.replace('{', "{{").replace('}', "}}"))?;
            if let Some(placeholder) = self.placeholders.get(i) {
                write!(f, "{{{}}}", placeholder)?;
            }
        }
        Ok(())
    }
}
