//! Statically typed argument records
//!
//! A typed record is a plain Rust struct whose fields are the template's
//! arguments. The struct's declared shape is checked against the template's
//! schema once, in [`TypedTemplate::new`]. Records built by
//! [`template_args!`](crate::template_args) then always render; a hand-written
//! [`TemplateArgs`] impl that breaks its own declaration fails at render with
//! `MissingArgument` or `TypeMismatch`.

use std::fmt;
use std::marker::PhantomData;

use crate::value::{Args, Value, ValueKind};

use super::error::TemplateError;
use super::render::Template;

/// A struct usable as a template's argument record
///
/// `value` should return `Some` value of the declared kind for every name
/// listed by `fields`. The [`template_args!`](crate::template_args) macro
/// derives both.
pub trait TemplateArgs {
    /// Declared field names and kinds
    fn fields() -> Vec<(&'static str, ValueKind)>;

    fn value(&self, name: &str) -> Option<Value>;
}

/// A template bound to the argument record type `A`
pub struct TypedTemplate<A> {
    template: Template,
    _args: PhantomData<fn(&A)>,
}

impl<A: TemplateArgs> TypedTemplate<A> {
    /// Bind a compiled template to `A`, checking the shapes match exactly
    pub fn new(template: Template) -> Result<Self, TemplateError> {
        template.schema().check_fields(&A::fields())?;
        Ok(Self {
            template,
            _args: PhantomData,
        })
    }

    /// Render with a typed record
    ///
    /// Values are still checked against the schema as they are substituted.
    pub fn render(&self, args: &A) -> Result<String, TemplateError> {
        self.template.substitute(|name| args.value(name))
    }
}

impl<A> TypedTemplate<A> {
    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn into_inner(self) -> Template {
        self.template
    }
}

impl<A> Clone for TypedTemplate<A> {
    fn clone(&self) -> Self {
        Self {
            template: self.template.clone(),
            _args: PhantomData,
        }
    }
}

impl<A> fmt::Debug for TypedTemplate<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedTemplate")
            .field("args", &std::any::type_name::<A>())
            .field("template", &self.template)
            .finish()
    }
}

/// Names the argument record type a template object renders from
pub trait HasArgs {
    type Args;
}

impl HasArgs for Template {
    type Args = Args;
}

impl<A> HasArgs for TypedTemplate<A> {
    type Args = A;
}

/// The argument record type of template object `T`
pub type ArgsOf<T> = <T as HasArgs>::Args;

/// Declare a struct and implement [`TemplateArgs`] for it
///
/// Every field type must implement [`ArgValue`](crate::ArgValue).
///
/// ```rust
/// use typed_template::{compile, template_args, TypedTemplate};
///
/// template_args! {
///     #[derive(Debug, Clone)]
///     pub struct Greeting {
///         pub name: String,
///         pub visits: u32,
///     }
/// }
///
/// let template = compile("Welcome back {name:string}, visit #{visits:number}").unwrap();
/// let greeting = TypedTemplate::<Greeting>::new(template).unwrap();
/// let text = greeting.render(&Greeting { name: "Ada".to_string(), visits: 3 }).unwrap();
/// assert_eq!(text, "Welcome back Ada, visit #3");
/// ```
#[macro_export]
macro_rules! template_args {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$field_meta])* $field_vis $field: $ty ),*
        }

        impl $crate::TemplateArgs for $name {
            fn fields() -> ::std::vec::Vec<(&'static str, $crate::ValueKind)> {
                ::std::vec![
                    $( (::std::stringify!($field), <$ty as $crate::ArgValue>::kind()) ),*
                ]
            }

            fn value(&self, name: &str) -> ::std::option::Option<$crate::Value> {
                match name {
                    $( ::std::stringify!($field) => ::std::option::Option::Some(
                        $crate::ArgValue::to_value(&self.$field)
                    ), )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;
    use crate::template::compiler::TemplateCompiler;
    use crate::value::Null;

    template_args! {
        struct Letter {
            name: String,
            age: f64,
        }
    }

    template_args! {
        struct Blank {}
    }

    template_args! {
        struct Optional {
            name: Null,
        }
    }

    fn compiler() -> TemplateCompiler {
        TemplateCompiler::new(TypeRegistry::new())
    }

    #[test]
    fn test_fields_listed_in_declaration_order() {
        assert_eq!(
            Letter::fields(),
            vec![("name", ValueKind::String), ("age", ValueKind::Number)]
        );
        assert!(Blank::fields().is_empty());
    }

    #[test]
    fn test_typed_render() {
        let letter: TypedTemplate<Letter> = compiler()
            .typed("{name:string} is {age:number}")
            .expect("Should bind");
        let text = letter
            .render(&Letter {
                name: "Bob".to_string(),
                age: 42.0,
            })
            .expect("Should render");
        assert_eq!(text, "Bob is 42");
    }

    #[test]
    fn test_typed_missing_field() {
        let err = compiler()
            .typed::<Letter>("{name:string} {age:number} {city:string}")
            .unwrap_err();
        assert_eq!(err, TemplateError::missing_argument("city"));
    }

    #[test]
    fn test_typed_extra_field() {
        let err = compiler().typed::<Letter>("{name:string}").unwrap_err();
        assert_eq!(err, TemplateError::unexpected_argument("age"));
    }

    #[test]
    fn test_typed_kind_mismatch() {
        let err = compiler().typed::<Optional>("{name:string}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::type_mismatch("name", ValueKind::String, ValueKind::Null)
        );
    }

    #[test]
    fn test_typed_without_placeholders() {
        let blank: TypedTemplate<Blank> = compiler().typed("static").expect("Should bind");
        assert_eq!(blank.render(&Blank {}).unwrap(), "static");
    }

    /// Declares a field it never supplies
    struct Forgetful;

    impl TemplateArgs for Forgetful {
        fn fields() -> Vec<(&'static str, ValueKind)> {
            vec![("a", ValueKind::String)]
        }

        fn value(&self, _name: &str) -> Option<Value> {
            None
        }
    }

    /// Declares a string but supplies a number
    struct Mislabelled;

    impl TemplateArgs for Mislabelled {
        fn fields() -> Vec<(&'static str, ValueKind)> {
            vec![("a", ValueKind::String)]
        }

        fn value(&self, _name: &str) -> Option<Value> {
            Some(Value::Number(1.0))
        }
    }

    #[test]
    fn test_hand_written_record_missing_value() {
        let template: TypedTemplate<Forgetful> = compiler().typed("{a:string}").expect("Should bind");
        assert_eq!(
            template.render(&Forgetful),
            Err(TemplateError::missing_argument("a"))
        );
    }

    #[test]
    fn test_hand_written_record_wrong_kind() {
        let template: TypedTemplate<Mislabelled> =
            compiler().typed("{a:string}").expect("Should bind");
        assert_eq!(
            template.render(&Mislabelled),
            Err(TemplateError::type_mismatch("a", ValueKind::String, ValueKind::Number))
        );
    }

    #[test]
    fn test_args_of_names_record_type() {
        fn takes_letter(_: ArgsOf<TypedTemplate<Letter>>) {}
        fn takes_args(_: ArgsOf<Template>) {}

        takes_letter(Letter {
            name: String::new(),
            age: 0.0,
        });
        takes_args(Args::new());
    }
}
