//! Typed argument records bound to compiled templates

use std::fmt;

use pretty_assertions::assert_eq;

use typed_template::{
    custom_arg_value, template_args, ArgsOf, Null, TemplateArgs, TemplateCompiler, TemplateError,
    TypeRegistry, TypedTemplate, Undefined, ValueKind,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    x: i32,
    y: i32,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

custom_arg_value!(Coordinates);

template_args! {
    #[derive(Debug, Clone)]
    pub struct Treasure {
        pub location: Coordinates,
    }
}

template_args! {
    pub struct Defaults {
        pub num: f64,
        pub str: String,
        pub bool: bool,
        pub n: Null,
        pub u: Undefined,
    }
}

template_args! {
    struct Greeting {
        /// Person being greeted
        name: String,
    }
}

fn compiler() -> TemplateCompiler {
    TemplateCompiler::new(TypeRegistry::new().with_type::<Coordinates>("coords"))
}

#[test]
fn test_custom_field_kind() {
    assert_eq!(
        Treasure::fields(),
        vec![("location", ValueKind::custom::<Coordinates>())]
    );
}

#[test]
fn test_typed_custom_render() {
    let template: TypedTemplate<Treasure> = compiler()
        .typed("The treasure can be found at {location:coords}")
        .expect("Should bind");

    let text = template
        .render(&Treasure {
            location: Coordinates { x: 123, y: 456 },
        })
        .expect("Should render");
    assert_eq!(text, "The treasure can be found at 123, 456");
}

#[test]
fn test_typed_default_tags() {
    let template: TypedTemplate<Defaults> = compiler()
        .typed("{num:number} {str:string} {bool:boolean} {n:null} {u:undefined}")
        .expect("Should bind");

    let text = template
        .render(&Defaults {
            num: 123.0,
            str: "Hello".to_string(),
            bool: false,
            n: Null,
            u: Undefined,
        })
        .expect("Should render");
    assert_eq!(text, "123 Hello false null undefined");
}

#[test]
fn test_typed_repeated_name() {
    let template: TypedTemplate<Greeting> = compiler()
        .typed("Dear {name:string}, have a great day {name:string}")
        .expect("Should bind");
    let text = template
        .render(&Greeting {
            name: "Bob".to_string(),
        })
        .expect("Should render");
    assert_eq!(text, "Dear Bob, have a great day Bob");
}

#[test]
fn test_typed_rejects_wrong_custom_tag() {
    let err = compiler()
        .typed::<Treasure>("at {location:string}")
        .unwrap_err();
    assert_eq!(
        err,
        TemplateError::type_mismatch(
            "location",
            ValueKind::String,
            ValueKind::custom::<Coordinates>()
        )
    );
}

#[test]
fn test_typed_from_dynamic_template() {
    let template = compiler().parse("{name:string}!").expect("Should compile");
    let typed = TypedTemplate::<Greeting>::new(template.clone()).expect("Should bind");
    assert_eq!(typed.template(), &template);

    let record: ArgsOf<TypedTemplate<Greeting>> = Greeting {
        name: "Ada".to_string(),
    };
    assert_eq!(typed.render(&record).unwrap(), "Ada!");
    assert_eq!(typed.into_inner(), template);
}
