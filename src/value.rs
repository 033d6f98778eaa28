//! Argument values and the kinds a type tag can denote
//!
//! A [`Value`] is what a caller supplies for a placeholder; a [`ValueKind`] is
//! what a registry says a tag must hold. Custom domain types are carried as
//! [`CustomValue`] and identified by their Rust `TypeId`.

use std::any::TypeId;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Identity of a custom Rust type bound to a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomKind {
    type_id: TypeId,
    type_name: &'static str,
}

impl CustomKind {
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// The value type a tag denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Null,
    Undefined,
    Custom(CustomKind),
}

impl ValueKind {
    /// Kind for a custom Rust type
    pub fn custom<T: 'static>() -> Self {
        ValueKind::Custom(CustomKind::of::<T>())
    }

    /// Look up a built-in kind by its tag name
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "string" => Some(ValueKind::String),
            "number" => Some(ValueKind::Number),
            "boolean" => Some(ValueKind::Boolean),
            "null" => Some(ValueKind::Null),
            "undefined" => Some(ValueKind::Undefined),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Undefined => "undefined",
            ValueKind::Custom(kind) => kind.type_name(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

trait DisplayValue: fmt::Display + fmt::Debug + Send + Sync {}

impl<T: fmt::Display + fmt::Debug + Send + Sync + ?Sized> DisplayValue for T {}

/// A value of a custom domain type, rendered through its own `Display`
#[derive(Clone)]
pub struct CustomValue {
    kind: CustomKind,
    inner: Arc<dyn DisplayValue>,
}

impl CustomValue {
    pub fn new<T>(value: T) -> Self
    where
        T: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            kind: CustomKind::of::<T>(),
            inner: Arc::new(value),
        }
    }

    pub fn kind(&self) -> CustomKind {
        self.kind
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl fmt::Display for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

/// A single argument value
///
/// Equality compares built-in values by content. Custom values are equal only
/// when they share the same allocation, i.e. one is a clone of the other.
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
    Custom(CustomValue),
}

impl Value {
    /// Wrap a custom domain value
    pub fn custom<T>(value: T) -> Self
    where
        T: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Value::Custom(CustomValue::new(value))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Undefined => ValueKind::Undefined,
            Value::Custom(custom) => ValueKind::Custom(custom.kind()),
        }
    }

    /// Check whether this value may fill a placeholder of the given kind
    pub fn is_kind(&self, kind: &ValueKind) -> bool {
        self.kind() == *kind
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Undefined, Value::Undefined) => true,
            (Value::Custom(a), Value::Custom(b)) => Arc::ptr_eq(&a.inner, &b.inner),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => fmt_number(*n, f),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

/// Plain textual number form: integral values without a fraction, no `-0`
///
/// Magnitudes from `1e21` up and below `1e-6` switch to exponent form with a
/// signed exponent (`1e+21`, `1.5e-7`).
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => f.write_str(&exp),
        }
    } else {
        write!(f, "{}", n)
    }
}

/// Marker for the `null` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Null;

/// Marker for the `undefined` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Undefined;

impl From<Null> for Value {
    fn from(_: Null) -> Self {
        Value::Null
    }
}

impl From<Undefined> for Value {
    fn from(_: Undefined) -> Self {
        Value::Undefined
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<CustomValue> for Value {
    fn from(custom: CustomValue) -> Self {
        Value::Custom(custom)
    }
}

/// `None` fills a placeholder with `null`
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// A Rust type usable as a field of a typed argument record
///
/// Numbers are limited to types that convert to `f64` without loss, so 64-bit
/// integers must be converted explicitly:
///
/// ```compile_fail
/// use typed_template::Value;
///
/// let _ = Value::from(9_007_199_254_740_993_i64);
/// ```
pub trait ArgValue {
    /// Kind this type satisfies
    fn kind() -> ValueKind;

    fn to_value(&self) -> Value;
}

impl ArgValue for String {
    fn kind() -> ValueKind {
        ValueKind::String
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ArgValue for bool {
    fn kind() -> ValueKind {
        ValueKind::Boolean
    }

    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }
}

impl ArgValue for Null {
    fn kind() -> ValueKind {
        ValueKind::Null
    }

    fn to_value(&self) -> Value {
        Value::Null
    }
}

impl ArgValue for Undefined {
    fn kind() -> ValueKind {
        ValueKind::Undefined
    }

    fn to_value(&self) -> Value {
        Value::Undefined
    }
}

macro_rules! number_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }

            impl ArgValue for $ty {
                fn kind() -> ValueKind {
                    ValueKind::Number
                }

                fn to_value(&self) -> Value {
                    Value::Number(*self as f64)
                }
            }
        )*
    };
}

number_value!(f64, f32, i8, i16, i32, u8, u16, u32);

/// Make custom types usable as fields of a [`template_args!`](crate::template_args) record
///
/// The type must be `Clone + Display + Debug + Send + Sync + 'static`.
#[macro_export]
macro_rules! custom_arg_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ArgValue for $ty {
                fn kind() -> $crate::ValueKind {
                    $crate::ValueKind::custom::<$ty>()
                }

                fn to_value(&self) -> $crate::Value {
                    $crate::Value::custom(::std::clone::Clone::clone(self))
                }
            }
        )+
    };
}

/// A dynamic argument record: placeholder name to value
///
/// Records compare equal under [`Value`]'s equality, so custom values must be
/// clones of each other to match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: BTreeMap<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set an argument, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Argument names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Args::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}

/// Build an [`Args`] record from `name: value` pairs
///
/// ```rust
/// use typed_template::{args, Null};
///
/// let args = args! { name: "Bob", age: 42, nickname: Null };
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($name:ident : $value:expr),+ $(,)?) => {{
        let mut args = $crate::Args::new();
        $( args.insert(::std::stringify!($name), $value); )+
        args
    }};
}
