use std::fmt;

/// Runtime kind of a captured field value, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
    Float,
    Bool,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Str => "string",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// A field's runtime value, narrowed to the closed set of supported kinds.
///
/// Rules dispatch on this variant instead of on the concrete Rust type, so
/// every kind a rule can see is spelled out here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Str(_) => FieldKind::Str,
            FieldValue::Int(_) => FieldKind::Int,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Bool(_) => FieldKind::Bool,
        }
    }
}

/// Default rendering; the `in` rule compares against this.
impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Conversion from a concrete field type to [`FieldValue`].
///
/// The generated [`Reflect`] impls call this to capture each annotated
/// field, so annotating a field of an unsupported type is a compile error.
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

macro_rules! impl_int_value {
    ($($ty:ty),*) => {$(
        impl AsFieldValue for $ty {
            fn as_field_value(&self) -> FieldValue<'_> {
                FieldValue::Int(i64::from(*self))
            }
        }
    )*};
}

impl_int_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_float_value {
    ($($ty:ty),*) => {$(
        impl AsFieldValue for $ty {
            fn as_field_value(&self) -> FieldValue<'_> {
                FieldValue::Float(f64::from(*self))
            }
        }
    )*};
}

impl_float_value!(f32, f64);

/// One field of a record, derived transiently during a validation call.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Field name as declared.
    pub name: &'static str,
    /// Whether the field is `pub`. Annotated non-public fields are rejected
    /// by the walker without being evaluated.
    pub exported: bool,
    /// Raw annotation string; empty means the field is not validated.
    pub annotation: &'static str,
    /// Captured value; `None` for unannotated or non-public fields.
    pub value: Option<FieldValue<'a>>,
}

/// What a value looks like to the validator.
#[derive(Debug, Clone)]
pub enum Shape<'a> {
    /// A record with its fields in declaration order.
    Record(Vec<Field<'a>>),
    /// A single scalar. Scalars cannot be validated as records.
    Scalar(FieldValue<'a>),
}

/// Runtime view of a value for validation.
///
/// Usually generated with `#[derive(Reflect)]`; scalar impls exist so that
/// passing a non-record to [`validate`](crate::validate) is expressible and
/// fails cleanly.
pub trait Reflect {
    fn reflect(&self) -> Shape<'_>;
}

macro_rules! impl_scalar_reflect {
    ($($ty:ty),*) => {$(
        impl Reflect for $ty {
            fn reflect(&self) -> Shape<'_> {
                Shape::Scalar(self.as_field_value())
            }
        }
    )*};
}

impl_scalar_reflect!(str, String, bool, i8, i16, i32, i64, u8, u16, u32, f32, f64);
