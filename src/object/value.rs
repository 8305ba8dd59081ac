//! Native value representation for live property objects.

use std::fmt;
use std::sync::Arc;

use crate::{Error, Result};

/// Native value stored in a property slot of a live object.
///
/// `PropValue` is the opaque representation a [`PropertyObject`](crate::PropertyObject)
/// traffics in. Typed adapters never hand these to callers directly; they coerce through
/// [`PropType`] on every read and write. The only variant a caller will commonly
/// construct by hand is [`PropValue::Undefined`], which doubles as the "absent property"
/// marker on the read path.
///
/// # Value Mapping
///
/// | View type | PropValue variant |
/// |-----------|-------------------|
/// | `bool` | [`PropValue::Bool`] |
/// | `i32` | [`PropValue::I32`] |
/// | `i64` | [`PropValue::I64`] |
/// | `f64` | [`PropValue::F64`] |
/// | `String` | [`PropValue::Str`] |
///
/// Numeric variants convert into each other on read when the conversion is lossless;
/// anything lossy is an [`Error::Coercion`].
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// No value stored.
    ///
    /// Returned by [`PropertyObject::get_property`](crate::PropertyObject::get_property)
    /// for names that are not currently set. Distinguished from [`PropValue::Null`],
    /// which is a present property holding an explicit null.
    Undefined,

    /// Explicit null.
    Null,

    /// Boolean value.
    Bool(bool),

    /// 32-bit signed integer.
    I32(i32),

    /// 64-bit signed integer.
    I64(i64),

    /// 64-bit floating point.
    F64(f64),

    /// Immutable string value.
    ///
    /// Stored as `Arc<str>` so that cloning a value out of a shared object does not copy
    /// the string payload.
    Str(Arc<str>),
}

impl PropValue {
    /// Returns `true` if this is [`PropValue::Undefined`].
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, PropValue::Undefined)
    }

    /// Static name of this value's variant, used in coercion error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            PropValue::Undefined => "undefined",
            PropValue::Null => "null",
            PropValue::Bool(_) => "bool",
            PropValue::I32(_) => "i32",
            PropValue::I64(_) => "i64",
            PropValue::F64(_) => "f64",
            PropValue::Str(_) => "string",
        }
    }

    fn coercion_to(&self, to: &'static str) -> Error {
        Error::Coercion {
            from: self.type_name(),
            to,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Undefined => write!(f, "undefined"),
            PropValue::Null => write!(f, "null"),
            PropValue::Bool(v) => write!(f, "{v}"),
            PropValue::I32(v) => write!(f, "{v}"),
            PropValue::I64(v) => write!(f, "{v}"),
            PropValue::F64(v) => write!(f, "{v}"),
            PropValue::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(Arc::from(value))
    }
}

/// Two-way coercion between [`PropValue`] and a concrete view type.
///
/// This is the type descriptor a [`LiveMapView`](crate::LiveMapView) is parameterized
/// with: `from_prop` is applied to every value read out of the object, `into_prop` to
/// every value written into it. Implementations must be strict — a failed conversion is
/// reported as [`Error::Coercion`] rather than silently truncated or defaulted.
pub trait PropType: Sized {
    /// Coerces a stored native value into this type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`] if the value's variant does not convert losslessly.
    fn from_prop(value: PropValue) -> Result<Self>;

    /// Converts this value into the object's native representation.
    fn into_prop(self) -> PropValue;
}

impl PropType for bool {
    fn from_prop(value: PropValue) -> Result<Self> {
        match value {
            PropValue::Bool(v) => Ok(v),
            other => Err(other.coercion_to("bool")),
        }
    }

    fn into_prop(self) -> PropValue {
        PropValue::Bool(self)
    }
}

impl PropType for i32 {
    fn from_prop(value: PropValue) -> Result<Self> {
        match value {
            PropValue::I32(v) => Ok(v),
            PropValue::I64(v) => i32::try_from(v).map_err(|_| PropValue::I64(v).coercion_to("i32")),
            // Lossless only: the float must be integral and in range
            PropValue::F64(v) if v.fract() == 0.0 && v >= f64::from(i32::MIN) && v <= f64::from(i32::MAX) => {
                Ok(v as i32)
            }
            other => Err(other.coercion_to("i32")),
        }
    }

    fn into_prop(self) -> PropValue {
        PropValue::I32(self)
    }
}

impl PropType for i64 {
    fn from_prop(value: PropValue) -> Result<Self> {
        match value {
            PropValue::I64(v) => Ok(v),
            PropValue::I32(v) => Ok(i64::from(v)),
            // Integral and strictly below 2^63: the cast is exact, saturation never kicks in
            PropValue::F64(v)
                if v.fract() == 0.0 && v >= -9_223_372_036_854_775_808.0 && v < 9_223_372_036_854_775_808.0 =>
            {
                Ok(v as i64)
            }
            other => Err(other.coercion_to("i64")),
        }
    }

    fn into_prop(self) -> PropValue {
        PropValue::I64(self)
    }
}

impl PropType for f64 {
    fn from_prop(value: PropValue) -> Result<Self> {
        match value {
            PropValue::F64(v) => Ok(v),
            PropValue::I32(v) => Ok(f64::from(v)),
            // f64 holds integers exactly up to 2^53
            PropValue::I64(v) if v.unsigned_abs() <= (1u64 << 53) => Ok(v as f64),
            other => Err(other.coercion_to("f64")),
        }
    }

    fn into_prop(self) -> PropValue {
        PropValue::F64(self)
    }
}

impl PropType for String {
    fn from_prop(value: PropValue) -> Result<Self> {
        match value {
            PropValue::Str(v) => Ok(v.to_string()),
            other => Err(other.coercion_to("string")),
        }
    }

    fn into_prop(self) -> PropValue {
        PropValue::Str(Arc::from(self))
    }
}

/// Identity coercion for untyped access to an object's raw values.
impl PropType for PropValue {
    fn from_prop(value: PropValue) -> Result<Self> {
        Ok(value)
    }

    fn into_prop(self) -> PropValue {
        self
    }
}
