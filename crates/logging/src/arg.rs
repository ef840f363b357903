//! crates/logging/src/arg.rs
//! Dynamically-typed values accepted as messages and trailing extras.

use std::borrow::Cow;
use std::fmt;

use crate::error::InvalidMessageTypeError;

/// A single argument to a logging call.
///
/// Only [`LogArg::Str`] is accepted as the message itself; every variant may
/// appear among the extra values, which are rendered verbatim through
/// [`Display`](fmt::Display).
#[derive(Clone, Debug, PartialEq)]
pub enum LogArg<'a> {
    /// Text.
    Str(Cow<'a, str>),
    /// Signed integer.
    Integer(i64),
    /// Unsigned integer too wide for [`LogArg::Integer`].
    Unsigned(u64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Absence of a value.
    Null,
}

impl LogArg<'_> {
    /// Name of the argument's kind as reported in errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Integer(_) | Self::Unsigned(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }

    /// Returns the text when the argument is a string.
    pub fn as_message(&self) -> Result<&str, InvalidMessageTypeError> {
        match self {
            Self::Str(text) => Ok(&**text),
            other => Err(InvalidMessageTypeError::new(other.kind())),
        }
    }
}

impl fmt::Display for LogArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl<'a> From<&'a str> for LogArg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for LogArg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for LogArg<'_> {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for LogArg<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Str(value)
    }
}

impl From<char> for LogArg<'_> {
    fn from(value: char) -> Self {
        Self::Str(Cow::Owned(value.to_string()))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogArg<'_> {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for LogArg<'_> {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<usize> for LogArg<'_> {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<isize> for LogArg<'_> {
    fn from(value: isize) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f32> for LogArg<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for LogArg<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LogArg<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<()> for LogArg<'_> {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<'a, T> From<Option<T>> for LogArg<'a>
where
    T: Into<LogArg<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
