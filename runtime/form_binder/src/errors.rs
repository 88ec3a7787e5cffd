//! Errors that can happen when binding form values into a typed destination.
use std::fmt::Display;

/// The error returned by [`Binder::bind`] and [`Binder::bind_value`] when the bind fails.
///
/// Binding is strict only at the top level: malformed values nested inside a sequence,
/// a map or a struct are replaced by their zero value and never surface as a `BindError`.
/// A `BindError` is returned when:
///
/// - the destination is a scalar and there is no (non-empty) value for the requested key;
/// - the destination type can't be represented as form values (e.g. a tuple).
///
/// [`Binder::bind`]: crate::Binder::bind
/// [`Binder::bind_value`]: crate::Binder::bind_value
#[derive(Debug)]
pub struct BindError {
    key: String,
    path: String,
    kind: ErrorKind,
}

impl BindError {
    pub(crate) fn new(key: &str, e: serde_path_to_error::Error<DeserializationError>) -> Self {
        let path = e.path().to_string();
        Self {
            key: key.to_owned(),
            path,
            kind: e.into_inner().kind,
        }
    }

    /// The top-level key that was passed to [`Binder::bind`](crate::Binder::bind).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Where, inside the destination type, the failure happened.
    ///
    /// It's `.` when the failure is about the destination itself.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Retrieve the details of the error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Display for BindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path == "." {
            write!(f, "Failed to bind `{}`. {}", self.key, self.kind)
        } else {
            write!(
                f,
                "Failed to bind `{}` (at `{}`). {}",
                self.key, self.path, self.kind
            )
        }
    }
}

impl std::error::Error for BindError {}

/// The kinds of errors that can happen when binding form values.
///
/// This type is obtained through [`BindError::kind`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// There is no value for the requested key.
    ///
    /// Only returned for scalar destinations (numbers, strings, booleans, unit-only enums)
    /// when neither the route parameters nor the form values have a non-empty entry
    /// for the key passed to [`Binder::bind`](crate::Binder::bind).
    #[error("There is no value for `{key}`, neither in the route parameters nor in the form values")]
    EmptyValue {
        /// The key that was looked up.
        key: String,
    },

    /// The destination (or one of its components) can't be bound from form values.
    ///
    /// This error kind is caused by programmer errors: tuples, tuple structs and enum variants
    /// that carry data have no representation in the supported key syntax.
    #[error(
        "`{name}` is not a supported destination type. \
        Form values can be bound into numbers, strings, booleans, unit-only enums, \
        sequences, maps, structs with named fields and pointers to any of them."
    )]
    UnsupportedType {
        /// The name of the unsupported type.
        name: &'static str,
    },

    /// Catch-all variant for errors raised by the destination's `Deserialize` implementation.
    #[error("{0}")]
    Message(String),
}

/// The error type used by the binder's `serde` deserializers.
///
/// It is converted into a [`BindError`] before reaching the caller.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub(crate) struct DeserializationError {
    pub(crate) kind: ErrorKind,
}

impl DeserializationError {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn empty_value(key: &str) -> Self {
        Self::new(ErrorKind::EmptyValue {
            key: key.to_owned(),
        })
    }

    #[track_caller]
    pub(crate) fn unsupported_type(name: &'static str) -> Self {
        Self::new(ErrorKind::UnsupportedType { name })
    }
}

impl serde::de::Error for DeserializationError {
    #[inline]
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Self::new(ErrorKind::Message(msg.to_string()))
    }
}
