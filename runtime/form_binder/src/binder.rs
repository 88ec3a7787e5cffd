use std::any::type_name;

use serde::Deserialize;
use tracing_log_error::log_error;

use crate::de::{KeyedDeserializer, Source};
use crate::errors::BindError;
use crate::{BinderConfig, FormValues, RouteParams};

/// Bind form values (and, optionally, route parameters) into typed destinations.
///
/// # Sections
///
/// - [Example](#example)
/// - [Key syntax](#key-syntax)
/// - [Supported types](#supported-types)
/// - [Missing and malformed values](#missing-and-malformed-values)
///
/// # Example
///
/// ```rust
/// use form_binder::{Binder, FormValues};
///
/// #[derive(serde::Deserialize, Debug, Default, PartialEq)]
/// #[allow(non_snake_case)]
/// pub struct User {
///     Name: String,
/// }
///
/// let form = FormValues::parse(
///     b"id=123&isok=true&ft=1.2&ol[0]=1&ol[1]=2&ul[]=str&ul[]=array&user.Name=astaxie",
/// );
/// let binder = Binder::new(&form);
///
/// let mut id = 0i32;
/// binder.bind(&mut id, "id").unwrap();
/// assert_eq!(id, 123);
///
/// let mut isok = false;
/// binder.bind(&mut isok, "isok").unwrap();
/// assert!(isok);
///
/// let mut ft = 0f64;
/// binder.bind(&mut ft, "ft").unwrap();
/// assert_eq!(ft, 1.2);
///
/// let mut ol: Vec<i32> = Vec::with_capacity(2);
/// binder.bind(&mut ol, "ol").unwrap();
/// assert_eq!(ol, [1, 2]);
///
/// let mut ul: Vec<String> = Vec::new();
/// binder.bind(&mut ul, "ul").unwrap();
/// assert_eq!(ul, ["str", "array"]);
///
/// let mut user = User::default();
/// binder.bind(&mut user, "user").unwrap();
/// assert_eq!(user.Name, "astaxie");
/// ```
///
/// # Key syntax
///
/// | Pattern        | Meaning                                          |
/// |----------------|--------------------------------------------------|
/// | `key`          | scalar value                                     |
/// | `key[N]`       | element `N` of a sequence                        |
/// | `key[]`        | sequence element, appended in encounter order    |
/// | `key[N].field` | field of the struct stored at position `N`       |
/// | `key.Field`    | struct field, matched by its exact name          |
/// | `key[literal]` | map entry, `literal` is bound as the map key     |
///
/// # Supported types
///
/// The destination must implement [`serde::Deserialize`].
///
/// - Numbers (`i8`..`i128`, `u8`..`u128`, `f32`, `f64`), parsed in base 10.
/// - Strings (`String`, `&str`, `Cow<'_, str>`) and `char`.
/// - `bool`: `true`, `on` and `1` (case-insensitive, surrounding whitespace ignored) are `true`,
///   everything else is `false`.
/// - Unit-only enums, matched on the variant name.
/// - Sequences (e.g. `Vec<T>`), whose elements can be structs (`users[0].Name`).
/// - Maps (e.g. `HashMap<K, V>`), whose keys and values are bound from a single string each.
/// - Structs with named fields, whose fields are bound from a single string each.
/// - Pointers: `Box<T>`, `Rc<T>`, `Arc<T>` and `Option<T>`. An `Option<T>` is never null:
///   it is always bound to `Some`, holding the zero value of `T` if there is no data for `key`.
///   `Box<T>`, `Rc<T>` and `Arc<T>` are indistinguishable from `T` itself, so a top-level
///   `Box<u32>` with no value for `key` fails just like a `u32` would.
///
/// Tuples, tuple structs and enum variants carrying data are not supported.
///
/// # Missing and malformed values
///
/// Binding is strict only at the top level. If the destination is a scalar and there is no
/// non-empty value for `key`, [`Binder::bind`] fails and the destination is left untouched.
///
/// Everything else is best-effort:
///
/// - a value that can't be parsed into its target type is bound to the type's zero value;
/// - struct fields without a matching key are bound to their zero value;
/// - keys that don't match any field, or that don't follow the syntax, are skipped;
/// - gaps in sequence indices are filled with zero values.
///
/// ```rust
/// use form_binder::{Binder, FormValues};
///
/// let form = FormValues::parse(b"ids[0]=1&ids[1]=oops&ids[3]=4");
/// let ids: Vec<u32> = Binder::new(&form).bind_value("ids").unwrap();
/// assert_eq!(ids, [1, 0, 0, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Binder<'f> {
    form: &'f FormValues,
    route_params: Option<&'f RouteParams>,
    config: BinderConfig,
}

impl<'f> Binder<'f> {
    /// Create a binder over the given form values, with the default [`BinderConfig`].
    pub fn new(form: &'f FormValues) -> Self {
        Self {
            form,
            route_params: None,
            config: BinderConfig::default(),
        }
    }

    /// Consult `route_params` before the form values when looking up scalars by key.
    pub fn with_route_params(mut self, route_params: &'f RouteParams) -> Self {
        self.route_params = Some(route_params);
        self
    }

    /// Use a custom [`BinderConfig`].
    pub fn with_config(mut self, config: BinderConfig) -> Self {
        self.config = config;
        self
    }

    /// The route parameter named `key`, if set and non-empty.
    pub fn param(&self, key: &str) -> Option<&'f str> {
        self.source().param(key)
    }

    /// The route parameter named `key` if set and non-empty, the first form value
    /// for `key` otherwise.
    ///
    /// Empty values are reported as missing.
    pub fn query(&self, key: &str) -> Option<&'f str> {
        self.source().query(key)
    }

    /// Bind the value found at `key` into `dest`.
    ///
    /// `dest` is only written to if the bind succeeds.
    /// Check out [`Binder`]'s documentation for the supported key syntax and types.
    ///
    /// The destination must be a mutable reference, binding into a value doesn't compile:
    ///
    /// ```rust,compile_fail
    /// use form_binder::{Binder, FormValues};
    ///
    /// let form = FormValues::parse(b"id=1");
    /// let id = 0u32;
    /// Binder::new(&form).bind(id, "id").unwrap();
    /// ```
    pub fn bind<T>(&self, dest: &mut T, key: &str) -> Result<(), BindError>
    where
        T: Deserialize<'f>,
    {
        *dest = self.bind_value(key)?;
        Ok(())
    }

    /// Bind the value found at `key` into a new `T`.
    ///
    /// It behaves like [`Binder::bind`], returning the bound value instead of
    /// writing it into a destination.
    pub fn bind_value<T>(&self, key: &str) -> Result<T, BindError>
    where
        T: Deserialize<'f>,
    {
        tracing::trace!(key, destination = type_name::<T>(), "Binding form values");
        let deserializer = KeyedDeserializer::top_level(self.source(), key);
        serde_path_to_error::deserialize(deserializer).map_err(|e| {
            let e = BindError::new(key, e);
            log_error!(e, level: tracing::Level::DEBUG, "Failed to bind form values");
            e
        })
    }

    fn source(&self) -> Source<'f> {
        Source {
            form: self.form,
            route_params: self.route_params,
            config: self.config,
        }
    }
}
