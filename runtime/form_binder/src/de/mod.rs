//! The `serde` deserializers that drive a bind.
//!
//! The destination's `Deserialize` implementation acts as the type descriptor: every
//! `deserialize_*` call it issues selects the sub-binder for that shape.
//! There are two entry points:
//!
//! - [`KeyedDeserializer`] (by-key dispatch) resolves a key against the full set of form values.
//!   Composite shapes scan the form for keys that extend it (`key[0]`, `key.Field`, `key[name]`).
//! - [`LiteralDeserializer`] (by-literal dispatch) binds a single, already-extracted string.
//!   It also produces zero values, by binding the empty string.
use crate::{BinderConfig, FormValues, RouteParams};

mod fields;
mod keyed;
mod literal;
mod map;
mod slice;

pub(crate) use keyed::KeyedDeserializer;
pub(crate) use literal::LiteralDeserializer;

/// Everything a by-key lookup may consult.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Source<'f> {
    pub(crate) form: &'f FormValues,
    pub(crate) route_params: Option<&'f RouteParams>,
    pub(crate) config: BinderConfig,
}

impl<'f> Source<'f> {
    /// The value of a route parameter, if it's set and non-empty.
    pub(crate) fn param(&self, key: &str) -> Option<&'f str> {
        self.route_params
            .and_then(|params| params.get(key))
            .filter(|value| !value.is_empty())
    }

    /// The route parameter named `key` if non-empty, the first form value for `key` otherwise.
    ///
    /// Empty values are treated as missing.
    pub(crate) fn query(&self, key: &str) -> Option<&'f str> {
        self.param(key)
            .or_else(|| self.form.get(key))
            .filter(|value| !value.is_empty())
    }
}
