use serde::de::{value::BorrowedStrDeserializer, DeserializeSeed, MapAccess};

use super::LiteralDeserializer;
use crate::errors::DeserializationError;
use crate::key::KeySyntax;
use crate::FormValues;

/// Feeds every declared field of a struct to its `Deserialize` implementation.
///
/// Fields without a matching form key are bound from the empty string, i.e. to their zero value,
/// so the struct is always fully formed.
pub(super) struct FieldsAccess<'de> {
    fields: std::iter::Zip<std::slice::Iter<'static, &'static str>, std::vec::IntoIter<&'de str>>,
    value: Option<&'de str>,
}

impl<'de> FieldsAccess<'de> {
    /// Every field set to its zero value.
    pub(super) fn zeroed(fields: &'static [&'static str]) -> Self {
        Self::new(fields, vec![""; fields.len()])
    }

    /// Collect the values of `prefix.Field` keys.
    ///
    /// Only the first value of the first key seen for a field is bound; later entries for the
    /// same field are ignored. Keys that don't match a declared field are skipped.
    pub(super) fn from_form(
        form: &'de FormValues,
        prefix: &str,
        fields: &'static [&'static str],
    ) -> Self {
        let mut values: Vec<Option<&'de str>> = vec![None; fields.len()];
        for (key, key_values) in form.iter() {
            let KeySyntax::FieldAccess { field } = KeySyntax::parse(prefix, key) else {
                continue;
            };
            let Some(position) = fields.iter().position(|declared| *declared == field) else {
                tracing::trace!(key, "No struct field matches the key, skipping it");
                continue;
            };
            if values[position].is_none() {
                values[position] = Some(key_values.first().map_or("", String::as_str));
            }
        }
        Self::new(
            fields,
            values.into_iter().map(Option::unwrap_or_default).collect(),
        )
    }

    fn new(fields: &'static [&'static str], values: Vec<&'de str>) -> Self {
        Self {
            fields: fields.iter().zip(values),
            value: None,
        }
    }
}

impl<'de> MapAccess<'de> for FieldsAccess<'de> {
    type Error = DeserializationError;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.fields.next() {
            Some((&field, value)) => {
                self.value = Some(value);
                seed.deserialize(BorrowedStrDeserializer::<DeserializationError>::new(field))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(LiteralDeserializer::new(value)),
            None => Err(serde::de::Error::custom("value is missing")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.fields.len())
    }
}
