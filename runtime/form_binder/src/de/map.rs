use serde::de::{DeserializeSeed, MapAccess};

use super::LiteralDeserializer;
use crate::errors::DeserializationError;
use crate::key::map_key;
use crate::FormValues;

/// The entries of a map bound from `prefix[literal]` keys.
///
/// Both the literal and the first value of each key are bound by literal.
/// If two literals bind to the same map key, the destination map decides which one is kept:
/// for the standard maps, the later entry overwrites the earlier one.
pub(super) struct MapEntries<'de> {
    entries: std::vec::IntoIter<(&'de str, &'de str)>,
    value: Option<&'de str>,
}

impl<'de> MapEntries<'de> {
    pub(super) fn from_form(form: &'de FormValues, prefix: &str) -> Self {
        let entries: Vec<_> = form
            .iter()
            .filter_map(|(key, values)| {
                let literal = map_key(prefix, key)?;
                Some((literal, values.first().map_or("", String::as_str)))
            })
            .collect();
        Self {
            entries: entries.into_iter(),
            value: None,
        }
    }
}

impl<'de> MapAccess<'de> for MapEntries<'de> {
    type Error = DeserializationError;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.entries.next() {
            Some((literal, value)) => {
                self.value = Some(value);
                seed.deserialize(LiteralDeserializer::new(literal)).map(Some)
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
        Some(self.entries.len())
    }
}
