use serde::de::{DeserializeSeed, SeqAccess};

use super::{KeyedDeserializer, LiteralDeserializer, Source};
use crate::errors::DeserializationError;
use crate::key::KeySyntax;

/// One element of a sequence under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot<'f> {
    /// A gap between indexed elements.
    Zero,
    /// `prefix[N]`: bound by key, so that the element can itself be a composite
    /// (e.g. `users[0].Name`).
    Keyed(&'f str),
    /// A value found under `prefix[]`.
    Literal(&'f str),
}

/// The elements of a sequence bound from `prefix[N]` and `prefix[]` keys.
///
/// Indexed elements are placed at their position, gaps are filled with zero values.
/// Unindexed elements are appended after the last indexed slot, in encounter order.
pub(super) struct SliceAccess<'f> {
    source: Source<'f>,
    slots: std::vec::IntoIter<Slot<'f>>,
}

impl<'f> SliceAccess<'f> {
    pub(super) fn new(source: Source<'f>, prefix: &str) -> Self {
        Self {
            source,
            slots: plan_slots(source, prefix).into_iter(),
        }
    }
}

fn plan_slots<'f>(source: Source<'f>, prefix: &str) -> Vec<Slot<'f>> {
    let mut indexed = Vec::new();
    let mut unindexed = Vec::new();
    let mut len = 0;
    for (key, values) in source.form.iter() {
        match KeySyntax::parse(prefix, key) {
            KeySyntax::Indexed { index, element_key } => {
                if index > source.config.max_slice_index {
                    tracing::debug!(
                        key,
                        max_slice_index = source.config.max_slice_index,
                        "Sequence index is above the configured limit, skipping it"
                    );
                    continue;
                }
                len = len.max(index.saturating_add(1));
                indexed.push((index, element_key));
            }
            KeySyntax::Unindexed => {
                unindexed.extend(values.iter().map(|value| Slot::Literal(value.as_str())));
            }
            KeySyntax::Bracketed => {
                tracing::debug!(key, "Sequence index is not a non-negative integer, skipping it");
            }
            KeySyntax::Scalar | KeySyntax::FieldAccess { .. } | KeySyntax::Unrelated => {}
        }
    }

    let mut slots = Vec::with_capacity(len + unindexed.len());
    slots.resize(len, Slot::Zero);
    for (index, element_key) in indexed {
        slots[index] = Slot::Keyed(element_key);
    }
    slots.extend(unindexed);
    slots
}

impl<'f> SeqAccess<'f> for SliceAccess<'f> {
    type Error = DeserializationError;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error>
    where
        T: DeserializeSeed<'f>,
    {
        let Some(slot) = self.slots.next() else {
            return Ok(None);
        };
        match slot {
            Slot::Zero => seed.deserialize(LiteralDeserializer::zero()),
            Slot::Keyed(element_key) => {
                seed.deserialize(KeyedDeserializer::nested(self.source, element_key))
            }
            Slot::Literal(value) => seed.deserialize(LiteralDeserializer::new(value)),
        }
        .map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.slots.len())
    }
}
