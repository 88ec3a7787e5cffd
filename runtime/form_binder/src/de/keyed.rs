use std::any::type_name;
use std::borrow::Cow;

use serde::{de::Visitor, Deserializer};

use super::{
    fields::FieldsAccess, map::MapEntries, slice::SliceAccess, LiteralDeserializer, Source,
};
use crate::errors::DeserializationError;

macro_rules! lookup_scalar {
    ($trait_fn:ident) => {
        fn $trait_fn<V>(self, visitor: V) -> Result<V::Value, Self::Error>
        where
            V: Visitor<'f>,
        {
            self.scalar()?.$trait_fn(visitor)
        }
    };
}

macro_rules! unsupported_type {
    ($trait_fn:ident) => {
        fn $trait_fn<V>(self, _len: usize, _visitor: V) -> Result<V::Value, Self::Error>
        where
            V: Visitor<'f>,
        {
            Err(DeserializationError::unsupported_type(type_name::<
                V::Value,
            >()))
        }
    };
}

/// Binds the value found at a key (by-key dispatch).
///
/// Scalars are looked up directly; composites are assembled from the keys that extend
/// this one: `key[N]`/`key[]` for sequences, `key.Field` for structs, `key[literal]` for maps.
pub(crate) struct KeyedDeserializer<'f> {
    source: Source<'f>,
    key: Cow<'f, str>,
    /// A missing scalar is an error at the top level, and a zero value everywhere else.
    top_level: bool,
}

impl<'f> KeyedDeserializer<'f> {
    pub(crate) fn top_level(source: Source<'f>, key: &str) -> Self {
        Self {
            source,
            key: Cow::Owned(key.to_owned()),
            top_level: true,
        }
    }

    pub(crate) fn nested(source: Source<'f>, key: &'f str) -> Self {
        Self {
            source,
            key: Cow::Borrowed(key),
            top_level: false,
        }
    }

    fn scalar(&self) -> Result<LiteralDeserializer<'f>, DeserializationError> {
        match self.source.query(&self.key) {
            Some(value) => Ok(LiteralDeserializer::new(value)),
            None if self.top_level => Err(DeserializationError::empty_value(&self.key)),
            None => Ok(LiteralDeserializer::zero()),
        }
    }
}

impl<'f> Deserializer<'f> for KeyedDeserializer<'f> {
    type Error = DeserializationError;

    lookup_scalar!(deserialize_any);
    lookup_scalar!(deserialize_bool);
    lookup_scalar!(deserialize_i8);
    lookup_scalar!(deserialize_i16);
    lookup_scalar!(deserialize_i32);
    lookup_scalar!(deserialize_i64);
    lookup_scalar!(deserialize_i128);
    lookup_scalar!(deserialize_u8);
    lookup_scalar!(deserialize_u16);
    lookup_scalar!(deserialize_u32);
    lookup_scalar!(deserialize_u64);
    lookup_scalar!(deserialize_u128);
    lookup_scalar!(deserialize_f32);
    lookup_scalar!(deserialize_f64);
    lookup_scalar!(deserialize_char);
    lookup_scalar!(deserialize_str);
    lookup_scalar!(deserialize_string);
    lookup_scalar!(deserialize_bytes);
    lookup_scalar!(deserialize_byte_buf);
    lookup_scalar!(deserialize_identifier);

    unsupported_type!(deserialize_tuple);

    // `Option` is a pointer that is never null: the pointee is bound from the same key,
    // falling back to its zero value even at the top level.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        visitor.visit_some(KeyedDeserializer {
            top_level: false,
            ..self
        })
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        tracing::trace!(key = %self.key, "Binding a sequence");
        visitor.visit_seq(SliceAccess::new(self.source, &self.key))
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        Err(DeserializationError::unsupported_type(type_name::<
            V::Value,
        >()))
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        tracing::trace!(key = %self.key, "Binding a map");
        visitor.visit_map(MapEntries::from_form(self.source.form, &self.key))
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        tracing::trace!(key = %self.key, destination = name, "Binding a struct");
        visitor.visit_map(FieldsAccess::from_form(
            self.source.form,
            &self.key,
            fields,
        ))
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        self.scalar()?.deserialize_enum(name, variants, visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'f>,
    {
        visitor.visit_unit()
    }
}
