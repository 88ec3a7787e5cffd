use std::any::type_name;
use std::str::FromStr;

use serde::{
    de::{
        value::{BorrowedStrDeserializer, MapDeserializer, SeqDeserializer},
        DeserializeSeed, EnumAccess, VariantAccess, Visitor,
    },
    Deserializer,
};

use super::fields::FieldsAccess;
use crate::errors::DeserializationError;

macro_rules! parse_scalar {
    ($trait_fn:ident, $visit_fn:ident) => {
        fn $trait_fn<V>(self, visitor: V) -> Result<V::Value, Self::Error>
        where
            V: Visitor<'de>,
        {
            visitor.$visit_fn(parse_or_zero(self.value))
        }
    };
}

macro_rules! borrow_str {
    ($trait_fn:ident) => {
        fn $trait_fn<V>(self, visitor: V) -> Result<V::Value, Self::Error>
        where
            V: Visitor<'de>,
        {
            visitor.visit_borrowed_str(self.value)
        }
    };
}

/// Binds a single, already-extracted string (by-literal dispatch).
///
/// Scalars that can't be parsed resolve to their zero value.
/// Composite shapes can't be encoded in a single string: sequences and maps come out empty,
/// structs come out with every field set to its zero value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LiteralDeserializer<'de> {
    value: &'de str,
}

impl<'de> LiteralDeserializer<'de> {
    pub(crate) fn new(value: &'de str) -> Self {
        Self { value }
    }

    /// The empty string binds to the zero value of every supported type.
    pub(crate) fn zero() -> Self {
        Self { value: "" }
    }
}

impl<'de> Deserializer<'de> for LiteralDeserializer<'de> {
    type Error = DeserializationError;

    parse_scalar!(deserialize_i8, visit_i8);
    parse_scalar!(deserialize_i16, visit_i16);
    parse_scalar!(deserialize_i32, visit_i32);
    parse_scalar!(deserialize_i64, visit_i64);
    parse_scalar!(deserialize_i128, visit_i128);
    parse_scalar!(deserialize_u8, visit_u8);
    parse_scalar!(deserialize_u16, visit_u16);
    parse_scalar!(deserialize_u32, visit_u32);
    parse_scalar!(deserialize_u64, visit_u64);
    parse_scalar!(deserialize_u128, visit_u128);
    parse_scalar!(deserialize_f32, visit_f32);
    parse_scalar!(deserialize_f64, visit_f64);
    parse_scalar!(deserialize_char, visit_char);

    borrow_str!(deserialize_any);
    borrow_str!(deserialize_str);
    borrow_str!(deserialize_string);
    borrow_str!(deserialize_identifier);

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_bool(parse_bool(self.value))
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_borrowed_bytes(self.value.as_bytes())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    // Pointers are never null: the pointee is bound from the same literal.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_seq(SeqDeserializer::<_, DeserializationError>::new(
            std::iter::empty::<()>(),
        ))
    }

    fn deserialize_tuple<V>(self, _len: usize, _visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(DeserializationError::unsupported_type(
            type_name::<V::Value>(),
        ))
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(DeserializationError::unsupported_type(
            type_name::<V::Value>(),
        ))
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(MapDeserializer::<_, DeserializationError>::new(
            std::iter::empty::<((), ())>(),
        ))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(FieldsAccess::zeroed(fields))
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        let variant = match variants.iter().find(|variant| **variant == self.value) {
            Some(variant) => *variant,
            None => {
                // The first declared variant plays the role of the zero value.
                let Some(first) = variants.first() else {
                    return Err(DeserializationError::unsupported_type(
                        type_name::<V::Value>(),
                    ));
                };
                if !self.value.is_empty() {
                    tracing::debug!(
                        value = self.value,
                        expected_type = name,
                        "Unknown enum variant, binding the first variant instead"
                    );
                }
                *first
            }
        };
        visitor.visit_enum(UnitVariant { variant })
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }
}

/// Normalize (trim, lower-case) and check against `true`, `on` and `1`.
/// Everything else, including the empty string, is `false`.
pub(crate) fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "on" | "1")
}

/// Parse `value` using the canonical textual syntax of `T`, falling back to `T`'s zero value.
fn parse_or_zero<T>(value: &str) -> T
where
    T: FromStr + Default,
{
    match value.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            if !value.is_empty() {
                tracing::debug!(
                    value,
                    expected_type = type_name::<T>(),
                    "Malformed value, binding the zero value instead"
                );
            }
            T::default()
        }
    }
}

struct UnitVariant {
    variant: &'static str,
}

impl<'de> EnumAccess<'de> for UnitVariant {
    type Error = DeserializationError;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant), Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(BorrowedStrDeserializer::<DeserializationError>::new(
            self.variant,
        ))?;
        Ok((variant, self))
    }
}

impl<'de> VariantAccess<'de> for UnitVariant {
    type Error = DeserializationError;

    fn unit_variant(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn newtype_variant_seed<T>(self, _seed: T) -> Result<T::Value, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        Err(DeserializationError::unsupported_type(
            "newtype enum variant",
        ))
    }

    fn tuple_variant<V>(self, _len: usize, _visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(DeserializationError::unsupported_type(
            "tuple enum variant",
        ))
    }

    fn struct_variant<V>(
        self,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(DeserializationError::unsupported_type(
            "struct enum variant",
        ))
    }
}
