//! Serde deserialization out of [`Value`] trees.
//!
//! [`Value`] implements [`serde::Deserializer`], so any `T: Deserialize`
//! can be read from a parsed tree with [`from_value`](crate::from_value).
//! [`from_str`](crate::from_str) is `parse` followed by this step, which
//! means duplicate keys in the text are merged before the target type
//! ever sees them.
//!
//! Whole numbers are offered to visitors as integers, so `u32` or `i64`
//! fields accept `50` even though the tree stores every number as `f64`.
//! Fractional numbers are offered as `f64`.
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_kv::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Window { width: u32, height: u32, title: String }
//!
//! let window: Window = from_str(r#"
//!     "width" 800
//!     "height" 600
//!     "title" "Launcher"
//! "#).unwrap();
//! assert_eq!(window, Window { width: 800, height: 600, title: "Launcher".into() });
//! ```

use crate::value::whole_number;
use crate::{Error, KvMap, Result, Value};
use serde::de::{
    self, DeserializeSeed, EnumAccess, IntoDeserializer, MapAccess, SeqAccess, Unexpected,
    VariantAccess, Visitor,
};
use serde::forward_to_deserialize_any;

impl Value {
    fn unexpected(&self) -> Unexpected<'_> {
        match self {
            Value::String(s) => Unexpected::Str(s),
            Value::Number(n) => Unexpected::Float(*n),
            Value::Bool(b) => Unexpected::Bool(*b),
            Value::Object(_) => Unexpected::Map,
            Value::Array(_) => Unexpected::Seq,
        }
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(s) => visitor.visit_string(s),
            Value::Number(n) => match whole_number(n) {
                Some(i) if i >= 0 => visitor.visit_u64(i as u64),
                Some(i) => visitor.visit_i64(i),
                None => visitor.visit_f64(n),
            },
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Array(items) => visitor.visit_seq(SeqDeserializer::new(items)),
            Value::Object(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        // absence is the only way to spell None
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(variant) => visitor.visit_enum(variant.into_deserializer()),
            Value::Object(map) if map.len() == 1 => {
                let Some((variant, value)) = map.into_iter().next() else {
                    return Err(Error::custom("empty enum object"));
                };
                visitor.visit_enum(EnumDeserializer { variant, value })
            }
            other => Err(de::Error::invalid_type(
                other.unexpected(),
                &"a string or an object with a single key",
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(items: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: items.into_iter(),
        }
    }
}

impl<'de> SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(value).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: KvMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                let key: de::value::StringDeserializer<Error> = key.into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("value requested before key")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl<'de> EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, VariantDeserializer)>
    where
        V: DeserializeSeed<'de>,
    {
        let variant: de::value::StringDeserializer<Error> = self.variant.into_deserializer();
        let variant = seed.deserialize(variant)?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Object(map) if map.is_empty() => Ok(()),
            other => Err(de::Error::invalid_type(other.unexpected(), &"unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: DeserializeSeed<'de>,
    {
        seed.deserialize(self.value)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Array(items) => visitor.visit_seq(SeqDeserializer::new(items)),
            other => Err(de::Error::invalid_type(other.unexpected(), &"tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Object(map) => visitor.visit_map(MapDeserializer::new(map)),
            other => Err(de::Error::invalid_type(other.unexpected(), &"struct variant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_value, Error, Value};
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Build {
        version: u32,
        ratio: f64,
        channel: Channel,
        mirrors: Vec<String>,
        notes: Option<String>,
    }

    #[derive(Deserialize, Debug, PartialEq)]
    enum Channel {
        Stable,
        Nightly { date: String },
        Pinned(u16),
        Range(u8, u8),
    }

    #[test]
    fn test_struct_from_object() {
        let value = Value::object([
            ("version", Value::from(3)),
            ("ratio", Value::from(0.25)),
            ("channel", Value::from("Stable")),
            ("mirrors", Value::array(["a", "b"])),
        ]);

        let build: Build = from_value(value).unwrap();
        assert_eq!(
            build,
            Build {
                version: 3,
                ratio: 0.25,
                channel: Channel::Stable,
                mirrors: vec!["a".to_string(), "b".to_string()],
                notes: None,
            }
        );
    }

    #[test]
    fn test_enum_forms() {
        let nightly: Channel = from_value(Value::object([(
            "Nightly",
            Value::object([("date", "2025-01-01")]),
        )]))
        .unwrap();
        assert_eq!(
            nightly,
            Channel::Nightly {
                date: "2025-01-01".to_string()
            }
        );

        let pinned: Channel = from_value(Value::object([("Pinned", 7)])).unwrap();
        assert_eq!(pinned, Channel::Pinned(7));

        let range: Channel = from_value(Value::object([("Range", Value::array([1, 2]))])).unwrap();
        assert_eq!(range, Channel::Range(1, 2));

        assert!(from_value::<Channel>(Value::from(1)).is_err());
    }

    #[test]
    fn test_integers_and_floats() {
        assert_eq!(from_value::<i64>(Value::from(-5)).unwrap(), -5);
        assert_eq!(from_value::<u8>(Value::from(255)).unwrap(), 255);
        assert_eq!(from_value::<f32>(Value::from(2)).unwrap(), 2.0);
        assert!(from_value::<u32>(Value::from(1.5)).is_err());
        assert!(from_value::<u8>(Value::from(256)).is_err());
    }

    #[test]
    fn test_type_errors_are_reported() {
        let err = from_value::<String>(Value::from_bool(true)).unwrap_err();
        assert!(matches!(err, Error::Custom(_)));
    }

    #[test]
    fn test_map_and_value_passthrough() {
        let value = Value::object([("a", 1), ("b", 2)]);
        let map: HashMap<String, u32> = from_value(value.clone()).unwrap();
        assert_eq!(map.get("b"), Some(&2));

        let same: Value = from_value(value.clone()).unwrap();
        assert_eq!(same, value);
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        let zero: f64 = from_value(Value::Number(-0.0)).unwrap();
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_negative());

        let positive: f64 = from_value(Value::Number(0.0)).unwrap();
        assert!(positive.is_sign_positive());

        let json = serde_json::to_string(&Value::Number(-0.0)).unwrap();
        assert_eq!(json, "-0.0");
    }
}
