//! Serialize an ordered map into JSON object text.

use crate::error::{Error, Result};
use crate::map::Map;
use serde::ser::{self, Impossible, Serialize};
use std::io;

/// Serialize the given map as a JSON object into the IO stream.
///
/// Pairs are written in the map's insertion order. Every key is rendered as a
/// JSON string: string keys serialize the usual way, while boolean, integer,
/// float, and optional keys are rendered to their JSON value text and then
/// quoted, so `7u64` becomes the key `"7"` and a `None` key becomes the key
/// `"null"`.
///
/// # Errors
///
/// Serialization can fail if the key type is not representable as a JSON
/// object key, if a value's `Serialize` implementation fails, or if the
/// underlying stream returns an IO error. The stream may have received a
/// partial object by then; discard it on failure.
pub fn to_writer<W, K, V>(mut writer: W, map: &Map<K, V>) -> Result<()>
where
    W: io::Write,
    K: Serialize,
    V: Serialize,
{
    writer.write_all(b"{").map_err(Error::io)?;
    let mut first = true;
    for (key, value) in map {
        if first {
            first = false;
        } else {
            writer.write_all(b",").map_err(Error::io)?;
        }
        let key = key_string(key)?;
        serde_json::to_writer(&mut writer, &key)?;
        writer.write_all(b":").map_err(Error::io)?;
        serde_json::to_writer(&mut writer, value)?;
    }
    writer.write_all(b"}").map_err(Error::io)?;
    Ok(())
}

/// Serialize the given map as a JSON object byte vector.
///
/// ```
/// let mut map = ordered_json::Map::new();
/// map.insert("b".to_owned(), 2);
/// map.insert("a".to_owned(), 1);
///
/// let bytes = ordered_json::to_vec(&map)?;
/// assert_eq!(bytes, br#"{"b":2,"a":1}"#);
/// # Ok::<(), ordered_json::Error>(())
/// ```
pub fn to_vec<K, V>(map: &Map<K, V>) -> Result<Vec<u8>>
where
    K: Serialize,
    V: Serialize,
{
    let mut writer = Vec::with_capacity(128);
    to_writer(&mut writer, map)?;
    Ok(writer)
}

/// Serialize the given map as a String of JSON object text.
///
/// ```
/// let mut map = ordered_json::Map::new();
/// map.insert(7_u64, "x");
///
/// assert_eq!(ordered_json::to_string(&map)?, r#"{"7":"x"}"#);
/// # Ok::<(), ordered_json::Error>(())
/// ```
pub fn to_string<K, V>(map: &Map<K, V>) -> Result<String>
where
    K: Serialize,
    V: Serialize,
{
    let vec = to_vec(map)?;
    let string = unsafe {
        // We do not emit invalid UTF-8.
        String::from_utf8_unchecked(vec)
    };
    Ok(string)
}

impl<K, V> Serialize for Map<K, V>
where
    K: Serialize,
    V: Serialize,
{
    /// Serializes the map with each key rendered to its object-key string, so
    /// nesting a `Map` inside another serializable type produces the same key
    /// text as [`to_writer`].
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(&Key(k), v)?;
        }
        map.end()
    }
}

struct Key<'a, K>(&'a K);

impl<K> Serialize for Key<'_, K>
where
    K: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match key_string(self.0) {
            Ok(key) => serializer.serialize_str(&key),
            Err(err) => Err(ser::Error::custom(err)),
        }
    }
}

/// Renders a key to the plain string the JSON writer will quote and escape.
///
/// Which `Serializer` method the key's `Serialize` impl calls is what
/// classifies the key's shape; anything outside the supported set reports the
/// shape's identity in the error.
pub(crate) fn key_string<K>(key: &K) -> Result<String>
where
    K: ?Sized + Serialize,
{
    key.serialize(KeySerializer)
}

struct KeySerializer;

macro_rules! serialize_integer_key {
    ($method:ident => $ty:ty) => {
        fn $method(self, value: $ty) -> Result<String> {
            let mut buffer = itoa::Buffer::new();
            Ok(buffer.format(value).to_owned())
        }
    };
}

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, value: bool) -> Result<String> {
        Ok(if value { "true" } else { "false" }.to_owned())
    }

    serialize_integer_key!(serialize_i8 => i8);
    serialize_integer_key!(serialize_i16 => i16);
    serialize_integer_key!(serialize_i32 => i32);
    serialize_integer_key!(serialize_i64 => i64);
    serialize_integer_key!(serialize_i128 => i128);
    serialize_integer_key!(serialize_u8 => u8);
    serialize_integer_key!(serialize_u16 => u16);
    serialize_integer_key!(serialize_u32 => u32);
    serialize_integer_key!(serialize_u64 => u64);
    serialize_integer_key!(serialize_u128 => u128);

    fn serialize_f32(self, value: f32) -> Result<String> {
        if !value.is_finite() {
            return Err(Error::float_key_must_be_finite());
        }
        let mut buffer = zmij::Buffer::new();
        Ok(buffer.format_finite(value).to_owned())
    }

    fn serialize_f64(self, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(Error::float_key_must_be_finite());
        }
        let mut buffer = zmij::Buffer::new();
        Ok(buffer.format_finite(value).to_owned())
    }

    fn serialize_char(self, value: char) -> Result<String> {
        Ok(String::from(value))
    }

    fn serialize_str(self, value: &str) -> Result<String> {
        Ok(value.to_owned())
    }

    fn serialize_bytes(self, _value: &[u8]) -> Result<String> {
        Err(Error::unsupported_key_type("byte array"))
    }

    // An absent optional key still has to become a legal object key, so it
    // renders as the text the writer turns into the quoted "null" token.
    fn serialize_none(self) -> Result<String> {
        Ok("null".to_owned())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(Error::unsupported_key_type("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String> {
        Err(Error::unsupported_key_type(format_args!(
            "unit struct {}",
            name
        )))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_key_type(format_args!(
            "newtype variant {}::{}",
            name, variant
        )))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported_key_type("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported_key_type("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported_key_type(format_args!(
            "tuple struct {}",
            name
        )))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_key_type(format_args!(
            "tuple variant {}::{}",
            name, variant
        )))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported_key_type("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported_key_type(format_args!("struct {}", name)))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_key_type(format_args!(
            "struct variant {}::{}",
            name, variant
        )))
    }
}
