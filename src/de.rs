//! Deserialize JSON object text into an ordered map.

use crate::error::{Error, ErrorCode, Result};
use crate::map::Map;
use serde::de::{self, DeserializeOwned, IntoDeserializer, Visitor};
use std::fmt;
use std::hash::Hash;
use std::io;
use std::marker::PhantomData;

/// Deserialize a map from flat JSON object text.
///
/// Pairs appear in the map in the order they appear in the input. Keys
/// deserialize through the key codec: a string key is taken as is, while
/// boolean, integer, float, and optional keys parse the quoted text back into
/// the typed key, so the key `"7"` decodes to `7u64` for an integer-keyed map
/// and the key `"null"` decodes to `None` for an optional-keyed map.
///
/// Empty input (or nothing but whitespace) is a legal decode of an empty map.
/// Input after the object's closing brace is read as whole JSON values and
/// discarded; another object there is an error.
///
/// ```
/// let map: ordered_json::Map<u64, String> = ordered_json::from_str(r#"{"7":"x"}"#)?;
/// assert_eq!(map[&7], "x");
/// # Ok::<(), ordered_json::Error>(())
/// ```
///
/// # Errors
///
/// Input that is not one flat JSON object fails with a syntax error carrying
/// the byte offset of the violation:
///
/// ```
/// let err = ordered_json::from_str::<String, i32>("[1,2]").unwrap_err();
/// assert_eq!(err.offset(), Some(0));
/// assert_eq!(err.to_string(), "input does not start with '{' at offset 0");
/// ```
pub fn from_str<K, V>(s: &str) -> Result<Map<K, V>>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    from_slice(s.as_bytes())
}

/// Deserialize a map from bytes of flat JSON object text.
///
/// See [`from_str`] for the key handling and failure modes.
pub fn from_slice<K, V>(bytes: &[u8]) -> Result<Map<K, V>>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    let mut map = Map::new();
    from_slice_into(bytes, &mut map)?;
    Ok(map)
}

/// Deserialize a map from an IO stream of JSON.
///
/// The stream is read to its end before decoding begins; offsets in any
/// resulting error refer to the buffered input.
pub fn from_reader<R, K, V>(mut reader: R) -> Result<Map<K, V>>
where
    R: io::Read,
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(Error::io)?;
    from_slice(&bytes)
}

/// Decode a flat JSON object on top of an existing map.
///
/// Each pair is inserted in encounter order: keys new to the map are appended
/// and keys already present keep their position and take the decoded value.
/// Empty input leaves the map untouched. If decoding fails partway, the map
/// keeps the pairs inserted before the failure.
///
/// ```
/// let mut map = ordered_json::Map::<String, i32>::new();
/// ordered_json::from_str_into(r#"{"a":1}"#, &mut map)?;
/// ordered_json::from_str_into(r#"{"b":2,"a":9}"#, &mut map)?;
///
/// let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
/// assert_eq!(pairs, [("a", 9), ("b", 2)]);
/// # Ok::<(), ordered_json::Error>(())
/// ```
pub fn from_str_into<K, V>(s: &str, map: &mut Map<K, V>) -> Result<()>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    from_slice_into(s.as_bytes(), map)
}

/// Decode a flat JSON object from bytes on top of an existing map.
///
/// See [`from_str_into`].
pub fn from_slice_into<K, V>(bytes: &[u8], map: &mut Map<K, V>) -> Result<()>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    Decoder::new(bytes).decode_object(map)
}

/// Structural scanner over one flat JSON object.
///
/// Only the object frame is handled here: braces, colons, commas, and the
/// whitespace between them. Key strings and values are delegated to
/// serde_json, and the cursor advances by however many bytes that parse
/// consumed.
struct Decoder<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a [u8]) -> Self {
        Decoder { input, offset: 0 }
    }

    fn decode_object<K, V>(mut self, map: &mut Map<K, V>) -> Result<()>
    where
        K: DeserializeOwned + Eq + Hash,
        V: DeserializeOwned,
    {
        self.skip_whitespace();
        match self.peek() {
            // Nothing to decode; the map is left as it was.
            None => return Ok(()),
            Some(b'{') => self.bump(),
            Some(_) => return Err(Error::syntax(ErrorCode::ExpectedObjectStart, 0)),
        }

        self.skip_whitespace();
        match self.peek() {
            None => return Err(self.unclosed()),
            Some(b'}') => {
                self.bump();
                return self.end();
            }
            Some(_) => {}
        }

        loop {
            let key = self.parse_key::<K>()?;

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.unclosed()),
                Some(b':') => self.bump(),
                Some(_) => return Err(Error::syntax(ErrorCode::ExpectedColon, self.offset)),
            }

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.unclosed()),
                Some(b'{') => return Err(Error::syntax(ErrorCode::NestedObject, self.offset)),
                Some(_) => {}
            }
            let value = self.parse_next::<V>()?;

            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.unclosed()),
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                    match self.peek() {
                        None => return Err(self.unclosed()),
                        Some(b'}') => {
                            return Err(Error::syntax(ErrorCode::TrailingComma, self.offset));
                        }
                        Some(_) => {}
                    }
                }
                Some(b'}') => {
                    self.bump();
                    return self.end();
                }
                Some(_) => {
                    return Err(Error::syntax(
                        ErrorCode::ExpectedObjectCommaOrEnd,
                        self.offset,
                    ));
                }
            }
        }
    }

    fn parse_key<K>(&mut self) -> Result<K>
    where
        K: DeserializeOwned,
    {
        self.skip_whitespace();
        let start = self.offset;
        match self.peek() {
            None => Err(self.unclosed()),
            Some(b'{') => Err(Error::syntax(ErrorCode::NestedObject, start)),
            Some(b'"') => {
                let raw: String = self.parse_next()?;
                key_from_str(&raw).map_err(|err| err.at_offset(start))
            }
            Some(_) => Err(Error::syntax(ErrorCode::KeyMustBeAString, start)),
        }
    }

    /// Parses one JSON value starting at the cursor and advances past it.
    fn parse_next<T>(&mut self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let start = self.offset;
        let mut stream = serde_json::Deserializer::from_slice(&self.input[start..]).into_iter();
        match stream.next() {
            Some(Ok(value)) => {
                self.offset = start + stream.byte_offset();
                Ok(value)
            }
            Some(Err(err)) => Err(Error::json(err, start)),
            None => Err(self.unclosed()),
        }
    }

    /// Consumes whatever follows the closing brace.
    ///
    /// Trailing input is read as whole JSON values and discarded, and extra
    /// close braces are skipped. A second object is rejected the way a nested
    /// one is, at the offset of its `{`.
    fn end(mut self) -> Result<()> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Ok(()),
                Some(b'{') => return Err(Error::syntax(ErrorCode::NestedObject, self.offset)),
                // An extra close brace is a token to skip, not a value.
                Some(b'}') => self.bump(),
                Some(_) => {
                    self.parse_next::<de::IgnoredAny>()?;
                }
            }
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    fn bump(&mut self) {
        self.offset += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.offset += 1;
        }
    }

    #[cold]
    fn unclosed(&self) -> Error {
        Error::syntax(ErrorCode::UnclosedObject, self.input.len())
    }
}

/// Parses the unescaped key string back into the target key type.
///
/// Which `Deserializer` method the key type's `Deserialize` impl calls is
/// what classifies the key's shape, mirroring the encode direction.
pub(crate) fn key_from_str<K>(key: &str) -> Result<K>
where
    K: DeserializeOwned,
{
    K::deserialize(KeyDeserializer { key })
}

struct KeyDeserializer<'a> {
    key: &'a str,
}

macro_rules! deserialize_integer_key {
    ($method:ident => $visit:ident) => {
        fn $method<V>(self, visitor: V) -> Result<V::Value>
        where
            V: Visitor<'de>,
        {
            // The token re-parses under JSON's number grammar, which a bare
            // `FromStr` would widen to forms like "+7" and "007".
            match serde_json::from_str(self.key) {
                Ok(integer) => visitor.$visit(integer),
                // Let the visitor report the unparseable token by name.
                Err(_) => visitor.visit_str(self.key),
            }
        }
    };
}

macro_rules! deserialize_float_key {
    ($method:ident, $ty:ty => $visit:ident) => {
        fn $method<V>(self, visitor: V) -> Result<V::Value>
        where
            V: Visitor<'de>,
        {
            // JSON has no non-finite numerals, but a numeral wider than the
            // key's width can still round to infinity.
            match serde_json::from_str::<$ty>(self.key) {
                Ok(float) if float.is_finite() => visitor.$visit(float),
                _ => visitor.visit_str(self.key),
            }
        }
    };
}

impl<'de> de::Deserializer<'de> for KeyDeserializer<'_> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_str(self.key)
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.key {
            "true" => visitor.visit_bool(true),
            "false" => visitor.visit_bool(false),
            _ => visitor.visit_str(self.key),
        }
    }

    deserialize_integer_key!(deserialize_i8 => visit_i8);
    deserialize_integer_key!(deserialize_i16 => visit_i16);
    deserialize_integer_key!(deserialize_i32 => visit_i32);
    deserialize_integer_key!(deserialize_i64 => visit_i64);
    deserialize_integer_key!(deserialize_i128 => visit_i128);
    deserialize_integer_key!(deserialize_u8 => visit_u8);
    deserialize_integer_key!(deserialize_u16 => visit_u16);
    deserialize_integer_key!(deserialize_u32 => visit_u32);
    deserialize_integer_key!(deserialize_u64 => visit_u64);
    deserialize_integer_key!(deserialize_u128 => visit_u128);

    deserialize_float_key!(deserialize_f32, f32 => visit_f32);
    deserialize_float_key!(deserialize_f64, f64 => visit_f64);

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => visitor.visit_char(ch),
            _ => visitor.visit_str(self.key),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_str(self.key)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_str(self.key)
    }

    fn deserialize_bytes<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_key_type("byte array"))
    }

    fn deserialize_byte_buf<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_key_type("byte array"))
    }

    // The quoted "null" key is how an absent optional key is written.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.key == "null" {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_key_type("unit"))
    }

    fn deserialize_unit_struct<V>(self, name: &'static str, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_key_type(format_args!(
            "unit struct {}",
            name
        )))
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_key_type("sequence"))
    }

    fn deserialize_tuple<V>(self, _len: usize, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_key_type("tuple"))
    }

    fn deserialize_tuple_struct<V>(
        self,
        name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_key_type(format_args!(
            "tuple struct {}",
            name
        )))
    }

    fn deserialize_map<V>(self, _visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_key_type("map"))
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        Err(Error::unsupported_key_type(format_args!("struct {}", name)))
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.key
            .into_deserializer()
            .deserialize_enum(name, variants, visitor)
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_str(self.key)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_str(self.key)
    }
}

impl<'de, K, V> de::Deserialize<'de> for Map<K, V>
where
    K: DeserializeOwned + Eq + Hash,
    V: de::Deserialize<'de>,
{
    /// Deserializes the map from any map-shaped input, routing each key
    /// string through the key codec. The flat-object structural rules apply
    /// only to this crate's own entry points; here the driving format owns
    /// the structure.
    #[inline]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct MapVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K, V> Visitor<'de> for MapVisitor<K, V>
        where
            K: DeserializeOwned + Eq + Hash,
            V: de::Deserialize<'de>,
        {
            type Value = Map<K, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map")
            }

            #[inline]
            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Map::new())
            }

            #[inline]
            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();

                while let Some((MapKey(key), value)) = map.next_entry::<MapKey<K>, V>()? {
                    values.insert(key, value);
                }

                Ok(values)
            }
        }

        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

/// Proxy that routes an object key string through the key codec while a
/// foreign Deserializer drives the map structure.
struct MapKey<K>(K);

impl<'de, K> de::Deserialize<'de> for MapKey<K>
where
    K: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct KeyVisitor<K>(PhantomData<K>);

        impl<'de, K> Visitor<'de> for KeyVisitor<K>
        where
            K: DeserializeOwned,
        {
            type Value = MapKey<K>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object key")
            }

            fn visit_str<E>(self, key: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                key_from_str(key).map(MapKey).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(KeyVisitor(PhantomData))
    }
}
