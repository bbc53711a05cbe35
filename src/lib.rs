//! An insertion-ordered map of keys to values with a JSON object codec.
//!
//! [`Map`] iterates its entries in the order the keys were first inserted,
//! and the codec keeps that order on the wire: encoding writes the pairs as
//! one flat JSON object in insertion order, and decoding inserts them back in
//! the order they appear in the text. Decoding an encoded map reproduces the
//! map exactly, pairs and order both.
//!
//! ```
//! use ordered_json::Map;
//!
//! let mut map = Map::new();
//! map.insert("b".to_owned(), 2);
//! map.insert("a".to_owned(), 1);
//! map.insert("c".to_owned(), 3);
//!
//! let text = ordered_json::to_string(&map)?;
//! assert_eq!(text, r#"{"b":2,"a":1,"c":3}"#);
//!
//! let back: Map<String, i32> = ordered_json::from_str(&text)?;
//! assert_eq!(back, map);
//! assert!(back.keys().eq(["b", "a", "c"]));
//! # Ok::<(), ordered_json::Error>(())
//! ```
//!
//! # Typed keys
//!
//! JSON object keys are strings, but the map's keys do not have to be. A
//! scalar key serializes as the quoted text of its value and deserializes by
//! parsing that text back, so a `Map<u64, V>` round-trips without any string
//! conversion in the calling program:
//!
//! ```
//! let mut map = ordered_json::Map::new();
//! map.insert(7u64, "x");
//!
//! assert_eq!(ordered_json::to_string(&map)?, r#"{"7":"x"}"#);
//! # Ok::<(), ordered_json::Error>(())
//! ```
//!
//! Boolean, integer, float, character, and string keys all work this way, as
//! do newtypes and unit enum variants wrapping them. An optional key writes
//! `None` as the `"null"` key and reads the `"null"` key back as `None`. A
//! key whose shape has no object-key representation, such as a sequence or a
//! struct with fields, fails with an error classified as
//! [`Category::Key`](error::Category::Key) naming the offending type.
//!
//! # Decode errors
//!
//! The decoder accepts one flat JSON object, or nothing but whitespace for an
//! empty map. Other input fails with an [`Error`] that carries the byte
//! offset where the violation begins:
//!
//! ```
//! let err = ordered_json::from_str::<String, i32>(r#"{"a":{"b":1}}"#).unwrap_err();
//! assert_eq!(err.to_string(), "nested objects are not supported at offset 5");
//! assert_eq!(err.offset(), Some(5));
//! ```

#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/ordered-json/0.5.0")]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod de;
pub mod error;
pub mod map;
pub mod ser;

#[doc(inline)]
pub use crate::de::{from_reader, from_slice, from_slice_into, from_str, from_str_into};
#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::map::Map;
#[doc(inline)]
pub use crate::ser::{to_string, to_vec, to_writer};
