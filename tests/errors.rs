use ordered_json::error::{Category, ErrorCode};
use ordered_json::Map;
use serde_derive::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::io;

#[derive(Serialize, PartialEq, Eq, Hash)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Deserialize, PartialEq, Eq, Hash, Debug)]
enum Channel {
    Stable,
    Beta,
    Nightly,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
struct Reading(f64);

impl Eq for Reading {}

impl Hash for Reading {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingReader;

impl io::Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::TimedOut, "stalled"))
    }
}

#[test]
fn test_input_not_an_object() {
    let err = ordered_json::from_str::<String, i32>("[1,2]").unwrap_err();
    assert_eq!(err.to_string(), "input does not start with '{' at offset 0");
    assert_eq!(err.offset(), Some(0));
    assert!(err.is_syntax());

    let err = ordered_json::from_str::<String, i32>("null").unwrap_err();
    assert_eq!(err.offset(), Some(0));

    let err = ordered_json::from_str::<String, i32>(r#""text""#).unwrap_err();
    assert_eq!(err.offset(), Some(0));
}

#[test]
fn test_unclosed_object() {
    let err = ordered_json::from_str::<String, i32>(r#"{"a":1"#).unwrap_err();
    assert_eq!(err.to_string(), "input does not end with '}' at offset 6");
    assert_eq!(err.offset(), Some(6));
    assert!(err.is_eof());

    let err = ordered_json::from_str::<String, i32>("{").unwrap_err();
    assert_eq!(err.offset(), Some(1));

    let err = ordered_json::from_str::<String, i32>(r#"{"a""#).unwrap_err();
    assert_eq!(err.offset(), Some(4));

    let err = ordered_json::from_str::<String, i32>(r#"{"a":1,"#).unwrap_err();
    assert_eq!(err.offset(), Some(7));
}

#[test]
fn test_nested_object_value() {
    let err =
        ordered_json::from_str::<String, serde_json::Value>(r#"{"a":{"b":1}}"#).unwrap_err();
    assert_eq!(err.to_string(), "nested objects are not supported at offset 5");
    assert_eq!(err.offset(), Some(5));
    assert!(err.is_syntax());
    assert_eq!(*err.code(), ErrorCode::NestedObject);
}

#[test]
fn test_nested_object_key() {
    let err = ordered_json::from_str::<String, i32>(r#"{"a":1,{"b":2}}"#).unwrap_err();
    assert_eq!(err.to_string(), "nested objects are not supported at offset 7");
}

#[test]
fn test_non_string_key_token() {
    let err = ordered_json::from_str::<String, i32>("{7:1}").unwrap_err();
    assert_eq!(err.to_string(), "key must be a string at offset 1");
    assert!(err.is_syntax());

    let err = ordered_json::from_str::<String, i32>("{true:1}").unwrap_err();
    assert_eq!(err.offset(), Some(1));
}

#[test]
fn test_missing_colon() {
    let err = ordered_json::from_str::<String, i32>(r#"{"a" 1}"#).unwrap_err();
    assert_eq!(err.to_string(), "expected `:` at offset 5");
    assert!(err.is_syntax());
}

#[test]
fn test_missing_comma() {
    let err = ordered_json::from_str::<String, i32>(r#"{"a":1 "b":2}"#).unwrap_err();
    assert_eq!(err.to_string(), "expected `,` or `}` at offset 7");
}

#[test]
fn test_trailing_comma() {
    let err = ordered_json::from_str::<String, i32>(r#"{"a":1,}"#).unwrap_err();
    assert_eq!(err.to_string(), "trailing comma at offset 7");
    assert_eq!(*err.code(), ErrorCode::TrailingComma);
    assert_eq!(err.classify(), Category::Syntax);
}

#[test]
fn test_object_after_closing_brace() {
    let err = ordered_json::from_str::<String, i32>("{} {}").unwrap_err();
    assert_eq!(err.to_string(), "nested objects are not supported at offset 3");
    assert_eq!(*err.code(), ErrorCode::NestedObject);

    // Skipped trailing values do not hide a late opening brace.
    let err = ordered_json::from_str::<String, i32>(r#"{"a":1} 5 {"b":2}"#).unwrap_err();
    assert_eq!(err.offset(), Some(10));
}

#[test]
fn test_malformed_input_after_closing_brace() {
    // Whatever else trails the object still has to tokenize as JSON values.
    let err = ordered_json::from_str::<String, i32>(r#"{"a":1}]"#).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.offset(), Some(7));

    let err = ordered_json::from_str::<String, i32>(r#"{"a":1} %"#).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.offset(), Some(8));
}

#[test]
fn test_unsupported_key_type_on_encode() {
    let mut map = Map::new();
    map.insert(Point { x: 1, y: 2 }, "p");

    let err = ordered_json::to_string(&map).unwrap_err();
    assert_eq!(err.to_string(), "unsupported key type: struct Point");
    assert!(err.is_key());
    assert_eq!(err.classify(), Category::Key);
    assert_eq!(err.offset(), None);

    let mut map = Map::new();
    map.insert(vec![1, 2], "v");
    let err = ordered_json::to_string(&map).unwrap_err();
    assert_eq!(err.to_string(), "unsupported key type: sequence");

    let mut map = Map::new();
    map.insert(("a", 1), "t");
    let err = ordered_json::to_string(&map).unwrap_err();
    assert_eq!(err.to_string(), "unsupported key type: tuple");
}

#[test]
fn test_unsupported_key_type_on_decode() {
    let err = ordered_json::from_str::<Vec<i32>, i32>(r#"{"1":2}"#).unwrap_err();
    assert_eq!(err.to_string(), "unsupported key type: sequence at offset 1");
    assert!(err.is_key());
}

#[test]
fn test_key_parse_failures() {
    let err = ordered_json::from_str::<u64, i32>(r#"{"seven":1}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type: string \"seven\", expected u64 at offset 1"
    );
    assert!(err.is_data());
    assert_eq!(err.offset(), Some(1));

    // Out of range for the key width.
    let err = ordered_json::from_str::<u8, i32>(r#"{"300":1}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type: string \"300\", expected u8 at offset 1"
    );
    assert!(err.is_data());

    let err = ordered_json::from_str::<bool, i32>(r#"{"yes":1}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type: string \"yes\", expected a boolean at offset 1"
    );
}

#[test]
fn test_key_must_be_a_json_numeral() {
    // Rust's FromStr would take a sign or leading zeros; the wire grammar
    // does not.
    let err = ordered_json::from_str::<u64, i32>(r#"{"+7":1}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type: string \"+7\", expected u64 at offset 1"
    );
    assert!(err.is_data());

    let err = ordered_json::from_str::<i64, i32>(r#"{"007":1}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type: string \"007\", expected i64 at offset 1"
    );

    let err = ordered_json::from_str::<Reading, i32>(r#"{"5.":1}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type: string \"5.\", expected f64 at offset 1"
    );
}

#[test]
fn test_unknown_variant_key() {
    let err = ordered_json::from_str::<Channel, i32>(r#"{"Alpha":1}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown variant `Alpha`, expected one of `Stable`, `Beta`, `Nightly` at offset 1"
    );
    assert!(err.is_data());
}

#[test]
fn test_non_finite_float_key() {
    let mut map = Map::new();
    map.insert(Reading(f64::NAN), 1);

    let err = ordered_json::to_string(&map).unwrap_err();
    assert_eq!(err.to_string(), "float key must be finite");
    assert!(err.is_data());

    let mut map = Map::new();
    map.insert(Reading(f64::INFINITY), 1);
    assert!(ordered_json::to_string(&map).is_err());

    // "NaN" is not a JSON numeral, so the decode side never builds one.
    let err = ordered_json::from_str::<Reading, i32>(r#"{"NaN":1}"#).unwrap_err();
    assert!(err.is_data());
    assert_eq!(
        err.to_string(),
        "invalid type: string \"NaN\", expected f64 at offset 1"
    );
}

#[test]
fn test_value_errors_pass_through() {
    let err = ordered_json::from_str::<String, i32>(r#"{"a":true}"#).unwrap_err();
    assert!(err.is_data());
    assert_eq!(err.offset(), Some(5));
    let msg = err.to_string();
    assert!(
        msg.starts_with("invalid type: boolean `true`, expected i32"),
        "{}",
        msg
    );

    let err = ordered_json::from_str::<String, i32>(r#"{"a":tru}"#).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.offset(), Some(5));
}

#[test]
fn test_partial_population_on_error() {
    let mut map: Map<String, i32> = Map::new();
    let err = ordered_json::from_str_into(r#"{"a":1,"b":2,"c":}"#, &mut map).unwrap_err();

    assert!(err.is_syntax());
    let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(pairs, [("a", 1), ("b", 2)]);
}

#[test]
fn test_writer_errors_classify_as_io() {
    let mut map = Map::new();
    map.insert("a".to_owned(), 1);

    let err = ordered_json::to_writer(FailingWriter, &map).unwrap_err();
    assert!(err.is_io());
    assert_eq!(err.classify(), Category::Io);

    let io_err: io::Error = err.into();
    assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_reader_errors_classify_as_io() {
    let err = ordered_json::from_reader::<_, String, i32>(FailingReader).unwrap_err();
    assert!(err.is_io());
    assert_eq!(err.offset(), None);
}

#[test]
fn test_eof_converts_to_unexpected_eof() {
    let err = ordered_json::from_str::<String, i32>("{").unwrap_err();
    assert!(err.is_eof());

    let io_err: io::Error = err.into();
    assert_eq!(io_err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn test_syntax_converts_to_invalid_data() {
    let err = ordered_json::from_str::<String, i32>("[]").unwrap_err();
    let io_err: io::Error = err.into();
    assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_error_debug_format() {
    let err = ordered_json::from_str::<String, i32>("[]").unwrap_err();
    assert_eq!(
        format!("{:?}", err),
        r#"Error("input does not start with '{'", offset: 0)"#
    );

    let mut map = Map::new();
    map.insert(vec![1], 1);
    let err = ordered_json::to_string(&map).unwrap_err();
    assert_eq!(
        format!("{:?}", err),
        r#"Error("unsupported key type: sequence")"#
    );
}
