use ordered_json::Map;
use serde_derive::{Deserialize, Serialize};
use serde_json::json;
use std::hash::{Hash, Hasher};

macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = Map::new();
        $(
            map.insert($key, $value);
        )*
        map
    }};
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
struct UserId(u32);

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
enum Channel {
    Stable,
    Beta,
    Nightly,
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
struct Celsius(f64);

impl Eq for Celsius {}

impl Hash for Celsius {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Account {
    name: String,
    balances: Map<u64, i64>,
}

#[test]
fn test_encode_insertion_order() {
    let map = map!["a".to_owned() => 1, "b".to_owned() => 2, "c".to_owned() => 3];
    assert_eq!(ordered_json::to_string(&map).unwrap(), r#"{"a":1,"b":2,"c":3}"#);

    let map = map!["b".to_owned() => 2, "a".to_owned() => 1, "c".to_owned() => 3];
    assert_eq!(ordered_json::to_string(&map).unwrap(), r#"{"b":2,"a":1,"c":3}"#);
}

#[test]
fn test_encode_empty() {
    let map: Map<String, i32> = Map::new();
    assert_eq!(ordered_json::to_string(&map).unwrap(), "{}");
    assert_eq!(ordered_json::to_vec(&map).unwrap(), b"{}");
}

#[test]
fn test_decode_empty() {
    let map: Map<String, i32> = ordered_json::from_str("{}").unwrap();
    assert!(map.is_empty());

    let map: Map<String, i32> = ordered_json::from_str("").unwrap();
    assert!(map.is_empty());

    let map: Map<String, i32> = ordered_json::from_str(" \t\r\n ").unwrap();
    assert!(map.is_empty());

    let map: Map<String, i32> = ordered_json::from_str(" { } ").unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_round_trip_preserves_order() {
    let map = map![
        "z".to_owned() => json!(null),
        "y".to_owned() => json!([1, 2, 3]),
        "x".to_owned() => json!("text"),
        "w".to_owned() => json!(4.5),
    ];

    let text = ordered_json::to_string(&map).unwrap();
    let back: Map<String, serde_json::Value> = ordered_json::from_str(&text).unwrap();

    assert_eq!(back, map);
    assert!(back.keys().eq(map.keys()));
}

#[test]
fn test_whitespace_between_tokens() {
    let map: Map<String, i32> = ordered_json::from_str(" { \"a\" : 1 , \"b\" : 2 } ").unwrap();

    let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(pairs, [("a", 1), ("b", 2)]);
}

#[test]
fn test_input_after_object_is_skipped() {
    // Values after the closing brace are read whole and discarded.
    let map: Map<String, i32> = ordered_json::from_str(r#"{"a":1} 5"#).unwrap();
    assert_eq!(map["a"], 1);

    let map: Map<String, i32> = ordered_json::from_str(r#"{"a":1} [2,3] null"#).unwrap();
    assert_eq!(map.len(), 1);

    // A brace inside a skipped string is just string content.
    let map: Map<String, i32> = ordered_json::from_str(r#"{"a":1} "{""#).unwrap();
    assert_eq!(map["a"], 1);

    // Extra close braces after the object are skipped tokens.
    let map: Map<String, i32> = ordered_json::from_str(r#"{"a":1}}"#).unwrap();
    assert_eq!(map["a"], 1);

    let mut map: Map<String, bool> = Map::new();
    ordered_json::from_str_into("{} true", &mut map).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_integer_keys() {
    let map = map![7u64 => "x"];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"7":"x"}"#);

    let back: Map<u64, String> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back[&7], "x");

    let map = map![-40i64 => true, 0i64 => false];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"-40":true,"0":false}"#);

    let back: Map<i64, bool> = ordered_json::from_str(&text).unwrap();
    assert!(back[&-40]);
    assert!(!back[&0]);
}

#[test]
fn test_128_bit_keys() {
    let map = map![i128::MAX => 0];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"170141183460469231731687303715884105727":0}"#);

    let back: Map<i128, i32> = ordered_json::from_str(&text).unwrap();
    assert!(back.contains_key(&i128::MAX));

    let map = map![u128::MAX => 0];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"340282366920938463463374607431768211455":0}"#);

    let back: Map<u128, i32> = ordered_json::from_str(&text).unwrap();
    assert!(back.contains_key(&u128::MAX));
}

#[test]
fn test_bool_keys() {
    let map = map![true => 1, false => 0];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"true":1,"false":0}"#);

    let back: Map<bool, i32> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back[&true], 1);
    assert_eq!(back[&false], 0);
}

#[test]
fn test_float_keys() {
    let map = map![Celsius(1.5) => "a".to_owned(), Celsius(-0.25) => "b".to_owned()];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"1.5":"a","-0.25":"b"}"#);

    let back: Map<Celsius, String> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back[&Celsius(-0.25)], "b");

    // Whole floats keep their fractional point, unlike integer keys.
    let map = map![Celsius(2.0) => 0];
    assert_eq!(ordered_json::to_string(&map).unwrap(), r#"{"2.0":0}"#);

    // Integer and exponent numerals are still float text on the wire.
    let back: Map<Celsius, i32> = ordered_json::from_str(r#"{"2":7,"1e3":1}"#).unwrap();
    assert_eq!(back[&Celsius(2.0)], 7);
    assert_eq!(back[&Celsius(1000.0)], 1);
}

#[test]
fn test_char_keys() {
    let map = map!['a' => 1, 'ß' => 2];
    assert_eq!(ordered_json::to_string(&map).unwrap(), r#"{"a":1,"ß":2}"#);

    let back: Map<char, i32> = ordered_json::from_str(r#"{"ß":2,"a":1}"#).unwrap();
    assert!(back.keys().copied().eq(['ß', 'a']));
}

#[test]
fn test_optional_string_keys() {
    let map = map![Some("k".to_owned()) => 1, None => 2];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"k":1,"null":2}"#);

    let back: Map<Option<String>, i32> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back[&Some("k".to_owned())], 1);
    assert_eq!(back[&None], 2);
}

#[test]
fn test_optional_integer_keys() {
    let map = map![Some(3u32) => "a", None => "b"];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"3":"a","null":"b"}"#);

    let back: Map<Option<u32>, String> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back[&Some(3)], "a");
    assert_eq!(back[&None], "b");
}

#[test]
fn test_null_string_key_collides_with_absent() {
    // Some("null") and None both render as the "null" key. Decoding always
    // takes the absent reading.
    let map = map![Some("null".to_owned()) => 1];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"null":1}"#);

    let back: Map<Option<String>, i32> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back[&None], 1);
}

#[test]
fn test_newtype_keys() {
    let map = map![UserId(1) => "root".to_owned(), UserId(501) => "guest".to_owned()];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"1":"root","501":"guest"}"#);

    let back: Map<UserId, String> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back[&UserId(501)], "guest");
}

#[test]
fn test_unit_variant_keys() {
    let map = map![Channel::Nightly => 3, Channel::Stable => 1];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"Nightly":3,"Stable":1}"#);

    let back: Map<Channel, i32> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back[&Channel::Stable], 1);
    assert!(back.keys().eq(&[Channel::Nightly, Channel::Stable]));
}

#[test]
fn test_escaped_keys() {
    let map = map![
        "quote\"back\\slash".to_owned() => 1,
        "new\nline".to_owned() => 2,
        "κλειδί".to_owned() => 3,
    ];

    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"quote\"back\\slash":1,"new\nline":2,"κλειδί":3}"#);

    let back: Map<String, i32> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back, map);
}

#[test]
fn test_empty_string_key() {
    let map = map!["".to_owned() => 0];
    let text = ordered_json::to_string(&map).unwrap();
    assert_eq!(text, r#"{"":0}"#);

    let back: Map<String, i32> = ordered_json::from_str(&text).unwrap();
    assert_eq!(back, map);
}

#[test]
fn test_duplicate_keys_keep_first_position() {
    let map: Map<String, i32> = ordered_json::from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], 3);
    assert!(map.keys().eq(["a", "b"]));
}

#[test]
fn test_decode_into_merges() {
    let mut map = map!["keep".to_owned() => 1, "swap".to_owned() => 2];

    ordered_json::from_str_into(r#"{"new":9,"swap":5}"#, &mut map).unwrap();

    let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(pairs, [("keep", 1), ("swap", 5), ("new", 9)]);
}

#[test]
fn test_decode_into_accepts_empty_input() {
    let mut map = map!["keep".to_owned() => 1];

    ordered_json::from_str_into("", &mut map).unwrap();
    ordered_json::from_str_into("  \n ", &mut map).unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(map["keep"], 1);
}

#[test]
fn test_from_reader() {
    let data = br#"{"a":1,"b":2}"#;
    let map: Map<String, i32> = ordered_json::from_reader(&data[..]).unwrap();
    assert!(map.keys().eq(["a", "b"]));
}

#[test]
fn test_array_values_pass_through() {
    // The flat-object rule applies to direct values. Objects nested inside an
    // array value are consumed wholesale by the value parser.
    let text = r#"{"a":[{"b":1},2],"c":null}"#;
    let map: Map<String, serde_json::Value> = ordered_json::from_str(text).unwrap();

    assert_eq!(map["a"], json!([{"b": 1}, 2]));
    assert_eq!(ordered_json::to_string(&map).unwrap(), text);
}

#[test]
fn test_nested_in_struct() {
    let account = Account {
        name: "acct".to_owned(),
        balances: map![3u64 => -10i64, 1u64 => 25i64],
    };

    let text = serde_json::to_string(&account).unwrap();
    assert_eq!(text, r#"{"name":"acct","balances":{"3":-10,"1":25}}"#);

    let back: Account = serde_json::from_str(&text).unwrap();
    assert_eq!(back, account);
    assert!(back.balances.keys().eq(&[3, 1]));
}
