use super::{deserialize_bool, deserialize_from_string_or_value, deserialize_hex, serialize_hex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Eq, PartialEq, Clone, Serialize, Deserialize)]
struct HexStruct {
    #[serde(deserialize_with = "deserialize_hex", serialize_with = "serialize_hex")]
    data: Vec<u8>,
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize)]
struct LenientStruct {
    #[serde(deserialize_with = "deserialize_from_string_or_value")]
    count: u32,
    #[serde(deserialize_with = "deserialize_from_string_or_value")]
    flag: bool,
}

#[derive(Debug, Eq, PartialEq, Clone, Deserialize)]
struct FlagStruct {
    #[serde(deserialize_with = "deserialize_bool")]
    flag: bool,
}

#[test]
fn test_serialize_hex() {
    let data = HexStruct {
        data: vec![0, 1, 0xab],
    };
    let se = serde_json::to_string(&data).unwrap();
    assert_eq!(se, r#"{"data":"0001ab"}"#);
    let de = serde_json::from_str::<HexStruct>(&se).unwrap();
    assert_eq!(de, data);

    let prefixed = serde_json::from_str::<HexStruct>(r#"{"data":"0x0001ab"}"#).unwrap();
    assert_eq!(prefixed, data);
}

#[test]
fn test_value_or_string() {
    let native = serde_json::from_str::<LenientStruct>(r#"{"count":30,"flag":true}"#).unwrap();
    let quoted = serde_json::from_str::<LenientStruct>(r#"{"count":"30","flag":"true"}"#).unwrap();
    assert_eq!(native, quoted);
    assert_eq!(native.count, 30);
    assert!(native.flag);
}

#[test]
fn test_wrong_type_rejected() {
    assert!(serde_json::from_str::<LenientStruct>(r#"{"count":"thirty","flag":false}"#).is_err());
    assert!(serde_json::from_str::<LenientStruct>(r#"{"count":[1],"flag":false}"#).is_err());
    assert!(serde_json::from_str::<LenientStruct>(r#"{"count":-1,"flag":false}"#).is_err());
}

#[test]
fn test_missing_field_rejected() {
    assert!(serde_json::from_str::<LenientStruct>(r#"{"flag":false}"#).is_err());
}

#[test]
fn test_bool_forms() {
    for (input, expect) in [
        ("true", true),
        ("false", false),
        ("1", true),
        ("0", false),
        (r#""1""#, true),
        (r#""0""#, false),
        (r#""true""#, true),
        (r#"" false ""#, false),
    ] {
        let json = format!(r#"{{"flag":{}}}"#, input);
        let de = serde_json::from_str::<FlagStruct>(&json).unwrap();
        assert_eq!(de.flag, expect, "input {}", input);
    }
}

#[test]
fn test_bool_bad_forms_rejected() {
    for input in ["2", r#""yes""#, r#""2""#, "null", "[true]", "-1"] {
        let json = format!(r#"{{"flag":{}}}"#, input);
        assert!(serde_json::from_str::<FlagStruct>(&json).is_err(), "input {}", input);
    }
}
