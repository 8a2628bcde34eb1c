#![no_main]

use arbitrary::Arbitrary;
use confcodec::{
    cidr, decode, defaulted, encode, enumeration, non_empty, optional, sized, Codec, Integer,
    List, NetworkRange, Number, Text,
};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use std::{fmt::Debug, net::Ipv4Addr};

#[derive(Arbitrary, Debug)]
enum Raw {
    Missing,
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Text(String),
    Cidr([u8; 4], u8),
    List(Vec<String>),
}

impl Raw {
    fn to_value(&self) -> Option<Value> {
        match self {
            Raw::Missing => None,
            Raw::Null => Some(Value::Null),
            Raw::Bool(b) => Some(Value::Bool(*b)),
            Raw::Int(i) => Some(Value::from(*i)),
            Raw::Real(r) => Some(Value::from(*r)),
            Raw::Text(s) => Some(Value::String(s.clone())),
            Raw::Cidr(octets, prefix) => Some(Value::String(format!(
                "{}/{}",
                Ipv4Addr::from(*octets),
                prefix
            ))),
            Raw::List(items) => Some(Value::Array(
                items.iter().cloned().map(Value::String).collect(),
            )),
        }
    }
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Cidr(Raw),
    Defaulted(Raw),
    Optional(Raw),
    Sized(Raw, i8, i8),
    SizedNumber(f64, i8, i8),
    NonEmpty(Raw),
    Enum(Raw),
}

/// Whenever decoding succeeds, the encoding must decode to the same value.
fn roundtrip<C: Codec>(codec: &C, raw: Option<Value>)
where
    C::Decoded: PartialEq + Debug,
{
    let Ok(decoded) = decode(codec, raw.as_ref()) else {
        return;
    };
    let encoded = encode(codec, &decoded);
    assert!(codec.is(encoded.as_ref()), "{} rejected its own encoding", codec.name());
    let again = decode(codec, encoded.as_ref()).expect("Failed to decode an encoded value!");
    assert_eq!(decoded, again);
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Cidr(raw) => {
            let raw = raw.to_value();
            if let Some(Value::String(s)) = &raw {
                // Text accepted by the codec must agree with the parser
                assert_eq!(
                    decode(&cidr(), raw.as_ref()).is_ok(),
                    s.parse::<NetworkRange>().is_ok()
                );
            }
            roundtrip(&cidr(), raw);
        }
        FuzzInput::Defaulted(raw) => {
            roundtrip(&defaulted(cidr(), "10.0.0.0/8".parse().unwrap()), raw.to_value())
        }
        FuzzInput::Optional(raw) => roundtrip(&optional(List::new(cidr())), raw.to_value()),
        FuzzInput::Sized(raw, min, max) => {
            let (min, max) = (i64::from(min), i64::from(max));
            roundtrip(&sized(Text, min..=max), raw.to_value());
            roundtrip(&sized(Integer, min..=max), raw.to_value());
            roundtrip(&sized(Number, min..=max), raw.to_value());
        }
        FuzzInput::SizedNumber(value, min, max) => {
            let (min, max) = (i64::from(min), i64::from(max));
            roundtrip(&sized(Number, min..=max), Some(Value::from(value)));
        }
        FuzzInput::NonEmpty(raw) => roundtrip(&non_empty(List::new(Text)), raw.to_value()),
        FuzzInput::Enum(raw) => {
            roundtrip(&enumeration("Effect", ["allow", "deny"]), raw.to_value())
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
