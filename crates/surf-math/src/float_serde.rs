//! Serde adapter for `f64` sequences that may hold NaN or infinities.
//!
//! Finite values are written as plain numbers. Non-finite values are written
//! as the strings `"NaN"`, `"inf"` and `"-inf"`, which JSON can carry and read
//! back. Use with `#[serde(with = "surf_math::float_serde")]` on a `Vec<f64>`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WireFloat {
    Number(f64),
    Named(String),
}

impl From<f64> for WireFloat {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            WireFloat::Named("NaN".into())
        } else if v == f64::INFINITY {
            WireFloat::Named("inf".into())
        } else if v == f64::NEG_INFINITY {
            WireFloat::Named("-inf".into())
        } else {
            WireFloat::Number(v)
        }
    }
}

fn parse_named(name: &str) -> Option<f64> {
    match name {
        "NaN" => Some(f64::NAN),
        "inf" => Some(f64::INFINITY),
        "-inf" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|&v| WireFloat::from(v)))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    Vec::<WireFloat>::deserialize(deserializer)?
        .into_iter()
        .map(|w| match w {
            WireFloat::Number(v) => Ok(v),
            WireFloat::Named(name) => parse_named(&name)
                .ok_or_else(|| D::Error::custom(format!("unknown float literal {:?}", name))),
        })
        .collect()
}
