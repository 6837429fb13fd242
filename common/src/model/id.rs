//! Lenient identifier decoding.
//!
//! Form templates and feedback records created by earlier versions of the
//! portal carry numeric ids (millisecond timestamps), while current ones use
//! UUID strings. Both are read into a `String` so the rest of the code deals
//! with one id type.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// `deserialize_with` target accepting either a JSON string or a JSON number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}
