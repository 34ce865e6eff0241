//! The per-player robust share record and its textual serialization.
//!
//! Big integers are encoded as decimal strings rather than handed to a generic derive: JSON
//! numbers lose precision well before the magnitudes this scheme produces (shares packed by the
//! pairing codec, or primes up to `2^4423 - 1`), so every integer field round-trips through
//! [`ToString`]/[`FromStr`] instead.

use crate::errors::RecordParseError;
use basic_types::PlayerId;
use num_bigint::BigUint;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// The field name used for the tag map in newly produced records.
const TAGS_FIELD: &str = "tags";

/// The legacy field name for the tag map, accepted on input for compatibility.
const LEGACY_TAGS_FIELD: &str = "vectors";

/// A player's bundle of `(share, keys, tags)`, as assembled by sharing and exchanged as a
/// string during reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RobustShareRecord {
    /// This player's share integer.
    pub share: BigUint,
    /// For every other player `j`, the MAC key this player holds to verify `j`'s tag about
    /// `j`'s own share.
    pub keys: BTreeMap<PlayerId, BigUint>,
    /// For every other player `j`, the tag `j` will use to verify that this player's share is
    /// authentic.
    pub tags: BTreeMap<PlayerId, (BigUint, BigUint)>,
}

impl RobustShareRecord {
    /// Serializes this record to the stable three-field textual form described in §6.
    ///
    /// # Errors
    /// Returns [`RecordParseError::Json`] if the underlying JSON encoder rejects the value;
    /// this cannot happen for the string/object/array shapes produced here, but the call is
    /// fallible in principle so the error is propagated rather than assumed away.
    pub fn to_json(&self) -> Result<String, RecordParseError> {
        let keys = self
            .keys
            .iter()
            .map(|(player, key)| (player.to_string(), Value::String(key.to_string())))
            .collect();
        let tags = self
            .tags
            .iter()
            .map(|(player, (b, c))| {
                let tag = Value::Array(vec![Value::String(b.to_string()), Value::String(c.to_string())]);
                (player.to_string(), tag)
            })
            .collect();

        let mut root = serde_json::Map::new();
        root.insert("share".to_string(), Value::String(self.share.to_string()));
        root.insert("keys".to_string(), Value::Object(keys));
        root.insert(TAGS_FIELD.to_string(), Value::Object(tags));
        Ok(serde_json::to_string(&Value::Object(root))?)
    }

    /// Parses a record from its textual form.
    ///
    /// Accepts either `"tags"` or the legacy `"vectors"` field name for the tag map.
    ///
    /// # Errors
    /// Returns [`RecordParseError`] if the input is not valid JSON, is not an object, is
    /// missing a required field, or holds a value of the wrong shape.
    pub fn from_json(text: &str) -> Result<Self, RecordParseError> {
        let value: Value = serde_json::from_str(text)?;
        let root = value.as_object().ok_or(RecordParseError::Malformed)?;

        let share = parse_decimal(root.get("share"), "share")?;
        let keys = parse_key_value_map(root.get("keys").ok_or(RecordParseError::MissingField("keys"))?)?;
        let tags_value = root
            .get(TAGS_FIELD)
            .or_else(|| root.get(LEGACY_TAGS_FIELD))
            .ok_or(RecordParseError::MissingField("tags"))?;
        let tags = parse_tag_map(tags_value)?;

        Ok(Self { share, keys, tags })
    }
}

fn parse_decimal(value: Option<&Value>, field: &'static str) -> Result<BigUint, RecordParseError> {
    let text = value
        .and_then(Value::as_str)
        .ok_or(RecordParseError::MissingField(field))?;
    BigUint::from_str(text).map_err(|_| RecordParseError::InvalidInteger(field.to_string()))
}

fn parse_key_value_map(value: &Value) -> Result<BTreeMap<PlayerId, BigUint>, RecordParseError> {
    let object = value.as_object().ok_or(RecordParseError::MissingField("keys"))?;
    let mut map = BTreeMap::new();
    for (raw_player, raw_value) in object {
        let player = PlayerId::from_str(raw_player)?;
        let text = raw_value
            .as_str()
            .ok_or_else(|| RecordParseError::InvalidInteger(raw_player.clone()))?;
        let int = BigUint::from_str(text).map_err(|_| RecordParseError::InvalidInteger(raw_player.clone()))?;
        map.insert(player, int);
    }
    Ok(map)
}

fn parse_tag_map(value: &Value) -> Result<BTreeMap<PlayerId, (BigUint, BigUint)>, RecordParseError> {
    let object = value.as_object().ok_or(RecordParseError::MissingField("tags"))?;
    let mut map = BTreeMap::new();
    for (raw_player, raw_value) in object {
        let player = PlayerId::from_str(raw_player)?;
        let pair = raw_value.as_array().filter(|a| a.len() == 2).ok_or(RecordParseError::MalformedTag)?;
        let b_text = pair.first().and_then(Value::as_str).ok_or(RecordParseError::MalformedTag)?;
        let c_text = pair.get(1).and_then(Value::as_str).ok_or(RecordParseError::MalformedTag)?;
        let b = BigUint::from_str(b_text).map_err(|_| RecordParseError::MalformedTag)?;
        let c = BigUint::from_str(c_text).map_err(|_| RecordParseError::MalformedTag)?;
        map.insert(player, (b, c));
    }
    Ok(map)
}
