//! Room configuration properties.
//!
//! The platform's room `config` object is open-ended. A handful of keys are
//! modelled as typed fields on [`RoomProps`]; everything else travels in an
//! [`AdditionalProps`] map untouched.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Config keys that map onto typed [`RoomProps`] fields.
pub const RECOGNIZED_PROPERTY_KEYS: [&str; 4] =
    ["exp", "max_participants", "start_audio_off", "start_video_off"];

/// Config keys not modelled by [`RoomProps`], kept as raw JSON.
pub type AdditionalProps = Map<String, Value>;

/// Commonly used room properties.
///
/// This does not represent every property a room supports; the rest go
/// through [`AdditionalProps`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RoomProps {
    /// Expiry as a Unix timestamp in seconds.
    pub exp: Option<i64>,
    pub max_participants: Option<u32>,
    pub start_audio_off: bool,
    pub start_video_off: bool,
}

impl RoomProps {
    pub fn set_expiry(&mut self, expiry: DateTime<Utc>) {
        self.exp = Some(expiry.timestamp());
    }

    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// A room without an expiry never expires.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry().is_some_and(|exp| exp <= now)
    }

    /// Build the outbound `properties` object.
    ///
    /// Unset `exp` and `max_participants` are omitted; the two flags are
    /// always written. Keys from `additional` are only inserted when the
    /// typed fields did not already produce them.
    pub fn encode(&self, additional: &AdditionalProps) -> Map<String, Value> {
        let mut props = Map::new();
        if let Some(exp) = self.exp {
            props.insert("exp".to_string(), Value::from(exp));
        }
        if let Some(max) = self.max_participants {
            props.insert("max_participants".to_string(), Value::from(max));
        }
        props.insert(
            "start_audio_off".to_string(),
            Value::Bool(self.start_audio_off),
        );
        props.insert(
            "start_video_off".to_string(),
            Value::Bool(self.start_video_off),
        );

        for (key, value) in additional {
            if !props.contains_key(key) {
                props.insert(key.clone(), value.clone());
            }
        }
        props
    }

    /// Split an inbound `config` object into typed and additional properties.
    pub fn decode(config: Map<String, Value>) -> serde_json::Result<(Self, AdditionalProps)> {
        let (recognized, additional): (Map<String, Value>, Map<String, Value>) = config
            .into_iter()
            .partition(|(key, _)| RECOGNIZED_PROPERTY_KEYS.contains(&key.as_str()));

        let props = serde_json::from_value(Value::Object(recognized))?;
        Ok((props, additional))
    }
}
