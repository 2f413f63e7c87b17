use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::props::{AdditionalProps, RoomProps};

/// Room privacy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Private,
}

impl Privacy {
    pub fn from_private(is_private: bool) -> Self {
        if is_private {
            Privacy::Private
        } else {
            Privacy::Public
        }
    }
}

/// A room as reported by the platform.
///
/// Only ever built by decoding a server response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireRoom", into = "WireRoom")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub url: String,
    pub privacy: Privacy,
    pub created_at: DateTime<Utc>,
    pub config: RoomProps,
    pub additional_props: AdditionalProps,
}

impl Room {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.config.is_expired_at(now)
    }
}

/// Room JSON object as it appears on the wire.
#[derive(Debug, Serialize, Deserialize)]
struct WireRoom {
    id: String,
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    privacy: Privacy,
    created_at: DateTime<Utc>,
    #[serde(default)]
    config: Map<String, Value>,
}

impl TryFrom<WireRoom> for Room {
    type Error = serde_json::Error;

    fn try_from(wire: WireRoom) -> Result<Self, Self::Error> {
        let (config, additional_props) = RoomProps::decode(wire.config)?;
        Ok(Self {
            id: wire.id,
            name: wire.name,
            url: wire.url,
            privacy: wire.privacy,
            created_at: wire.created_at,
            config,
            additional_props,
        })
    }
}

impl From<Room> for WireRoom {
    fn from(room: Room) -> Self {
        Self {
            config: room.config.encode(&room.additional_props),
            id: room.id,
            name: room.name,
            url: room.url,
            privacy: room.privacy,
            created_at: room.created_at,
        }
    }
}

/// Parameters for creating a room.
///
/// When `prefix` is set the name is generated from it and `name` is ignored.
#[derive(Debug, Clone, Default)]
pub struct CreateParams {
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub is_private: bool,
    pub props: RoomProps,
    pub additional_props: AdditionalProps,
}

/// Bounds for listing rooms.
///
/// Cursors are room ids. `limit` is a page-size hint only; listing always
/// returns every room inside the bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetManyParams {
    pub limit: Option<u32>,
    pub ending_before: Option<String>,
    pub starting_after: Option<String>,
}

impl GetManyParams {
    /// Query pairs for the list endpoint, skipping unbounded sides.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            query.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = self.ending_before.as_deref().filter(|c| !c.is_empty()) {
            query.push(("ending_before", cursor.to_string()));
        }
        if let Some(cursor) = self.starting_after.as_deref().filter(|c| !c.is_empty()) {
            query.push(("starting_after", cursor.to_string()));
        }
        query
    }
}

/// Parameters for updating an existing room.
///
/// `privacy: None` leaves the server-side value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateParams {
    pub name: String,
    pub privacy: Option<Privacy>,
    pub props: RoomProps,
    pub additional_props: AdditionalProps,
}

/// Body for room create and update requests
#[derive(Debug, Serialize)]
pub(crate) struct RoomBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

/// One page of the room listing
#[derive(Debug, Deserialize)]
pub(crate) struct RoomPage {
    pub total_count: usize,
    #[serde(default)]
    pub data: Vec<Room>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteResponse {
    pub deleted: bool,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AppMessageBody<'a> {
    pub data: &'a Value,
    pub recipient: &'a str,
}
