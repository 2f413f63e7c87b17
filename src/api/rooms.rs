use chrono::{DateTime, Utc};
use regex::Regex;
use reqwest::Method;
use serde_json::Value;

use crate::api::DailyClient;
use crate::error::{DailyError, Result};
use crate::models::{
    AppMessageBody, CreateParams, DeleteResponse, GetManyParams, Privacy, Room, RoomBody,
    UpdateParams,
};
use crate::security::generate_name_with_prefix;

/// Recipient that broadcasts an app message to every participant.
pub const BROADCAST_RECIPIENT: &str = "*";

const APP_MESSAGE_SEGMENT: &str = "send-app-message";

impl DailyClient {
    /// POST /rooms - Create a room
    ///
    /// Rooms without an explicit expiry get the client's default lifetime.
    /// A prefix switches to generated names; a name passed alongside it is
    /// ignored.
    pub async fn create_room(&self, mut params: CreateParams) -> Result<Room> {
        if let Some(prefix) = params.prefix.take() {
            if let Some(name) = params.name.as_deref() {
                tracing::warn!(
                    name = %name,
                    prefix = %prefix,
                    "Both a room name and a prefix were given; the name will be ignored"
                );
            }
            params.name = Some(generate_name_with_prefix(
                &prefix,
                self.options.name_suffix_len,
            )?);
        }

        self.post_room(params).await
    }

    /// Create a room named `prefix` followed by a random suffix.
    ///
    /// Fails before any network call if `prefix` is over ten characters.
    pub async fn create_room_with_prefix(
        &self,
        prefix: &str,
        mut params: CreateParams,
    ) -> Result<Room> {
        params.name = Some(generate_name_with_prefix(
            prefix,
            self.options.name_suffix_len,
        )?);
        params.prefix = None;

        self.post_room(params).await
    }

    async fn post_room(&self, mut params: CreateParams) -> Result<Room> {
        if params.props.exp.is_none() {
            params.props.set_expiry(self.default_expiry_from(Utc::now()));
        }

        let body = RoomBody {
            name: params.name,
            privacy: Some(Privacy::from_private(params.is_private)),
            properties: params.props.encode(&params.additional_props),
        };

        let url = self.endpoint(&[], &[])?;
        let room: Room = self.request(Method::POST, url, Some(&body)).await?;

        tracing::info!(room_id = %room.id, name = %room.name, "Room created");
        Ok(room)
    }

    /// Expiry for a room created at `now` without an explicit one.
    ///
    /// Lifetimes too large for a timestamp fall back to one day.
    fn default_expiry_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let fallback = now + chrono::Duration::days(1);
        match chrono::Duration::from_std(self.options.default_room_expiry)
            .ok()
            .and_then(|lifetime| now.checked_add_signed(lifetime))
        {
            Some(expiry) => expiry,
            None => {
                tracing::warn!(
                    lifetime = ?self.options.default_room_expiry,
                    "Default room expiry out of range, using one day"
                );
                fallback
            }
        }
    }

        /// GET /rooms/{name} - Get a single room
    pub async fn get_room(&self, name: &str) -> Result<Room> {
        let url = self.endpoint(&[name], &[])?;
        self.request(Method::GET, url, None::<&()>).await
    }

    /// GET /rooms - Every room inside the given bounds, across all pages
    pub async fn get_rooms(&self, params: &GetManyParams) -> Result<Vec<Room>> {
        self.room_pages(params).collect().await
    }

    /// Rooms inside the given bounds whose name matches `pattern`.
    ///
    /// The pattern is compiled before any request is made.
    pub async fn get_rooms_with_regex(
        &self,
        params: &GetManyParams,
        pattern: &str,
    ) -> Result<Vec<Room>> {
        let regex = Regex::new(pattern)?;
        self.get_rooms_matching(params, &regex).await
    }

    pub async fn get_rooms_matching(
        &self,
        params: &GetManyParams,
        regex: &Regex,
    ) -> Result<Vec<Room>> {
        let rooms = self.get_rooms(params).await?;
        Ok(filter_by_name(rooms, regex))
    }

    /// POST /rooms/{name} - Update an existing room
    ///
    /// Returns the room as echoed back by the server.
    pub async fn update_room(&self, params: UpdateParams) -> Result<Room> {
        let body = RoomBody {
            name: None,
            privacy: params.privacy,
            properties: params.props.encode(&params.additional_props),
        };

        let url = self.endpoint(&[params.name.as_str()], &[])?;
        let room: Room = self.request(Method::POST, url, Some(&body)).await?;

        tracing::info!(room_id = %room.id, name = %room.name, "Room updated");
        Ok(room)
    }

    /// DELETE /rooms/{name} - Delete a room
    ///
    /// Succeeds only if the server confirms deleting exactly `name`.
    pub async fn delete_room(&self, name: &str) -> Result<()> {
        let url = self.endpoint(&[name], &[])?;
        let res: DeleteResponse = self.request(Method::DELETE, url, None::<&()>).await?;

        if !res.deleted || res.name.as_deref() != Some(name) {
            return Err(DailyError::RoomDeleteMismatch {
                requested: name.to_string(),
                deleted: res.deleted,
                reported: res.name,
            });
        }

        tracing::info!(name = %name, "Room deleted");
        Ok(())
    }

    /// POST /rooms/{name}/send-app-message
    ///
    /// `recipient` defaults to every participant in the room.
    pub async fn send_app_message(
        &self,
        room_name: &str,
        data: &Value,
        recipient: Option<&str>,
    ) -> Result<()> {
        let body = AppMessageBody {
            data,
            recipient: recipient.unwrap_or(BROADCAST_RECIPIENT),
        };

        let url = self.endpoint(&[room_name, APP_MESSAGE_SEGMENT], &[])?;
        self.send(Method::POST, url, Some(&body)).await?;

        tracing::debug!(room = %room_name, recipient = %body.recipient, "App message sent");
        Ok(())
    }
}

/// Keep the rooms whose name matches `regex` anywhere, in their original order.
pub fn filter_by_name(rooms: Vec<Room>, regex: &Regex) -> Vec<Room> {
    rooms
        .into_iter()
        .filter(|room| regex.is_match(&room.name))
        .collect()
}
