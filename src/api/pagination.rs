//! Cursor-based pagination over the room listing.

use std::collections::HashSet;

use reqwest::Method;

use crate::api::DailyClient;
use crate::error::Result;
use crate::models::{GetManyParams, Room, RoomPage};

/// Walks the room listing page by page, newest to oldest.
///
/// Each page after the first starts after the id of the last room of the
/// previous page, keeping the caller's `limit` and `ending_before`. The
/// walk ends once the first page's `total_count` rooms are collected, on an
/// empty page, or when a page brings nothing new.
pub struct RoomPages {
    client: DailyClient,
    params: GetManyParams,
    seen: HashSet<String>,
    target: Option<usize>,
    done: bool,
}

impl RoomPages {
    pub(crate) fn new(client: DailyClient, params: GetManyParams) -> Self {
        Self {
            client,
            params,
            seen: HashSet::new(),
            target: None,
            done: false,
        }
    }

    /// Fetch the next page, dropping rooms already returned by earlier pages.
    ///
    /// Returns `Ok(None)` when the listing is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Room>>> {
        if self.done {
            return Ok(None);
        }

        let query = self.params.query_pairs();
        let url = self.client.endpoint(&[], &query)?;
        let page: RoomPage = self.client.request(Method::GET, url, None::<&()>).await?;

        let total = *self.target.get_or_insert(page.total_count);
        let fetched = page.data.len();
        let next_cursor = page.data.last().map(|room| room.id.clone());

        let rooms: Vec<Room> = page
            .data
            .into_iter()
            .filter(|room| self.seen.insert(room.id.clone()))
            .collect();
        let collected = self.seen.len();

        tracing::debug!(fetched, new = rooms.len(), collected, total, "Fetched room page");

        if collected >= total || fetched == 0 {
            if collected < total {
                tracing::warn!(collected, total, "Room listing ended before the reported total");
            }
            self.done = true;
        } else if rooms.is_empty() {
            tracing::warn!(collected, total, "Room listing cursor stopped advancing");
            self.done = true;
        } else {
            self.params.starting_after = next_cursor;
        }

        Ok(Some(rooms))
    }

    /// Collect every remaining room into a `Vec`.
    pub async fn collect(mut self) -> Result<Vec<Room>> {
        let mut all = Vec::new();
        while let Some(rooms) = self.next_page().await? {
            all.extend(rooms);
        }
        Ok(all)
    }
}

impl DailyClient {
    /// Return a [`RoomPages`] over every room inside `params`' bounds.
    #[must_use]
    pub fn room_pages(&self, params: &GetManyParams) -> RoomPages {
        RoomPages::new(self.clone(), params.clone())
    }
}
