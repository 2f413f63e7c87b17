use url::Url;

use crate::error::{DailyError, Result};

/// Path segment of the room resource under the API base URL.
pub const ROOMS_SEGMENT: &str = "rooms";

/// Build `{base}/rooms[/segment...][?query]`.
///
/// Segments are appended to whatever path `base` already has and are
/// percent-encoded individually. An empty segment is rejected, since it
/// would address the collection instead of a room.
pub fn rooms_endpoint(base: &str, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(DailyError::EndpointConstruction {
            url: base.to_string(),
            reason: "room name must not be empty".to_string(),
        });
    }

    let mut url = Url::parse(base).map_err(|e| DailyError::EndpointConstruction {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    url.path_segments_mut()
        .map_err(|_| DailyError::EndpointConstruction {
            url: base.to_string(),
            reason: "URL cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .push(ROOMS_SEGMENT)
        .extend(segments);

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}
