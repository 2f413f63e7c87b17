pub mod props;
pub mod room;

// -----------------------------
// Property re-exports
// -----------------------------
pub use props::{AdditionalProps, RoomProps, RECOGNIZED_PROPERTY_KEYS};

// -----------------------------
// Room re-exports
// -----------------------------
pub use room::{CreateParams, GetManyParams, Privacy, Room, UpdateParams};

pub(crate) use room::{AppMessageBody, DeleteResponse, RoomBody, RoomPage};
