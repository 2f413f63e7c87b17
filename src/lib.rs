//! Client for the room resource of the Daily REST API.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod security;

pub use api::pagination::RoomPages;
pub use api::rooms::{filter_by_name, BROADCAST_RECIPIENT};
pub use api::{ClientOptions, DailyClient};
pub use auth::Credentials;
pub use config::Config;
pub use error::{DailyError, Result};
pub use models::{
    AdditionalProps, CreateParams, GetManyParams, Privacy, Room, RoomProps, UpdateParams,
};
