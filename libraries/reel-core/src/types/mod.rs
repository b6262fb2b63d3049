//! Domain types
mod ids;
mod playlist;
mod video;

pub use ids::VideoId;
pub use playlist::Playlist;
pub use video::Video;
