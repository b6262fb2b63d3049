//! Reel - Playback Management
//!
//! The "now playing" state machine for the Reel video player.
//!
//! This crate provides:
//! - A single now-playing slot with play / stop / pause / resume
//! - Uniform random play over unflagged videos
//! - Flag / unflag transitions (flagging the current video stops it)
//! - Ordered playback events for announcing transitions
//!
//! # Architecture
//!
//! `reel-playback` holds no videos of its own: every call is handed the
//! [`Catalog`](reel_core::Catalog), which owns videos and their flag state.
//! Playing a video only updates state; nothing is decoded or streamed.
//!
//! # Example
//!
//! ```rust
//! use reel_core::{Catalog, Video};
//! use reel_playback::{PlaybackController, PlaybackEvent, PlaybackState};
//!
//! let mut catalog = Catalog::new([
//!     Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
//!     Video::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
//! ]);
//! let mut playback = PlaybackController::new();
//!
//! playback.play(&catalog, "amazing_cats_video_id").unwrap();
//! playback.pause().unwrap();
//! assert_eq!(playback.state(), PlaybackState::Paused);
//!
//! // Flagging the current video forces a stop
//! playback.flag(&mut catalog, "amazing_cats_video_id", "dont_like_cats").unwrap();
//! assert_eq!(playback.state(), PlaybackState::Idle);
//!
//! let events = playback.drain_events();
//! assert!(matches!(events.last(), Some(PlaybackEvent::Stopped { .. })));
//! ```

mod controller;
mod events;
pub mod types;

// Public exports
pub use controller::PlaybackController;
pub use events::PlaybackEvent;
pub use types::{NowPlaying, PlaybackState};
