//! Reel Core
//!
//! Platform-agnostic domain types and error handling for the Reel video player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Video`, `VideoId`, `Playlist`
//! - **Catalog**: the read-only video lookup that owns moderation (flag) state
//! - **Playlist Registry**: case-insensitive, single-word named playlists
//! - **Error Handling**: the unified `ReelError` and `Result` types
//!
//! Playback lives in `reel-playback`; command dispatch lives in `reel-engine`.
//!
//! # Example
//!
//! ```rust
//! use reel_core::{Catalog, PlaylistRegistry, ReelError, Video};
//!
//! let catalog = Catalog::new([
//!     Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
//!     Video::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
//! ]);
//! assert_eq!(catalog.len(), 2);
//!
//! let mut playlists = PlaylistRegistry::new();
//! playlists.create("Favourites").unwrap();
//!
//! let err = playlists.create("favourites").unwrap_err();
//! assert!(matches!(err, ReelError::DuplicateName { .. }));
//!
//! let favourites = playlists.find_mut("FAVOURITES").unwrap();
//! favourites.add_video(catalog.get_video("funny_dogs_video_id").unwrap().id.clone());
//! assert_eq!(favourites.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use catalog::{Catalog, DEFAULT_FLAG_REASON};
pub use error::{ReelError, Result};
pub use registry::PlaylistRegistry;
pub use types::{Playlist, Video, VideoId};
