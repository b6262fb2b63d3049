//! Reel - Command Engine
//!
//! Turns textual commands into transitions on the catalog, the playlist
//! registry and the playback controller, and reports the results.
//!
//! This crate provides:
//! - [`Command`] parsing from one input line
//! - The [`Engine`] facade with one method per command
//! - Title and tag search with an optional play-by-number selection
//! - The [`Console`] boundary every front end implements
//!
//! # Example
//!
//! ```rust
//! use reel_core::{Catalog, Video};
//! use reel_engine::{Command, Console, Engine};
//!
//! #[derive(Default)]
//! struct Lines(Vec<String>);
//!
//! impl Console for Lines {
//!     fn report(&mut self, message: &str) {
//!         self.0.push(message.to_string());
//!     }
//!
//!     fn request_selection(&mut self, _max: usize) -> Option<usize> {
//!         None
//!     }
//! }
//!
//! let mut engine = Engine::new(Catalog::new([
//!     Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
//! ]));
//! let mut console = Lines::default();
//!
//! let command: Command = "PLAY amazing_cats_video_id".parse().unwrap();
//! engine.execute(&command, &mut console).unwrap();
//! assert_eq!(console.0, ["Playing video: Amazing Cats"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boundary;
mod command;
mod engine;
pub mod search;

// Public exports
pub use boundary::{parse_selection, Console};
pub use command::{Command, ParseError, HELP_TEXT};
pub use engine::Engine;
pub use search::SearchKind;
