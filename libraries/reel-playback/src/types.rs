//! Core types for playback management

use reel_core::Video;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing is playing
    Idle,

    /// A video is playing
    Playing,

    /// A video is loaded but paused
    Paused,
}

/// The video in the now-playing slot, for display
#[derive(Debug, Clone, Copy)]
pub struct NowPlaying<'a> {
    /// The current video
    pub video: &'a Video,

    /// Whether playback is paused
    pub paused: bool,
}

/// `<title> (<id>) [<tags>]`, with ` - PAUSED` while paused
impl fmt::Display for NowPlaying<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.video.summary())?;
        if self.paused {
            f.write_str(" - PAUSED")?;
        }
        Ok(())
    }
}
