//! Playback Events
//!
//! Transitions queue events so the caller can announce them in order, e.g. the
//! stop notice for the outgoing video before the play notice for the new one.

use reel_core::VideoId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A video became current
    Started {
        /// ID of the new current video
        video_id: VideoId,
    },

    /// The current video was stopped (explicitly, by a new play, or by a flag)
    Stopped {
        /// ID of the video that stopped
        video_id: VideoId,
    },

    /// The current video was paused
    Paused {
        /// ID of the paused video
        video_id: VideoId,
    },

    /// The current video was resumed
    Resumed {
        /// ID of the resumed video
        video_id: VideoId,
    },
}

impl PlaybackEvent {
    /// The video the event refers to
    pub fn video_id(&self) -> &VideoId {
        match self {
            Self::Started { video_id }
            | Self::Stopped { video_id }
            | Self::Paused { video_id }
            | Self::Resumed { video_id } => video_id,
        }
    }
}
