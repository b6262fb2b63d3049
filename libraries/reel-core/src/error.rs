//! Core error types for Reel

use thiserror::Error;

use crate::types::VideoId;

/// Result type alias using `ReelError`
pub type Result<T> = std::result::Result<T, ReelError>;

/// Every outcome a player command can fail with.
///
/// These are expected, user-facing results rather than faults. The `Display`
/// text is the reason part of a report line; the command engine prefixes it
/// with the command context (`Cannot play video: ...`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReelError {
    /// No catalog entry with this id
    #[error("Video does not exist")]
    VideoNotFound {
        /// The id that was looked up
        id: VideoId,
    },

    /// No playlist matches this name (case-insensitively)
    #[error("Playlist does not exist")]
    PlaylistNotFound {
        /// The name as supplied by the caller
        name: String,
    },

    /// The video is not a member of the playlist
    #[error("Video is not in playlist")]
    NotInPlaylist {
        /// The id that was removed
        id: VideoId,
    },

    /// A playlist with a case-insensitively equal name exists
    #[error("A playlist with the same name already exists")]
    DuplicateName {
        /// The rejected name
        name: String,
    },

    /// The video is already a member of the playlist
    #[error("Video already added")]
    AlreadyAdded {
        /// The id that was added twice
        id: VideoId,
    },

    /// Playlist names are a single non-empty word
    #[error("Invalid name - contains whitespace")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// The video is flagged and cannot be played or added
    #[error("Video is currently flagged (reason: {reason})")]
    Flagged {
        /// The flagged video
        id: VideoId,
        /// Reason recorded when it was flagged
        reason: String,
    },

    /// Flag requested for a video that is already flagged
    #[error("Video is already flagged")]
    AlreadyFlagged {
        /// The flagged video
        id: VideoId,
    },

    /// Unflag requested for a video that is not flagged
    #[error("Video is not flagged")]
    NotFlagged {
        /// The unflagged video
        id: VideoId,
    },

    /// The playback slot is empty
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Pause requested while already paused (informational)
    #[error("Video already paused")]
    AlreadyPaused {
        /// The paused video
        id: VideoId,
    },

    /// Resume requested while playing
    #[error("Video is not paused")]
    NotPaused {
        /// The playing video
        id: VideoId,
    },

    /// Nothing eligible: no unflagged video, or an empty search
    #[error("No videos available")]
    NoneAvailable,
}

impl ReelError {
    /// Create a video not found error
    pub fn video_not_found(id: impl Into<VideoId>) -> Self {
        Self::VideoNotFound { id: id.into() }
    }

    /// Create a playlist not found error
    pub fn playlist_not_found(name: impl Into<String>) -> Self {
        Self::PlaylistNotFound { name: name.into() }
    }

    /// Whether this outcome is a notice rather than a refusal
    ///
    /// Only `AlreadyPaused` qualifies: pausing twice leaves the player in the
    /// state the caller asked for.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::AlreadyPaused { .. })
    }
}
