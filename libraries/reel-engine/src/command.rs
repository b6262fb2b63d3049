//! Textual commands
//!
//! One command per input line: a case-insensitive command word followed by
//! its arguments.

use reel_core::{Catalog, ReelError, VideoId};
use std::str::FromStr;
use thiserror::Error;

/// Command reference shown by `HELP`
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display result of a search of videos by title.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display result of a search of videos by tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

/// Errors turning an input line into a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Blank line
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Empty,

    /// Unrecognised command word
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    /// A required argument is missing
    #[error("Missing {argument} for {command}, type HELP for usage.")]
    MissingArgument {
        /// Canonical command word
        command: &'static str,
        /// Name of the missing argument
        argument: &'static str,
    },
}

/// A parsed player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report the catalog size
    NumberOfVideos,
    /// List every video, sorted by title
    ListVideos,
    /// Play a video by id
    Play(String),
    /// Stop the current video
    Stop,
    /// Play a random unflagged video
    PlayRandom,
    /// Pause the current video
    Pause,
    /// Resume the current video
    Resume,
    /// Show the now-playing video
    ShowPlaying,
    /// Create an empty playlist
    CreatePlaylist(String),
    /// Add a video to a playlist
    AddToPlaylist {
        /// Playlist name as typed
        playlist: String,
        /// Video to add
        video_id: String,
    },
    /// Remove a video from a playlist
    RemoveFromPlaylist {
        /// Playlist name as typed
        playlist: String,
        /// Video to remove
        video_id: String,
    },
    /// Remove every video from a playlist
    ClearPlaylist(String),
    /// Delete a playlist
    DeletePlaylist(String),
    /// List playlist names
    ListPlaylists,
    /// Show the videos of one playlist
    ShowPlaylist(String),
    /// Search titles and offer to play a result
    SearchTitle(String),
    /// Search tags and offer to play a result
    SearchTag(String),
    /// Flag a video, with an optional reason
    Flag {
        /// Video to flag
        video_id: String,
        /// Reason; the default reason is used when absent
        reason: Option<String>,
    },
    /// Remove a video's flag
    Unflag(String),
    /// Show the command reference
    Help,
    /// Leave the session
    Exit,
}

impl Command {
    /// Canonical command word
    pub fn name(&self) -> &'static str {
        match self {
            Self::NumberOfVideos => "NUMBER_OF_VIDEOS",
            Self::ListVideos => "SHOW_ALL_VIDEOS",
            Self::Play(_) => "PLAY",
            Self::Stop => "STOP",
            Self::PlayRandom => "PLAY_RANDOM",
            Self::Pause => "PAUSE",
            Self::Resume => "CONTINUE",
            Self::ShowPlaying => "SHOW_PLAYING",
            Self::CreatePlaylist(_) => "CREATE_PLAYLIST",
            Self::AddToPlaylist { .. } => "ADD_TO_PLAYLIST",
            Self::RemoveFromPlaylist { .. } => "REMOVE_FROM_PLAYLIST",
            Self::ClearPlaylist(_) => "CLEAR_PLAYLIST",
            Self::DeletePlaylist(_) => "DELETE_PLAYLIST",
            Self::ListPlaylists => "SHOW_ALL_PLAYLISTS",
            Self::ShowPlaylist(_) => "SHOW_PLAYLIST",
            Self::SearchTitle(_) => "SEARCH_VIDEOS",
            Self::SearchTag(_) => "SEARCH_VIDEOS_WITH_TAG",
            Self::Flag { .. } => "FLAG_VIDEO",
            Self::Unflag(_) => "ALLOW_VIDEO",
            Self::Help => "HELP",
            Self::Exit => "EXIT",
        }
    }

    /// The single report line for a failed command
    pub fn describe_failure(&self, err: &ReelError, catalog: &Catalog) -> String {
        match (self, err) {
            (_, ReelError::AlreadyPaused { id }) => {
                format!("Video already paused: {}", title_of(catalog, id))
            }
            (Self::SearchTitle(term) | Self::SearchTag(term), ReelError::NoneAvailable) => {
                format!("No search results for {}", term)
            }
            (Self::PlayRandom, ReelError::NoneAvailable)
            | (Self::ShowPlaying, ReelError::NothingPlaying) => err.to_string(),
            _ => match self.failure_context() {
                Some(context) => format!("{}: {}", context, err),
                None => err.to_string(),
            },
        }
    }

    fn failure_context(&self) -> Option<String> {
        let context = match self {
            Self::Play(_) | Self::PlayRandom | Self::SearchTitle(_) | Self::SearchTag(_) => {
                "Cannot play video".to_string()
            }
            Self::Stop => "Cannot stop video".to_string(),
            Self::Pause => "Cannot pause video".to_string(),
            Self::Resume => "Cannot continue video".to_string(),
            Self::CreatePlaylist(_) => "Cannot create playlist".to_string(),
            Self::AddToPlaylist { playlist, .. } => format!("Cannot add video to {}", playlist),
            Self::RemoveFromPlaylist { playlist, .. } => {
                format!("Cannot remove video from {}", playlist)
            }
            Self::ClearPlaylist(playlist) => format!("Cannot clear playlist {}", playlist),
            Self::DeletePlaylist(playlist) => format!("Cannot delete playlist {}", playlist),
            Self::ShowPlaylist(playlist) => format!("Cannot show playlist {}", playlist),
            Self::Flag { .. } => "Cannot flag video".to_string(),
            Self::Unflag(_) => "Cannot remove flag from video".to_string(),
            _ => return None,
        };
        Some(context)
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(ParseError::Empty)?;
        let rest = line[word.len()..].trim();

        let command = match word.to_uppercase().as_str() {
            "NUMBER_OF_VIDEOS" => Self::NumberOfVideos,
            "SHOW_ALL_VIDEOS" | "LIST_VIDEOS" => Self::ListVideos,
            "PLAY" => Self::Play(required(words.next(), "PLAY", "<video_id>")?),
            "STOP" => Self::Stop,
            "PLAY_RANDOM" => Self::PlayRandom,
            "PAUSE" => Self::Pause,
            "CONTINUE" | "RESUME" => Self::Resume,
            "SHOW_PLAYING" => Self::ShowPlaying,
            "CREATE_PLAYLIST" => {
                Self::CreatePlaylist(required(non_empty(rest), "CREATE_PLAYLIST", "<playlist_name>")?)
            }
            "ADD_TO_PLAYLIST" => Self::AddToPlaylist {
                playlist: required(words.next(), "ADD_TO_PLAYLIST", "<playlist_name>")?,
                video_id: required(words.next(), "ADD_TO_PLAYLIST", "<video_id>")?,
            },
            "REMOVE_FROM_PLAYLIST" => Self::RemoveFromPlaylist {
                playlist: required(words.next(), "REMOVE_FROM_PLAYLIST", "<playlist_name>")?,
                video_id: required(words.next(), "REMOVE_FROM_PLAYLIST", "<video_id>")?,
            },
            "CLEAR_PLAYLIST" => {
                Self::ClearPlaylist(required(words.next(), "CLEAR_PLAYLIST", "<playlist_name>")?)
            }
            "DELETE_PLAYLIST" => {
                Self::DeletePlaylist(required(words.next(), "DELETE_PLAYLIST", "<playlist_name>")?)
            }
            "SHOW_ALL_PLAYLISTS" | "LIST_PLAYLISTS" => Self::ListPlaylists,
            "SHOW_PLAYLIST" => {
                Self::ShowPlaylist(required(words.next(), "SHOW_PLAYLIST", "<playlist_name>")?)
            }
            "SEARCH_VIDEOS" | "SEARCH_TITLE" => {
                Self::SearchTitle(required(non_empty(rest), "SEARCH_VIDEOS", "<search_term>")?)
            }
            "SEARCH_VIDEOS_WITH_TAG" | "SEARCH_TAG" => {
                Self::SearchTag(required(non_empty(rest), "SEARCH_VIDEOS_WITH_TAG", "<tag_name>")?)
            }
            "FLAG_VIDEO" | "FLAG" => {
                let video_id = required(words.next(), "FLAG_VIDEO", "<video_id>")?;
                let reason = words.collect::<Vec<_>>().join(" ");
                Self::Flag {
                    video_id,
                    reason: non_empty(&reason).map(str::to_string),
                }
            }
            "ALLOW_VIDEO" | "UNFLAG" => Self::Unflag(required(words.next(), "ALLOW_VIDEO", "<video_id>")?),
            "HELP" => Self::Help,
            "EXIT" => Self::Exit,
            _ => return Err(ParseError::Unknown(word.to_string())),
        };

        Ok(command)
    }
}

fn required(
    value: Option<&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, ParseError> {
    value
        .map(str::to_string)
        .ok_or(ParseError::MissingArgument { command, argument })
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Title of a catalog video, falling back to its id
pub(crate) fn title_of<'a>(catalog: &'a Catalog, id: &'a VideoId) -> &'a str {
    catalog
        .get_video(id.as_str())
        .map_or(id.as_str(), |video| video.title.as_str())
}
