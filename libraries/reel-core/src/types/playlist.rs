//! Playlist domain type

use crate::catalog::Catalog;
use crate::error::{ReelError, Result};
use crate::types::{Video, VideoId};
use serde::{Deserialize, Serialize};

/// A named, insertion-ordered set of video references
///
/// Membership is unique by id. Playlists hold ids only; the videos themselves
/// (and their flag state) stay owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    name: String,
    videos: Vec<VideoId>,
}

impl Playlist {
    /// Create an empty playlist
    ///
    /// Name rules are enforced by [`PlaylistRegistry`](crate::PlaylistRegistry).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// Name as originally supplied
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a video to the end of the playlist
    ///
    /// Returns `false` (and changes nothing) if the id is already a member.
    pub fn add_video(&mut self, id: VideoId) -> bool {
        if self.contains(id.as_str()) {
            return false;
        }
        self.videos.push(id);
        true
    }

    /// Remove a video by id
    pub fn remove_video(&mut self, id: &str) -> Result<VideoId> {
        let position = self
            .videos
            .iter()
            .position(|member| member == id)
            .ok_or_else(|| ReelError::NotInPlaylist { id: id.into() })?;
        Ok(self.videos.remove(position))
    }

    /// Whether the id is a member
    pub fn contains(&self, id: &str) -> bool {
        self.videos.iter().any(|member| member == id)
    }

    /// Member ids in insertion order
    pub fn video_ids(&self) -> &[VideoId] {
        &self.videos
    }

    /// Member videos in insertion order, resolved through the catalog
    pub fn get_videos<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Video> + 'a {
        self.videos.iter().filter_map(|id| catalog.get_video(id.as_str()))
    }

    /// Remove every member
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the playlist has no members
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
