//! Playlist registry
//!
//! Owns every playlist. Names are single words, unique ignoring case, and
//! keep the casing they were created with for display.

use crate::error::{ReelError, Result};
use crate::types::Playlist;
use std::collections::HashMap;

/// All playlists, keyed by lower-cased name
#[derive(Debug, Clone, Default)]
pub struct PlaylistRegistry {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty playlist
    ///
    /// Fails with `InvalidName` for an empty name or one containing
    /// whitespace, and with `DuplicateName` if a playlist already matches
    /// case-insensitively.
    pub fn create(&mut self, name: &str) -> Result<&mut Playlist> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ReelError::InvalidName {
                name: name.to_string(),
            });
        }

        let key = normalize(name);
        if self.playlists.contains_key(&key) {
            return Err(ReelError::DuplicateName {
                name: name.to_string(),
            });
        }

        tracing::debug!("Creating playlist {}", name);
        Ok(self.playlists.entry(key).or_insert_with(|| Playlist::new(name)))
    }

    /// Case-insensitive lookup
    pub fn find(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&normalize(name))
    }

    /// Case-insensitive mutable lookup
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&normalize(name))
    }

    /// Remove a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        let playlist = self
            .playlists
            .remove(&normalize(name))
            .ok_or_else(|| ReelError::playlist_not_found(name))?;
        tracing::debug!("Deleted playlist {}", playlist.name());
        Ok(playlist)
    }

    /// Every playlist, in no particular order
    pub fn list(&self) -> Vec<&Playlist> {
        self.playlists.values().collect()
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}
