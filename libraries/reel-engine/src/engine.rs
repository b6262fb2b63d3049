//! Command engine
//!
//! Facade over the catalog, the playlist registry and the playback
//! controller. Each command resolves its targets, applies one transition and
//! reports the outcome through a [`Console`].

use crate::boundary::Console;
use crate::command::{title_of, Command, HELP_TEXT};
use crate::search::{self, SearchKind};
use reel_core::{Catalog, PlaylistRegistry, ReelError, Result, VideoId};
use reel_playback::{PlaybackController, PlaybackEvent};

const SELECTION_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

/// The video player
///
/// Owns all state. The per-command methods report their success lines and
/// return the failure untouched; [`Engine::execute`] also renders that
/// failure as a single line.
#[derive(Debug, Default)]
pub struct Engine {
    catalog: Catalog,
    playlists: PlaylistRegistry,
    playback: PlaybackController,
}

impl Engine {
    /// Create an engine over a populated catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            playlists: PlaylistRegistry::new(),
            playback: PlaybackController::new(),
        }
    }

    /// The video catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The playlist registry
    pub fn playlists(&self) -> &PlaylistRegistry {
        &self.playlists
    }

    /// The playback controller
    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    /// Run one command
    ///
    /// On failure exactly one line describing it is reported before the
    /// error is returned. `EXIT` is a no-op here; front ends end the session.
    pub fn execute(&mut self, command: &Command, console: &mut dyn Console) -> Result<()> {
        tracing::debug!("Executing {}", command.name());

        let outcome = match command {
            Command::NumberOfVideos => {
                self.number_of_videos(console);
                Ok(())
            }
            Command::ListVideos => {
                self.list_videos(console);
                Ok(())
            }
            Command::Play(id) => self.play(id, console),
            Command::Stop => self.stop(console),
            Command::PlayRandom => self.play_random(console),
            Command::Pause => self.pause(console),
            Command::Resume => self.resume(console),
            Command::ShowPlaying => self.show_playing(console),
            Command::CreatePlaylist(name) => self.create_playlist(name, console),
            Command::AddToPlaylist { playlist, video_id } => {
                self.add_to_playlist(playlist, video_id, console)
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                self.remove_from_playlist(playlist, video_id, console)
            }
            Command::ClearPlaylist(name) => self.clear_playlist(name, console),
            Command::DeletePlaylist(name) => self.delete_playlist(name, console),
            Command::ListPlaylists => {
                self.list_playlists(console);
                Ok(())
            }
            Command::ShowPlaylist(name) => self.show_playlist(name, console),
            Command::SearchTitle(term) => self.search_videos(SearchKind::Title, term, console),
            Command::SearchTag(tag) => self.search_videos(SearchKind::Tag, tag, console),
            Command::Flag { video_id, reason } => {
                self.flag_video(video_id, reason.as_deref(), console)
            }
            Command::Unflag(video_id) => self.allow_video(video_id, console),
            Command::Help => {
                HELP_TEXT.lines().for_each(|line| console.report(line));
                Ok(())
            }
            Command::Exit => Ok(()),
        };

        if let Err(err) = &outcome {
            if err.is_informational() {
                tracing::debug!("{} was a no-op: {}", command.name(), err);
            } else {
                tracing::debug!("{} failed: {}", command.name(), err);
            }
            console.report(&command.describe_failure(err, &self.catalog));
        }
        outcome
    }

    // ===== Catalog =====

    /// Report the catalog size
    pub fn number_of_videos(&self, console: &mut dyn Console) {
        console.report(&format!("{} videos in the library", self.catalog.len()));
    }

    /// List every video sorted by title, flag state included
    pub fn list_videos(&self, console: &mut dyn Console) {
        let mut videos: Vec<_> = self.catalog.get_all_videos().iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));

        console.report("Here's a list of all available videos:");
        for video in videos {
            console.report(&format!("  {}", video));
        }
    }

    // ===== Playback Control =====

    /// Play a video by id
    pub fn play(&mut self, video_id: &str, console: &mut dyn Console) -> Result<()> {
        self.playback.play(&self.catalog, video_id)?;
        self.announce(console);
        Ok(())
    }

    /// Play a random unflagged video
    pub fn play_random(&mut self, console: &mut dyn Console) -> Result<()> {
        self.playback.play_random(&self.catalog)?;
        self.announce(console);
        Ok(())
    }

    /// Stop the current video
    pub fn stop(&mut self, console: &mut dyn Console) -> Result<()> {
        self.playback.stop()?;
        self.announce(console);
        Ok(())
    }

    /// Pause the current video
    pub fn pause(&mut self, console: &mut dyn Console) -> Result<()> {
        self.playback.pause()?;
        self.announce(console);
        Ok(())
    }

    /// Resume the paused video
    pub fn resume(&mut self, console: &mut dyn Console) -> Result<()> {
        self.playback.resume()?;
        self.announce(console);
        Ok(())
    }

    /// Show the current video and whether it is paused
    pub fn show_playing(&self, console: &mut dyn Console) -> Result<()> {
        let now_playing = self.playback.now_playing(&self.catalog)?;
        console.report(&format!("Currently playing: {}", now_playing));
        Ok(())
    }

    // ===== Playlists =====

    /// Create an empty playlist
    pub fn create_playlist(&mut self, name: &str, console: &mut dyn Console) -> Result<()> {
        let playlist = self.playlists.create(name)?;
        console.report(&format!(
            "Successfully created new playlist: {}",
            playlist.name()
        ));
        Ok(())
    }

    /// Add an unflagged video to a playlist
    pub fn add_to_playlist(
        &mut self,
        playlist_name: &str,
        video_id: &str,
        console: &mut dyn Console,
    ) -> Result<()> {
        let playlist = self
            .playlists
            .find_mut(playlist_name)
            .ok_or_else(|| ReelError::playlist_not_found(playlist_name))?;
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or_else(|| ReelError::video_not_found(video_id))?;

        if let Some(reason) = video.flag_reason() {
            return Err(ReelError::Flagged {
                id: video.id.clone(),
                reason: reason.to_string(),
            });
        }
        if !playlist.add_video(video.id.clone()) {
            return Err(ReelError::AlreadyAdded {
                id: video.id.clone(),
            });
        }

        tracing::debug!("Added {} to {}", video.id, playlist.name());
        console.report(&format!(
            "Added video to {}: {}",
            playlist_name, video.title
        ));
        Ok(())
    }

    /// Remove a video from a playlist
    pub fn remove_from_playlist(
        &mut self,
        playlist_name: &str,
        video_id: &str,
        console: &mut dyn Console,
    ) -> Result<()> {
        let playlist = self
            .playlists
            .find_mut(playlist_name)
            .ok_or_else(|| ReelError::playlist_not_found(playlist_name))?;
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or_else(|| ReelError::video_not_found(video_id))?;

        playlist.remove_video(video.id.as_str())?;

        tracing::debug!("Removed {} from {}", video.id, playlist.name());
        console.report(&format!(
            "Removed video from {}: {}",
            playlist_name, video.title
        ));
        Ok(())
    }

    /// Remove every video from a playlist
    pub fn clear_playlist(&mut self, playlist_name: &str, console: &mut dyn Console) -> Result<()> {
        let playlist = self
            .playlists
            .find_mut(playlist_name)
            .ok_or_else(|| ReelError::playlist_not_found(playlist_name))?;

        playlist.clear();
        tracing::debug!("Cleared {}", playlist.name());
        console.report(&format!(
            "Successfully removed all videos from {}",
            playlist_name
        ));
        Ok(())
    }

    /// Delete a playlist
    pub fn delete_playlist(&mut self, playlist_name: &str, console: &mut dyn Console) -> Result<()> {
        self.playlists.delete(playlist_name)?;
        console.report(&format!("Deleted playlist: {}", playlist_name));
        Ok(())
    }

    /// List playlist names, sorted
    pub fn list_playlists(&self, console: &mut dyn Console) {
        if self.playlists.is_empty() {
            console.report("No playlists exist yet");
            return;
        }

        let mut names: Vec<&str> = self.playlists.list().into_iter().map(|p| p.name()).collect();
        names.sort_unstable();

        console.report("Showing all playlists:");
        for name in names {
            console.report(&format!("  {}", name));
        }
    }

    /// Show a playlist's videos in insertion order
    pub fn show_playlist(&self, playlist_name: &str, console: &mut dyn Console) -> Result<()> {
        let playlist = self
            .playlists
            .find(playlist_name)
            .ok_or_else(|| ReelError::playlist_not_found(playlist_name))?;

        console.report(&format!("Showing playlist: {}", playlist_name));
        if playlist.is_empty() {
            console.report("  No videos here yet");
        }
        for video in playlist.get_videos(&self.catalog) {
            console.report(&format!("  {}", video));
        }
        Ok(())
    }

    // ===== Search =====

    /// Search the catalog and offer to play one of the results
    ///
    /// An empty result set is `NoneAvailable` and never prompts. Anything
    /// other than a valid selection plays nothing.
    pub fn search_videos(
        &mut self,
        kind: SearchKind,
        term: &str,
        console: &mut dyn Console,
    ) -> Result<()> {
        let results = search::search(&self.catalog, kind, term);
        if results.is_empty() {
            return Err(ReelError::NoneAvailable);
        }

        console.report(&format!("Here are the results for {}:", term));
        for (position, video) in results.iter().enumerate() {
            console.report(&format!("  {}) {}", position + 1, video));
        }
        SELECTION_PROMPT.iter().for_each(|line| console.report(line));

        let choices: Vec<VideoId> = results.iter().map(|video| video.id.clone()).collect();
        let selected = console
            .request_selection(choices.len())
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| choices.get(index));

        match selected {
            Some(video_id) => self.play(video_id.as_str(), console),
            None => {
                tracing::debug!("No selection for search {:?}", term);
                Ok(())
            }
        }
    }

    // ===== Moderation =====

    /// Flag a video; a missing or blank reason uses the default reason
    pub fn flag_video(
        &mut self,
        video_id: &str,
        reason: Option<&str>,
        console: &mut dyn Console,
    ) -> Result<()> {
        self.playback
            .flag(&mut self.catalog, video_id, reason.unwrap_or_default())?;
        self.announce(console);

        let video = self
            .catalog
            .get_video(video_id)
            .ok_or_else(|| ReelError::video_not_found(video_id))?;
        console.report(&format!(
            "Successfully flagged video: {} (reason: {})",
            video.title,
            video.flag_reason().unwrap_or_default()
        ));
        Ok(())
    }

    /// Remove a video's flag
    pub fn allow_video(&mut self, video_id: &str, console: &mut dyn Console) -> Result<()> {
        self.playback.unflag(&mut self.catalog, video_id)?;

        let video = self
            .catalog
            .get_video(video_id)
            .ok_or_else(|| ReelError::video_not_found(video_id))?;
        console.report(&format!(
            "Successfully removed flag from video: {}",
            video.title
        ));
        Ok(())
    }

    /// Report queued playback events, oldest first
    fn announce(&mut self, console: &mut dyn Console) {
        for event in self.playback.drain_events() {
            let title = title_of(&self.catalog, event.video_id());
            let line = match &event {
                PlaybackEvent::Started { .. } => format!("Playing video: {}", title),
                PlaybackEvent::Stopped { .. } => format!("Stopping video: {}", title),
                PlaybackEvent::Paused { .. } => format!("Pausing video: {}", title),
                PlaybackEvent::Resumed { .. } => format!("Continuing video: {}", title),
            };
            console.report(&line);
        }
    }
}
