//! End-to-end tests for the command engine
//!
//! Every test drives the engine through parsed command lines and checks the
//! exact lines reported to the console.

mod common;

use common::{create_test_engine, run};
use reel_core::{ReelError, VideoId};
use reel_engine::{Command, ParseError};
use reel_playback::PlaybackState;

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_number_of_videos() {
    let (mut engine, mut console) = create_test_engine();
    assert_eq!(
        run(&mut engine, &mut console, "NUMBER_OF_VIDEOS"),
        ["5 videos in the library"]
    );
}

#[test]
fn test_show_all_videos_sorted_by_title_with_flags() {
    let (mut engine, mut console) = create_test_engine();
    run(&mut engine, &mut console, "FLAG_VIDEO amazing_cats_video_id dont_like_cats");

    assert_eq!(
        run(&mut engine, &mut console, "SHOW_ALL_VIDEOS"),
        [
            "Here's a list of all available videos:",
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)",
            "  Another Cat Video (another_cat_video_id) [#cat #animal]",
            "  Funny Dogs (funny_dogs_video_id) [#dog #animal]",
            "  Life at Google (life_at_google_video_id) [#google #career]",
            "  Video about nothing (nothing_video_id) []",
        ]
    );
}

// ============================================================================
// Playback
// ============================================================================

#[test]
fn test_play_stops_previous_video_first() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "PLAY amazing_cats_video_id"),
        ["Playing video: Amazing Cats"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "PLAY funny_dogs_video_id"),
        ["Stopping video: Amazing Cats", "Playing video: Funny Dogs"]
    );
    assert_eq!(
        engine.playback().current_video_id(),
        Some(&VideoId::new("funny_dogs_video_id"))
    );
}

#[test]
fn test_play_missing_video_keeps_current() {
    let (mut engine, mut console) = create_test_engine();
    run(&mut engine, &mut console, "PLAY amazing_cats_video_id");

    assert_eq!(
        run(&mut engine, &mut console, "PLAY does_not_exist"),
        ["Cannot play video: Video does not exist"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "SHOW_PLAYING"),
        ["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal]"]
    );
}

#[test]
fn test_play_flagged_video_is_refused() {
    let (mut engine, mut console) = create_test_engine();
    run(&mut engine, &mut console, "FLAG_VIDEO amazing_cats_video_id dont_like_cats");

    assert_eq!(
        run(&mut engine, &mut console, "PLAY amazing_cats_video_id"),
        ["Cannot play video: Video is currently flagged (reason: dont_like_cats)"]
    );
    assert_eq!(engine.playback().state(), PlaybackState::Idle);
}

#[test]
fn test_stop() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "STOP"),
        ["Cannot stop video: No video is currently playing"]
    );

    run(&mut engine, &mut console, "PLAY amazing_cats_video_id");
    assert_eq!(
        run(&mut engine, &mut console, "STOP"),
        ["Stopping video: Amazing Cats"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "SHOW_PLAYING"),
        ["No video is currently playing"]
    );
}

#[test]
fn test_pause_and_continue() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "PAUSE"),
        ["Cannot pause video: No video is currently playing"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "CONTINUE"),
        ["Cannot continue video: No video is currently playing"]
    );

    run(&mut engine, &mut console, "PLAY amazing_cats_video_id");
    assert_eq!(
        run(&mut engine, &mut console, "CONTINUE"),
        ["Cannot continue video: Video is not paused"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "PAUSE"),
        ["Pausing video: Amazing Cats"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "PAUSE"),
        ["Video already paused: Amazing Cats"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "SHOW_PLAYING"),
        ["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "RESUME"),
        ["Continuing video: Amazing Cats"]
    );
    assert_eq!(engine.playback().state(), PlaybackState::Playing);
}

#[test]
fn test_already_paused_is_returned_as_informational_error() {
    let (mut engine, mut console) = create_test_engine();
    run(&mut engine, &mut console, "PLAY amazing_cats_video_id");
    run(&mut engine, &mut console, "PAUSE");

    let err = engine.execute(&Command::Pause, &mut console).unwrap_err();
    assert!(err.is_informational());
    assert_eq!(console.take(), ["Video already paused: Amazing Cats"]);
}

#[test]
fn test_play_random() {
    let (mut engine, mut console) = create_test_engine();

    let lines = run(&mut engine, &mut console, "PLAY_RANDOM");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Playing video: "));
    assert!(engine.playback().current_video_id().is_some());
}

#[test]
fn test_play_random_with_everything_flagged() {
    let (mut engine, mut console) = create_test_engine();
    for id in [
        "funny_dogs_video_id",
        "amazing_cats_video_id",
        "another_cat_video_id",
        "life_at_google_video_id",
        "nothing_video_id",
    ] {
        run(&mut engine, &mut console, &format!("FLAG_VIDEO {}", id));
    }

    assert_eq!(
        run(&mut engine, &mut console, "PLAY_RANDOM"),
        ["No videos available"]
    );
}

// ============================================================================
// Playlists
// ============================================================================

#[test]
fn test_create_playlist_rules() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "CREATE_PLAYLIST my_PLAYlist"),
        ["Successfully created new playlist: my_PLAYlist"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "CREATE_PLAYLIST MY_playlist"),
        ["Cannot create playlist: A playlist with the same name already exists"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "CREATE_PLAYLIST My List"),
        ["Cannot create playlist: Invalid name - contains whitespace"]
    );
    assert_eq!(engine.playlists().len(), 1);
}

#[test]
fn test_add_to_playlist_outcomes() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "ADD_TO_PLAYLIST missing nope"),
        ["Cannot add video to missing: Playlist does not exist"]
    );

    run(&mut engine, &mut console, "CREATE_PLAYLIST my_playlist");
    assert_eq!(
        run(&mut engine, &mut console, "ADD_TO_PLAYLIST MY_PLAYLIST amazing_cats_video_id"),
        ["Added video to MY_PLAYLIST: Amazing Cats"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "ADD_TO_PLAYLIST my_playlist amazing_cats_video_id"),
        ["Cannot add video to my_playlist: Video already added"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "ADD_TO_PLAYLIST my_playlist nope"),
        ["Cannot add video to my_playlist: Video does not exist"]
    );

    run(&mut engine, &mut console, "FLAG_VIDEO funny_dogs_video_id dont_like_dogs");
    assert_eq!(
        run(&mut engine, &mut console, "ADD_TO_PLAYLIST my_playlist funny_dogs_video_id"),
        ["Cannot add video to my_playlist: Video is currently flagged (reason: dont_like_dogs)"]
    );

    assert_eq!(engine.playlists().find("my_playlist").unwrap().len(), 1);
}

#[test]
fn test_show_playlist_is_live_and_case_insensitive() {
    let (mut engine, mut console) = create_test_engine();
    run(&mut engine, &mut console, "CREATE_PLAYLIST my_playlist");

    assert_eq!(
        run(&mut engine, &mut console, "SHOW_PLAYLIST My_Playlist"),
        ["Showing playlist: My_Playlist", "  No videos here yet"]
    );

    run(&mut engine, &mut console, "ADD_TO_PLAYLIST my_playlist amazing_cats_video_id");
    run(&mut engine, &mut console, "ADD_TO_PLAYLIST my_playlist nothing_video_id");
    run(&mut engine, &mut console, "FLAG_VIDEO amazing_cats_video_id");

    assert_eq!(
        run(&mut engine, &mut console, "SHOW_PLAYLIST my_playlist"),
        [
            "Showing playlist: my_playlist",
            "  Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: Not supplied)",
            "  Video about nothing (nothing_video_id) []",
        ]
    );
    assert_eq!(
        run(&mut engine, &mut console, "SHOW_PLAYLIST another"),
        ["Cannot show playlist another: Playlist does not exist"]
    );
}

#[test]
fn test_remove_from_playlist_outcomes() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "REMOVE_FROM_PLAYLIST my_playlist amazing_cats_video_id"),
        ["Cannot remove video from my_playlist: Playlist does not exist"]
    );

    run(&mut engine, &mut console, "CREATE_PLAYLIST my_playlist");
    run(&mut engine, &mut console, "ADD_TO_PLAYLIST my_playlist amazing_cats_video_id");

    assert_eq!(
        run(&mut engine, &mut console, "REMOVE_FROM_PLAYLIST my_playlist nope"),
        ["Cannot remove video from my_playlist: Video does not exist"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "REMOVE_FROM_PLAYLIST my_playlist funny_dogs_video_id"),
        ["Cannot remove video from my_playlist: Video is not in playlist"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "REMOVE_FROM_PLAYLIST my_playlist amazing_cats_video_id"),
        ["Removed video from my_playlist: Amazing Cats"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "REMOVE_FROM_PLAYLIST my_playlist amazing_cats_video_id"),
        ["Cannot remove video from my_playlist: Video is not in playlist"]
    );
}

#[test]
fn test_clear_and_delete_playlist() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "CLEAR_PLAYLIST my_playlist"),
        ["Cannot clear playlist my_playlist: Playlist does not exist"]
    );

    run(&mut engine, &mut console, "CREATE_PLAYLIST my_playlist");
    run(&mut engine, &mut console, "ADD_TO_PLAYLIST my_playlist amazing_cats_video_id");
    assert_eq!(
        run(&mut engine, &mut console, "CLEAR_PLAYLIST my_playlist"),
        ["Successfully removed all videos from my_playlist"]
    );
    assert!(engine.playlists().find("my_playlist").unwrap().is_empty());

    assert_eq!(
        run(&mut engine, &mut console, "DELETE_PLAYLIST MY_PLAYLIST"),
        ["Deleted playlist: MY_PLAYLIST"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "SHOW_PLAYLIST my_playlist"),
        ["Cannot show playlist my_playlist: Playlist does not exist"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "DELETE_PLAYLIST my_playlist"),
        ["Cannot delete playlist my_playlist: Playlist does not exist"]
    );
}

#[test]
fn test_show_all_playlists() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "SHOW_ALL_PLAYLISTS"),
        ["No playlists exist yet"]
    );

    run(&mut engine, &mut console, "CREATE_PLAYLIST my_playlist");
    run(&mut engine, &mut console, "CREATE_PLAYLIST Another");

    assert_eq!(
        run(&mut engine, &mut console, "LIST_PLAYLISTS"),
        ["Showing all playlists:", "  Another", "  my_playlist"]
    );
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_and_play_selection() {
    let (mut engine, mut console) = create_test_engine();
    console.answer(Some(2));

    assert_eq!(
        run(&mut engine, &mut console, "SEARCH_VIDEOS cat"),
        [
            "Here are the results for cat:",
            "  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "  2) Another Cat Video (another_cat_video_id) [#cat #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "Playing video: Another Cat Video",
        ]
    );
    assert_eq!(console.prompts, [2]);
}

#[test]
fn test_search_invalid_selection_plays_nothing() {
    let (mut engine, mut console) = create_test_engine();
    console.answer(Some(3));
    console.answer(None);

    let lines = run(&mut engine, &mut console, "SEARCH_VIDEOS cat");
    assert_eq!(lines.len(), 5);
    run(&mut engine, &mut console, "SEARCH_VIDEOS cat");

    assert_eq!(engine.playback().state(), PlaybackState::Idle);
}

#[test]
fn test_search_by_tag_skips_flagged_videos() {
    let (mut engine, mut console) = create_test_engine();
    run(&mut engine, &mut console, "FLAG_VIDEO another_cat_video_id");
    console.answer(Some(1));

    assert_eq!(
        run(&mut engine, &mut console, "SEARCH_VIDEOS_WITH_TAG #CAT"),
        [
            "Here are the results for #CAT:",
            "  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
            "Would you like to play any of the above? If yes, specify the number of the video.",
            "If your answer is not a valid number, we will assume it's a no.",
            "Playing video: Amazing Cats",
        ]
    );
}

#[test]
fn test_search_without_results_never_prompts() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "SEARCH_VIDEOS blah"),
        ["No search results for blah"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "SEARCH_VIDEOS_WITH_TAG #blah"),
        ["No search results for #blah"]
    );
    assert!(console.prompts.is_empty());
}

// ============================================================================
// Moderation
// ============================================================================

#[test]
fn test_flag_current_video_stops_it() {
    let (mut engine, mut console) = create_test_engine();
    run(&mut engine, &mut console, "PLAY amazing_cats_video_id");
    run(&mut engine, &mut console, "PAUSE");

    assert_eq!(
        run(&mut engine, &mut console, "FLAG_VIDEO amazing_cats_video_id"),
        [
            "Stopping video: Amazing Cats",
            "Successfully flagged video: Amazing Cats (reason: Not supplied)",
        ]
    );
    assert_eq!(engine.playback().state(), PlaybackState::Idle);
}

#[test]
fn test_flag_failures() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "FLAG_VIDEO nope"),
        ["Cannot flag video: Video does not exist"]
    );

    run(&mut engine, &mut console, "FLAG_VIDEO amazing_cats_video_id first reason");
    assert_eq!(
        run(&mut engine, &mut console, "FLAG_VIDEO amazing_cats_video_id"),
        ["Cannot flag video: Video is already flagged"]
    );
    assert_eq!(
        engine
            .catalog()
            .get_video("amazing_cats_video_id")
            .unwrap()
            .flag_reason(),
        Some("first reason")
    );
}

#[test]
fn test_allow_video() {
    let (mut engine, mut console) = create_test_engine();

    assert_eq!(
        run(&mut engine, &mut console, "ALLOW_VIDEO nope"),
        ["Cannot remove flag from video: Video does not exist"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "ALLOW_VIDEO amazing_cats_video_id"),
        ["Cannot remove flag from video: Video is not flagged"]
    );

    run(&mut engine, &mut console, "FLAG_VIDEO amazing_cats_video_id");
    assert_eq!(
        run(&mut engine, &mut console, "ALLOW_VIDEO amazing_cats_video_id"),
        ["Successfully removed flag from video: Amazing Cats"]
    );
    assert_eq!(
        run(&mut engine, &mut console, "PLAY amazing_cats_video_id"),
        ["Playing video: Amazing Cats"]
    );
}

// ============================================================================
// Misc
// ============================================================================

#[test]
fn test_help_and_exit() {
    let (mut engine, mut console) = create_test_engine();

    let help = run(&mut engine, &mut console, "help");
    assert_eq!(help[0], "Available commands:");
    assert!(help.iter().any(|line| line.contains("SEARCH_VIDEOS_WITH_TAG")));

    assert!(run(&mut engine, &mut console, "EXIT").is_empty());
}

#[test]
fn test_failures_return_the_error() {
    let (mut engine, mut console) = create_test_engine();

    let err = engine
        .execute(&Command::Play("nope".to_string()), &mut console)
        .unwrap_err();
    assert_eq!(err, ReelError::video_not_found("nope"));
    assert_eq!(console.take().len(), 1);
}

#[test]
fn test_unknown_command_message() {
    let err = "DANCE".parse::<Command>().unwrap_err();
    assert_eq!(err, ParseError::Unknown("DANCE".to_string()));
    assert_eq!(
        err.to_string(),
        "Please enter a valid command, type HELP for a list of available commands."
    );
}
