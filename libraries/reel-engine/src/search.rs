//! Catalog search
//!
//! Stateless queries used by the search commands. Flagged videos never
//! appear in results.

use reel_core::{Catalog, Video};

/// What a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Video titles
    Title,

    /// Video tags
    Tag,
}

/// Run a search of the given kind
pub fn search<'a>(catalog: &'a Catalog, kind: SearchKind, term: &str) -> Vec<&'a Video> {
    match kind {
        SearchKind::Title => search_by_title(catalog, term),
        SearchKind::Tag => search_by_tag(catalog, term),
    }
}

/// Unflagged videos whose title contains `term`, ignoring case
pub fn search_by_title<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a Video> {
    let needle = term.to_lowercase();
    sorted_by_display(
        catalog
            .playable()
            .filter(|video| video.title.to_lowercase().contains(&needle)),
    )
}

/// Unflagged videos with at least one tag containing `tag`, ignoring case
pub fn search_by_tag<'a>(catalog: &'a Catalog, tag: &str) -> Vec<&'a Video> {
    let needle = tag.to_lowercase();
    sorted_by_display(catalog.playable().filter(|video| {
        video
            .tags
            .iter()
            .any(|candidate| candidate.to_lowercase().contains(&needle))
    }))
}

fn sorted_by_display<'a>(videos: impl Iterator<Item = &'a Video>) -> Vec<&'a Video> {
    let mut keyed: Vec<(String, &Video)> = videos.map(|video| (video.to_string(), video)).collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, video)| video).collect()
}
