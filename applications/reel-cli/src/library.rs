//! Catalog loading
//!
//! One video per line: `Title | video_id | #tag1 , #tag2`. The tag column
//! may be empty or missing.

use crate::error::{CliError, Result};
use reel_core::{Catalog, Video};
use std::path::Path;

/// Catalog shipped with the binary
pub const BUILTIN_CATALOG: &str = include_str!("../videos.txt");

/// Load the catalog at `path`, or the builtin one
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            tracing::debug!("Loading catalog from {:?}", path);
            let text = std::fs::read_to_string(path)?;
            parse_catalog(&text)
        }
        None => parse_catalog(BUILTIN_CATALOG),
    }
}

/// Parse catalog text, skipping blank lines
pub fn parse_catalog(text: &str) -> Result<Catalog> {
    let videos = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line))
        .collect::<Result<Vec<_>>>()?;

    Ok(Catalog::new(videos))
}

fn parse_line(line_number: usize, line: &str) -> Result<Video> {
    let mut columns = line.split('|').map(str::trim);
    let title = columns.next().unwrap_or_default();
    let id = columns.next().unwrap_or_default();
    let tags = columns.next().unwrap_or_default();

    if title.is_empty() || id.is_empty() {
        return Err(CliError::Catalog {
            line: line_number,
            reason: "expected `Title | video_id | tags`".to_string(),
        });
    }
    if columns.next().is_some() {
        return Err(CliError::Catalog {
            line: line_number,
            reason: "too many `|` separated columns".to_string(),
        });
    }

    let tags = tags.split(',').map(str::trim).filter(|tag| !tag.is_empty());
    Ok(Video::new(id, title, tags))
}
