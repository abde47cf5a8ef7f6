//! Catalog source parsing
//!
//! Videos are listed one per line as pipe-separated fields: title, id, then
//! a whitespace-separated tag list (possibly empty):
//!
//! ```text
//! Amazing Cats|amazing_cats_video_id|#cat #animal
//! ```
//!
//! Parsing is lenient. Blank lines are skipped; malformed lines and
//! duplicate ids are logged and dropped rather than failing the whole load.
//! The dataset shipped with the binary is embedded at compile time so the
//! console runs with no arguments.

use crate::model::{Catalog, Video};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Dataset used when no catalog file is given
const DEFAULT_CATALOG: &str = include_str!("../data/videos.txt");

/// Parse the embedded default catalog
pub fn default_catalog() -> Catalog {
    parse_catalog(DEFAULT_CATALOG)
}

/// Load a catalog from a file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    Ok(parse_catalog(&text))
}

/// Parse catalog text into videos, preserving source order
pub fn parse_catalog(text: &str) -> Catalog {
    let mut catalog = Catalog::new();

    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(video) => {
                if catalog.get(&video.id).is_some() {
                    log::warn!(
                        "Line {}: duplicate video id {:?}, keeping the first",
                        lineno + 1,
                        video.id
                    );
                } else {
                    catalog.add_video(video);
                }
            }
            None => log::warn!("Line {}: malformed catalog line: {:?}", lineno + 1, line),
        }
    }

    log::debug!("Parsed {} videos from catalog source", catalog.len());
    catalog
}

/// Parse one `title|id|tags` line; the tag field may be absent
fn parse_line(line: &str) -> Option<Video> {
    let mut fields = line.splitn(3, '|');
    let title = fields.next()?.trim();
    let id = fields.next()?.trim();
    let tags = fields.next().unwrap_or("");

    if title.is_empty() || id.is_empty() {
        return None;
    }

    let tags = tags.split_whitespace().map(str::to_string).collect();
    Some(Video::new(id, title, tags))
}
