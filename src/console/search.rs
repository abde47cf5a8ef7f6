//! Title and tag search with the interactive selection step
//!
//! Both searches hide flagged videos entirely, rank the hits in catalog
//! title order, and end by offering to play one of them. The prompt is
//! written and flushed before the selection source is asked, so an
//! interactive user sees the question they are answering.

use super::Console;
use crate::model::Video;
use crate::selection::SelectionSource;
use anyhow::Result;
use std::io::Write;

impl<W: Write, S: SelectionSource> Console<W, S> {
    /// SEARCH_VIDEOS
    ///
    /// Case-insensitive substring match on titles; the result header echoes
    /// the term as typed.
    pub fn search_videos(&mut self, term: &str) -> Result<()> {
        let needle = term.to_lowercase();
        let hits = self.collect_hits(|video| video.title.to_lowercase().contains(&needle));
        self.present_results(term, &hits)
    }

    /// SEARCH_VIDEOS_WITH_TAG
    ///
    /// Whole-tag, case-insensitive match. The query gets a leading '#' if
    /// the caller left it off, and the header echoes the normalized form.
    pub fn search_videos_with_tag(&mut self, tag: &str) -> Result<()> {
        let query = normalize_tag(tag);
        let needle = query.to_lowercase();
        let hits = self.collect_hits(|video| video.tags.iter().any(|t| t.to_lowercase() == needle));
        self.present_results(&query, &hits)
    }

    /// Unflagged videos matching `predicate`, in title-then-id order,
    /// materialized as (id, display line) pairs; rank is position plus one
    fn collect_hits(&self, predicate: impl Fn(&Video) -> bool) -> Vec<(String, String)> {
        self.catalog
            .sorted_by_title()
            .into_iter()
            .filter(|video| !video.is_flagged() && predicate(video))
            .map(|video| (video.id.clone(), video.to_string()))
            .collect()
    }

    /// Print the ranked results and resolve one selection
    ///
    /// Any answer that is not a valid 1-based rank counts as "no", silently.
    fn present_results(&mut self, searched: &str, hits: &[(String, String)]) -> Result<()> {
        if hits.is_empty() {
            writeln!(self.out, "No search results for {}", searched)?;
            return Ok(());
        }

        writeln!(self.out, "Here are the results for {}:", searched)?;
        for (rank, (_, line)) in hits.iter().enumerate() {
            writeln!(self.out, "{}) {}", rank + 1, line)?;
        }
        writeln!(
            self.out,
            "Would you like to play any of the above? If yes, specify the number of the video."
        )?;
        writeln!(
            self.out,
            "If your answer is not a valid number, we will assume it's a no."
        )?;
        self.out.flush()?;

        if let Some(rank) = self.selector.select() {
            if let Some(id) = rank
                .checked_sub(1)
                .and_then(|i| hits.get(i))
                .map(|(id, _)| id.clone())
            {
                self.play_video(&id)?;
            }
        }
        Ok(())
    }
}

/// Prefix the query with '#' when missing so it compares against stored tags
fn normalize_tag(tag: &str) -> String {
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("#cat"), "#cat");
        assert_eq!(normalize_tag("cat"), "#cat");
        // An empty query still gets the prefix and so matches no stored tag
        assert_eq!(normalize_tag(""), "#");
    }
}
