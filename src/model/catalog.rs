use super::Video;

/// Complete video catalog
///
/// Fixed for the lifetime of the session: videos are added at load time and
/// never removed. The only mutation commands perform is the moderation flag
/// on individual videos.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All videos, in the order the source listed them
    videos: Vec<Video>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self { videos: Vec::new() }
    }

    /// Add a video (load time only)
    pub fn add_video(&mut self, video: Video) {
        self.videos.push(video);
    }

    /// All videos in source order
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter()
    }

    /// Look up a video by id
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == id)
    }

    /// Mutable lookup, used by the moderation commands
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Video> {
        self.videos.iter_mut().find(|v| v.id == id)
    }

    /// Videos ordered by title, id as tie-break
    ///
    /// This is the ordering SHOW_ALL_VIDEOS prints and the one search result
    /// ranks are numbered in.
    pub fn sorted_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        videos
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
