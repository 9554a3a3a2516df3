use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// One displayable media path (gallery entry, thumbnail or video)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub path: String,
    pub kind: MediaKind,
}

impl MediaItem {
    /// Classify a path by extension; `.mp4` and `.webm` are videos
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let lower = path.to_ascii_lowercase();
        let kind = if lower.ends_with(".mp4") || lower.ends_with(".webm") {
            MediaKind::Video
        } else {
            MediaKind::Image
        };
        Self { path, kind }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}
