use serde::{Deserialize, Serialize};

use super::{Category, Locale, MediaItem, Status};
use crate::util::year_of;

/// Front-matter metadata of one project document.
///
/// `slug` is never read from the document itself; it is derived from the
/// file name and attached with [`ProjectMetadata::with_slug`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    #[serde(skip_deserializing)]
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_details: Option<String>,
}

impl ProjectMetadata {
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
}

/// A project as exposed to callers: metadata, markdown body, and the locale
/// collection it was actually read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub metadata: ProjectMetadata,
    pub content: String,
    pub locale: Locale,
}

impl ProjectRecord {
    pub fn new(metadata: ProjectMetadata, content: impl Into<String>, locale: Locale) -> Self {
        Self {
            metadata,
            content: content.into(),
            locale,
        }
    }

    pub fn slug(&self) -> &str {
        &self.metadata.slug
    }

    pub fn date(&self) -> &str {
        &self.metadata.date
    }

    pub fn category(&self) -> Category {
        self.metadata.category
    }

    pub fn tags(&self) -> &[String] {
        &self.metadata.tags
    }

    pub fn is_featured(&self) -> bool {
        self.metadata.featured
    }

    /// Calendar year of `date`, if the date is well-formed
    pub fn year(&self) -> Option<i32> {
        year_of(&self.metadata.date)
    }

    /// Media to display: the gallery when non-empty, otherwise the video
    /// followed by the thumbnail.
    pub fn media(&self) -> Vec<MediaItem> {
        if let Some(gallery) = &self.metadata.gallery
            && !gallery.is_empty()
        {
            return gallery.iter().cloned().map(MediaItem::from_path).collect();
        }

        self.metadata
            .video
            .iter()
            .chain(self.metadata.thumbnail.iter())
            .cloned()
            .map(MediaItem::from_path)
            .collect()
    }

    /// Text for the technical-summary panel: `techDetails`, else the first
    /// paragraph of the body, else the description.
    pub fn tech_summary(&self) -> &str {
        if let Some(details) = &self.metadata.tech_details
            && !details.trim().is_empty()
        {
            return details.trim();
        }

        let paragraph = first_paragraph_of(&self.content);
        if !paragraph.is_empty() {
            return paragraph;
        }

        &self.metadata.description
    }
}

fn first_paragraph_of(body: &str) -> &str {
    let body = body.trim_start();
    let end = [body.find("\n\n"), body.find("\r\n\r\n")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(body.len());
    body[..end].trim()
}
