use folio_engine::FilterState;
use folio_types::{Category, Locale, MediaItem, Status};
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProjectListViewModel {
    pub requested_locale: Locale,
    /// Collection actually read, None when no collection exists
    pub resolved_locale: Option<Locale>,
    pub filters: FilterState,
    pub featured_only: bool,
    pub projects: Vec<ProjectEntryViewModel>,
    /// Size of the unfiltered catalog
    pub total: usize,
    /// Malformed documents left out of the catalog
    pub skipped: usize,
}

#[derive(Debug, Serialize)]
pub struct ProjectEntryViewModel {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub year: Option<i32>,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub locale: Locale,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailViewModel {
    pub slug: String,
    pub requested_locale: Locale,
    pub locale: Locale,
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub tags: Vec<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_url: Option<String>,
    pub media: Vec<MediaItem>,
    pub tech_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ProjectDetailViewModel {
    pub fn fell_back(&self) -> bool {
        self.locale != self.requested_locale
    }
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for ProjectListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::project::ProjectListView;
        Box::new(ProjectListView::new(self, mode))
    }
}

impl CreateView for ProjectDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::project::ProjectDetailView;
        Box::new(ProjectDetailView::new(self, mode))
    }
}
