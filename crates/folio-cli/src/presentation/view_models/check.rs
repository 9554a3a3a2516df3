use folio_content::DocumentIssue;
use folio_types::Locale;
use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct CheckViewModel {
    pub locales: Vec<LocaleCheckSummary>,
    pub issues: Vec<DocumentIssue>,
}

#[derive(Debug, Serialize)]
pub struct LocaleCheckSummary {
    pub locale: Locale,
    pub resolved: Option<Locale>,
    pub total: usize,
    pub valid: usize,
}

impl CheckViewModel {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of distinct documents with at least one issue
    pub fn malformed_documents(&self) -> usize {
        self.locales.iter().map(|l| l.total - l.valid).sum()
    }
}

impl CreateView for CheckViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::check::CheckView;
        Box::new(CheckView::new(self))
    }
}
