//! Fixtures for project document generation.
//!
//! Provides a builder that renders a complete front-matter document, and
//! converts it straight into a `ProjectRecord` for tests that do not need
//! a store at all.

use folio_content::{RawDocument, parse_document};
use folio_types::{Locale, ProjectRecord};
use std::path::PathBuf;

/// Builder for one project document.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    slug: String,
    title: String,
    description: String,
    date: String,
    category: String,
    tags: Vec<String>,
    featured: bool,
    status: Option<String>,
    extra: Vec<(String, String)>,
    body: String,
}

impl ProjectFixture {
    /// A valid `personal` project with no tags.
    pub fn new(slug: &str, date: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: format!("Project {}", slug),
            description: format!("Description of {}", slug),
            date: date.to_string(),
            category: "personal".to_string(),
            tags: Vec::new(),
            featured: false,
            status: None,
            extra: Vec::new(),
            body: format!("About {}.\n\nMore details.\n", slug),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Add a raw YAML `key: value` line to the front matter.
    pub fn field(mut self, key: &str, raw_value: &str) -> Self {
        self.extra.push((key.to_string(), raw_value.to_string()));
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Render the document text (YAML front matter + body).
    pub fn to_document(&self) -> String {
        let mut out = String::from("---\n");
        out.push_str(&format!("title: {}\n", quote(&self.title)));
        out.push_str(&format!("description: {}\n", quote(&self.description)));
        out.push_str(&format!("date: {}\n", quote(&self.date)));
        out.push_str(&format!("category: {}\n", quote(&self.category)));

        let tags: Vec<String> = self.tags.iter().map(|t| quote(t)).collect();
        out.push_str(&format!("tags: [{}]\n", tags.join(", ")));

        if self.featured {
            out.push_str("featured: true\n");
        }
        if let Some(status) = &self.status {
            out.push_str(&format!("status: {}\n", quote(status)));
        }
        for (key, value) in &self.extra {
            out.push_str(&format!("{}: {}\n", key, value));
        }

        out.push_str("---\n");
        out.push_str(&self.body);
        out
    }

    /// Parse the rendered document as if it had been read from `locale`.
    ///
    /// Panics if the fixture does not describe a valid document.
    pub fn to_record(&self, locale: &str) -> ProjectRecord {
        let raw = RawDocument::new(
            self.slug.clone(),
            PathBuf::from(format!("{}/{}.mdx", locale, self.slug)),
            self.to_document(),
        );
        parse_document(&raw, &Locale::from(locale))
            .unwrap_or_else(|issues| panic!("invalid fixture {}: {:?}", self.slug, issues))
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
