use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::text;
use crate::presentation::view_models::{
    ProjectDetailViewModel, ProjectEntryViewModel, ProjectListViewModel, ViewMode,
};
use crate::presentation::views::status_label;
use folio_engine::{CategoryFilter, YearSelection};
use folio_types::MediaKind;

// --------------------------------------------------------
// Project List View
// --------------------------------------------------------

pub struct ProjectListView<'a> {
    data: &'a ProjectListViewModel,
    mode: ViewMode,
}

impl<'a> ProjectListView<'a> {
    pub fn new(data: &'a ProjectListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for project in &self.data.projects {
            writeln!(f, "{}", project.slug)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.projects.is_empty() {
            writeln!(f, "No projects found.")?;
            return Ok(());
        }

        let locale = &self.data.requested_locale;
        for project in &self.data.projects {
            let star = if project.featured { "★ " } else { "" };
            writeln!(
                f,
                "{} {} [{}] {}{}",
                project.date,
                project.slug,
                project.category.label(locale),
                star,
                text::single_line(&project.title, 60)
            )?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        self.show_fallback_info(f)?;

        if self.data.projects.is_empty() {
            writeln!(f, "No projects found.")?;
            self.show_filter_info(f)?;
            return Ok(());
        }

        let locale = &self.data.requested_locale;
        writeln!(
            f,
            "{:<10}  {:<24}  {:<14}  {:<14}  TITLE",
            "DATE", "SLUG", "CATEGORY", "STATUS"
        )?;
        writeln!(f, "{}", "-".repeat(90))?;

        for project in &self.data.projects {
            let status = project
                .status
                .map(|s| status_label(s, locale))
                .unwrap_or_else(|| "-".to_string());
            let status_width = project
                .status
                .map(|s| s.label(locale).chars().count())
                .unwrap_or(1);

            write!(
                f,
                "{:<10}  {}  {}  {}{}  ",
                project.date,
                text::pad(&text::truncate(&project.slug, 24), 24),
                text::pad(project.category.label(locale), 14),
                status,
                " ".repeat(14usize.saturating_sub(status_width)),
            )?;
            if project.featured {
                write!(f, "{} ", "★".yellow())?;
            }
            writeln!(f, "{}", text::single_line(&project.title, 50).bold())?;

            if verbose {
                self.render_details(f, project)?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} / {} projects",
            self.data.projects.len(),
            self.data.total
        )?;
        if self.data.skipped > 0 {
            writeln!(
                f,
                "{}",
                format!("{} malformed document(s) skipped", self.data.skipped).yellow()
            )?;
        }

        self.show_filter_info(f)?;
        Ok(())
    }

    fn render_details(&self, f: &mut fmt::Formatter, project: &ProjectEntryViewModel) -> fmt::Result {
        writeln!(f, "    {}", text::single_line(&project.description, 80).bright_black())?;
        if !project.tags.is_empty() {
            writeln!(f, "    tags: {}", project.tags.join(", "))?;
        }
        if project.locale != self.data.requested_locale {
            writeln!(f, "    read from: {}", project.locale)?;
        }
        Ok(())
    }

    fn show_fallback_info(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(resolved) = &self.data.resolved_locale
            && resolved != &self.data.requested_locale
        {
            writeln!(
                f,
                "{}",
                format!(
                    "No '{}' collection, showing '{}' instead",
                    self.data.requested_locale, resolved
                )
                .bright_black()
            )?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn show_filter_info(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let filters = &self.data.filters;
        if !filters.has_active_filters() && !self.data.featured_only {
            return Ok(());
        }

        let locale = &self.data.requested_locale;
        writeln!(f)?;
        writeln!(f, "Filters applied:")?;
        if let YearSelection::Year(year) = filters.year {
            writeln!(f, "  Year: {}", year)?;
        }
        if let CategoryFilter::Only(category) = filters.category {
            writeln!(f, "  Category: {}", category.label(locale))?;
        }
        if !filters.tags.is_empty() {
            let tags: Vec<&str> = filters.tags.iter().map(String::as_str).collect();
            writeln!(f, "  Tags (any): {}", tags.join(", "))?;
        }
        if self.data.featured_only {
            writeln!(f, "  Featured only")?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ProjectListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_table(f, false),
            ViewMode::Verbose => self.render_table(f, true),
        }
    }
}

// --------------------------------------------------------
// Project Detail View
// --------------------------------------------------------

pub struct ProjectDetailView<'a> {
    data: &'a ProjectDetailViewModel,
    mode: ViewMode,
}

impl<'a> ProjectDetailView<'a> {
    pub fn new(data: &'a ProjectDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ProjectDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        let locale = &data.requested_locale;

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", data.slug);
        }

        writeln!(f, "{}", data.title.bold())?;
        writeln!(f, "{}", data.description)?;
        writeln!(f)?;

        writeln!(f, "{:<12} {}", "Slug:", data.slug)?;
        writeln!(f, "{:<12} {}", "Date:", data.date)?;
        writeln!(f, "{:<12} {}", "Category:", data.category.label(locale))?;
        if let Some(status) = data.status {
            writeln!(
                f,
                "{:<12} {} ({})",
                "Status:",
                status_label(status, locale),
                status.description(locale)
            )?;
        }
        if !data.tags.is_empty() {
            writeln!(f, "{:<12} {}", "Tags:", data.tags.join(", "))?;
        }
        if data.featured {
            writeln!(f, "{:<12} {}", "Featured:", "★".yellow())?;
        }
        if let Some(github) = &data.github {
            writeln!(f, "{:<12} {}", "GitHub:", github.cyan())?;
        }
        if let Some(build_url) = &data.build_url {
            writeln!(f, "{:<12} {}", "Build:", build_url.cyan())?;
        }
        if data.fell_back() {
            writeln!(
                f,
                "{:<12} {}",
                "Locale:",
                format!("{} (no '{}' version)", data.locale, data.requested_locale).bright_black()
            )?;
        }

        if !data.media.is_empty() {
            writeln!(f)?;
            writeln!(f, "Media:")?;
            for item in &data.media {
                let kind = match item.kind {
                    MediaKind::Image => "image",
                    MediaKind::Video => "video",
                };
                writeln!(f, "  [{}] {}", kind, item.path)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", data.tech_summary)?;

        if let Some(body) = &data.body {
            writeln!(f)?;
            writeln!(f, "{}", "-".repeat(40).bright_black())?;
            write!(f, "{}", body)?;
            if !body.ends_with('\n') {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
