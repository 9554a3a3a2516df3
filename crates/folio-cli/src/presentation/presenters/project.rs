use folio_content::CatalogLoad;
use folio_engine::{CatalogView, FilterState};
use folio_types::{Locale, ProjectRecord};

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ProjectDetailViewModel, ProjectEntryViewModel,
    ProjectListViewModel, StatusBadge,
};

pub fn present_project_list(
    load: &CatalogLoad,
    view: CatalogView,
    filters: FilterState,
    featured_only: bool,
) -> CommandResultViewModel<ProjectListViewModel> {
    let projects: Vec<ProjectEntryViewModel> = view
        .visible
        .into_iter()
        .filter(|r| !featured_only || r.is_featured())
        .map(entry_from_record)
        .collect();

    let skipped = load
        .issues
        .iter()
        .map(|i| &i.path)
        .collect::<std::collections::BTreeSet<_>>()
        .len();

    let visible = projects.len();
    let has_filters = filters.has_active_filters() || featured_only;

    let content = ProjectListViewModel {
        requested_locale: load.requested.clone(),
        resolved_locale: load.resolved.clone(),
        filters,
        featured_only,
        projects,
        total: view.total,
        skipped,
    };

    let mut result = CommandResultViewModel::new(content);

    if load.resolved.is_none() {
        result = result
            .with_badge(StatusBadge::warning("No project collection found"))
            .with_suggestion(Guidance::new(
                "Create one directory per locale under the content root, e.g. content/projects/fr",
            ));
    } else if visible == 0 && has_filters {
        result = result
            .with_badge(StatusBadge::info("No project matches the filters"))
            .with_suggestion(
                Guidance::new("See which years, categories and tags exist")
                    .with_command(cmd::FACETS),
            )
            .with_suggestion(Guidance::new("List everything").with_command(cmd::LIST));
    } else if visible == 0 {
        result = result.with_badge(StatusBadge::info("No projects yet"));
    } else {
        let label = if visible == 1 {
            "1 project".to_string()
        } else {
            format!("{} projects", visible)
        };
        result = result.with_badge(StatusBadge::success(label));
    }

    if skipped > 0 {
        result = result.with_suggestion(
            Guidance::new(format!("{} malformed document(s) were skipped", skipped))
                .with_command(fmt::check_locale(
                    load.resolved.as_ref().unwrap_or(&load.requested).as_str(),
                )),
        );
    }

    result
}

pub fn present_project_detail(
    record: ProjectRecord,
    requested: &Locale,
    include_body: bool,
) -> CommandResultViewModel<ProjectDetailViewModel> {
    let media = record.media();
    let tech_summary = record.tech_summary().to_string();
    let fell_back = &record.locale != requested;
    let metadata = record.metadata;

    let content = ProjectDetailViewModel {
        slug: metadata.slug,
        requested_locale: requested.clone(),
        locale: record.locale,
        title: metadata.title,
        description: metadata.description,
        date: metadata.date,
        category: metadata.category,
        status: metadata.status,
        tags: metadata.tags,
        featured: metadata.featured,
        github: metadata.github,
        build_url: metadata.build_url,
        media,
        tech_summary,
        body: include_body.then_some(record.content),
    };

    let mut result = CommandResultViewModel::new(content);
    if fell_back {
        result = result.with_badge(StatusBadge::info(format!(
            "Not translated to '{}', showing the default version",
            requested
        )));
    }
    result
}

fn entry_from_record(record: ProjectRecord) -> ProjectEntryViewModel {
    let year = record.year();
    let metadata = record.metadata;
    ProjectEntryViewModel {
        slug: metadata.slug,
        title: metadata.title,
        description: metadata.description,
        date: metadata.date,
        year,
        category: metadata.category,
        status: metadata.status,
        tags: metadata.tags,
        featured: metadata.featured,
        locale: record.locale,
    }
}
