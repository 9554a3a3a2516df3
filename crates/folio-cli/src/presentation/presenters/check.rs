use folio_content::CheckReport;

use crate::args::hints::fmt;
use crate::presentation::view_models::{
    CheckViewModel, CommandResultViewModel, Guidance, LocaleCheckSummary, StatusBadge,
};

pub fn present_check(reports: Vec<CheckReport>) -> CommandResultViewModel<CheckViewModel> {
    let mut locales = Vec::with_capacity(reports.len());
    let mut issues = Vec::new();

    for report in reports {
        locales.push(LocaleCheckSummary {
            locale: report.locale,
            resolved: report.resolved,
            total: report.total,
            valid: report.valid,
        });
        issues.extend(report.issues);
    }

    let content = CheckViewModel { locales, issues };
    let malformed = content.malformed_documents();
    let first_slug = content.issues.first().map(|i| i.slug.clone());

    let mut result = CommandResultViewModel::new(content);
    if malformed == 0 {
        result = result.with_badge(StatusBadge::success("All documents are valid"));
    } else {
        result = result.with_badge(StatusBadge::error(format!(
            "{} malformed document(s)",
            malformed
        )));
        if let Some(slug) = first_slug {
            result = result.with_suggestion(
                Guidance::new("Fix the front matter, then check that the project loads")
                    .with_command(fmt::show(&slug)),
            );
        }
    }
    result
}
