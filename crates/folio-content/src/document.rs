use folio_types::{Locale, ProjectRecord};

use crate::frontmatter::{parse_block, split};
use crate::schema::{DocumentIssue, IssueKind, Violation, into_metadata};
use crate::traits::RawDocument;

/// Turn a raw document read from `locale` into a project record.
///
/// The slug comes from the document's storage key, never from its
/// metadata. The body is passed through untouched.
pub fn parse_document(
    raw: &RawDocument,
    locale: &Locale,
) -> std::result::Result<ProjectRecord, Vec<DocumentIssue>> {
    let attach = |violations: Vec<Violation>| -> Vec<DocumentIssue> {
        violations
            .into_iter()
            .map(|v| v.at(locale, &raw.slug, &raw.path))
            .collect()
    };

    if let Some(reason) = &raw.decode_error {
        return Err(attach(vec![Violation::new(IssueKind::Syntax, reason.clone())]));
    }

    let front_matter =
        split(&raw.text).map_err(|reason| attach(vec![Violation::new(IssueKind::Syntax, reason)]))?;

    let map = parse_block(front_matter.format, front_matter.block)
        .map_err(|reason| attach(vec![Violation::new(IssueKind::Syntax, reason)]))?;

    let metadata = into_metadata(&raw.slug, map).map_err(attach)?;

    Ok(ProjectRecord::new(
        metadata,
        front_matter.body,
        locale.clone(),
    ))
}
