use anyhow::Result;
use folio_content::*;
use folio_testing::{MemoryStore, ProjectFixture};
use folio_types::{Category, Locale, Status};
use std::fs;
use tempfile::TempDir;

fn write(root: &std::path::Path, locale: &str, file: &str, text: &str) {
    let dir = root.join(locale);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), text).unwrap();
}

fn fs_catalog(root: &std::path::Path, default_locale: &str) -> Catalog {
    Catalog::new(Box::new(FsDocumentStore::new(root)), default_locale)
}

fn slugs(records: &[folio_types::ProjectRecord]) -> Vec<&str> {
    records.iter().map(|r| r.slug()).collect()
}

// =============================================================================
// COLLECTION LISTING
// =============================================================================

#[test]
fn test_scenario_a_listing_and_collection_fallback() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path();
    write(
        root,
        "en",
        "alpha.mdx",
        &ProjectFixture::new("alpha", "2024-03-01").to_document(),
    );
    write(
        root,
        "fr",
        "beta.mdx",
        &ProjectFixture::new("beta", "2023-01-01").to_document(),
    );

    let catalog = fs_catalog(root, "fr");

    let en = catalog.list_projects(&Locale::from("en"))?;
    assert_eq!(slugs(&en), vec!["alpha"]);
    assert_eq!(en[0].category(), Category::Personal);

    // "de" has no directory: the whole collection falls back
    let de = catalog.list_projects(&Locale::from("de"))?;
    let fr = catalog.list_projects(&Locale::from("fr"))?;
    assert_eq!(de, fr);
    assert_eq!(slugs(&de), vec!["beta"]);
    assert_eq!(de[0].locale, Locale::from("fr"));

    Ok(())
}

#[test]
fn test_collection_fallback_does_not_merge_per_file() -> Result<()> {
    let store = MemoryStore::new()
        .with_project("fr", ProjectFixture::new("shared", "2024-01-01"))
        .with_project("fr", ProjectFixture::new("fr-only", "2023-01-01"))
        .with_project("en", ProjectFixture::new("shared", "2024-01-01"));
    let catalog = Catalog::new(Box::new(store), "fr");

    let en = catalog.list_projects(&Locale::from("en"))?;
    assert_eq!(slugs(&en), vec!["shared"]);

    Ok(())
}

#[test]
fn test_missing_default_collection_yields_empty() -> Result<()> {
    let temp = TempDir::new()?;
    let catalog = fs_catalog(temp.path(), "fr");

    let load = catalog.list_projects_with_report(&Locale::from("en"))?;
    assert!(load.records.is_empty());
    assert!(load.resolved.is_none());
    assert!(!load.fell_back());

    Ok(())
}

#[test]
fn test_scenario_b_sorted_by_date_descending() -> Result<()> {
    let store = MemoryStore::new()
        .with_project("fr", ProjectFixture::new("older", "2024-01-01"))
        .with_project("fr", ProjectFixture::new("newer", "2024-05-01"))
        .with_project("fr", ProjectFixture::new("oldest", "2019-11-30"));
    let catalog = Catalog::new(Box::new(store), "fr");

    let records = catalog.list_projects(&Locale::from("fr"))?;
    assert_eq!(slugs(&records), vec!["newer", "older", "oldest"]);

    for pair in records.windows(2) {
        assert!(pair[0].date() >= pair[1].date());
    }

    Ok(())
}

#[test]
fn test_equal_dates_keep_file_name_order() -> Result<()> {
    let store = MemoryStore::new()
        .with_project("fr", ProjectFixture::new("b-second", "2024-01-01"))
        .with_project("fr", ProjectFixture::new("a-first", "2024-01-01"));
    let catalog = Catalog::new(Box::new(store), "fr");

    let records = catalog.list_projects(&Locale::from("fr"))?;
    assert_eq!(slugs(&records), vec!["a-first", "b-second"]);

    Ok(())
}

#[test]
fn test_only_documents_with_extension_are_listed() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path();
    let doc = ProjectFixture::new("alpha", "2024-03-01").to_document();
    write(root, "fr", "alpha.mdx", &doc);
    write(root, "fr", "notes.md", &doc);
    write(root, "fr", ".draft.mdx", &doc);
    fs::create_dir_all(root.join("fr").join("nested"))?;
    write(root, "fr/nested", "deep.mdx", &doc);

    let catalog = fs_catalog(root, "fr");
    let records = catalog.list_projects(&Locale::from("fr"))?;
    assert_eq!(slugs(&records), vec!["alpha"]);

    Ok(())
}

#[test]
fn test_custom_extension() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path();
    let doc = ProjectFixture::new("alpha", "2024-03-01").to_document();
    write(root, "fr", "alpha.md", &doc);
    write(root, "fr", "beta.mdx", &doc);

    let store = FsDocumentStore::new(root).with_extension(".md");
    let catalog = Catalog::new(Box::new(store), "fr");
    let records = catalog.list_projects(&Locale::from("fr"))?;
    assert_eq!(slugs(&records), vec!["alpha"]);

    Ok(())
}

// =============================================================================
// SINGLE-RECORD RESOLUTION
// =============================================================================

#[test]
fn test_per_record_fallback() -> Result<()> {
    let store = MemoryStore::new()
        .with_project("fr", ProjectFixture::new("only-fr", "2024-01-01"))
        .with_project("fr", ProjectFixture::new("both", "2024-01-01").title("Les deux"))
        .with_project("en", ProjectFixture::new("both", "2024-01-01").title("Both"));
    let catalog = Catalog::new(Box::new(store), "fr");

    let en = Locale::from("en");
    let fr = Locale::from("fr");

    // Present only under the default locale
    let via_en = catalog.get_project("only-fr", &en)?;
    let via_fr = catalog.get_project("only-fr", &fr)?;
    assert!(via_en.is_some());
    assert_eq!(via_en, via_fr);

    // Present in both: the requested locale wins
    let both = catalog.get_project("both", &en)?.unwrap();
    assert_eq!(both.metadata.title, "Both");
    assert_eq!(both.locale, en);

    Ok(())
}

#[test]
fn test_scenario_d_missing_record_is_none() -> Result<()> {
    let store = MemoryStore::new()
        .with_project("fr", ProjectFixture::new("alpha", "2024-01-01"))
        .with_locale("en");
    let catalog = Catalog::new(Box::new(store), "fr");

    assert!(catalog.get_project("missing-slug", &Locale::from("en"))?.is_none());
    assert!(catalog.get_project("missing-slug", &Locale::from("fr"))?.is_none());

    Ok(())
}

#[test]
fn test_path_like_slugs_resolve_to_none() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path();
    write(
        root,
        "fr",
        "alpha.mdx",
        &ProjectFixture::new("alpha", "2024-03-01").to_document(),
    );
    fs::write(
        root.join("secret.mdx"),
        ProjectFixture::new("secret", "2024-03-01").to_document(),
    )?;

    let catalog = fs_catalog(root, "fr");
    let fr = Locale::from("fr");
    assert!(catalog.get_project("../secret", &fr)?.is_none());
    assert!(catalog.get_project("", &fr)?.is_none());
    assert!(catalog.get_project("fr/alpha", &fr)?.is_none());
    assert!(catalog.get_project("alpha", &fr)?.is_some());

    Ok(())
}

#[test]
fn test_path_like_locales_never_leave_the_content_root() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("content");
    write(
        &root,
        "fr",
        "alpha.mdx",
        &ProjectFixture::new("alpha", "2024-03-01").to_document(),
    );
    write(
        temp.path(),
        "secret",
        "leak.mdx",
        &ProjectFixture::new("leak", "2024-03-01").to_document(),
    );
    fs::write(
        root.join("stray.mdx"),
        ProjectFixture::new("stray", "2024-03-01").to_document(),
    )?;

    let catalog = fs_catalog(&root, "fr");
    let escape = Locale::from("../secret");
    let here = Locale::from(".");

    // Treated as missing collections: listing falls back to the default
    assert_eq!(catalog.resolve_collection(&escape), Some(Locale::from("fr")));
    assert_eq!(slugs(&catalog.list_projects(&escape)?), vec!["alpha"]);
    assert_eq!(slugs(&catalog.list_projects(&here)?), vec!["alpha"]);

    assert!(catalog.get_project("leak", &escape)?.is_none());
    assert!(catalog.get_project("stray", &here)?.is_none());
    let alpha = catalog.get_project("alpha", &escape)?;
    assert_eq!(alpha.map(|r| r.locale), Some(Locale::from("fr")));

    Ok(())
}

#[test]
fn test_get_malformed_project_is_error() {
    let store = MemoryStore::new().with_document("fr", "broken", "---\ntitle: Only a title\n---\n");
    let catalog = Catalog::new(Box::new(store), "fr");

    let err = catalog
        .get_project("broken", &Locale::from("fr"))
        .unwrap_err();
    match err {
        Error::Malformed { issues, .. } => {
            assert!(
                issues
                    .iter()
                    .any(|i| i.kind == IssueKind::MissingField("date".to_string()))
            );
        }
        other => panic!("unexpected error: {}", other),
    }
}

// =============================================================================
// LOAD POLICY
// =============================================================================

fn mixed_store() -> MemoryStore {
    MemoryStore::new()
        .with_project("fr", ProjectFixture::new("good", "2024-01-01"))
        .with_project("fr", ProjectFixture::new("bad", "2024-01-01").category("hobby"))
}

#[test]
fn test_lenient_load_skips_and_reports() -> Result<()> {
    let catalog = Catalog::new(Box::new(mixed_store()), "fr");

    let load = catalog.list_projects_with_report(&Locale::from("fr"))?;
    assert_eq!(slugs(&load.records), vec!["good"]);
    assert_eq!(load.issues.len(), 1);
    assert_eq!(load.issues[0].slug, "bad");
    assert_eq!(
        load.issues[0].kind,
        IssueKind::InvalidValue("category".to_string())
    );

    Ok(())
}

#[test]
fn test_strict_load_fails() {
    let catalog = Catalog::new(Box::new(mixed_store()), "fr").with_policy(LoadPolicy::Strict);

    let err = catalog.list_projects(&Locale::from("fr")).unwrap_err();
    assert!(err.to_string().contains("unknown category 'hobby'"));
}

fn undecodable_tree(temp: &TempDir) -> std::path::PathBuf {
    let root = temp.path().to_path_buf();
    write(
        &root,
        "fr",
        "alpha.mdx",
        &ProjectFixture::new("alpha", "2024-03-01").to_document(),
    );
    let mut bytes = ProjectFixture::new("beta", "2024-02-01")
        .to_document()
        .into_bytes();
    bytes.extend([0xFF, 0xFE]);
    fs::write(root.join("fr").join("beta.mdx"), bytes).unwrap();
    root
}

#[test]
fn test_lenient_load_skips_undecodable_document() -> Result<()> {
    let temp = TempDir::new()?;
    let catalog = fs_catalog(&undecodable_tree(&temp), "fr");

    let load = catalog.list_projects_with_report(&Locale::from("fr"))?;
    assert_eq!(slugs(&load.records), vec!["alpha"]);
    assert_eq!(load.issues.len(), 1);
    assert_eq!(load.issues[0].slug, "beta");
    assert_eq!(load.issues[0].kind, IssueKind::Syntax);

    Ok(())
}

#[test]
fn test_strict_load_fails_on_undecodable_document() -> Result<()> {
    let temp = TempDir::new()?;
    let catalog = fs_catalog(&undecodable_tree(&temp), "fr").with_policy(LoadPolicy::Strict);

    let err = catalog.list_projects(&Locale::from("fr")).unwrap_err();
    assert!(matches!(err, Error::Malformed { .. }), "{}", err);
    assert!(err.to_string().contains("UTF-8"));

    // A single lookup reports it as malformed too, not as an IO failure
    let err = Catalog::new(
        Box::new(FsDocumentStore::new(temp.path())),
        "fr",
    )
    .get_project("beta", &Locale::from("fr"))
    .unwrap_err();
    assert!(matches!(err, Error::Malformed { .. }));

    Ok(())
}

#[test]
fn test_legacy_values_load_as_canonical() -> Result<()> {
    let store = MemoryStore::new().with_project(
        "fr",
        ProjectFixture::new("legacy", "2022-09-01")
            .category("travail")
            .status("archive"),
    );
    let catalog = Catalog::new(Box::new(store), "fr");

    let record = catalog.get_project("legacy", &Locale::from("fr"))?.unwrap();
    assert_eq!(record.category(), Category::Professional);
    assert_eq!(record.metadata.status, Some(Status::Archived));

    Ok(())
}

// =============================================================================
// DERIVED OPERATIONS
// =============================================================================

#[test]
fn test_featured_projects() -> Result<()> {
    let store = MemoryStore::new()
        .with_project("fr", ProjectFixture::new("star", "2023-01-01").featured())
        .with_project("fr", ProjectFixture::new("plain", "2024-01-01"));
    let catalog = Catalog::new(Box::new(store), "fr");

    let featured = catalog.featured_projects(&Locale::from("fr"))?;
    assert_eq!(slugs(&featured), vec!["star"]);

    Ok(())
}

#[test]
fn test_static_params_cover_every_locale() -> Result<()> {
    let store = MemoryStore::new()
        .with_project("fr", ProjectFixture::new("alpha", "2024-01-01"))
        .with_project("fr", ProjectFixture::new("beta", "2023-01-01"))
        .with_project("en", ProjectFixture::new("alpha", "2024-01-01"));
    let catalog = Catalog::new(Box::new(store), "fr");

    let params = catalog.static_params(&[Locale::from("fr"), Locale::from("en"), Locale::from("de")])?;
    let pairs: Vec<(String, String)> = params
        .into_iter()
        .map(|p| (p.locale.to_string(), p.slug))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("fr".to_string(), "alpha".to_string()),
            ("fr".to_string(), "beta".to_string()),
            ("en".to_string(), "alpha".to_string()),
            ("de".to_string(), "alpha".to_string()),
            ("de".to_string(), "beta".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_check_reports_every_malformed_document() -> Result<()> {
    let store = mixed_store().with_document("fr", "no-front-matter", "just text\n");
    let catalog = Catalog::new(Box::new(store), "fr").with_policy(LoadPolicy::Strict);

    // check never aborts, whatever the policy
    let report = catalog.check(&Locale::from("fr"))?;
    assert_eq!(report.total, 3);
    assert_eq!(report.valid, 1);
    assert!(!report.is_clean());
    assert_eq!(report.issues.iter().filter(|i| i.slug == "bad").count(), 1);
    assert_eq!(
        report
            .issues
            .iter()
            .filter(|i| i.slug == "no-front-matter")
            .count(),
        4
    );

    Ok(())
}
