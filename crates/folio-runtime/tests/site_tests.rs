use folio_engine::{CategoryFilter, FilterState};
use folio_runtime::{Result, Site};
use folio_testing::{ProjectFixture, TestWorld};
use folio_types::{Category, Locale};

fn world() -> TestWorld {
    TestWorld::new()
        .with_project(
            "fr",
            ProjectFixture::new("moteur", "2024-04-01")
                .category("école")
                .tags(&["cpp"]),
        )
        .with_project(
            "fr",
            ProjectFixture::new("blog", "2023-02-11").tags(&["web"]),
        )
        .with_project("en", ProjectFixture::new("blog", "2023-02-11").tags(&["web"]))
}

#[test]
fn test_site_lists_with_filters() -> Result<()> {
    let world = world();
    let site = Site::open(world.config_path(), None)?;
    assert_eq!(site.content_root(), world.content_root());

    let mut state = FilterState::default();
    state.select_category(CategoryFilter::Only(Category::School));
    let outcome = site.list(&Locale::from("fr"), &state)?;

    assert_eq!(outcome.view.total, 2);
    assert_eq!(outcome.view.visible.len(), 1);
    assert_eq!(outcome.view.visible[0].slug(), "moteur");
    assert_eq!(outcome.view.years, vec![2024, 2023]);
    assert!(!outcome.load.fell_back());

    Ok(())
}

#[test]
fn test_unsupported_locale_falls_back() -> Result<()> {
    let world = world();
    let site = Site::open(world.config_path(), None)?;

    let locale = site.resolve_locale(Some("de"));
    let outcome = site.list(&locale, &FilterState::for_year(2023))?;
    assert!(outcome.load.fell_back());
    assert_eq!(outcome.load.resolved, Some(Locale::from("fr")));
    assert_eq!(outcome.view.visible.len(), 1);
    assert_eq!(outcome.view.visible[0].slug(), "blog");
    assert_eq!(outcome.view.categories[0], CategoryFilter::All);

    Ok(())
}

#[test]
fn test_routes_cover_supported_locales() -> Result<()> {
    let world = world();
    let site = Site::open(world.config_path(), None)?;

    let routes: Vec<(String, String)> = site
        .routes()?
        .into_iter()
        .map(|r| (r.locale.to_string(), r.slug))
        .collect();

    assert_eq!(
        routes,
        vec![
            ("fr".to_string(), "moteur".to_string()),
            ("fr".to_string(), "blog".to_string()),
            ("en".to_string(), "blog".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn test_check_every_locale() -> Result<()> {
    let world = world();
    world
        .write_raw("en", "broken.mdx", "---\ntitle: Broken\n---\n")
        .expect("write document");
    let site = Site::open(world.config_path(), None)?;

    let reports = site.check(None)?;
    assert_eq!(reports.len(), 2);
    assert!(reports[0].is_clean());
    assert!(!reports[1].is_clean());
    assert_eq!(reports[1].total, 2);
    assert_eq!(reports[1].valid, 1);

    Ok(())
}
