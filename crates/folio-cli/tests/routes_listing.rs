use anyhow::Result;
use folio_testing::{ProjectFixture, TestWorld};

#[test]
fn test_routes_cover_every_configured_locale() -> Result<()> {
    let world = TestWorld::new()
        .with_config("content_root = \"content\"\nlocales = [\"fr\", \"en\", \"de\"]\n")
        .with_project("fr", ProjectFixture::new("alpha", "2024-01-01"))
        .with_project("fr", ProjectFixture::new("beta", "2023-01-01"))
        .with_project("en", ProjectFixture::new("alpha", "2024-01-01"));

    let result = world.run(&["routes"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().ends_with(
        "/fr/projects/alpha\n/fr/projects/beta\n/en/projects/alpha\n/de/projects/alpha\n/de/projects/beta\n"
    ));

    let json = world.run_json(&["routes"])?.json()?;
    assert_eq!(json["content"]["routes"].as_array().map(|r| r.len()), Some(5));
    assert_eq!(
        json["content"]["routes"][2],
        serde_json::json!({"locale": "en", "slug": "alpha"})
    );

    Ok(())
}

#[test]
fn test_no_command_shows_guidance() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&[])?;
    assert!(result.success());
    assert!(result.stdout().contains("Locales: fr, en (default: fr)"));
    assert!(result.stdout().contains("folio list --locale en"));
    Ok(())
}
