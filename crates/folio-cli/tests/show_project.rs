use anyhow::Result;
use folio_testing::{ProjectFixture, TestWorld};
use predicates::prelude::*;

fn world() -> TestWorld {
    TestWorld::new()
        .with_project(
            "fr",
            ProjectFixture::new("raytracer", "2023-11-20")
                .title("Lancer de rayons")
                .category("école")
                .status("stable")
                .field("github", "\"https://github.com/someone/raytracer\"")
                .field("gallery", "[\"/img/a.png\", \"/img/demo.webm\"]")
                .body("Un moteur de rendu physique.\n\nDétails d'implémentation.\n"),
        )
        .with_project(
            "en",
            ProjectFixture::new("translated", "2024-02-02")
                .title("Translated")
                .field("techDetails", "\"Rust, wgpu\""),
        )
        .with_project("fr", ProjectFixture::new("translated", "2024-02-02"))
}

#[test]
fn test_show_project() -> Result<()> {
    let world = world();
    let result = world.run_json(&["show", "raytracer"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    let content = &json["content"];
    assert_eq!(content["slug"], "raytracer");
    assert_eq!(content["title"], "Lancer de rayons");
    assert_eq!(content["category"], "school");
    assert_eq!(content["status"], "stable");
    assert_eq!(content["github"], "https://github.com/someone/raytracer");
    assert_eq!(content["tech_summary"], "Un moteur de rendu physique.");
    assert_eq!(content["media"][0]["kind"], "image");
    assert_eq!(content["media"][1]["kind"], "video");
    assert!(content.get("body").is_none());
    assert!(json.get("badge").is_none());

    Ok(())
}

#[test]
fn test_show_with_body() -> Result<()> {
    let world = world();
    let json = world.run_json(&["show", "raytracer", "--body"])?.json()?;
    assert_eq!(
        json["content"]["body"],
        "Un moteur de rendu physique.\n\nDétails d'implémentation.\n"
    );
    Ok(())
}

#[test]
fn test_show_falls_back_per_record() -> Result<()> {
    let world = world();

    let json = world
        .run_json(&["show", "raytracer", "--locale", "en"])?
        .json()?;
    assert_eq!(json["content"]["locale"], "fr");
    assert_eq!(json["content"]["requested_locale"], "en");
    assert_eq!(json["badge"]["level"], "info");

    let json = world
        .run_json(&["show", "translated", "--locale", "en"])?
        .json()?;
    assert_eq!(json["content"]["locale"], "en");
    assert_eq!(json["content"]["tech_summary"], "Rust, wgpu");

    Ok(())
}

#[test]
fn test_show_plain_text() -> Result<()> {
    let world = world();
    let result = world.run(&["show", "raytracer"])?;
    assert!(result.success());
    assert!(
        predicate::str::contains("Lancer de rayons")
            .and(predicate::str::contains("Terminé et fonctionnel"))
            .and(predicate::str::contains("[video] /img/demo.webm"))
            .eval(result.stdout())
    );
    Ok(())
}

#[test]
fn test_show_missing_project_fails() -> Result<()> {
    let world = world();

    let result = world.run(&["show", "missing-slug", "--locale", "en"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Project not found: missing-slug"));

    let result = world.run(&["show", "../fr/raytracer"])?;
    assert!(!result.success());

    Ok(())
}
