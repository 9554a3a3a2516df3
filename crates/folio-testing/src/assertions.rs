//! Custom assertions for folio-specific validation.
//!
//! Provides high-level assertions over the CLI's JSON envelope
//! (`{ badge, content, suggestions }`).

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that `content.projects` lists exactly these slugs, in order.
pub fn assert_project_slugs(json: &Value, expected: &[&str]) -> Result<()> {
    let projects = json["content"]["projects"]
        .as_array()
        .context("Expected 'content.projects' array in JSON")?;

    let slugs: Vec<&str> = projects
        .iter()
        .filter_map(|p| p["slug"].as_str())
        .collect();

    if slugs != expected {
        anyhow::bail!("Expected projects {:?}, got {:?}", expected, slugs);
    }

    Ok(())
}

/// Assert that `content.issues` contains the expected number of entries.
pub fn assert_issue_count(json: &Value, expected: usize) -> Result<()> {
    let issues = json["content"]["issues"]
        .as_array()
        .context("Expected 'content.issues' array in JSON")?;

    if issues.len() != expected {
        anyhow::bail!("Expected {} issues, got {}", expected, issues.len());
    }

    Ok(())
}

/// Assert that every project in `content.projects` was read from `locale`.
pub fn assert_projects_from_locale(json: &Value, locale: &str) -> Result<()> {
    let projects = json["content"]["projects"]
        .as_array()
        .context("Expected 'content.projects' array in JSON")?;

    for (i, project) in projects.iter().enumerate() {
        let source = project["locale"]
            .as_str()
            .with_context(|| format!("Project {} missing locale", i))?;
        if source != locale {
            anyhow::bail!(
                "Project {} was read from {} but expected {}",
                i,
                source,
                locale
            );
        }
    }

    Ok(())
}
