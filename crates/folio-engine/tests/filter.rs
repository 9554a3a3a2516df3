use folio_engine::*;
use folio_testing::ProjectFixture;
use folio_types::{Category, ProjectRecord};
use serde::Serialize;
use std::collections::BTreeSet;

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|t| t.to_string()).collect()
}

fn slugs(records: &[ProjectRecord]) -> Vec<&str> {
    records.iter().map(|r| r.slug()).collect()
}

/// Two records: a school C++ project and a personal web project
fn scenario_c() -> Vec<ProjectRecord> {
    vec![
        ProjectFixture::new("first", "2024-02-01")
            .category("school")
            .tags(&["cpp"])
            .to_record("fr"),
        ProjectFixture::new("second", "2023-06-15")
            .category("personal")
            .tags(&["web"])
            .to_record("fr"),
    ]
}

fn catalog() -> Vec<ProjectRecord> {
    vec![
        ProjectFixture::new("raytracer", "2024-04-12")
            .category("school")
            .tags(&["cpp", "graphics"])
            .featured()
            .to_record("fr"),
        ProjectFixture::new("portfolio", "2024-01-20")
            .category("personal")
            .tags(&["web", "nextjs"])
            .to_record("fr"),
        ProjectFixture::new("erp-sync", "2023-09-02")
            .category("professional")
            .tags(&["rust"])
            .to_record("fr"),
        ProjectFixture::new("shader-lab", "2023-03-08")
            .category("personal")
            .tags(&["graphics"])
            .to_record("fr"),
    ]
}

#[test]
fn test_scenario_c_filters() {
    let records = scenario_c();

    let by_tag = apply_filters(&records, CategoryFilter::All, &tags(&["cpp"]));
    assert_eq!(slugs(&by_tag), vec!["first"]);

    let by_category = apply_filters(
        &records,
        CategoryFilter::Only(Category::School),
        &BTreeSet::new(),
    );
    assert_eq!(slugs(&by_category), vec!["first"]);

    let unfiltered = apply_filters(&records, CategoryFilter::All, &BTreeSet::new());
    assert_eq!(slugs(&unfiltered), vec!["first", "second"]);
}

#[test]
fn test_apply_filters_is_idempotent() {
    let records = catalog();
    let selections = [
        (CategoryFilter::All, tags(&[])),
        (CategoryFilter::All, tags(&["graphics"])),
        (CategoryFilter::Only(Category::Personal), tags(&[])),
        (CategoryFilter::Only(Category::Personal), tags(&["graphics", "web"])),
        (CategoryFilter::Only(Category::School), tags(&["rust"])),
    ];

    for (category, selected) in selections {
        let once = apply_filters(&records, category, &selected);
        let twice = apply_filters(&once, category, &selected);
        assert_eq!(once, twice, "category={} tags={:?}", category, selected);
    }
}

#[test]
fn test_changing_year_resets_missing_category() {
    let records = catalog();
    let mut state = FilterState::default();
    state.select_category(CategoryFilter::Only(Category::Professional));
    state.toggle_tag("rust");

    // 2024 has neither professional projects nor the rust tag
    state.select_year(&records, YearSelection::Year(2024));
    assert_eq!(state.year, YearSelection::Year(2024));
    assert_eq!(state.category, CategoryFilter::All);
    assert!(state.tags.is_empty());

    // A category that survives the change is kept
    state.select_category(CategoryFilter::Only(Category::Personal));
    state.toggle_tag("graphics");
    state.select_year(&records, YearSelection::Year(2023));
    assert_eq!(state.category, CategoryFilter::Only(Category::Personal));
    assert_eq!(state.tags, tags(&["graphics"]));

    let view = derive_view(&records, &state);
    assert_eq!(slugs(&view.visible), vec!["shader-lab"]);
    assert_eq!(view.total, 4);
}

#[test]
fn test_switching_back_to_all_years() {
    let records = catalog();
    let mut state = FilterState::for_year(2023);
    state.toggle_tag("web");

    // "web" only exists in 2024
    assert!(derive_view(&records, &state).visible.is_empty());

    state.select_year(&records, YearSelection::All);
    assert_eq!(state.tags, tags(&["web"]));
    let view = derive_view(&records, &state);
    assert_eq!(slugs(&view.visible), vec!["portfolio"]);
}

#[derive(Serialize)]
struct Facets {
    years: Vec<i32>,
    categories: Vec<CategoryFilter>,
    tags: Vec<String>,
}

#[test]
fn test_facets_for_year() {
    let records = catalog();
    let view = derive_view(&records, &FilterState::for_year(2023));
    let facets = Facets {
        years: view.years,
        categories: view.categories,
        tags: view.tags,
    };

    insta::assert_json_snapshot!(facets, @r#"
    {
      "years": [
        2024,
        2023
      ],
      "categories": [
        "all",
        "personal",
        "professional"
      ],
      "tags": [
        "graphics",
        "rust"
      ]
    }
    "#);
}
