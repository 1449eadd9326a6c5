mod common;

use common::animal_catalog;
use favmoji::catalog::{load_catalog, Catalog, CatalogSource};
use favmoji::ui::view::{filter_names, matches_query, PREFIX_QUERY_LIMIT};

#[test]
fn prefix_limit_is_three() {
    assert_eq!(PREFIX_QUERY_LIMIT, 3);
}

#[test]
fn one_letter_query_matches_prefixes() {
    let catalog = animal_catalog();
    assert_eq!(filter_names(&catalog, "c"), vec!["cat", "cow", "crying_cat_face"]);
    assert_eq!(filter_names(&catalog, "d"), vec!["dog"]);
}

#[test]
fn short_query_does_not_match_inside_names() {
    let catalog = animal_catalog();
    assert_eq!(filter_names(&catalog, "at"), Vec::<&str>::new());
    assert!(!matches_query("cat", "at"));
}

#[test]
fn long_query_matches_anywhere() {
    let catalog = animal_catalog();
    assert_eq!(filter_names(&catalog, "cat"), vec!["cat", "crying_cat_face"]);
    assert_eq!(filter_names(&catalog, "board"), vec!["keyboard"]);
}

#[test]
fn matching_ignores_case() {
    assert!(matches_query("Cow", "co"));
    assert!(matches_query("cow", "CO"));
    assert!(matches_query("KEYBOARD", "eyb"));
}

#[test]
fn every_result_satisfies_the_match_rule() {
    let catalog = load_catalog(&CatalogSource::Bundled).unwrap();
    for query in ["c", "co", "cow", "face", "ZZZ"] {
        let results = filter_names(&catalog, query);
        for name in catalog.names() {
            let expected = if query.chars().count() < PREFIX_QUERY_LIMIT {
                name.to_lowercase().starts_with(&query.to_lowercase())
            } else {
                name.to_lowercase().contains(&query.to_lowercase())
            };
            assert_eq!(results.contains(&name), expected, "query {query:?}, name {name:?}");
        }
    }
}

#[test]
fn results_follow_catalog_order() {
    let catalog: Catalog = [("zebra", "z.png"), ("aardvark", "a.png"), ("panda", "p.png")]
        .into_iter()
        .collect();
    let all: Vec<&str> = catalog.names().collect();
    assert_eq!(filter_names(&catalog, "a"), vec!["aardvark"]);
    assert_eq!(
        filter_names(&catalog, ""),
        all,
    );
}

#[test]
fn bundled_catalog_has_placeholder_images() {
    let catalog = load_catalog(&CatalogSource::Bundled).unwrap();
    assert!(catalog.contains("keyboard"));
    assert!(catalog.contains("crying_cat_face"));
    assert!(catalog.contains("pig"));
}

#[test]
fn file_catalog_error_names_the_path() {
    let (_temp_dir, path) = common::temp_file("emojis.json", "[1, 2, 3]");
    let err = load_catalog(&CatalogSource::File(path.clone())).unwrap_err();
    assert!(err.to_string().contains(&path.display().to_string()));
}
