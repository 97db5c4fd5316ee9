//! Tag derivation tests
//!
//! Label filtering, key derivation and description composition.

mod common;

use common::{fenix, full_page};
use update_glean_tags::{GitHubLabel, LabelFilter, Repository, TagDeriver};

const SEARCH_URL: &str =
    "https://github.com/mozilla-mobile/fenix/issues?q=label%3AFeature%3ASearch";
const ONBOARDING_URL: &str =
    "https://github.com/mozilla-mobile/fenix/issues?q=label%3AFeature%3AOnboarding";

fn deriver() -> TagDeriver {
    TagDeriver::new(LabelFilter::default(), "https://github.com", &fenix()).unwrap()
}

#[test]
fn test_description_with_label_description() {
    let (key, tag) = deriver()
        .derive(&GitHubLabel::new("Feature:Search", "Full text search"))
        .unwrap();

    assert_eq!(key, "Search");
    assert_eq!(
        tag.description,
        format!(
            "Full text search. Corresponds to the [Feature:Search]({}) label on GitHub.",
            SEARCH_URL
        )
    );
}

#[test]
fn test_description_is_trimmed() {
    let (_, tag) = deriver()
        .derive(&GitHubLabel::new("Feature:Search", "  Full text search \n"))
        .unwrap();

    assert!(tag
        .description
        .starts_with("Full text search. Corresponds to the [Feature:Search]("));
}

#[test]
fn test_empty_and_missing_description() {
    let expected = format!(
        "Corresponds to the [Feature:Onboarding]({}) label on GitHub.",
        ONBOARDING_URL
    );

    let (_, empty) = deriver()
        .derive(&GitHubLabel::new("Feature:Onboarding", ""))
        .unwrap();
    let (_, missing) = deriver()
        .derive(&GitHubLabel::without_description("Feature:Onboarding"))
        .unwrap();

    assert_eq!(empty.description, expected);
    assert_eq!(missing.description, expected);
}

#[test]
fn test_missing_description_in_json() {
    let labels: Vec<GitHubLabel> = serde_json::from_value(serde_json::json!([
        { "name": "Feature:A" },
        { "name": "Feature:B", "description": null },
        { "name": "Feature:C", "description": "Cee", "color": "ededed" }
    ]))
    .unwrap();

    assert_eq!(labels[0].description(), "");
    assert_eq!(labels[1].description(), "");
    assert_eq!(labels[2].description(), "Cee");
}

#[test]
fn test_only_prefixed_labels_become_tags() {
    let labels: Vec<GitHubLabel> = (0..4).flat_map(|page| full_page(page, 25)).collect();

    let tags = deriver().build(&labels);

    let prefixed: Vec<&GitHubLabel> = labels
        .iter()
        .filter(|l| l.name.starts_with("Feature:"))
        .collect();
    assert_eq!(tags.len(), prefixed.len());

    for key in tags.keys() {
        assert!(
            labels.iter().any(|l| l.name == format!("Feature:{}", key)),
            "tag {} has no source label",
            key
        );
    }
    for label in labels.iter().filter(|l| !l.name.starts_with("Feature:")) {
        assert!(!tags.contains_key(&label.name));
    }
}

#[test]
fn test_key_keeps_whitespace() {
    let tags = deriver().build(&[GitHubLabel::new("Feature: Tabs", "")]);

    assert!(tags.contains_key(" Tabs"));
    assert!(tags[" Tabs"]
        .description
        .contains("issues?q=label%3AFeature%3A+Tabs"));
}

#[test]
fn test_collision_is_last_write_wins() {
    let tags = deriver().build(&[
        GitHubLabel::new("Feature:Home", "first"),
        GitHubLabel::new("Feature:Search", ""),
        GitHubLabel::new("Feature:Home", "second"),
    ]);

    assert_eq!(tags.len(), 2);
    let keys: Vec<&str> = tags.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Home", "Search"]);
    assert!(tags["Home"].description.starts_with("second. "));
}

#[test]
fn test_insertion_order_follows_labels() {
    let tags = deriver().build(&[
        GitHubLabel::new("Feature:Zebra", ""),
        GitHubLabel::new("Bug", ""),
        GitHubLabel::new("Feature:Apple", ""),
    ]);

    let keys: Vec<&str> = tags.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Zebra", "Apple"]);
}

#[test]
fn test_custom_prefix_and_repository() {
    let repo = Repository::parse("https://github.com/mozilla-mobile/focus-android").unwrap();
    let deriver = TagDeriver::new(LabelFilter::new("Area:"), "https://github.com", &repo).unwrap();

    let (key, tag) = deriver.derive(&GitHubLabel::new("Area:Privacy", "")).unwrap();

    assert_eq!(key, "Privacy");
    assert!(tag.description.contains(
        "https://github.com/mozilla-mobile/focus-android/issues?q=label%3AArea%3APrivacy"
    ));
    assert!(deriver.derive(&GitHubLabel::new("Feature:Privacy", "")).is_none());
}

#[test]
fn test_repository_references() {
    for reference in [
        "mozilla-mobile/fenix",
        "https://github.com/mozilla-mobile/fenix",
        "https://github.com/mozilla-mobile/fenix/",
        "https://github.com/mozilla-mobile/fenix.git",
    ] {
        assert_eq!(Repository::parse(reference).unwrap(), fenix(), "{}", reference);
    }

    assert!(Repository::parse("fenix").is_err());
    assert!(Repository::parse("a/b/c").is_err());
}
