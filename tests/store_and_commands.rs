// tests/store_and_commands.rs
//! Store lookups and the command front end, driven through in-memory writers.

use article_blocks::commands;
use article_blocks::{
    AppError, Article, ArticleRepository, Command, InMemoryArticleStore, ValidationError,
    ValidationPolicy,
};
use pretty_assertions::assert_eq;
use serde_json::Value;

const GUIDE_FIXTURE: &str = r#"[
  {
    "id": "guide",
    "title": "Guide",
    "category": "Engineering",
    "date": "March 3, 2025",
    "author": "Docs",
    "authorRole": "Developer Relations",
    "sections": [
      {"type": "heading", "text": "Setup", "level": 1},
      {"type": "paragraph", "content": "Install the tool."},
      {"type": "heading", "text": "Linux", "level": 2},
      {"type": "heading", "text": "macOS", "level": 2},
      {"type": "heading", "text": "Usage", "level": 1},
      {"type": "list", "items": ["run it", "read output"]}
    ]
  },
  {
    "id": "about",
    "title": "About",
    "category": "Research",
    "sections": [{"type": "paragraph", "content": "Who we are."}]
  }
]"#;

fn guide_store() -> InMemoryArticleStore {
    InMemoryArticleStore::from_json_str("guide fixture", GUIDE_FIXTURE).unwrap()
}

fn run_to_string(command: Command, store: &InMemoryArticleStore) -> Result<String, AppError> {
    let mut out = Vec::new();
    commands::run(&command, store, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn seeded_store_finds_known_article() {
    let store = InMemoryArticleStore::seeded().unwrap();

    let article = store.find_by_id("claude-opus-4-6").unwrap();
    assert_eq!(article.category, "Product");
    assert_eq!(article.title, "Claude Opus 4.6");

    assert!(store.find_by_id("nonexistent").is_none());
    assert!(store.find_by_id("").is_none());
    assert!(store.find_by_id("has space").is_none());
    assert!(store.find_by_id(" claude-opus-4-6 ").is_none());
}

#[test]
fn seeded_store_lists_every_article_in_id_order() {
    let store = InMemoryArticleStore::seeded().unwrap();
    let ids: Vec<String> = store.find_all().iter().map(|a| a.id().to_string()).collect();
    assert_eq!(
        ids,
        vec!["building-effective-agents", "claude-opus-4-6", "economic-index"]
    );
}

#[test]
fn store_is_usable_through_a_trait_object() {
    let store = guide_store();
    let repository: &dyn ArticleRepository = &store;

    assert!(repository.require("guide").is_ok());
    assert!(repository.require("missing").unwrap_err().is_not_found());
}

#[test]
fn list_prints_one_line_per_article() {
    let output = run_to_string(Command::List, &guide_store()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "about\tResearch\tAbout\tWho we are.",
            "guide\tEngineering\tGuide\tSetup Install the tool. Linux macOS Usage run it, read output",
        ]
    );
}

#[test]
fn outline_nests_headings_by_level() {
    let output = run_to_string(
        Command::Outline {
            id: "guide".into(),
        },
        &guide_store(),
    )
    .unwrap();
    insta::assert_snapshot!(output.trim_end(), @r"
    - Setup (#setup)
      - Linux (#linux)
      - macOS (#macos)
    - Usage (#usage)
    ");
}

#[test]
fn text_prints_title_and_body() {
    let output = run_to_string(
        Command::Text {
            id: "guide".into(),
            preview: None,
        },
        &guide_store(),
    )
    .unwrap();
    insta::assert_snapshot!(output.trim_end(), @r"
    Guide

    Setup

    Install the tool.

    Linux

    macOS

    Usage

    run it, read output
    ");
}

#[test]
fn text_preview_truncates_on_characters() {
    let output = run_to_string(
        Command::Text {
            id: "guide".into(),
            preview: Some(14),
        },
        &guide_store(),
    )
    .unwrap();
    assert_eq!(output, "Setup Install…\n");
}

#[test]
fn stats_reports_counts_and_reading_time() {
    let output = run_to_string(
        Command::Stats {
            id: "guide".into(),
        },
        &guide_store(),
    )
    .unwrap();
    insta::assert_snapshot!(output.trim_end(), @r"
    blocks: 8
    deepest nesting: 2
    words: 11
    reading time: 1 min
      rich_text: 3
      heading: 4
      content_list: 1
    ");
}

#[test]
fn show_prints_canonical_json() {
    let store = guide_store();
    let output = run_to_string(
        Command::Show {
            id: "guide".into(),
        },
        &store,
    )
    .unwrap();

    let shown: Article = serde_json::from_str(&output).unwrap();
    assert_eq!(&shown, store.find_by_id("guide").unwrap().as_ref());

    let raw: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(raw["sections"][1]["type"], "rich_text");
}

#[test]
fn migrate_prints_structured_article() {
    let output = run_to_string(
        Command::Migrate {
            id: "guide".into(),
        },
        &guide_store(),
    )
    .unwrap();
    let raw: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(raw["id"], "guide");
    assert_eq!(raw["slug"], "guide");
    assert_eq!(raw["category"]["slug"], "engineering");
    assert_eq!(raw["publishing"]["status"], "published");
    assert!(raw["publishing"].get("password").is_none());
    assert_eq!(raw["timestamps"]["publishedDate"], "2025-03-03");
    assert_eq!(raw["authors"][0]["role"], "Developer Relations");
}

#[test]
fn unknown_article_is_not_found() {
    let err = run_to_string(
        Command::Show {
            id: "nonexistent".into(),
        },
        &guide_store(),
    )
    .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.to_string(), "Article not found: nonexistent");
}

#[test]
fn policy_decides_ragged_tables() {
    let fixture = r#"[{
      "id": "ragged",
      "title": "Ragged",
      "category": "Research",
      "sections": [{
        "type": "table",
        "headers": ["a", "b"],
        "rows": [[{"type": "rich_text", "text": "only one"}]]
      }]
    }]"#;
    let store = InMemoryArticleStore::from_json_str("ragged fixture", fixture).unwrap();

    assert!(store
        .validate(&ValidationPolicy::lenient())
        .unwrap()
        .is_empty());

    let warnings = store.validate(&ValidationPolicy::default()).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].context.as_deref(),
        Some("ragged: table block #0")
    );

    let err = store.validate(&ValidationPolicy::strict()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::TableShape {
            row: 0,
            expected: 2,
            actual: 1
        })
    ));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn duplicate_ids_are_refused() {
    let fixture = r#"[
      {"id": "twin", "title": "One", "category": "Research", "sections": []},
      {"id": "twin", "title": "Two", "category": "Research", "sections": []}
    ]"#;
    let err = InMemoryArticleStore::from_json_str("twins", fixture).unwrap_err();
    assert!(matches!(err, AppError::MalformedFixture { .. }));
}
