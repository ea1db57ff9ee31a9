//! Integration tests for the public catalog API

use pretty_assertions::assert_eq;
use primer::catalog::{Catalog, Category};
use primer::config::{CatalogSource, SourceResolver};
use primer::PrimerError;
use std::collections::HashSet;
use std::sync::Arc;
use tempfile::tempdir;

const DEFINITION: &str = r#"
apiVersion: primer.dev/v1
kind: Catalog
entries:
  - title: Test-Driven Development
    category: testing
    explanation: Red, green, refactor.
  - title: Singleton
    category: creational-pattern
    explanation: One instance only.
    example_label: java
    example_text: "enum Config { INSTANCE }"
    references:
      - label: Refactoring Guru
        url: https://refactoring.guru/design-patterns/singleton
  - title: KISS
    category: Design Principles
    explanation: Keep it simple.
  - title: Unit Testing
    category: Testing
    explanation: Test small units in isolation.
"#;

#[test]
fn test_all_has_every_entry_once() {
    let catalog = Catalog::from_yaml(DEFINITION).unwrap();

    let ids: Vec<&str> = catalog.all().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["kiss", "test-driven-development", "unit-testing", "singleton"]
    );

    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), catalog.len());
}

#[test]
fn test_get_identity_round_trip() {
    let catalog = Catalog::from_yaml(DEFINITION).unwrap();

    for entry in catalog.all() {
        let found = catalog.get(&entry.id).unwrap();
        assert!(std::ptr::eq(found, entry));
    }

    assert!(matches!(
        catalog.get("__does_not_exist__"),
        Err(PrimerError::NotFound { .. })
    ));
}

#[test]
fn test_list_by_category_order_and_membership() {
    let catalog = Catalog::from_yaml(DEFINITION).unwrap();

    let testing: Vec<&str> = catalog
        .list_by_category("testing")
        .unwrap()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(testing, vec!["test-driven-development", "unit-testing"]);

    for category in Category::ALL {
        let listed = catalog.list_by_category(category.slug()).unwrap();
        assert!(listed.clone().all(|e| e.category == category));
        assert_eq!(listed.len(), catalog.entries_in(category).len());
    }

    assert!(matches!(
        catalog.list_by_category("Quantum Patterns"),
        Err(PrimerError::InvalidCategory(_))
    ));
}

#[test]
fn test_search_semantics() {
    let catalog = Catalog::from_yaml(DEFINITION).unwrap();

    let results = catalog.search("singleton");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Singleton");
    assert_eq!(results[0].example.as_ref().unwrap().label, "java");

    // explanation match, case-insensitive
    let results = catalog.search("ISOLATION");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "unit-testing");

    assert!(catalog.search("zzz-no-match").is_empty());
}

#[test]
fn test_shared_across_threads() {
    let catalog = Arc::new(Catalog::builtin().unwrap());
    let expected: Vec<String> = catalog.all().map(|e| e.id.clone()).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || {
                catalog
                    .all()
                    .map(|e| e.id.clone())
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_load_from_resolved_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("primer.yaml");
    std::fs::write(&path, DEFINITION).unwrap();

    let source = SourceResolver::new()
        .with_working_dir(Some(dir.path().to_path_buf()))
        .resolve()
        .unwrap();
    assert_eq!(source, CatalogSource::Project(path));

    let catalog = source.load().unwrap();
    assert_eq!(catalog.len(), 4);
}

#[test]
fn test_invalid_file_yields_no_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(
        &path,
        format!(
            "{}  - title: Broken\n    category: singleton-ish\n    explanation: nope\n",
            DEFINITION.trim_start()
        ),
    )
    .unwrap();

    let err = Catalog::from_file(&path).unwrap_err();
    assert!(matches!(err, PrimerError::Definition(_)));
    assert!(!err.is_lookup_miss());
}
