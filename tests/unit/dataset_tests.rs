/*!
 * Tests for dataset loading, locator resolution, and hot-swap
 */

use std::collections::HashMap;

use signflow::dataset::{Dataset, DatasetStore};

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_from_json_withBaseUrl_shouldPrefixLocators() {
    let dataset = Dataset::from_json(
        r#"{"name":"isl","baseUrl":"https://cdn.example.com/clips/","videos":{"HELLO":"hello.mp4","WATER":"water.mp4"}}"#,
    )
    .unwrap();

    assert_eq!(dataset.name, "isl");
    assert_eq!(
        dataset.clip_locator("HELLO"),
        Some("https://cdn.example.com/clips/hello.mp4".to_string())
    );
    assert!(dataset.clip_locator("MISSING").is_none());
}

#[test]
fn test_from_json_withoutVideos_shouldFail() {
    assert!(Dataset::from_json(r#"{"name":"broken","videos":{}}"#).is_err());
    assert!(Dataset::from_json("not json at all").is_err());
}

#[test]
fn test_from_file_withValidJson_shouldLoadDataset() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(
        &dir.path().to_path_buf(),
        "dataset.json",
        r#"{"name":"local","videos":{"HELLO":"hello.mp4"}}"#,
    )
    .unwrap();

    let dataset = Dataset::from_file(&path).unwrap();
    assert_eq!(dataset.name, "local");
    assert_eq!(dataset.len(), 1);
}

#[test]
fn test_from_clip_dir_shouldMapFileStemsToGlosses() {
    let dir = create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();
    create_test_file(&root, "hello.mp4", "fake-bytes").unwrap();
    create_test_file(&root, "water.webm", "fake-bytes").unwrap();
    create_test_file(&root, "notes.txt", "not a clip").unwrap();

    let dataset = Dataset::from_clip_dir(dir.path()).unwrap();
    assert_eq!(dataset.len(), 2);
    assert!(dataset.contains("HELLO"));
    assert!(dataset.contains("WATER"));
    assert!(!dataset.contains("NOTES"));
}

#[test]
fn test_from_clip_dir_withMissingDirectory_shouldFail() {
    let result = Dataset::from_clip_dir(std::path::Path::new("/definitely/not/here"));
    assert!(result.is_err());
}

#[test]
fn test_store_swap_shouldReplaceWholesaleWithoutTouchingSnapshots() {
    let mut videos = HashMap::new();
    videos.insert("HELLO".to_string(), "hello.mp4".to_string());
    let store = DatasetStore::new(Dataset::new("first", None, videos).unwrap());

    let snapshot = store.snapshot();

    let mut next = HashMap::new();
    next.insert("WATER".to_string(), "water.mp4".to_string());
    store.swap(Dataset::new("second", None, next).unwrap());

    // The earlier snapshot still sees the old dataset
    assert!(snapshot.contains("HELLO"));
    assert!(!snapshot.contains("WATER"));

    // New snapshots see the replacement
    let fresh = store.snapshot();
    assert!(fresh.contains("WATER"));
    assert!(!fresh.contains("HELLO"));
}
