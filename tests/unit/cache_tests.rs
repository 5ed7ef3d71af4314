/*!
 * Tests for the preload cache
 */

use bytes::Bytes;

use signflow::media::ClipHandle;
use signflow::playback::PreloadCache;

fn handle(locator: &str) -> ClipHandle {
    ClipHandle::new(locator, Bytes::from_static(b"clip-bytes"))
}

#[test]
fn test_cache_get_withStoredClip_shouldReturnIt() {
    let cache = PreloadCache::new();
    cache.store(handle("clips/hello.mp4"));

    let hit = cache.get("clips/hello.mp4");
    assert!(hit.is_some());
    assert_eq!(hit.unwrap().locator, "clips/hello.mp4");
}

#[test]
fn test_cache_get_withMissingLocator_shouldReturnNone() {
    let cache = PreloadCache::new();
    assert!(cache.get("clips/nothing.mp4").is_none());
}

#[test]
fn test_cache_stats_shouldTrackHitsAndMisses() {
    let cache = PreloadCache::new();
    cache.store(handle("a"));

    cache.get("a");
    cache.get("a");
    cache.get("b");

    let (hits, misses, rate) = cache.stats();
    assert_eq!(hits, 2);
    assert_eq!(misses, 1);
    assert!((rate - 2.0 / 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_cache_clear_shouldDropEntriesAndResetStats() {
    let cache = PreloadCache::new();
    cache.store(handle("a"));
    cache.get("a");
    cache.get("b");

    cache.clear();

    assert!(cache.is_empty());
    assert_eq!(cache.stats(), (0, 0, 0.0));
}

#[test]
fn test_cache_clone_shouldShareStorage() {
    let cache = PreloadCache::new();
    let shared = cache.clone();

    cache.store(handle("a"));
    assert!(shared.contains("a"));
    assert_eq!(shared.len(), 1);
}
