/*!
 * Tests for preloader warm-up and request deduplication
 */

use std::sync::Arc;
use std::time::Duration;

use signflow::media::MockFetcher;
use signflow::playback::{PreloadCache, Preloader};

fn preloader_over(fetcher: MockFetcher) -> (Preloader, Arc<MockFetcher>) {
    let fetcher = Arc::new(fetcher);
    let preloader = Preloader::new(PreloadCache::new(), fetcher.clone());
    (preloader, fetcher)
}

#[tokio::test]
async fn test_obtain_withConcurrentRequests_shouldFetchOnlyOnce() {
    let (preloader, fetcher) =
        preloader_over(MockFetcher::new().with_latency(Duration::from_millis(30)));

    let (a, b) = tokio::join!(preloader.obtain("clip.mp4"), preloader.obtain("clip.mp4"));

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(fetcher.fetch_count("clip.mp4"), 1);
}

#[tokio::test]
async fn test_obtain_withCachedClip_shouldNotFetchAgain() {
    let (preloader, fetcher) = preloader_over(MockFetcher::new());

    preloader.obtain("clip.mp4").await.unwrap();
    preloader.obtain("clip.mp4").await.unwrap();

    assert_eq!(fetcher.fetch_count("clip.mp4"), 1);
}

#[tokio::test]
async fn test_warm_shouldPopulateCacheForEveryLocator() {
    let (preloader, fetcher) = preloader_over(MockFetcher::new());

    let locators = vec!["a.mp4".to_string(), "b.mp4".to_string(), "c.mp4".to_string()];
    let warmed = preloader.warm(&locators).await;

    assert_eq!(warmed, 3);
    assert_eq!(fetcher.total_fetches(), 3);
    for locator in &locators {
        assert!(preloader.cache().contains(locator));
    }
}

#[tokio::test]
async fn test_warm_withFailingLocator_shouldNotBeFatal() {
    let (preloader, _fetcher) = preloader_over(MockFetcher::new().fail_for("bad.mp4"));

    let locators = vec!["good.mp4".to_string(), "bad.mp4".to_string()];
    let warmed = preloader.warm(&locators).await;

    assert_eq!(warmed, 1);
    assert!(preloader.cache().contains("good.mp4"));
    assert!(!preloader.cache().contains("bad.mp4"));
}

#[tokio::test]
async fn test_obtain_afterFailedWarm_shouldRetryLazily() {
    let (preloader, fetcher) = preloader_over(MockFetcher::new().fail_for("bad.mp4"));

    preloader.warm(&["bad.mp4".to_string()]).await;
    let result = preloader.obtain("bad.mp4").await;

    // The lazy path issues a fresh fetch rather than reusing the failure
    assert!(result.is_err());
    assert_eq!(fetcher.fetch_count("bad.mp4"), 2);
}

#[tokio::test]
async fn test_warm_withDuplicateLocators_shouldDeduplicate() {
    let (preloader, fetcher) =
        preloader_over(MockFetcher::new().with_latency(Duration::from_millis(10)));

    let locators = vec!["same.mp4".to_string(), "same.mp4".to_string()];
    preloader.warm(&locators).await;

    assert_eq!(fetcher.fetch_count("same.mp4"), 1);
}
