/*!
 * Tests for the sequence controller state machine
 */

use std::time::Duration;

use signflow::media::MockFetcher;
use signflow::playback::{PlaybackEvent, SequenceState};

use crate::common::{build_harness, collect_until_settled, dataset_for, word_starts};

fn glosses(names: &[&str]) -> Vec<String> {
    names.iter().map(|g| g.to_string()).collect()
}

#[tokio::test]
async fn test_play_sequence_withAllClipsPresent_shouldPlayInOrder() {
    let mut harness = build_harness(dataset_for(&["HELLO", "WATER"]), MockFetcher::new(), 5);

    harness.controller.play_sequence(&glosses(&["HELLO", "WATER"])).unwrap();
    let events = collect_until_settled(&mut harness.events).await;

    assert_eq!(word_starts(&events), glosses(&["HELLO", "WATER"]));
    assert_eq!(events.last(), Some(&PlaybackEvent::SequenceComplete));
    assert_eq!(harness.controller.state(), SequenceState::Complete);
}

#[tokio::test]
async fn test_play_sequence_withMissingMiddleGloss_shouldSkipAndReportOnce() {
    // Dataset knows A and C; B has no clip
    let mut harness = build_harness(dataset_for(&["A", "C"]), MockFetcher::new(), 5);

    harness.controller.play_sequence(&glosses(&["A", "B", "C"])).unwrap();
    let events = collect_until_settled(&mut harness.events).await;

    // Clip-start events for A and C only
    assert_eq!(word_starts(&events), glosses(&["A", "C"]));

    // Exactly one aggregate missing report, naming B
    let missing_reports: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            PlaybackEvent::MissingWords(list) => Some(list.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(missing_reports, vec![glosses(&["B"])]);

    assert_eq!(events.last(), Some(&PlaybackEvent::SequenceComplete));
}

#[tokio::test]
async fn test_play_sequence_withNoResolvableGlosses_shouldReportDistinctly() {
    let mut harness = build_harness(dataset_for(&["HELLO"]), MockFetcher::new(), 5);

    harness.controller.play_sequence(&glosses(&["NOPE", "NADA"])).unwrap();
    let events = collect_until_settled(&mut harness.events).await;

    assert!(events.contains(&PlaybackEvent::NoPlayableGlosses));
    assert!(word_starts(&events).is_empty());
    assert_eq!(harness.controller.state(), SequenceState::Idle);
}

#[tokio::test]
async fn test_play_sequence_withFailingClip_shouldSkipAndEmitClipError() {
    let fetcher = MockFetcher::new().fail_for("b.mp4");
    let mut harness = build_harness(dataset_for(&["A", "B", "C"]), fetcher, 5);

    harness.controller.play_sequence(&glosses(&["A", "B", "C"])).unwrap();
    let events = collect_until_settled(&mut harness.events).await;

    assert_eq!(word_starts(&events), glosses(&["A", "C"]));
    assert!(events.contains(&PlaybackEvent::ClipError {
        gloss: "B".to_string()
    }));
    assert_eq!(events.last(), Some(&PlaybackEvent::SequenceComplete));
}

#[tokio::test]
async fn test_reset_midPlayback_shouldStopImmediatelyAndClearQueue() {
    // Long clips so the reset lands mid-clip
    let mut harness = build_harness(
        dataset_for(&["A", "B", "C"]),
        MockFetcher::new(),
        500,
    );

    harness.controller.play_sequence(&glosses(&["A", "B", "C"])).unwrap();

    // Wait for the first clip to start
    let first = tokio::time::timeout(Duration::from_secs(2), harness.events.recv())
        .await
        .expect("first event should arrive")
        .unwrap();
    assert_eq!(
        first,
        PlaybackEvent::WordStart {
            gloss: "A".to_string()
        }
    );

    harness.controller.reset();
    assert_eq!(harness.controller.state(), SequenceState::Idle);
    assert_eq!(harness.controller.cursor(), None);

    // No event from the cancelled run may arrive afterwards
    let residual =
        tokio::time::timeout(Duration::from_millis(700), harness.events.recv()).await;
    assert!(residual.is_err(), "stale driver emitted {:?}", residual);
}

#[tokio::test]
async fn test_play_sequence_calledTwice_shouldSupersedeFirstQueue() {
    let mut harness = build_harness(
        dataset_for(&["A", "B", "WATER"]),
        MockFetcher::new(),
        200,
    );

    harness.controller.play_sequence(&glosses(&["A", "B"])).unwrap();

    // Let the first sequence reach its first clip
    let first = tokio::time::timeout(Duration::from_secs(2), harness.events.recv())
        .await
        .expect("first event should arrive")
        .unwrap();
    assert_eq!(
        first,
        PlaybackEvent::WordStart {
            gloss: "A".to_string()
        }
    );

    harness.controller.play_sequence(&glosses(&["WATER"])).unwrap();
    let events = collect_until_settled(&mut harness.events).await;

    // Nothing from the superseded queue may play after the switch
    assert_eq!(word_starts(&events), glosses(&["WATER"]));
    assert_eq!(events.last(), Some(&PlaybackEvent::SequenceComplete));
}

#[tokio::test]
async fn test_stop_then_resume_shouldContinueFromCursor() {
    let mut harness = build_harness(
        dataset_for(&["A", "B", "C"]),
        MockFetcher::new(),
        150,
    );

    harness.controller.play_sequence(&glosses(&["A", "B", "C"])).unwrap();

    // First clip starts
    let first = tokio::time::timeout(Duration::from_secs(2), harness.events.recv())
        .await
        .expect("first event should arrive")
        .unwrap();
    assert_eq!(
        first,
        PlaybackEvent::WordStart {
            gloss: "A".to_string()
        }
    );

    harness.controller.stop_sequence();
    assert_eq!(harness.controller.state(), SequenceState::Paused);
    let cursor = harness.controller.cursor();
    assert!(cursor.is_some());

    harness.controller.resume().unwrap();
    let events = collect_until_settled(&mut harness.events).await;

    // Resume replays from the cursor; the queue is intact
    assert!(!word_starts(&events).is_empty());
    assert_eq!(events.last(), Some(&PlaybackEvent::SequenceComplete));
    assert_eq!(harness.controller.state(), SequenceState::Complete);
}

#[tokio::test]
async fn test_step_whileIdle_shouldBeRejected() {
    let harness = build_harness(dataset_for(&["A"]), MockFetcher::new(), 5);

    assert!(harness.controller.step_forward().is_err());
    assert!(harness.controller.step_back().is_err());
}

#[tokio::test]
async fn test_step_whilePaused_shouldClampCursorToQueueBounds() {
    let mut harness = build_harness(dataset_for(&["A", "B"]), MockFetcher::new(), 300);

    harness.controller.play_sequence(&glosses(&["A", "B"])).unwrap();
    let _ = tokio::time::timeout(Duration::from_secs(2), harness.events.recv()).await;
    harness.controller.stop_sequence();

    harness.controller.step_back().unwrap();
    harness.controller.step_back().unwrap();
    assert_eq!(harness.controller.cursor(), Some(0));

    harness.controller.step_forward().unwrap();
    harness.controller.step_forward().unwrap();
    harness.controller.step_forward().unwrap();
    assert_eq!(harness.controller.cursor(), Some(1));
}

#[tokio::test]
async fn test_resume_whileIdle_shouldBeRejected() {
    let harness = build_harness(dataset_for(&["A"]), MockFetcher::new(), 5);
    assert!(harness.controller.resume().is_err());
}

#[tokio::test]
async fn test_play_sequence_shouldEnterPreloadingBeforePlaying() {
    let fetcher = MockFetcher::new().with_latency(Duration::from_millis(40));
    let mut harness = build_harness(dataset_for(&["A"]), fetcher, 5);

    harness.controller.play_sequence(&glosses(&["A"])).unwrap();

    // The spawned driver cannot run before this task yields, so the
    // brief Preloading state is observable here.
    assert_eq!(harness.controller.state(), SequenceState::Preloading);

    let events = collect_until_settled(&mut harness.events).await;
    assert_eq!(word_starts(&events), glosses(&["A"]));
    assert_eq!(harness.controller.state(), SequenceState::Complete);
}

#[tokio::test]
async fn test_play_sequence_withDroppedEventReceiver_shouldStillComplete() {
    let harness = build_harness(dataset_for(&["A", "B"]), MockFetcher::new(), 5);
    drop(harness.events);

    harness.controller.play_sequence(&glosses(&["A", "B"])).unwrap();

    // Nobody consuming events must not degrade the sequence outcome.
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while harness.controller.state() != SequenceState::Complete {
        assert!(
            tokio::time::Instant::now() < deadline,
            "sequence stuck in state {}",
            harness.controller.state()
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
