//! Trending batch behavior: partial failure tolerance and deterministic
//! ordering.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use tokenscan::error::ScanError;
use tokenscan::service::TrendingService;
use tokenscan::testkit::domain::SnapshotBuilder;
use tokenscan::testkit::source::{GatedSource, ScriptedSource};

fn candidates(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn failed_candidates_are_dropped_without_aborting_the_batch() {
    let source = ScriptedSource::new()
        .with_snapshot("one", SnapshotBuilder::new("one").symbol("ONE").build())
        .with_outcome("two", Err(ScanError::NetworkFailure("timed out".into())))
        .with_snapshot("three", SnapshotBuilder::new("three").symbol("THREE").build())
        .with_outcome("four", Err(ScanError::NotFound));

    let service = TrendingService::new(
        Arc::new(source),
        candidates(&["one", "two", "three", "four"]),
    );

    let snapshots = service.fetch_trending().await;
    let symbols: Vec<&str> = snapshots.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["ONE", "THREE"]);
}

#[tokio::test]
async fn all_failures_yield_an_empty_panel_not_an_error() {
    let source = ScriptedSource::new()
        .with_outcome("one", Err(ScanError::NotFound))
        .with_outcome("two", Err(ScanError::MalformedResponse("bad".into())))
        .with_outcome("three", Err(ScanError::NetworkFailure("reset".into())))
        .with_outcome("four", Err(ScanError::NotFound));

    let service = TrendingService::new(
        Arc::new(source),
        candidates(&["one", "two", "three", "four"]),
    );

    assert!(service.fetch_trending().await.is_empty());
}

#[tokio::test]
async fn output_preserves_candidate_order_regardless_of_completion_order() {
    let scripted = ScriptedSource::new()
        .with_snapshot("slow", SnapshotBuilder::new("slow").symbol("SLOW").build())
        .with_snapshot("fast", SnapshotBuilder::new("fast").symbol("FAST").build());
    let source = Arc::new(GatedSource::new(scripted));
    let gate = source.gate("slow");

    // "slow" is declared first but completes last.
    let service = TrendingService::new(source, candidates(&["slow", "fast"]));
    let panel = tokio::spawn(async move { service.fetch_trending().await });

    tokio::task::yield_now().await;
    gate.notify_one();

    let snapshots = panel.await.unwrap();
    let symbols: Vec<&str> = snapshots.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["SLOW", "FAST"]);
}

#[tokio::test]
async fn at_most_four_candidates_are_fetched() {
    let source = ScriptedSource::new()
        .with_snapshot("a", SnapshotBuilder::new("a").build())
        .with_snapshot("b", SnapshotBuilder::new("b").build())
        .with_snapshot("c", SnapshotBuilder::new("c").build())
        .with_snapshot("d", SnapshotBuilder::new("d").build())
        .with_snapshot("e", SnapshotBuilder::new("e").build());
    let fetches = source.fetch_count();

    let service =
        TrendingService::new(Arc::new(source), candidates(&["a", "b", "c", "d", "e"]));

    let snapshots = service.fetch_trending().await;
    assert_eq!(snapshots.len(), 4);
    assert_eq!(fetches.load(Ordering::SeqCst), 4);
}
