//! Integration tests for TursoStore
//!
//! Tests cover:
//! - Summary create/read round-trip with topics attached in order
//! - Listing newest-first with limit
//! - Idempotent deletes that take dependent rows with them
//! - Mind map upsert semantics (insert, then replace in place)

use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use tubemind_core::db::{DatabaseService, SummaryStore, TursoStore};
use tubemind_core::layout::generate_mind_map;
use tubemind_core::models::{MindMapGraph, NewSummary, Summary};

/// Setup a store with a fresh database
async fn setup_store() -> (Arc<dyn SummaryStore>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let db = Arc::new(DatabaseService::new(db_path).await.unwrap());
    (Arc::new(TursoStore::new(db)), temp_dir)
}

fn sample_summary(video_id: &str, topics: &[&str]) -> Summary {
    Summary::new(NewSummary {
        video_id: video_id.to_string(),
        video_url: format!("https://youtu.be/{}", video_id),
        title: format!("Video {}", video_id),
        channel_name: Some("Test Channel".to_string()),
        thumbnail_url: None,
        duration_seconds: Some(630),
        summary_text: "## Intro\n\nSome text\n\n### Details\n".to_string(),
        metadata: json!({"model": "test-model"}),
        topics: topics.iter().map(|t| t.to_string()).collect(),
    })
}

#[tokio::test]
async fn test_create_and_get_round_trip() {
    let (store, _dir) = setup_store().await;

    let summary = sample_summary("aaaaaaaaaaa", &["caching", "databases"]);
    let summary_id = summary.id.clone();

    let created = store.create_summary(summary).await.unwrap();
    assert_eq!(created.id, summary_id);
    assert_eq!(created.video_id, "aaaaaaaaaaa");
    assert_eq!(created.topics.len(), 2);

    let fetched = store.get_summary(&summary_id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Video aaaaaaaaaaa");
    assert_eq!(fetched.summary_text, created.summary_text);
    assert_eq!(fetched.metadata, json!({"model": "test-model"}));
    assert_eq!(fetched.duration_seconds, Some(630));

    // Topic order survives storage
    let labels: Vec<&str> = fetched.topics.iter().map(|t| t.topic.as_str()).collect();
    assert_eq!(labels, vec!["caching", "databases"]);
    for topic in &fetched.topics {
        assert_eq!(topic.summary_id, summary_id);
    }
}

#[tokio::test]
async fn test_get_missing_summary_is_none() {
    let (store, _dir) = setup_store().await;

    let result = store.get_summary("no-such-id").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_newest_first_with_limit() {
    let (store, _dir) = setup_store().await;

    for video_id in ["aaaaaaaaaaa", "bbbbbbbbbbb", "ccccccccccc"] {
        store
            .create_summary(sample_summary(video_id, &[]))
            .await
            .unwrap();
    }

    let listed = store.list_summaries(2).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].video_id, "ccccccccccc");
    assert_eq!(listed[1].video_id, "bbbbbbbbbbb");

    let all = store.list_summaries(10).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_delete_is_idempotent_and_cascades() {
    let (store, _dir) = setup_store().await;

    let summary = sample_summary("aaaaaaaaaaa", &["caching"]);
    let summary_id = summary.id.clone();
    store.create_summary(summary).await.unwrap();

    let graph = MindMapGraph::default();
    store.upsert_mind_map(&summary_id, &graph).await.unwrap();

    let result = store.delete_summary(&summary_id).await.unwrap();
    assert!(result.existed);

    assert!(store.get_summary(&summary_id).await.unwrap().is_none());
    assert!(store.get_mind_map(&summary_id).await.unwrap().is_none());

    // Second delete succeeds without finding anything
    let result = store.delete_summary(&summary_id).await.unwrap();
    assert!(!result.existed);
}

#[tokio::test]
async fn test_mind_map_upsert_inserts_then_replaces() {
    let (store, _dir) = setup_store().await;

    let summary = sample_summary("aaaaaaaaaaa", &["caching", "search"]);
    let summary_id = summary.id.clone();
    let created = store.create_summary(summary).await.unwrap();

    assert!(store.get_mind_map(&summary_id).await.unwrap().is_none());

    let first_graph = generate_mind_map(&created.summary_text, &created.topics);
    let first = store.upsert_mind_map(&summary_id, &first_graph).await.unwrap();
    assert_eq!(first.summary_id, summary_id);
    assert_eq!(first.nodes, first_graph.nodes);
    assert_eq!(first.edges, first_graph.edges);

    // Replace with a graph computed from different text; the record id
    // and creation timestamp stay put
    let second_graph = generate_mind_map("", &created.topics);
    let second = store
        .upsert_mind_map(&summary_id, &second_graph)
        .await
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.nodes, second_graph.nodes);

    let fetched = store.get_mind_map(&summary_id).await.unwrap().unwrap();
    assert_eq!(fetched.nodes, second_graph.nodes);
    assert_eq!(fetched.edges, second_graph.edges);
}

#[tokio::test]
async fn test_stored_graph_round_trips_exactly() {
    let (store, _dir) = setup_store().await;

    let summary = sample_summary("aaaaaaaaaaa", &["caching", "databases", "search"]);
    let summary_id = summary.id.clone();
    let created = store.create_summary(summary).await.unwrap();

    let graph = generate_mind_map(&created.summary_text, &created.topics);
    store.upsert_mind_map(&summary_id, &graph).await.unwrap();

    // The persisted copy deserializes to exactly the generated graph
    let stored = store.get_mind_map(&summary_id).await.unwrap().unwrap();
    assert_eq!(stored.graph(), graph);
}
