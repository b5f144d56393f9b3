//! Sentence sources against a real directory and a mock HTTP server.

use std::fs;

use kanadeck_core::content::{load_day_or_fallback, DirectorySource, HttpSource};
use kanadeck_core::{ContentError, MemoryStore, SentenceDeck, SentenceSource, Tier};
use tempfile::TempDir;

const DAY_JSON: &str = r#"[
    {"id": 1, "korean": "안녕하세요", "english": "Hello", "japanese": "こんにちは",
     "pronounce_r": "Konnichiwa", "pronounce_h": "こんにちは", "words": []},
    {"id": 2, "korean": "감사합니다", "english": "Thank you", "japanese": "ありがとう",
     "pronounce_r": "Arigatou", "pronounce_h": "ありがとう",
     "words": [{"korean": "감사", "japanese": "ありがとう", "pronounce_h": "ありがとう"}]},
    {"id": 3, "korean": "네", "japanese": "はい"}
]"#;

fn write_day(root: &TempDir, day: u32, body: &str) {
    let dir = root.path().join(format!("day{day}"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("data{day}.json")), body).unwrap();
}

#[tokio::test]
async fn test_directory_source_reads_day_file() {
    let root = TempDir::new().unwrap();
    write_day(&root, 4, DAY_JSON);
    let source = DirectorySource::new(root.path(), "day{N}/data{N}.json");

    let sentences = source.load_day(4).await.unwrap();
    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[1].words.len(), 1);
    assert_eq!(sentences[2].english, "");
}

#[tokio::test]
async fn test_directory_source_missing_file() {
    let root = TempDir::new().unwrap();
    let source = DirectorySource::new(root.path(), "day{N}/data{N}.json");
    let err = source.load_day(9).await.unwrap_err();
    assert!(matches!(err, ContentError::Read { .. }));
}

#[tokio::test]
async fn test_fallback_on_missing_and_empty_days() {
    let root = TempDir::new().unwrap();
    write_day(&root, 2, "[]");
    let source = DirectorySource::new(root.path(), "day{N}/data{N}.json");

    let missing = load_day_or_fallback(&source, 1).await;
    assert!(missing.fallback);
    assert_eq!(missing.sentences.len(), 2);

    let empty = load_day_or_fallback(&source, 2).await;
    assert!(empty.fallback);
    assert_eq!(empty.day, 2);
}

#[tokio::test]
async fn test_switch_day_uses_loaded_content() {
    let root = TempDir::new().unwrap();
    write_day(&root, 6, DAY_JSON);
    let source = DirectorySource::new(root.path(), "day{N}/data{N}.json");
    let store = MemoryStore::new();
    let mut deck = SentenceDeck::new(&store, 40);

    assert!(deck.switch_day(6, &source).await.unwrap());
    assert!(!deck.is_fallback());
    assert_eq!(deck.progress_by_tier().get(Tier::ONE), 3);
    let (_, sentence) = deck.current_sentence().unwrap();
    assert_eq!(sentence.japanese, "こんにちは");

    // a day without content still becomes ready, on the sample
    assert!(deck.switch_day(7, &source).await.unwrap());
    assert!(deck.is_fallback());
    assert_eq!(deck.progress_by_tier().total(), 2);
}

#[tokio::test]
async fn test_switch_day_rejects_out_of_range() {
    let root = TempDir::new().unwrap();
    let source = DirectorySource::new(root.path(), "day{N}/data{N}.json");
    let mut deck = SentenceDeck::new(MemoryStore::new(), 40);
    assert!(deck.switch_day(41, &source).await.is_err());
    assert!(!deck.is_ready());
}

#[tokio::test]
async fn test_http_source_fetches_without_cache() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/curriculum/day3/data3.json")
        .match_header("cache-control", "no-cache")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DAY_JSON)
        .create_async()
        .await;

    let base = format!("{}/curriculum", server.url());
    let source = HttpSource::new(&base, "day{N}/data{N}.json").unwrap();
    let sentences = source.load_day(3).await.unwrap();
    assert_eq!(sentences.len(), 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_source_error_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/day8/data8.json")
        .with_status(404)
        .create_async()
        .await;

    let source = HttpSource::new(&server.url(), "day{N}/data{N}.json").unwrap();
    let err = source.load_day(8).await.unwrap_err();
    assert!(matches!(err, ContentError::Status { status: 404, .. }));

    let content = load_day_or_fallback(&source, 8).await;
    assert!(content.fallback);
}

#[tokio::test]
async fn test_http_source_rejects_non_array_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/day1/data1.json")
        .with_status(200)
        .with_body(r#"{"sentences": []}"#)
        .create_async()
        .await;

    let source = HttpSource::new(&server.url(), "day{N}/data{N}.json").unwrap();
    let err = source.load_day(1).await.unwrap_err();
    assert!(matches!(err, ContentError::Invalid { day: 1, .. }));
}
