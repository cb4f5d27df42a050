//! Task store CRUD properties against a real SQLite database in a tempdir.

use std::collections::HashSet;
use tempfile::TempDir;
use tickd::storage::TaskStore;

async fn make_store(dir: &TempDir) -> TaskStore {
    TaskStore::new(dir.path()).await.unwrap()
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir).await;
    assert!(store.list_all().await.unwrap().is_empty());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn insert_then_list_contains_exactly_that_task() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir).await;

    let created = store.insert("buy milk", false).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.text, "buy milk");
    assert!(!created.completed);

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].text, "buy milk");
    assert!(!all[0].completed);
}

#[tokio::test]
async fn completed_flag_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir).await;
    let created = store.insert("already done", true).await.unwrap();
    let fetched = store.get(&created.id).await.unwrap().unwrap();
    assert!(fetched.completed);
}

#[tokio::test]
async fn inserted_ids_are_unique() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir).await;

    let mut seen = HashSet::new();
    for i in 0..20 {
        let row = store.insert(&format!("task {i}"), false).await.unwrap();
        assert!(seen.insert(row.id), "id assigned twice");
    }
    assert_eq!(store.count().await.unwrap(), 20);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir).await;

    let keep = store.insert("keep", false).await.unwrap();
    let gone = store.insert("gone", false).await.unwrap();

    store.delete_by_id(&gone.id).await.unwrap();

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
    assert!(store.get(&gone.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_of_absent_id_is_success() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir).await;
    store.delete_by_id("no-such-id").await.unwrap();

    // And again after a real insert/delete cycle.
    let row = store.insert("ephemeral", false).await.unwrap();
    store.delete_by_id(&row.id).await.unwrap();
    store.delete_by_id(&row.id).await.unwrap();
}

#[tokio::test]
async fn concurrent_inserts_produce_distinct_rows() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir).await;

    let (a, b) = tokio::join!(store.insert("first", false), store.insert("second", false));
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_ne!(a.id, b.id);

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
}
