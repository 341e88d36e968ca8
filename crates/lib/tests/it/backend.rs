//! Tests for the InMemory store: ItemStore contract semantics and JSON file
//! persistence.

use galleria::{Direction, ItemId, ItemStore, OwnerId, backend::InMemory};

use crate::helpers::*;

#[tokio::test]
async fn nearest_order_excludes_the_boundary_itself() {
    let engine = test_engine();
    let owner = OwnerId::from("user-1");
    seed_at_orders(&engine, "user-1", &[100.0, 200.0, 300.0]).await;
    let store = engine.store();

    let below = store
        .find_nearest_order_by_direction(&owner, 200.0, Direction::Previous)
        .await
        .unwrap();
    let above = store
        .find_nearest_order_by_direction(&owner, 200.0, Direction::Next)
        .await
        .unwrap();

    assert_eq!(below, Some(100.0));
    assert_eq!(above, Some(300.0));
}

#[tokio::test]
async fn nearest_order_is_none_beyond_the_ends() {
    let engine = test_engine();
    let owner = OwnerId::from("user-1");
    seed_at_orders(&engine, "user-1", &[100.0, 200.0, 300.0]).await;
    let store = engine.store();

    let below_min = store
        .find_nearest_order_by_direction(&owner, 100.0, Direction::Previous)
        .await
        .unwrap();
    let above_max = store
        .find_nearest_order_by_direction(&owner, 300.0, Direction::Next)
        .await
        .unwrap();

    assert_eq!(below_min, None);
    assert_eq!(above_max, None);
}

#[tokio::test]
async fn surrounding_window_is_inclusive_and_ascending() {
    let engine = test_engine();
    let owner = OwnerId::from("user-1");
    seed_at_orders(&engine, "user-1", &[400.0, 100.0, 300.0, 200.0]).await;
    let store = engine.store();

    let window = store
        .find_surrounding(&owner, Some(200.0), Some(300.0))
        .await
        .unwrap();
    let orders: Vec<f64> = window.iter().map(|item| item.order).collect();
    assert_eq!(orders, vec![200.0, 300.0]);
}

#[tokio::test]
async fn surrounding_window_extends_toward_an_absent_bound() {
    let engine = test_engine();
    let owner = OwnerId::from("user-1");
    seed_at_orders(&engine, "user-1", &[100.0, 200.0, 300.0, 400.0]).await;
    let store = engine.store();

    let head = store
        .find_surrounding(&owner, None, Some(200.0))
        .await
        .unwrap();
    let head_orders: Vec<f64> = head.iter().map(|item| item.order).collect();
    assert_eq!(head_orders, vec![100.0, 200.0]);

    let tail = store
        .find_surrounding(&owner, Some(300.0), None)
        .await
        .unwrap();
    let tail_orders: Vec<f64> = tail.iter().map(|item| item.order).collect();
    assert_eq!(tail_orders, vec![300.0, 400.0]);
}

#[tokio::test]
async fn max_order_is_zero_for_an_empty_collection() {
    let store = InMemory::new();
    let owner = OwnerId::from("user-1");

    assert_eq!(store.find_max_order(&owner).await.unwrap(), 0.0);
}

#[tokio::test]
async fn max_order_is_scoped_per_owner() {
    let engine = test_engine();
    seed_at_orders(&engine, "alice", &[5000.0]).await;
    seed_at_orders(&engine, "bob", &[700.0]).await;
    let store = engine.store();

    assert_eq!(
        store.find_max_order(&OwnerId::from("bob")).await.unwrap(),
        700.0
    );
}

#[tokio::test]
async fn list_returns_items_in_ascending_order() {
    let engine = test_engine();
    let owner = OwnerId::from("user-1");
    seed_at_orders(&engine, "user-1", &[300.0, 100.0, 200.0]).await;

    let listed = engine.store().list(&owner).await.unwrap();
    let orders: Vec<f64> = listed.iter().map(|item| item.order).collect();
    assert_eq!(orders, vec![100.0, 200.0, 300.0]);
}

#[tokio::test]
async fn update_order_returns_none_for_a_missing_item() {
    let store = InMemory::new();

    let updated = store
        .update_order(&ItemId::from("no-such-item"), 42.0)
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[tokio::test]
async fn update_order_persists_the_new_key() {
    let engine = test_engine();
    let items = seed_at_orders(&engine, "user-1", &[100.0]).await;
    let store = engine.store();

    let updated = store.update_order(&items[0].id, 250.0).await.unwrap();
    assert_eq!(updated.unwrap().order, 250.0);

    let fetched = store.get(&items[0].id).await.unwrap();
    assert_eq!(fetched.order, 250.0);
}

#[tokio::test]
async fn get_and_delete_report_missing_items() {
    let store = InMemory::new();
    let missing = ItemId::from("no-such-item");

    let get_err = store.get(&missing).await.unwrap_err();
    assert!(get_err.is_not_found());
    assert_eq!(get_err.module(), "store");

    let delete_err = store.delete(&missing).await.unwrap_err();
    assert!(delete_err.is_not_found());
}

#[tokio::test]
async fn delete_leaves_the_rest_of_the_collection_alone() {
    let engine = test_engine();
    let owner = OwnerId::from("user-1");
    let items = seed_at_orders(&engine, "user-1", &[100.0, 200.0, 300.0]).await;
    let store = engine.store();

    store.delete(&items[1].id).await.unwrap();

    let listed = store.list(&owner).await.unwrap();
    let orders: Vec<f64> = listed.iter().map(|item| item.order).collect();
    assert_eq!(orders, vec![100.0, 300.0]);
}

#[tokio::test]
async fn save_and_load_round_trip() {
    let engine = test_engine();
    let owner = OwnerId::from("user-1");
    seed_at_orders(&engine, "user-1", &[100.0, 200.0]).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("galleria.json");
    engine.store().save_to_file(&path).unwrap();

    let reloaded = InMemory::load_from_file(&path).unwrap();
    assert_eq!(reloaded.len(), 2);

    let listed = reloaded.list(&owner).await.unwrap();
    let orders: Vec<f64> = listed.iter().map(|item| item.order).collect();
    assert_eq!(orders, vec![100.0, 200.0]);
}

#[tokio::test]
async fn loading_a_missing_file_gives_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = InMemory::load_from_file(dir.path().join("absent.json")).unwrap();
    assert!(store.is_empty());
}
