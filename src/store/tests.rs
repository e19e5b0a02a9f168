use super::*;

#[tokio::test]
async fn test_mock_prefix_enumeration() {
    let store = MockKvStore::new();
    store.insert("semantic:a", b"1".to_vec());
    store.insert("semantic:b", b"2".to_vec());
    store.insert("other:c", b"3".to_vec());

    let keys = store.keys_with_prefix("semantic:").await.unwrap();
    assert_eq!(keys.len(), 2);
    assert!(keys.iter().all(|k| k.starts_with("semantic:")));
}

#[tokio::test]
async fn test_mock_get_absent_key() {
    let store = MockKvStore::new();
    assert!(store.get("semantic:missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_phantom_key_enumerates_but_has_no_value() {
    let store = MockKvStore::new();
    store.insert_phantom_key("semantic:ghost");

    let keys = store.keys_with_prefix("semantic:").await.unwrap();
    assert_eq!(keys, vec!["semantic:ghost".to_string()]);
    assert!(store.get("semantic:ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_unavailable() {
    let store = MockKvStore::new();
    store.set_unavailable(true);

    assert!(matches!(
        store.keys_with_prefix("semantic:").await,
        Err(StoreError::ConnectionFailed { .. })
    ));
    assert!(matches!(
        store.get("semantic:a").await,
        Err(StoreError::ConnectionFailed { .. })
    ));

    store.set_unavailable(false);
    assert!(store.keys_with_prefix("semantic:").await.is_ok());
}

// Live-Redis coverage. Run with a local server:
// cargo test store -- --ignored

#[tokio::test]
#[ignore = "requires a running Redis instance"]
async fn test_redis_scan_and_get_round_trip() {
    let store = RedisStore::connect("redis://127.0.0.1:6379").await.unwrap();
    store.health_check().await.unwrap();

    let keys = store.keys_with_prefix("recall-test:").await.unwrap();
    assert!(keys.is_empty() || keys.iter().all(|k| k.starts_with("recall-test:")));
}
