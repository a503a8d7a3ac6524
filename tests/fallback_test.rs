//! End-to-end checks of the three capabilities with no configuration set.

use bytes::Bytes;

use backstore_cache::CacheManager;
use backstore_core::config::AppConfig;
use backstore_core::traits::blob::BlobMetadata;
use backstore_database::ItemManager;
use backstore_storage::BlobManager;

#[tokio::test]
async fn test_unconfigured_capabilities_round_trip() {
    let config = AppConfig::default();

    let cache = CacheManager::new(&config.cache, "x:").await.unwrap();
    assert_eq!(cache.provider_name(), "memory");
    cache.set_string("n", "1", 10).await.unwrap();
    assert_eq!(cache.get_string("n").await.unwrap(), Some("1".to_string()));

    let blobs = BlobManager::new(&config.blob).await.unwrap();
    assert_eq!(blobs.provider_name(), "memory");
    blobs
        .upload("c", "b", BlobMetadata::new(), Bytes::from_static(b"hi"))
        .await
        .unwrap();
    assert_eq!(blobs.download("c", "b").await.unwrap(), Bytes::from_static(b"hi"));

    let items = ItemManager::new(&config.database);
    assert_eq!(items.provider_name(), "memory");
    assert_eq!(items.items().await.unwrap(), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_blob_overwrite_keeps_latest_payload() {
    let blobs = BlobManager::new(&AppConfig::default().blob).await.unwrap();

    blobs
        .upload("c", "b", BlobMetadata::new(), Bytes::from_static(b"A"))
        .await
        .unwrap();
    blobs
        .upload("c", "b", BlobMetadata::new(), Bytes::from_static(b"B"))
        .await
        .unwrap();

    assert_eq!(blobs.download("c", "b").await.unwrap(), Bytes::from_static(b"B"));
}

#[tokio::test]
async fn test_items_after_explicit_init() {
    let items = ItemManager::new(&AppConfig::default().database);
    items.init().await.unwrap();
    items.init().await.unwrap();
    assert_eq!(items.items().await.unwrap().len(), 5);
}
