//! Friend lists saved to and restored from JSON files

use amity::config::ConfigLoader;
use amity::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

fn offline_list() -> FriendList {
    FriendList::new(SharedStore::default(), Arc::new(OfflineResolver::new()))
}

#[tokio::test]
async fn test_json_round_trip_preserves_values_and_associations() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let repository = JsonFileRepository::new(temp_dir.path().join("lists/owner.json"));

    let list = offline_list();
    list.add_friend_by_name("Steve").await.unwrap();
    list.add_enemy_by_name("Alex").await.unwrap();
    list.set_value_by_name("Notch", 3.0).await.unwrap();
    list.save_to(&repository).await.unwrap();

    let restored = offline_list();
    let loaded = restored
        .load_from(&repository, DuplicatePolicy::Reject)
        .await
        .unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(restored.snapshot().await, list.snapshot().await);
    assert_eq!(restored.get_value_by_name("Notch").await.unwrap(), 2.0);
    assert!(restored.is_enemy_by_name("alex").await.unwrap());
}

#[tokio::test]
async fn test_loading_rejects_out_of_bounds_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("friends.json");
    let id = OfflineResolver::id_for("Steve").unwrap();

    let contents = serde_json::json!({
        "bounds": { "minimum": -2.0, "maximum": 2.0 },
        "persons": [
            { "id": id, "name": "Steve", "value": 9.0, "association": "ally" }
        ]
    });
    std::fs::write(&path, contents.to_string()).unwrap();

    let list = offline_list();
    let result = list
        .load_from(&JsonFileRepository::new(&path), DuplicatePolicy::Reject)
        .await;

    assert!(matches!(result, Err(AmityError::ValueOutOfBounds { .. })));
    assert!(list.store().is_empty().await);
}

#[tokio::test]
async fn test_clear_removes_saved_state() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let repository = JsonFileRepository::new(temp_dir.path().join("friends.json"));

    let list = offline_list();
    list.add_friend_by_name("Steve").await.unwrap();
    list.save_to(&repository).await.unwrap();
    repository.clear().await.unwrap();

    assert!(repository.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_friend_list_from_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("amity.toml");
    std::fs::write(
        &config_path,
        r#"
[bounds]
minimum = -1.0
maximum = 1.0

[store]
duplicate_policy = "overwrite"
"#,
    )
    .unwrap();

    let mut loader = ConfigLoader::new();
    loader.load_file(&config_path).unwrap();
    let config = loader.extract().unwrap();

    let list = FriendList::from_config(&config, Arc::new(OfflineResolver::new())).unwrap();
    list.add_friend_by_name("Steve").await.unwrap();
    let multiplier = list.add_enemy_by_name("Alex").await.unwrap();
    assert_eq!(multiplier, None);

    list.set_value_by_name("Alex", -4.0).await.unwrap();
    assert_eq!(list.get_value_by_name("Alex").await.unwrap(), -1.0);
    assert_eq!(list.get_value_by_name("Steve").await.unwrap(), 0.25);
    assert_eq!(list.store().read(|s| s.policy()).await, DuplicatePolicy::Overwrite);
}
