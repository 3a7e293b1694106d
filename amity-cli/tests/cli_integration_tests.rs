//! Integration tests for the Amity CLI
//!
//! Commands run against a friend list file in a temporary directory and
//! re-open the file to check what was persisted.

use amity::prelude::*;
use amity_cli::args::{ListArgs, NameArgs, SetValueArgs};
use amity_cli::commands::Commands;
use amity_cli::{AmityCliContext, handle_command};
use tempfile::TempDir;

fn name(name: &str) -> NameArgs {
    NameArgs {
        name: name.to_string(),
    }
}

async fn run(path: &std::path::Path, cmd: Commands) -> amity::Result<()> {
    let ctx = AmityCliContext::for_path(path).await?;
    handle_command(cmd, &ctx, "json").await
}

async fn reopen(path: &std::path::Path) -> AmityCliContext {
    AmityCliContext::for_path(path)
        .await
        .expect("Failed to reopen friend list")
}

#[tokio::test]
async fn test_friend_and_enemy_are_persisted() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("friends.json");

    run(&path, Commands::Friend(name("Steve"))).await.unwrap();
    run(&path, Commands::Enemy(name("Alex"))).await.unwrap();

    let ctx = reopen(&path).await;
    assert!(ctx.friends.is_friend_by_name("steve").await.unwrap());
    assert!(ctx.friends.is_enemy_by_name("Alex").await.unwrap());
    assert_eq!(ctx.friends.store().len().await, 2);
}

#[tokio::test]
async fn test_set_beyond_bounds_rescales_saved_list() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("friends.json");

    run(&path, Commands::Friend(name("Steve"))).await.unwrap();
    run(
        &path,
        Commands::Set(SetValueArgs {
            name: "Alex".to_string(),
            value: -2.0,
        }),
    )
    .await
    .unwrap();
    run(
        &path,
        Commands::Set(SetValueArgs {
            name: "Notch".to_string(),
            value: 4.0,
        }),
    )
    .await
    .unwrap();

    let ctx = reopen(&path).await;
    assert_eq!(ctx.friends.get_value_by_name("Steve").await.unwrap(), 0.5);
    assert_eq!(ctx.friends.get_value_by_name("Alex").await.unwrap(), -1.0);
    assert_eq!(ctx.friends.get_value_by_name("Notch").await.unwrap(), 2.0);
    assert!(ctx.friends.store().verify_invariant().await.is_ok());
}

#[tokio::test]
async fn test_remove_and_neutral() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("friends.json");

    run(&path, Commands::Friend(name("Steve"))).await.unwrap();
    run(&path, Commands::Friend(name("Alex"))).await.unwrap();
    run(&path, Commands::Neutral(name("Alex"))).await.unwrap();
    run(&path, Commands::Remove(name("Steve"))).await.unwrap();
    // removing an unknown player is not an error
    run(&path, Commands::Remove(name("Herobrine"))).await.unwrap();

    let ctx = reopen(&path).await;
    assert!(!ctx.friends.has_value_by_name("Steve").await.unwrap());
    assert!(ctx.friends.has_value_by_name("Alex").await.unwrap());
    assert!(ctx.friends.is_neutral_by_name("Alex").await.unwrap());
}

#[tokio::test]
async fn test_halve_and_check() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("friends.json");

    run(&path, Commands::Enemy(name("Alex"))).await.unwrap();
    run(&path, Commands::Halve).await.unwrap();
    run(&path, Commands::Check).await.unwrap();

    let ctx = reopen(&path).await;
    assert_eq!(ctx.friends.get_value_by_name("Alex").await.unwrap(), -0.5);
}

#[tokio::test]
async fn test_read_only_commands_on_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("nested/friends.json");

    run(&path, Commands::Get(name("Steve"))).await.unwrap();
    run(
        &path,
        Commands::List(ListArgs {
            association: Some(Association::Ally),
            min_value: None,
            max_value: None,
        }),
    )
    .await
    .unwrap();

    assert!(!path.exists());
}

#[tokio::test]
async fn test_invalid_names_are_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("friends.json");

    let result = run(&path, Commands::Friend(name("not a valid name!"))).await;
    assert!(matches!(result, Err(AmityError::UnknownIdentity(_))));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_corrupt_file_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("friends.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = AmityCliContext::for_path(&path).await;
    assert!(matches!(result, Err(AmityError::Storage(_))));
}
