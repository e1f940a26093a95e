//! Loading snapshots from disk.

use std::fs;

use tempfile::TempDir;
use warbler_social::{Directory, MessageId, SocialError, UserId, DEFAULT_IMAGE_URL};

#[test]
fn loads_snapshot_with_defaults_filled_in() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapshot.json");
    fs::write(
        &path,
        r#"{
            "users": [
                {"id": 1, "username": "testuser1", "email": "test1@test.com"},
                {"id": 2, "username": "testuser2", "email": "test2@test.com",
                 "image_url": "http://test-url.png", "bio": "This is a test bio"}
            ],
            "messages": [
                {"id": 5, "user_id": 2, "timestamp": "2024-02-01T00:00:00Z", "text": "Test message."}
            ],
            "likes": [{"user": 1, "message": 5}]
        }"#,
    )
    .unwrap();

    let directory = Directory::load(&path).expect("snapshot should load");

    let first = directory.user(UserId(1)).unwrap();
    assert_eq!(first.image_url, DEFAULT_IMAGE_URL);
    assert_eq!(first.stats.likes, 1);

    let second = directory.user(UserId(2)).unwrap();
    assert_eq!(second.image_url, "http://test-url.png");
    assert_eq!(second.bio(), Some("This is a test bio"));
    assert_eq!(second.stats.messages, 1);

    assert!(directory.has_liked(UserId(1), MessageId(5)));
    assert!(!directory.has_liked(UserId(2), MessageId(5)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");

    let error = Directory::load(&path).unwrap_err();

    assert!(matches!(error, SocialError::ReadSnapshot { .. }));
    assert!(error.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        Directory::load(&path),
        Err(SocialError::ParseSnapshot(_))
    ));
}

#[test]
fn message_without_text_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("snapshot.json");
    fs::write(
        &path,
        r#"{
            "users": [{"id": 1, "username": "testuser", "email": "test@test.com"}],
            "messages": [{"id": 1, "user_id": 1, "timestamp": "2024-02-01T00:00:00Z", "text": ""}]
        }"#,
    )
    .unwrap();

    assert!(matches!(
        Directory::load(&path),
        Err(SocialError::InvalidMessageData(_))
    ));
}
