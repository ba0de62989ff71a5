use std::path::Path;

use club_roster_be::{
    assets::{AssetStore, allowed_file, sanitize_filename},
    errors::AppError,
};

fn store_at(root: &Path) -> AssetStore {
    AssetStore {
        root: root.to_path_buf(),
        public_prefix: "/static/images/players".to_string(),
    }
}

#[test]
fn allowed_file_checks_extension_case_insensitively() {
    assert!(allowed_file("photo.png"));
    assert!(allowed_file("photo.PNG"));
    assert!(allowed_file("photo.Jpg"));
    assert!(allowed_file("photo.jpeg"));
    assert!(allowed_file("photo.GIF"));

    assert!(!allowed_file("photo.EXE"));
    assert!(!allowed_file("photo.svg"));
    assert!(!allowed_file("photo"));
    assert!(!allowed_file(""));
}

#[test]
fn sanitize_filename_strips_path_components() {
    assert_eq!(sanitize_filename("photo.png"), "photo.png");
    assert_eq!(sanitize_filename("../../etc/passwd.png"), "passwd.png");
    assert_eq!(sanitize_filename("/absolute/path/shot.jpg"), "shot.jpg");
    assert_eq!(sanitize_filename("C:\\pics\\shot.jpg"), "shot.jpg");
}

#[test]
fn sanitize_filename_drops_unsafe_characters() {
    assert_eq!(sanitize_filename("my photo.png"), "myphoto.png");
    assert_eq!(sanitize_filename("sala h!?.png"), "salah.png");
    assert_eq!(sanitize_filename("head_shot-v2.png"), "head_shot-v2.png");
}

#[tokio::test]
async fn store_rejects_disallowed_extension() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());

    let err = store.store("photo.EXE", b"payload").await.unwrap_err();
    assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid file type"));

    // Nothing was written.
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn store_writes_file_and_returns_public_path() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());

    let url = store.store("photo.png", b"image-bytes").await.unwrap();
    assert_eq!(url, "/static/images/players/photo.png");

    let written = std::fs::read(tmp.path().join("photo.png")).unwrap();
    assert_eq!(written, b"image-bytes");
}

#[tokio::test]
async fn store_contains_traversal_input_inside_the_root() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("players");
    let store = store_at(&root);

    let url = store.store("../../escape.png", b"image-bytes").await.unwrap();
    assert_eq!(url, "/static/images/players/escape.png");

    assert!(root.join("escape.png").is_file());
    assert!(!tmp.path().join("escape.png").exists());
}

#[tokio::test]
async fn same_filename_overwrites_previous_upload() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_at(tmp.path());

    store.store("photo.png", b"first").await.unwrap();
    store.store("photo.png", b"second").await.unwrap();

    let written = std::fs::read(tmp.path().join("photo.png")).unwrap();
    assert_eq!(written, b"second");
}
