// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed point in time all fixture commits are relative to (2020-09-13 12:26:40 UTC)
pub const BASE_TIME: i64 = 1_600_000_000;

pub const ALICE: (&str, &str) = ("Alice Example", "alice@example.com");
pub const BOB: (&str, &str) = ("Bob Example", "bob@example.com");

/// Create a temporary git repository without any commits
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    (dir, repo_path, repo)
}

/// Commit on `update_ref` as `author`, `offset` seconds after `BASE_TIME`.
///
/// Each commit writes its own file so every tree differs.
pub fn commit_at(
    repo: &Repository,
    update_ref: &str,
    author: (&str, &str),
    offset: i64,
    utc_offset_minutes: i32,
) -> Oid {
    let time = Time::new(BASE_TIME + offset, utc_offset_minutes);
    let sig = Signature::new(author.0, author.1, &time).unwrap();

    let file_name = format!("{}-{}.txt", update_ref.replace('/', "_"), offset);
    let full_path = repo.workdir().unwrap().join(&file_name);
    std::fs::write(&full_path, format!("{} at {}", author.0, offset)).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(std::path::Path::new(&file_name)).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let parent = repo
        .find_reference(update_ref)
        .ok()
        .and_then(|r| r.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(
        Some(update_ref),
        &sig,
        &sig,
        &format!("work at {}", offset),
        &tree,
        &parents,
    )
    .unwrap()
}

/// Commit on the current branch in UTC
pub fn add_commit(repo: &Repository, author: (&str, &str), offset: i64) -> Oid {
    commit_at(repo, "HEAD", author, offset, 0)
}

/// Create `name` pointing at the current HEAD commit, leaving HEAD where it is
pub fn create_branch(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.branch(name, &head, false).unwrap();
}
