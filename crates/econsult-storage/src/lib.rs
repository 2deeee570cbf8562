//! econsult-storage - Storage library for econsult
//!
//! This crate provides the file system comment store.

mod comment_store;

pub use comment_store::FileSystemStore;
