//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod image;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use image::{is_image_data_uri, read_image_data_uri};
pub use repository::{DiaryRepository, FileSystemRepository};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
