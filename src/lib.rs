//! serene - Local rich-text diary
//!
//! Diary entries with formatting markup, mood, style identifiers and images,
//! kept in a single JSON document inside a key-value store.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
