//! Application layer - Use cases and orchestration

pub mod compose;
pub mod entry_store;
pub mod health;
pub mod init;
pub mod manage_config;
pub mod theme;

pub use compose::{ComposeService, EntryEdit};
pub use entry_store::{EntryStore, ENTRIES_KEY};
pub use manage_config::ConfigService;
pub use theme::{ThemeService, THEME_KEY};
