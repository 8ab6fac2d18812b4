//! Domain layer - Business logic and domain models

pub mod entry;
pub mod markup;
pub mod quote;
pub mod search;
pub mod theme;

pub use entry::{normalize_title, DiaryEntry, EntryPatch, NewEntry};
pub use markup::{parse_spans, render_markup, spans_to_markup, Span, Style};
pub use theme::Theme;
