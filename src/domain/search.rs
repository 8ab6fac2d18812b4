//! Free-text search over entries

use crate::domain::DiaryEntry;

/// Case-insensitive substring match against title, content and mood.
/// An empty query matches every entry.
pub fn matches(entry: &DiaryEntry, query: &str) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }

    [&entry.title, &entry.content, &entry.mood]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Keep the entries matching `query`, preserving their order
pub fn filter_entries<'a>(entries: &'a [DiaryEntry], query: &str) -> Vec<&'a DiaryEntry> {
    entries.iter().filter(|e| matches(e, query)).collect()
}
