//! Output formatting utilities

use crate::domain::{render_markup, DiaryEntry};

/// Format a list of entries for display
pub fn format_entry_list(entries: &[&DiaryEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}  {} {}\n",
            entry.date.format("%d-%m-%Y %H:%M"),
            entry.id,
            entry.mood,
            entry.title
        ));
    }
    output
}

/// Format a single entry, optionally rendering its content markup
pub fn format_entry(entry: &DiaryEntry, render: bool) -> String {
    let mut output = format!(
        "{} {}\nid:     {}\ndate:   {}\nstyle:  {} {}\nimages: {}\n",
        entry.mood,
        entry.title,
        entry.id,
        entry.date.format("%A, %B %-d, %Y %H:%M"),
        entry.font_family,
        entry.text_color,
        entry.images.len()
    );

    if !entry.tags.is_empty() {
        output.push_str(&format!("tags:   {}\n", entry.tags.join(", ")));
    }

    output.push('\n');
    if render {
        output.push_str(&render_markup(&entry.content));
    } else {
        output.push_str(&entry.content);
    }
    output.push('\n');

    output
}
