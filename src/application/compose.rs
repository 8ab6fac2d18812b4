//! Compose and edit entries the way the editor does

use crate::application::EntryStore;
use crate::domain::{normalize_title, DiaryEntry, EntryPatch, NewEntry};
use crate::error::{DiaryError, Result};
use crate::infrastructure::{is_image_data_uri, KeyValueStore};

/// Field changes plus the editor's dictation and image actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub patch: EntryPatch,
    pub dictation: Option<String>,
    pub add_images: Vec<String>,
    pub remove_image: Option<usize>,
}

/// Validates user input before it reaches the entry store
pub struct ComposeService<S: KeyValueStore> {
    store: EntryStore<S>,
}

impl<S: KeyValueStore> ComposeService<S> {
    pub fn new(store: EntryStore<S>) -> Self {
        ComposeService { store }
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    /// Save a new entry. A blank title becomes "Untitled Entry"; blank title
    /// and blank content together are rejected.
    pub fn create(&mut self, mut draft: NewEntry) -> Result<DiaryEntry> {
        if draft.is_blank() {
            return Err(DiaryError::EmptyEntry);
        }
        if let Some(image) = draft
            .images
            .iter()
            .flatten()
            .find(|uri| !is_image_data_uri(uri))
        {
            return Err(invalid_data_uri(image));
        }

        draft.title = normalize_title(&draft.title);
        self.store.add(draft)
    }

    /// Apply `patch` to an existing entry with a single store write.
    pub fn edit(&mut self, id: &str, mut patch: EntryPatch) -> Result<DiaryEntry> {
        let current = self.existing(id)?;

        let title = patch.title.as_deref().unwrap_or(&current.title);
        let content = patch.content.as_deref().unwrap_or(&current.content);
        if title.trim().is_empty() && content.trim().is_empty() {
            return Err(DiaryError::EmptyEntry);
        }
        if let Some(image) = patch
            .images
            .iter()
            .flatten()
            .find(|uri| !is_image_data_uri(uri) && !current.images.contains(uri))
        {
            return Err(invalid_data_uri(image));
        }

        if let Some(title) = patch.title.take() {
            patch.title = Some(normalize_title(&title));
        }

        self.store.update(id, patch)?;
        self.existing(id)
    }

    /// Fold dictation and image changes into the patch, then apply it with
    /// [`edit`](Self::edit). Nothing is written unless every change is valid.
    ///
    /// Images are added before `remove_image` is applied, so the index refers
    /// to the list after the additions.
    pub fn apply_edit(&mut self, id: &str, edit: EntryEdit) -> Result<DiaryEntry> {
        let current = self.existing(id)?;
        let EntryEdit {
            mut patch,
            dictation,
            add_images,
            remove_image,
        } = edit;

        if let Some(transcript) = dictation {
            let content = patch.content.take().unwrap_or(current.content);
            patch.content = Some(append_transcript(content, &transcript));
        }

        if !add_images.is_empty() || remove_image.is_some() {
            let mut images = patch.images.take().unwrap_or(current.images);
            images.extend(add_images);
            if let Some(index) = remove_image {
                if index >= images.len() {
                    return Err(DiaryError::InvalidImage(format!(
                        "Entry has {} image(s), no image at position {}",
                        images.len(),
                        index
                    )));
                }
                images.remove(index);
            }
            patch.images = Some(images);
        }

        self.edit(id, patch)
    }

    /// Append finalized dictation text to the content.
    ///
    /// A single space separates it from existing text that does not already end in whitespace.
    pub fn append_dictation(&mut self, id: &str, transcript: &str) -> Result<DiaryEntry> {
        if transcript.trim().is_empty() {
            return self.existing(id);
        }
        self.apply_edit(
            id,
            EntryEdit {
                dictation: Some(transcript.to_string()),
                ..Default::default()
            },
        )
    }

    /// Attach an image data-URI at the end of the entry's image list
    pub fn add_image(&mut self, id: &str, data_uri: String) -> Result<DiaryEntry> {
        self.apply_edit(
            id,
            EntryEdit {
                add_images: vec![data_uri],
                ..Default::default()
            },
        )
    }

    /// Remove the image at `index`
    pub fn remove_image(&mut self, id: &str, index: usize) -> Result<DiaryEntry> {
        self.apply_edit(
            id,
            EntryEdit {
                remove_image: Some(index),
                ..Default::default()
            },
        )
    }

    fn existing(&self, id: &str) -> Result<DiaryEntry> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| DiaryError::EntryNotFound(id.to_string()))
    }
}

fn append_transcript(mut content: String, transcript: &str) -> String {
    let transcript = transcript.trim();
    if transcript.is_empty() {
        return content;
    }
    if !content.is_empty() && !content.ends_with(char::is_whitespace) {
        content.push(' ');
    }
    content.push_str(transcript);
    content
}

fn invalid_data_uri(value: &str) -> DiaryError {
    let preview: String = value.chars().take(32).collect();
    DiaryError::InvalidImage(format!("Not an image data-URI: {}", preview))
}
