//! Reading image files into data-URIs

use crate::error::{DiaryError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime)
}

/// Read an image file and encode it as `data:<mime>;base64,<payload>`
pub fn read_image_data_uri(path: &Path) -> Result<String> {
    let mime = mime_type_for(path).ok_or_else(|| {
        DiaryError::InvalidImage(format!(
            "Please select an image file: {}",
            path.display()
        ))
    })?;

    let bytes = fs::read(path)?;
    log::debug!("Encoding {} bytes from {:?} as {}", bytes.len(), path, mime);

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// True for strings shaped like an image data-URI
pub fn is_image_data_uri(value: &str) -> bool {
    value.starts_with("data:image/")
}
