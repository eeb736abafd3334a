// Platform-specific photo picker
//
// Desktop targets use the native file dialog. Android has no dialog backend,
// so both pickers return PlatformNotSupported there.

use crate::models::{ImageFormat, SelectedPhoto};
use std::path::Path;

#[derive(Debug)]
pub enum PickerError {
    PlatformNotSupported(String),
    UnsupportedFormat(String),
    Io(std::io::Error),
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::PlatformNotSupported(msg) => write!(f, "Platform not supported: {}", msg),
            PickerError::UnsupportedFormat(name) => {
                write!(f, "Unsupported file type (PNG, JPEG or JPG only): {}", name)
            }
            PickerError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PickerError {}

impl From<std::io::Error> for PickerError {
    fn from(e: std::io::Error) -> Self {
        PickerError::Io(e)
    }
}

/// Reads a photo from disk, rejecting anything that is not PNG/JPEG
pub fn load_photo(path: &Path) -> Result<SelectedPhoto, PickerError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    if ImageFormat::from_file_name(&file_name).is_none() {
        return Err(PickerError::UnsupportedFormat(file_name));
    }

    let bytes = std::fs::read(path)?;
    SelectedPhoto::from_bytes(file_name.clone(), bytes)
        .ok_or(PickerError::UnsupportedFormat(file_name))
}

#[cfg(not(target_os = "android"))]
fn image_dialog(title: &str) -> rfd::AsyncFileDialog {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("Images (PNG, JPEG, JPG)", &ImageFormat::EXTENSIONS)
}

#[cfg(not(target_os = "android"))]
async fn read_handle(handle: rfd::FileHandle) -> Result<SelectedPhoto, PickerError> {
    let file_name = handle.file_name();
    let bytes = handle.read().await;
    SelectedPhoto::from_bytes(file_name.clone(), bytes)
        .ok_or(PickerError::UnsupportedFormat(file_name))
}

/// Picks exactly one photo. `Ok(None)` means the user cancelled.
#[cfg(not(target_os = "android"))]
pub async fn pick_image() -> Result<Option<SelectedPhoto>, PickerError> {
    match image_dialog("Select photo").pick_file().await {
        Some(handle) => {
            let photo = read_handle(handle).await?;
            log::debug!("Picked {} ({} bytes)", photo.file_name, photo.size());
            Ok(Some(photo))
        }
        None => Ok(None),
    }
}

/// Picks one or more photos. An empty vector means the user cancelled.
#[cfg(not(target_os = "android"))]
pub async fn pick_images() -> Result<Vec<SelectedPhoto>, PickerError> {
    let handles = image_dialog("Select photos")
        .pick_files()
        .await
        .unwrap_or_default();

    let mut photos = Vec::with_capacity(handles.len());
    for handle in handles {
        photos.push(read_handle(handle).await?);
    }
    log::debug!("Picked {} photos", photos.len());
    Ok(photos)
}

#[cfg(target_os = "android")]
pub async fn pick_image() -> Result<Option<SelectedPhoto>, PickerError> {
    Err(PickerError::PlatformNotSupported(
        "No file dialog on Android".to_string(),
    ))
}

#[cfg(target_os = "android")]
pub async fn pick_images() -> Result<Vec<SelectedPhoto>, PickerError> {
    Err(PickerError::PlatformNotSupported(
        "No file dialog on Android".to_string(),
    ))
}
