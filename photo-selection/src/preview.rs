//! Data-URL previews for selected photos
//!
//! A `PreviewSet` owns exactly one preview per currently selected photo.
//! Replacing the selection or resetting the form releases the old previews,
//! so repeated selections never accumulate encoded images in memory.

use crate::models::SelectedPhoto;
use base64::{engine::general_purpose, Engine as _};
use uuid::Uuid;

/// Preview of one selected photo
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub id: Uuid,
    pub file_name: String,
    pub data_url: String,
}

impl Preview {
    pub fn from_photo(photo: &SelectedPhoto) -> Self {
        let encoded = general_purpose::STANDARD.encode(&photo.bytes);
        Self {
            id: Uuid::new_v4(),
            file_name: photo.file_name.clone(),
            data_url: format!("data:{};base64,{}", photo.mime_type(), encoded),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewSet {
    previews: Vec<Preview>,
}

impl PreviewSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases the current previews and creates one per photo.
    /// Returns how many previews were released.
    pub fn replace(&mut self, photos: &[SelectedPhoto]) -> usize {
        let released = self.release_all();
        self.previews = photos.iter().map(Preview::from_photo).collect();
        released
    }

    /// Releases every preview. Returns how many were released.
    pub fn release_all(&mut self) -> usize {
        let released = self.previews.len();
        if released > 0 {
            log::debug!("Releasing {} photo previews", released);
        }
        // Drop the encoded buffers instead of keeping the capacity around
        self.previews = Vec::new();
        released
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preview> {
        self.previews.iter()
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}
