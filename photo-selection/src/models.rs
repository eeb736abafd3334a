use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image formats accepted by the matching service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Extensions offered in the file dialog
    pub const EXTENSIONS: [&'static str; 3] = ["png", "jpg", "jpeg"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// A photo chosen by the user, kept in memory until submission
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPhoto {
    pub file_name: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl SelectedPhoto {
    /// Returns `None` if the file name does not carry a PNG/JPEG extension
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        let file_name = file_name.into();
        let format = ImageFormat::from_file_name(&file_name)?;
        Some(Self {
            file_name,
            format,
            bytes,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(ImageFormat::from_file_name("a.png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_file_name("b.JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_file_name("c.jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_file_name("d.webp"), None);
        assert_eq!(ImageFormat::from_file_name("no_extension"), None);
    }

    #[test]
    fn test_from_bytes() {
        let photo = SelectedPhoto::from_bytes("kid.jpeg", vec![1, 2, 3]).unwrap();
        assert_eq!(photo.mime_type(), "image/jpeg");
        assert_eq!(photo.size(), 3);
        assert!(SelectedPhoto::from_bytes("kid.gif", vec![1]).is_none());
    }
}
