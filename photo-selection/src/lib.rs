//! # Photo Selection
//!
//! Photo selection and preview handling for the report forms.
//!
//! This crate provides:
//! - `SelectedPhoto`: a user-selected PNG/JPEG file held in memory
//! - A native file picker restricted to PNG, JPEG and JPG
//! - `PreviewSet`: data-URL previews that are released when the selection changes
//!
//! ## Platform Separation
//!
//! Native dialogs are only available on desktop targets. On Android the
//! picker returns `PickerError::PlatformNotSupported`.
//!
//! No image processing happens here: files are read and forwarded byte for byte.

pub mod models;
pub mod picker;
pub mod preview;

pub use models::{ImageFormat, SelectedPhoto};
pub use picker::{load_photo, pick_image, pick_images, PickerError};
pub use preview::{Preview, PreviewSet};
