use dioxus::prelude::*;
use photo_selection::PreviewSet;

pub const LABEL_STYLE: &str =
    "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;";
pub const HINT_STYLE: &str = "margin: 4px 0 0 0; font-size: 12px; color: #666;";

/// Inline message under an invalid field
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { style: "margin: 4px 0 0 0; font-size: 13px; color: #c33;", "{message}" }
        }
    }
}

/// Thumbnails of the current photo selection
#[component]
pub fn PhotoPreviews(previews: PreviewSet, label: String) -> Element {
    if previews.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { style: "margin-bottom: 20px;",
            label { style: LABEL_STYLE, "{label}" }
            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 8px;",
                for preview in previews.iter() {
                    div { key: "{preview.id}",
                        img {
                            src: "{preview.data_url}",
                            alt: "{preview.file_name}",
                            style: "width: 100%; height: 110px; object-fit: cover; border-radius: 6px; border: 1px solid #e0e0e0;",
                        }
                        p { style: "margin: 2px 0 0 0; font-size: 11px; color: #888; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                            "{preview.file_name}"
                        }
                    }
                }
            }
        }
    }
}
