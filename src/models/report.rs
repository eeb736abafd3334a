use serde::{Deserialize, Serialize};

/// Multipart field names, shared by the validator (error keys) and the payload builder
pub mod fields {
    pub const CHILD_NAME: &str = "childName";
    pub const AGE: &str = "age";
    pub const HEIGHT: &str = "height";
    pub const SKIN_COLOR: &str = "skinColor";
    pub const LOCATION: &str = "location";
    pub const DISTINGUISHING_FEATURES: &str = "distinguishingFeatures";
    pub const PARENT_PHONE: &str = "parentPhone";
    pub const POLICE_CONTACT: &str = "policeContact";
    pub const PHOTOS: &str = "photos";

    pub const REPORTER_NAME: &str = "reporterName";
    pub const REPORTER_PHONE: &str = "reporterPhone";
    pub const DETAILS: &str = "details";
    pub const FOUND_PHOTO: &str = "foundPhoto";
}

/// Values of the missing-child form exactly as typed. Photos are not part of
/// the draft; the live selection is passed separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MissingReportDraft {
    pub child_name: String,
    pub age: String,
    pub height: String,
    pub skin_color: String,
    pub location: String,
    pub distinguishing_features: String,
    pub parent_phone: String,
    pub police_contact: String,
}

/// Values of the found-child form exactly as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoundReportDraft {
    pub child_name: String,
    pub reporter_name: String,
    pub reporter_phone: String,
    pub location: String,
    pub details: String,
}

impl FoundReportDraft {
    /// The service only runs mole matching when the details mention a mole or mark
    pub fn mentions_mole(&self) -> bool {
        let details = self.details.to_lowercase();
        details.contains("mole") || details.contains("mark")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkinColor {
    Fair,
    Light,
    Medium,
    Olive,
    Brown,
    Dark,
}

impl SkinColor {
    pub fn as_str(&self) -> &str {
        match self {
            SkinColor::Fair => "fair",
            SkinColor::Light => "light",
            SkinColor::Medium => "medium",
            SkinColor::Olive => "olive",
            SkinColor::Brown => "brown",
            SkinColor::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fair" => Some(SkinColor::Fair),
            "light" => Some(SkinColor::Light),
            "medium" => Some(SkinColor::Medium),
            "olive" => Some(SkinColor::Olive),
            "brown" => Some(SkinColor::Brown),
            "dark" => Some(SkinColor::Dark),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SkinColor::Fair => "Fair",
            SkinColor::Light => "Light",
            SkinColor::Medium => "Medium",
            SkinColor::Olive => "Olive",
            SkinColor::Brown => "Brown",
            SkinColor::Dark => "Dark",
        }
    }

    pub fn all() -> &'static [SkinColor] {
        static ALL: [SkinColor; 6] = [
            SkinColor::Fair,
            SkinColor::Light,
            SkinColor::Medium,
            SkinColor::Olive,
            SkinColor::Brown,
            SkinColor::Dark,
        ];
        &ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_color_conversion() {
        for color in SkinColor::all() {
            assert_eq!(SkinColor::from_str(color.as_str()), Some(*color));
        }
        assert_eq!(SkinColor::from_str("Olive"), Some(SkinColor::Olive));
        assert_eq!(SkinColor::from_str("green"), None);
    }

    #[test]
    fn test_mentions_mole() {
        let mut draft = FoundReportDraft::default();
        assert!(!draft.mentions_mole());
        draft.details = "Small dark MOLE on left cheek".to_string();
        assert!(draft.mentions_mole());
        draft.details = "birthmark on right arm".to_string();
        assert!(draft.mentions_mole());
        draft.details = "wearing a red jacket".to_string();
        assert!(!draft.mentions_mole());
    }
}
