//! Attached file types.

use serde::{Deserialize, Serialize};

/// A file attached to a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct File {
    /// Hosting mode; controls whether and how the file is rendered.
    #[serde(default)]
    pub mode: FileMode,

    /// Display name of the file.
    #[serde(default)]
    pub name: String,

    /// MIME type reported by the export.
    #[serde(default)]
    pub mimetype: String,

    /// Workspace-private download URL.
    #[serde(default)]
    pub url_private: String,
}

impl File {
    /// Check if the file is renderable as an inline image.
    pub fn is_image(&self) -> bool {
        self.mode == FileMode::Hosted && self.mimetype.starts_with("image")
    }
}

/// File hosting mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileMode {
    /// A regular uploaded file.
    #[default]
    Normal,
    /// A file hosted by the workspace; images render inline.
    Hosted,
    /// Content withheld by the workspace storage limit; skipped.
    HiddenByLimit,
    /// A deleted file stub; skipped.
    Tombstone,
    /// Any other mode; rendered as a plain link.
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image() {
        let file = File {
            mode: FileMode::Hosted,
            mimetype: "image/png".to_string(),
            ..Default::default()
        };
        assert!(file.is_image());

        let pdf = File {
            mode: FileMode::Hosted,
            mimetype: "application/pdf".to_string(),
            ..Default::default()
        };
        assert!(!pdf.is_image());

        // Only hosted files render inline, whatever the MIME type says.
        let external = File {
            mode: FileMode::Normal,
            mimetype: "image/jpeg".to_string(),
            ..Default::default()
        };
        assert!(!external.is_image());
    }

    #[test]
    fn test_unrecognized_mode_falls_back() {
        let json = r#"{"mode": "snippet", "name": "s.txt"}"#;
        let file: File = serde_json::from_str(json).unwrap();
        assert_eq!(file.mode, FileMode::Other);
    }
}
