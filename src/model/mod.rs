//! Document model for exported rich text messages.
//!
//! A message body is a sequence of [`Block`]s, each holding an ordered tree
//! of [`Element`]s. The model mirrors the export wire format: every node is
//! tagged by a `type` field, and the polymorphic `style` field is carried
//! untyped until [`Style::decode`] disambiguates it.

mod block;
mod element;
mod file;
mod style;

pub use block::Block;
pub use element::Element;
pub use file::{File, FileMode};
pub use style::{ListStyle, Style, TextStyle};

use crate::error::Result;

/// Deserialize a message's block sequence from export JSON.
pub fn blocks_from_json(json: &str) -> Result<Vec<Block>> {
    Ok(serde_json::from_str(json)?)
}

/// Deserialize a message's attached file list from export JSON.
pub fn files_from_json(json: &str) -> Result<Vec<File>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_from_json() {
        let json = r#"[
            {
                "type": "rich_text",
                "block_id": "b1",
                "elements": [
                    {
                        "type": "rich_text_section",
                        "elements": [{"type": "text", "text": "hello"}]
                    }
                ]
            }
        ]"#;

        let blocks = blocks_from_json(json).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], Block::RichText { .. }));
    }

    #[test]
    fn test_blocks_from_json_invalid() {
        assert!(blocks_from_json("not json").is_err());
    }

    #[test]
    fn test_files_from_json() {
        let json = r#"[
            {"mode": "hosted", "name": "cat.png", "mimetype": "image/png", "url_private": "https://x/cat.png"},
            {"mode": "tombstone"}
        ]"#;

        let files = files_from_json(json).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].mode, FileMode::Hosted);
        assert_eq!(files[1].mode, FileMode::Tombstone);
    }
}
