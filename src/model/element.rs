//! Element-level types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node in a block's content tree.
///
/// Leaves carry text, emoji, links, or mentions; containers own an ordered
/// sequence of children. Ownership is strictly parent-to-child, so a tree is
/// consumed immutably by a single render and then discarded.
///
/// The `style` field on text and list nodes is polymorphic in the wire
/// format (a bare string for lists, a record of booleans for text), so it
/// stays a raw [`Value`] here and is disambiguated by
/// [`Style::decode`](super::Style::decode) at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A run of raw text, optionally styled.
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<Value>,
    },

    /// An emoji referenced by shortcode name.
    Emoji { name: String },

    /// A user mention by ID.
    User { user_id: String },

    /// A channel mention by ID.
    Channel { channel_id: String },

    /// A broadcast mention (`here`, `channel`, `everyone`).
    Broadcast {
        #[serde(default)]
        range: String,
    },

    /// A color swatch; rendered as its raw value.
    Color { value: String },

    /// A hyperlink with optional display text.
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// An inline grouping of child elements.
    RichTextSection {
        #[serde(default)]
        elements: Vec<Element>,
    },

    /// A list whose children are the items.
    RichTextList {
        #[serde(default)]
        elements: Vec<Element>,
        /// List style tag; must decode to an ordered/bullet list style.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<Value>,
        /// Nesting depth, rendered as three spaces per level.
        #[serde(default)]
        indent: u32,
        /// Blockquote nesting count applied to every item line.
        #[serde(default)]
        border: u32,
    },

    /// A block quotation.
    RichTextQuote {
        #[serde(default)]
        elements: Vec<Element>,
        #[serde(default)]
        border: u32,
    },

    /// A preformatted (fenced code) region.
    RichTextPreformatted {
        #[serde(default)]
        elements: Vec<Element>,
        #[serde(default)]
        border: u32,
    },

    /// Any element kind this library does not render.
    #[serde(other)]
    Unknown,
}

impl Element {
    /// Create a plain text element.
    pub fn text(text: impl Into<String>) -> Self {
        Element::Text {
            text: text.into(),
            style: None,
        }
    }

    /// Create a section wrapping the given children.
    pub fn section(elements: Vec<Element>) -> Self {
        Element::RichTextSection { elements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_element_with_style() {
        let json = r#"{"type": "text", "text": "hi", "style": {"bold": true}}"#;
        let element: Element = serde_json::from_str(json).unwrap();
        match element {
            Element::Text { text, style } => {
                assert_eq!(text, "hi");
                assert!(style.is_some());
            }
            other => panic!("expected text element, got {:?}", other),
        }
    }

    #[test]
    fn test_list_element_with_string_style() {
        let json = r#"{
            "type": "rich_text_list",
            "style": "ordered",
            "indent": 1,
            "border": 0,
            "elements": []
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        match element {
            Element::RichTextList { style, indent, .. } => {
                assert_eq!(style, Some(Value::String("ordered".into())));
                assert_eq!(indent, 1);
            }
            other => panic!("expected list element, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_section() {
        let json = r#"{
            "type": "rich_text_section",
            "elements": [
                {"type": "user", "user_id": "U123"},
                {"type": "text", "text": " hello"}
            ]
        }"#;
        let element: Element = serde_json::from_str(json).unwrap();
        match element {
            Element::RichTextSection { elements } => assert_eq!(elements.len(), 2),
            other => panic!("expected section, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_element_kind() {
        let json = r#"{"type": "date", "timestamp": "123"}"#;
        let element: Element = serde_json::from_str(json).unwrap();
        assert!(matches!(element, Element::Unknown));
    }
}
