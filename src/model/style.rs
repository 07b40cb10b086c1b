//! Style decoding for text and list elements.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// A decoded element style.
///
/// The wire format overloads one `style` field: list elements carry a bare
/// string tag while text elements carry a record of booleans. A value is
/// always exactly one of the two; absence means "no style."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// An ordered/bullet list style tag.
    List(ListStyle),
    /// A record of independent text style flags.
    Text(TextStyle),
}

impl Style {
    /// Decode an untyped style value.
    ///
    /// Attempts the list-style shape first, then the text-style shape. A
    /// value matching neither yields [`Error::StyleDecode`], which aborts
    /// the whole render: a tree with an uninterpretable style cannot be
    /// rendered safely.
    pub fn decode(value: &Value) -> Result<Self> {
        if let Ok(list) = serde_json::from_value::<ListStyle>(value.clone()) {
            return Ok(Style::List(list));
        }
        if let Ok(text) = serde_json::from_value::<TextStyle>(value.clone()) {
            return Ok(Style::Text(text));
        }
        Err(Error::StyleDecode(value.to_string()))
    }
}

/// List style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Numbered items (`1.`, `2.`, ...).
    Ordered,
    /// Bulleted items (`-`).
    Bullet,
}

/// Text styling flags.
///
/// Exports may attach extra keys (`highlight` and friends); those are
/// ignored rather than failing the decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub code: bool,
}

impl TextStyle {
    /// Check if any styling flag is set.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.strike || self.code
    }
}
