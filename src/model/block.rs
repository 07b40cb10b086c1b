//! Top-level block types.

use serde::{Deserialize, Serialize};

use super::Element;

/// A top-level structural unit of a message body.
///
/// Exports carry several block kinds, but only `rich_text` holds renderable
/// content; everything else is preserved as [`Block::Unknown`] so one
/// unrecognized block never fails deserialization of the whole message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Rich text content: an ordered sequence of elements.
    RichText {
        /// Opaque block identifier from the export.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,

        /// Child elements, in document order.
        #[serde(default)]
        elements: Vec<Element>,
    },

    /// Any block kind this library does not render.
    #[serde(other)]
    Unknown,
}
