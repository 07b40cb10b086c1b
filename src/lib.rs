//! # richblocks
//!
//! Renders the nested block/element document model of a chat-workspace
//! export into a portable HTML fragment.
//!
//! Rendering is a two-phase pipeline: the block tree is first walked into
//! intermediate markup (emphasis, lists, quotes, fences, links, plus
//! sentinel-wrapped mentions), which is then run through a generic markdown
//! transform with a hook that promotes the sentinels to mention spans.
//! Attached files render independently and are appended to the body.
//!
//! ## Quick Start
//!
//! ```
//! use richblocks::{render_message, ChannelDirectory, UserDirectory};
//!
//! fn main() -> richblocks::Result<()> {
//!     let blocks = richblocks::model::blocks_from_json(
//!         r#"[{"type": "rich_text", "elements": [
//!             {"type": "rich_text_section", "elements": [
//!                 {"type": "text", "text": "hello "},
//!                 {"type": "user", "user_id": "U1"}
//!             ]}
//!         ]}]"#,
//!     )?;
//!
//!     let users: UserDirectory = [("U1", "alice")].into_iter().collect();
//!     let channels = ChannelDirectory::new();
//!
//!     let html = render_message(&blocks, &[], &users, &channels)?;
//!     assert!(html.contains("<span class=\"mention\">@alice</span>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Behavior notes
//!
//! - Directories are immutable snapshots for the duration of a render;
//!   independent messages may render concurrently against independent
//!   snapshots with no coordination.
//! - Only an undecodable style value aborts a render. Unrecognized block
//!   or element kinds, and mention IDs missing from the directories,
//!   degrade gracefully: a logged diagnostic plus empty output or a
//!   placeholder.

pub mod directory;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use directory::{ChannelDirectory, UserDirectory};
pub use error::{Error, Result};
pub use model::{Block, Element, File, FileMode, ListStyle, Style, TextStyle};
pub use render::{markup_to_html, render_attachments, MessageRenderer};

/// Render one message's blocks and attachments to an HTML fragment.
///
/// Pure and deterministic apart from diagnostic logging; a message with no
/// renderable content yields the empty string.
pub fn render_message(
    blocks: &[Block],
    files: &[File],
    users: &UserDirectory,
    channels: &ChannelDirectory,
) -> Result<String> {
    MessageRenderer::new(users, channels).render(blocks, files)
}
