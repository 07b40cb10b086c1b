//! Rendering module: block trees to portable HTML fragments.
//!
//! Rendering runs in two phases. [`MessageRenderer`] first walks the block
//! tree and produces intermediate markup: standard emphasis, list, quote,
//! fence and link syntax, with mentions wrapped in a sentinel marker pair.
//! [`markup_to_html`] then runs that markup through a generic markdown
//! transform whose raw-HTML hook promotes the sentinels to mention spans.
//! Attachments render independently and are appended after the body.

mod attachments;
mod emoji;
mod html;
mod markup;

pub use attachments::render_attachments;
pub use html::markup_to_html;
pub use markup::MessageRenderer;

/// Opening sentinel wrapped around mention text in pass-1 markup.
///
/// The pair is chosen so the generic markdown pass carries it through as a
/// raw inline span. Pass 1 escapes `<` in user text, so the only raw
/// occurrences reaching the second pass are renderer-emitted.
pub(crate) const MENTION_OPEN: &str = "<mention>";

/// Closing sentinel; see [`MENTION_OPEN`].
pub(crate) const MENTION_CLOSE: &str = "</mention>";
