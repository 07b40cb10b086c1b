//! Element-level rendering: block trees to intermediate markup.

use log::warn;

use crate::directory::{ChannelDirectory, UserDirectory};
use crate::error::Result;
use crate::model::{Block, Element, File, ListStyle, Style, TextStyle};

use super::{emoji, markup_to_html, render_attachments, MENTION_CLOSE, MENTION_OPEN};

/// Renders one message's rich content against directory snapshots.
///
/// The directories are borrowed for the renderer's lifetime and never
/// mutated; each message gets its own renderer, so independent messages can
/// render concurrently against independently refreshed snapshots.
pub struct MessageRenderer<'a> {
    users: &'a UserDirectory,
    channels: &'a ChannelDirectory,
}

impl<'a> MessageRenderer<'a> {
    /// Create a renderer over the given directory snapshots.
    pub fn new(users: &'a UserDirectory, channels: &'a ChannelDirectory) -> Self {
        Self { users, channels }
    }

    /// Render a message body and its attachments to one HTML fragment.
    ///
    /// A message with no renderable blocks and no surviving attachments
    /// yields the empty string.
    pub fn render(&self, blocks: &[Block], files: &[File]) -> Result<String> {
        let markup = self.render_blocks(blocks)?;
        let mut html = markup_to_html(&markup);
        html.push_str(&render_attachments(files));
        Ok(html)
    }

    /// Pass 1: render every block to markup, blank-line separated, trimmed.
    pub fn render_blocks(&self, blocks: &[Block]) -> Result<String> {
        let mut output = String::new();
        for block in blocks {
            output.push_str(&self.render_block(block)?);
            output.push_str("\n\n");
        }
        Ok(output.trim().to_string())
    }

    fn render_block(&self, block: &Block) -> Result<String> {
        match block {
            Block::RichText { elements, .. } => self.render_children(elements, false),
            Block::Unknown => {
                warn!("skipping block of unrecognized kind");
                Ok(String::new())
            }
        }
    }

    /// Render one element to markup.
    ///
    /// Malformed nodes degrade to the empty string with a diagnostic; only
    /// an undecodable style value aborts.
    pub fn render_element(&self, element: &Element) -> Result<String> {
        self.render_element_inner(element, false)
    }

    /// `verbatim` is set inside preformatted regions, whose content the
    /// generic pass treats as literal code text: no raw-markup escaping
    /// applies there.
    fn render_element_inner(&self, element: &Element, verbatim: bool) -> Result<String> {
        match element {
            Element::Text { text, style } => self.render_text(text, style.as_ref(), verbatim),
            Element::Emoji { name } => Ok(match emoji::glyph(name) {
                Some(glyph) => glyph.to_string(),
                None if verbatim => format!(":{}:", name),
                None => format!(":{}:", escape_raw_text(name)),
            }),
            Element::User { user_id } => {
                let name = self.users.display_name(user_id).unwrap_or("unknown-user");
                Ok(mention(&format!("@{}", label(name, verbatim))))
            }
            Element::Channel { channel_id } => {
                Ok(mention(&label(&self.channel_label(channel_id), verbatim)))
            }
            Element::Broadcast { range } => {
                let text = if range.is_empty() {
                    "@unknown-broadcast".to_string()
                } else {
                    format!("@{}", range)
                };
                Ok(mention(&label(&text, verbatim)))
            }
            Element::Color { value } => Ok(value.clone()),
            Element::Link { url, text } => {
                let text = text.as_deref().unwrap_or(url);
                Ok(format!("[{}]({})", label(text, verbatim), url))
            }
            Element::RichTextSection { elements } => self.render_children(elements, verbatim),
            Element::RichTextList {
                elements,
                style,
                indent,
                border,
            } => self.render_list(elements, style.as_ref(), *indent, *border, verbatim),
            Element::RichTextQuote { elements, .. } => self.render_quote(elements, verbatim),
            Element::RichTextPreformatted { elements, .. } => self.render_preformatted(elements),
            Element::Unknown => {
                warn!("skipping element of unrecognized kind");
                Ok(String::new())
            }
        }
    }

    fn render_children(&self, elements: &[Element], verbatim: bool) -> Result<String> {
        let mut output = String::new();
        for element in elements {
            output.push_str(&self.render_element_inner(element, verbatim)?);
        }
        Ok(output)
    }

    fn render_text(
        &self,
        text: &str,
        style: Option<&serde_json::Value>,
        verbatim: bool,
    ) -> Result<String> {
        let style = match style {
            Some(raw) => match Style::decode(raw)? {
                Style::Text(style) => style,
                Style::List(_) => {
                    warn!("text element carries a list style; dropping it");
                    return Ok(String::new());
                }
            },
            None => TextStyle::default(),
        };

        // Code-span content stays literal in the generic pass, and fence
        // content is escaped wholesale there. Everywhere else the raw text
        // must be escaped here, so user content can never read as raw
        // markup and in particular never matches the mention sentinels.
        if verbatim || style.code {
            Ok(apply_text_style(text, &style))
        } else {
            Ok(apply_text_style(&escape_raw_text(text), &style))
        }
    }

    fn render_list(
        &self,
        elements: &[Element],
        style: Option<&serde_json::Value>,
        indent: u32,
        border: u32,
        verbatim: bool,
    ) -> Result<String> {
        let style = match style {
            Some(raw) => match Style::decode(raw)? {
                Style::List(style) => style,
                Style::Text(_) => {
                    warn!("list element carries a text style; dropping it");
                    return Ok(String::new());
                }
            },
            None => {
                warn!("list element has no style; dropping it");
                return Ok(String::new());
            }
        };

        let indent = " ".repeat(3 * indent as usize);
        let border_prefix = if border > 0 {
            format!("{} ", ">".repeat(border as usize))
        } else {
            String::new()
        };

        let mut output = String::new();
        for (index, item) in elements.iter().enumerate() {
            let marker = match style {
                ListStyle::Ordered => format!("{}. ", index + 1),
                ListStyle::Bullet => "- ".to_string(),
            };
            output.push_str(&indent);
            output.push_str(&border_prefix);
            output.push_str(&marker);
            output.push_str(&self.render_element_inner(item, verbatim)?);
            output.push('\n');
            // Keep adjacent quoted items from merging into one blockquote
            // in the generic pass.
            if border > 0 {
                output.push('\n');
            }
        }
        Ok(output)
    }

    fn render_quote(&self, elements: &[Element], verbatim: bool) -> Result<String> {
        let content = self.render_children(elements, verbatim)?;
        Ok(format!("> {}\n\n", content.replace('\n', "\n> ")))
    }

    fn render_preformatted(&self, elements: &[Element]) -> Result<String> {
        let content = self.render_children(elements, true)?;
        // Both fence delimiters must sit on their own lines, whatever the
        // neighboring elements contribute.
        Ok(format!("\n```\n{}\n```\n", content))
    }

    fn channel_label(&self, channel_id: &str) -> String {
        if channel_id.is_empty() {
            return "#unknown-channel".to_string();
        }
        // An unknown non-empty ID echoes the raw ID rather than a
        // placeholder; empty IDs get the placeholder.
        match self.channels.name(channel_id) {
            Some(name) => format!("#{}", name),
            None => format!("#{}", channel_id),
        }
    }
}

/// Wrap mention text in the sentinel marker pair.
fn mention(label: &str) -> String {
    format!("{}{}{}", MENTION_OPEN, label, MENTION_CLOSE)
}

/// Escape a mention/link label unless it lands in a verbatim region.
fn label(text: &str, verbatim: bool) -> String {
    if verbatim {
        text.to_string()
    } else {
        escape_raw_text(text)
    }
}

/// Escape the characters the generic pass would read as raw markup.
///
/// Escaped user text reaches the second pass as entities, so only
/// renderer-emitted sentinels ever arrive as raw inline spans and a
/// user-typed `<mention>` can never be promoted. `>` is included so user
/// text cannot fabricate quote borders at line starts.
fn escape_raw_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(ch),
        }
    }
    output
}

/// Apply style delimiters to the whitespace-trimmed core of `text`.
///
/// Leading and trailing space runs stay outside every delimiter pair.
/// Delimiters nest in fixed order, bold outermost to code innermost.
fn apply_text_style(text: &str, style: &TextStyle) -> String {
    if !style.has_styling() {
        return text.to_string();
    }

    let stripped = text.trim_start();
    let leading = &text[..text.len() - stripped.len()];
    let core = stripped.trim_end();
    let trailing = &stripped[core.len()..];

    let mut styled = core.to_string();
    if style.code {
        styled = format!("`{}`", styled);
    }
    if style.strike {
        styled = format!("~~{}~~", styled);
    }
    if style.italic {
        styled = format!("*{}*", styled);
    }
    if style.bold {
        styled = format!("**{}**", styled);
    }

    format!("{}{}{}", leading, styled, trailing)
}
