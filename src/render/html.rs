//! Pass 2: generic markdown transform with a mention hook.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use super::{MENTION_CLOSE, MENTION_OPEN};

/// Opening tag emitted for a promoted mention span.
const MENTION_SPAN_OPEN: &str = "<span class=\"mention\">";
const MENTION_SPAN_CLOSE: &str = "</span>";

/// Transform pass-1 markup into an HTML fragment.
///
/// The generic transform handles emphasis, lists, quotes, fences and links;
/// strikethrough is enabled as an extension. Three event categories are
/// interposed:
///
/// - links open in a new viewing context,
/// - raw inline spans matching the mention sentinels become mention span
///   tags; any other raw inline markup is escaped and emitted as-is,
/// - raw block markup is escaped and passed through with one blank line
///   on each side.
///
/// Sentinels inside fenced regions arrive as plain code text, so they are
/// escaped rather than promoted.
pub fn markup_to_html(markup: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markup, options);

    let mut output = String::new();
    // Raw block markup spans several events; collect it so the whole
    // block gets exactly one blank line on each side.
    let mut raw_block: Option<String> = None;
    for event in parser {
        if raw_block.is_some() {
            match event {
                Event::Html(raw) => {
                    if let Some(buffer) = raw_block.as_mut() {
                        buffer.push_str(&raw);
                    }
                }
                Event::End(TagEnd::HtmlBlock) => {
                    if let Some(buffer) = raw_block.take() {
                        output.push_str("\n\n");
                        output.push_str(html_escape(&buffer).trim_end());
                        output.push_str("\n\n");
                    }
                }
                _ => {}
            }
            continue;
        }
        match event {
            Event::Start(Tag::HtmlBlock) => raw_block = Some(String::new()),
            Event::Start(Tag::Link { dest_url, .. }) => {
                output.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
                    html_escape(&dest_url)
                ));
            }
            Event::End(TagEnd::Link) => output.push_str("</a>"),
            Event::InlineHtml(raw) => {
                if raw.as_ref() == MENTION_OPEN {
                    output.push_str(MENTION_SPAN_OPEN);
                } else if raw.as_ref() == MENTION_CLOSE {
                    output.push_str(MENTION_SPAN_CLOSE);
                } else {
                    output.push_str(&html_escape(&raw));
                }
            }
            // Raw block events normally arrive wrapped in HtmlBlock tags
            // and are handled above; a stray one still gets escaped.
            Event::Html(raw) => {
                output.push_str("\n\n");
                output.push_str(html_escape(&raw).trim_end());
                output.push_str("\n\n");
            }
            other => html::push_html(&mut output, std::iter::once(other)),
        }
    }
    output
}

/// Escape a string for safe embedding in HTML text or attribute position.
pub(crate) fn html_escape(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(ch),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_and_strikethrough() {
        let html = markup_to_html("**bold** and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_mention_sentinels_become_spans() {
        let html = markup_to_html("hi <mention>@alice</mention>!");
        assert!(html.contains("<span class=\"mention\">@alice</span>"));
    }

    #[test]
    fn test_stray_inline_markup_is_escaped() {
        let html = markup_to_html("a <b>bold</b> move");
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_links_open_in_new_context() {
        let html = markup_to_html("[docs](https://example.com)");
        assert!(html.contains(
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a>"
        ));
    }

    #[test]
    fn test_ordered_list() {
        let html = markup_to_html("1. a\n2. b\n");
        assert!(html.contains("<ol>"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_quoted_list_items_stay_separate() {
        let html = markup_to_html("> 1. a\n\n> 2. b\n\n");
        assert_eq!(html.matches("<blockquote>").count(), 2);
    }

    #[test]
    fn test_sentinel_not_promoted_inside_fence() {
        let html = markup_to_html("```\n<mention>@alice</mention>\n```");
        assert!(html.contains("<pre><code>"));
        assert!(html.contains("&lt;mention&gt;@alice&lt;/mention&gt;"));
        assert!(!html.contains("<span class=\"mention\">"));
    }

    #[test]
    fn test_raw_block_is_escaped() {
        let html = markup_to_html("<div>\nblock\n</div>");
        assert!(!html.contains("<div>"));
        // The whole escaped block is wrapped in exactly one blank line on
        // each side.
        assert!(html.contains("\n\n&lt;div&gt;\nblock\n&lt;/div&gt;\n\n"));
    }

    #[test]
    fn test_raw_block_between_paragraphs_keeps_blank_lines() {
        let html = markup_to_html("before\n\n<hr/>\n\nafter");
        assert!(html.contains("<p>before</p>"));
        assert!(html.contains("\n\n&lt;hr/&gt;\n\n"));
        assert!(html.contains("<p>after</p>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(markup_to_html(""), "");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
