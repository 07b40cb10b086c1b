//! Attached file rendering.

use crate::model::{File, FileMode};

use super::html::html_escape;

/// Render a message's file list to link/image markup.
///
/// Files hidden by the storage limit and deleted stubs are skipped. Hosted
/// images render as an anchor wrapping an image tag, opening in a new
/// viewing context; everything else renders as a plain anchor labeled with
/// the file name. If no file survives, the container is omitted entirely
/// and the result is the empty string.
pub fn render_attachments(files: &[File]) -> String {
    let mut items = String::new();
    for file in files {
        match file.mode {
            FileMode::HiddenByLimit | FileMode::Tombstone => continue,
            _ if file.is_image() => {
                let url = html_escape(&file.url_private);
                items.push_str(&format!(
                    "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\"><img src=\"{url}\" alt=\"{alt}\"/></a>",
                    url = url,
                    alt = html_escape(&file.name),
                ));
            }
            _ => {
                items.push_str(&format!(
                    "<a href=\"{}\">{}</a>",
                    html_escape(&file.url_private),
                    html_escape(&file.name),
                ));
            }
        }
    }

    if items.is_empty() {
        String::new()
    } else {
        format!("<div class=\"attachments\">{}</div>", items)
    }
}
