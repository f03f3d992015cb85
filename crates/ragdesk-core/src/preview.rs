//! Content preview truncation shared by the document table, search
//! results, and chat source rendering.

/// Characters of content shown before truncation kicks in.
pub const PREVIEW_LEN: usize = 100;

/// Truncate `content` for display: the first [`PREVIEW_LEN`] characters
/// followed by an ellipsis when the content is longer, the content
/// unmodified otherwise. Counts characters, not bytes, so multi-byte
/// content never gets split mid-codepoint.
pub fn preview(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(PREVIEW_LEN) {
        Some((byte_end, _)) => format!("{}…", &content[..byte_end]),
        None => content.to_string(),
    }
}
