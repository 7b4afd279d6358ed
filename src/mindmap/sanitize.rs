//! Node label sanitizing

/// Longest label kept before truncation, in characters
pub const MAX_LABEL_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// Normalize `text` into a node label
///
/// Whitespace runs collapse to one space, the result is trimmed and cut
/// to 100 characters; an ellipsis marks a cut.
pub fn sanitize_label(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    match collapsed.char_indices().nth(MAX_LABEL_CHARS) {
        Some((cut, _)) => format!("{}{}", &collapsed[..cut], ELLIPSIS),
        None => collapsed,
    }
}
