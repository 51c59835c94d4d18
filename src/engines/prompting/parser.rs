//! Extraction of tagged fields from raw model output.
//!
//! Both scanners are total: a missing or malformed tag yields an empty result
//! instead of an error, and the evolution loop lets selection weed out the
//! instruction sets that keep producing such output.

use crate::engines::generation::genome::InstructionSet;

const LI_OPEN: &str = "<li>";
const LI_CLOSE: &str = "</li>";

/// Collect every `<li>...</li>` item in document order.
///
/// An opened item with no close tag before the next `<li>` is dropped.
pub fn parse_instruction_list(text: &str) -> InstructionSet {
    text.split(LI_OPEN)
        .skip(1)
        .filter_map(|part| part.find(LI_CLOSE).map(|end| part[..end].trim().to_string()))
        .collect()
}

/// Trimmed body of the first `<tag>` in `text`.
///
/// Returns an empty string when the open tag is absent. Without a matching
/// close tag the rest of the text after the open tag is returned.
pub fn parse_tagged(text: &str, tag: &str) -> String {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let Some(start) = text.find(&open) else {
        return String::new();
    };
    let body = &text[start + open.len()..];
    // Text after a later <tag> is not part of this field
    let body = body.split(open.as_str()).next().unwrap_or(body);
    let body = body.split(close.as_str()).next().unwrap_or(body);
    body.trim().to_string()
}
