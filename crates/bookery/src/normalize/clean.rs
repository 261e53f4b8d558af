//! Per-field text cleanup

/// Clean one raw field value: normalize typographic quotes to their plain
/// ASCII forms and strip surrounding whitespace.
///
/// Applied to every textual value before any type-specific handling. Byte
/// decoding happens earlier, at the CSV boundary.
pub fn clean_field(raw: &str) -> String {
    raw.replace('\u{201C}', "\"") // left double quote
        .replace('\u{201D}', "\"") // right double quote
        .replace('\u{2019}', "'") // right single quote (apostrophe)
        .trim()
        .to_string()
}
