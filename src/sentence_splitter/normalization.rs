// WHY: standalone text normalization so the splitter only ever sees single-line, lower-cased input
// Kept apart from boundary detection so callers can split pre-normalized text directly

/// Normalize raw text before sentence splitting
/// Every `\n` becomes one space and the whole string is lower-cased.
/// A `\r\n` pair keeps its `\r`; only the newline itself is replaced.
pub fn normalize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_text_into(text, &mut result);
    result
}

/// Normalize text into supplied buffer, replacing its previous contents
pub fn normalize_text_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            buffer.push(' ');
        }
        buffer.push_str(line);
    }

    // WHY: str::to_lowercase handles context-sensitive mappings (final sigma) that per-char lowering misses
    if !buffer.is_ascii() || buffer.bytes().any(|b| b.is_ascii_uppercase()) {
        let lowered = buffer.to_lowercase();
        buffer.clear();
        buffer.push_str(&lowered);
    }
}
