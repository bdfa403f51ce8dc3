//! Text cleanup shared by every extracted field.

/// Replace control characters with spaces, collapse whitespace runs to a
/// single space, and trim. Idempotent.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        let ch = if ch.is_control() { ' ' } else { ch };
        if ch.is_whitespace() {
            pending_space = true;
        } else {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        }
    }
    out
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Take at most `max` chars, never splitting a multi-byte character.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

// ── Tests ──
