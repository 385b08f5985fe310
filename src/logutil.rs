//! Player input goes into log lines verbatim, so it is flattened here first.

/// Characters of player text kept in one log line.
const MAX_PREVIEW: usize = 120;

/// Render `s` so it fits on one log line.
///
/// Line breaks, tabs and backslashes get their usual escapes, any other
/// control character is shown as `\xNN`. Text longer than [`MAX_PREVIEW`]
/// characters ends in `…`.
pub fn escape_log(s: &str) -> String {
    let mut chars = s.chars();
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    for ch in chars.by_ref().take(MAX_PREVIEW) {
        push_escaped(&mut out, ch);
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}

fn push_escaped(out: &mut String, ch: char) {
    use std::fmt::Write;

    match ch {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if c.is_control() => {
            let _ = write!(out, "\\x{:02X}", c as u32);
        }
        c => out.push(c),
    }
}
