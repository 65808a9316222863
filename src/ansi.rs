//! Display-width arithmetic for ANSI-laden terminal strings.
//!
//! Everything the redraw engine knows about geometry comes from here: how
//! many terminal cells a string occupies once escape sequences are removed.
//! An incorrect width shows up on screen as stray characters or
//! under-erasure, so these functions are the load-bearing floor of the
//! whole crate.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Remove all CSI escape sequences (`ESC [ <parameter bytes> <letter>`).
///
/// A lone `ESC` not followed by `[` is kept as-is.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // parameter bytes run until the final alphabetic byte
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Visual column width of `s` after stripping escape sequences.
///
/// Narrow glyphs count 1, wide/full-width glyphs count 2, zero-width
/// combining marks count 0.
pub fn display_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Truncate `input` to at most `max` display columns, appending `ellipsis`
/// (counted against the budget) only when the original exceeds the limit.
///
/// `max == 0` disables truncation. The cut operates on the stripped text so
/// an escape sequence can never be split mid-way.
pub fn truncate(input: &str, max: usize, ellipsis: &str) -> String {
    if max == 0 || display_width(input) <= max {
        return input.to_string();
    }
    let budget = max.saturating_sub(display_width(ellipsis));
    let mut out = String::new();
    let mut used = 0;
    for c in strip_ansi(input).chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ellipsis);
    out
}

/// Replace every raw `ESC` byte with the printable `\e`, for debug dumps of
/// assembled frames.
pub fn replace_escapes(input: &str) -> String {
    input.replace('\x1b', "\\e")
}
