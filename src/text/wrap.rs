//! Word wrapping with a per-line code-point budget.
//!
//! The wrapper is a pure function: it scans the input word by word,
//! accumulating a current line and flushing it when the next word no
//! longer fits. Words longer than the whole budget are hyphen-broken.
//! Embedded newlines force a line boundary regardless of width.
//!
//! Widths are counted in code points (the grid is a per-codepoint
//! surface), but the hyphen-breaker steps by grapheme cluster so a
//! multi-codepoint character is never split down the middle.
//!
//! # Example
//! ```
//! use sash::text::wrap_text;
//!
//! let lines = wrap_text("testing string with \n28 chars\n", 20);
//! assert_eq!(lines, vec!["testing string with", "28 chars"]);
//!
//! let lines = wrap_text("abcdefgh", 5);
//! assert_eq!(lines, vec!["abcd-", "efgh"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Wrap text into lines of at most `limit` code points.
///
/// A word is a maximal run of non-whitespace code points, consumed
/// together with its trailing whitespace. Flushed lines are trimmed of
/// surrounding whitespace; hyphen-broken fragments are emitted as-is.
///
/// `limit` is clamped to a defensive minimum of 1. At a limit of 1
/// hyphenation degrades to one cluster per line with no hyphen marker.
/// The only lines that can exceed the budget are single grapheme
/// clusters wider than the budget itself, which are never split.
pub fn wrap_text(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, limit, &mut lines);
    }
    lines
}

/// Wrap one newline-free segment, appending completed lines.
fn wrap_segment(segment: &str, limit: usize, lines: &mut Vec<String>) {
    let mut rest = segment;
    let mut current = String::new();
    let mut current_len = 0usize;

    while !rest.is_empty() {
        let end = chunk_end(rest);
        let chunk = &rest[..end];
        let chunk_len = chunk.chars().count();

        if current_len + chunk_len <= limit {
            current.push_str(chunk);
            current_len += chunk_len;
        } else {
            if current_len > 0 {
                lines.push(current.trim().to_owned());
                current.clear();
            }
            if chunk_len <= limit {
                current.push_str(chunk);
                current_len = chunk_len;
            } else {
                // A word wider than the whole budget: hyphen-break it.
                // Full-width fragments flush immediately; the remainder
                // becomes the new accumulating line, untrimmed.
                let mut fragments = break_word(chunk, limit);
                let last = fragments.pop().unwrap_or_default();
                lines.append(&mut fragments);
                current_len = last.chars().count();
                current = last;
            }
        }
        rest = &rest[end..];
    }

    if !current.is_empty() {
        lines.push(current.trim().to_owned());
    }
}

/// Byte length of the next word: a maximal non-whitespace run plus its
/// trailing whitespace code point, if any.
fn chunk_end(text: &str) -> usize {
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            return idx + ch.len_utf8();
        }
    }
    text.len()
}

/// Break a single overlong word into fragments.
///
/// Every fragment except the last is filled to the budget with its
/// final position taken by a `-` marker, consuming `limit - 1` code
/// points of the original per fragment; the remainder is returned
/// unmarked. Stepping is by grapheme cluster, so a cluster is either
/// taken whole or pushed to the next fragment.
fn break_word(word: &str, limit: usize) -> Vec<String> {
    if limit <= 1 {
        return word.graphemes(true).map(str::to_owned).collect();
    }

    let mut fragments = Vec::new();
    let mut rest = word;

    while rest.chars().count() > limit {
        let mut taken = 0usize;
        let mut end = 0usize;
        for grapheme in rest.graphemes(true) {
            let len = grapheme.chars().count();
            if taken + len > limit - 1 {
                break;
            }
            taken += len;
            end += grapheme.len();
        }

        if end == 0 {
            // A single cluster wider than the budget: emit it whole.
            let cluster = rest.graphemes(true).next().unwrap_or(rest);
            end = cluster.len();
            fragments.push(rest[..end].to_owned());
        } else {
            let mut fragment = rest[..end].to_owned();
            fragment.push('-');
            fragments.push(fragment);
        }
        rest = &rest[end..];
    }

    fragments.push(rest.to_owned());
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_line_at_spaces() {
        let lines = wrap_text("testing string with \n28 chars\n", 20);
        assert_eq!(lines, vec!["testing string with", "28 chars"]);
    }

    #[test]
    fn test_wrap_long_word() {
        let lines = wrap_text("abcdefgh", 5);
        assert_eq!(lines, vec!["abcd-", "efgh"]);
    }

    #[test]
    fn test_wrap_empty_input() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("\n\n", 10).is_empty());
    }

    #[test]
    fn test_wrap_newline_forces_boundary() {
        let lines = wrap_text("ab\ncd", 20);
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn test_wrap_lines_within_limit() {
        let text = "the quick brown fox jumps over the lazy dog";
        for limit in 1..=12 {
            for line in wrap_text(text, limit) {
                assert!(
                    line.chars().count() <= limit,
                    "line {line:?} exceeds limit {limit}"
                );
            }
        }
    }

    #[test]
    fn test_wrap_stable_under_rewrap() {
        let text = "testing string with 28 chars and a little more text";
        let lines = wrap_text(text, 20);
        let rejoined = lines.join(" ");
        assert_eq!(wrap_text(&rejoined, 20).len(), lines.len());
    }

    #[test]
    fn test_hyphen_fragments_reconstruct_word() {
        let word = "incomprehensibilities";
        let lines = wrap_text(word, 6);
        let rebuilt: String = lines
            .iter()
            .map(|line| line.strip_suffix('-').unwrap_or(line))
            .collect();
        assert_eq!(rebuilt, word);
        for line in &lines {
            assert!(line.chars().count() <= 6);
        }
    }

    #[test]
    fn test_wrap_counts_code_points_not_bytes() {
        // Five two-byte code points fit a limit of five exactly.
        let lines = wrap_text("ééééé", 5);
        assert_eq!(lines, vec!["ééééé"]);

        let lines = wrap_text("日本語のテキスト", 4);
        assert_eq!(lines, vec!["日本語-", "のテキ-", "スト"]);
    }

    #[test]
    fn test_wrap_limit_one_degrades_without_hyphens() {
        let lines = wrap_text("abc", 1);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_wrap_limit_zero_clamped() {
        // Undefined per the contract, but clamped defensively to 1.
        let lines = wrap_text("ab", 0);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_combining_cluster_not_split() {
        // "e" + combining acute is one cluster of two code points; with
        // a budget of 2 the breaker may not place a hyphen inside it.
        let cluster = "e\u{0301}";
        let word = cluster.repeat(3);
        let lines = wrap_text(&word, 2);
        for line in &lines {
            let stripped = line.strip_suffix('-').unwrap_or(line);
            assert_eq!(stripped.chars().count() % 2, 0, "split a cluster: {line:?}");
        }
    }

    #[test]
    fn test_wrap_word_exactly_at_limit() {
        let lines = wrap_text("abcde", 5);
        assert_eq!(lines, vec!["abcde"]);
    }
}
