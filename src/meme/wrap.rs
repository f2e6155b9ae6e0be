//! Greedy word wrapping for the quote body.
//!
//! Pure text-in, text-out: no font metrics, no image state. Width is
//! measured in characters, not pixels; a character limit tuned to the
//! body font keeps the block inside the image for typical inputs.

/// Reflow `text` into lines of at most `width` characters, joined with
/// newlines.
///
/// Greedy: each word goes on the current line if it fits, else starts a
/// new one. Words are never split, so a single word longer than `width`
/// occupies its own line unbroken. Runs of whitespace (including
/// newlines) in the input collapse to single spaces.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_text("Hello world", 25), "Hello world");
    }

    #[test]
    fn lines_stay_within_width() {
        let wrapped = wrap_text(
            "the quick brown fox jumps over the lazy dog again and again",
            25,
        );
        for line in wrapped.lines() {
            assert!(
                line.chars().count() <= 25,
                "line exceeds 25 chars: {line:?}"
            );
        }
        assert!(wrapped.lines().count() > 1);
    }

    #[test]
    fn long_word_is_never_split() {
        let wrapped = wrap_text("a veryverylongsinglewordexceedingtwentyfive chars", 25);
        assert!(wrapped
            .lines()
            .any(|l| l == "veryverylongsinglewordexceedingtwentyfive"));
    }

    #[test]
    fn words_are_kept_whole_at_boundaries() {
        // "aaaa bbbb" at width 8: the second word must move down whole.
        assert_eq!(wrap_text("aaaa bbbb", 8), "aaaa\nbbbb");
        // Exactly fitting stays on one line.
        assert_eq!(wrap_text("aaaa bbb", 8), "aaaa bbb");
    }

    #[test]
    fn interior_whitespace_collapses() {
        assert_eq!(wrap_text("one\n two   three", 25), "one two three");
    }

    #[test]
    fn empty_input_wraps_to_empty() {
        assert_eq!(wrap_text("", 25), "");
        assert_eq!(wrap_text("   ", 25), "");
    }
}
