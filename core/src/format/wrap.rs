//! Word-aware line wrapping by character count

/// Greedy word wrap.
///
/// Words are whitespace-delimited and packed while
/// `line + 1 + word <= budget`. A word longer than the budget is hard-broken
/// at the budget boundary; its last piece may share a line with what follows.
pub fn wrap(text: &str, budget: usize) -> Vec<String> {
    let budget = budget.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= budget {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len <= budget {
            current.push_str(word);
            current_len = word_len;
            continue;
        }

        let chars: Vec<char> = word.chars().collect();
        let mut pieces = chars.chunks(budget).peekable();
        while let Some(piece) = pieces.next() {
            let piece: String = piece.iter().collect();
            if pieces.peek().is_some() {
                lines.push(piece);
            } else {
                current_len = piece.chars().count();
                current = piece;
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Wrap already-wrapped lines again (joined with single spaces)
pub fn rewrap(lines: &[String], budget: usize) -> Vec<String> {
    wrap(&lines.join(" "), budget)
}

/// Wrap and cap at `max_lines`. When text is cut, the last kept line is
/// shortened to `budget - 3` characters and ends with `...`.
pub fn wrap_capped(text: &str, budget: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap(text, budget);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, budget);
        }
    }
    lines
}

fn with_ellipsis(line: &str, budget: usize) -> String {
    let kept: String = line.chars().take(budget.max(3) - 3).collect();
    format!("{}...", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_packs_words() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            ["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_exact_fit() {
        assert_eq!(wrap("abcd efghi", 10), ["abcd efghi"]);
        assert_eq!(wrap("abcd efghij", 10), ["abcd", "efghij"]);
    }

    #[test]
    fn test_wrap_hard_breaks_long_word() {
        assert_eq!(wrap("ab Donaudampfschiff x", 6), ["ab", "Donaud", "ampfsc", "hiff x"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap("Ö1 Ö1 Ö1", 5), ["Ö1 Ö1", "Ö1"]);
    }

    #[test]
    fn test_wrap_empty_and_whitespace() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap(" \n\t ", 10).is_empty());
    }

    #[test]
    fn test_wrap_capped_scenario() {
        // 120 characters of prose into 34-column lines
        let text = "Today we look at the long history of Viennese coffee houses and \
                    the writers who treated them as their second living room";
        assert_eq!(text.chars().count(), 120);

        let lines = wrap_capped(text, 34, 3);
        assert_eq!(lines.len(), 3);
        let last = &lines[2];
        assert!(last.ends_with("..."));
        assert!(last.chars().count() <= 34);
        assert!(lines.iter().all(|l| l.chars().count() <= 34));
    }

    #[test]
    fn test_wrap_capped_short_text_untouched() {
        assert_eq!(wrap_capped("short text", 34, 3), ["short text"]);
    }

    proptest! {
        #[test]
        fn lines_never_exceed_budget(text in "[a-zA-Z ]{0,200}", budget in 1usize..40) {
            for line in wrap(&text, budget) {
                prop_assert!(line.chars().count() <= budget);
                prop_assert!(!line.is_empty());
            }
        }

        #[test]
        fn rewrap_is_idempotent(text in "[a-zA-Z]{1,15}( [a-zA-Z]{1,15}){0,20}", budget in 1usize..40) {
            let once = wrap(&text, budget);
            prop_assert_eq!(rewrap(&once, budget), once);
        }

        #[test]
        fn wrapping_keeps_every_character(text in "[a-z ]{0,120}", budget in 1usize..40) {
            let squeezed: String = text.split_whitespace().collect();
            let rejoined: String = wrap(&text, budget).concat().split_whitespace().collect();
            prop_assert_eq!(rejoined, squeezed);
        }

        #[test]
        fn capped_output_respects_limits(text in "[a-z ]{0,300}", budget in 4usize..40) {
            let lines = wrap_capped(&text, budget, 3);
            prop_assert!(lines.len() <= 3);
            for line in &lines {
                prop_assert!(line.chars().count() <= budget);
            }
        }
    }
}
