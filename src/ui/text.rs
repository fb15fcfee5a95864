//! Column-based text fitting. Widths are counted in chars.

const ELLIPSIS: char = '…';

/// Cut `text` to `width` columns, ending in an ellipsis when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Left-align `text` in exactly `width` columns.
pub fn pad(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let fill = width.saturating_sub(fitted.chars().count());
    format!("{}{}", fitted, " ".repeat(fill))
}

/// Center `text` in exactly `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let free = width.saturating_sub(fitted.chars().count());
    let left = free / 2;
    format!("{}{}{}", " ".repeat(left), fitted, " ".repeat(free - left))
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns.
/// When text remains after the last line, that line ends in an ellipsis.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut overflow = false;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let needed = if current_len == 0 {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if needed <= width {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
            continue;
        }
        if current_len > 0 {
            if lines.len() + 1 == max_lines {
                overflow = true;
                break;
            }
            lines.push(std::mem::take(&mut current));
        }
        current = truncate(word, width);
        current_len = current.chars().count();
    }

    if overflow {
        lines.push(with_ellipsis(&current, width));
    } else if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn with_ellipsis(line: &str, width: usize) -> String {
    if line.chars().count() < width {
        format!("{}{}", line, ELLIPSIS)
    } else {
        let mut out: String = line.chars().take(width.saturating_sub(1)).collect();
        out.push(ELLIPSIS);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_adds_ellipsis_only_when_cut() {
        assert_eq!(truncate("movie", 5), "movie");
        assert_eq!(truncate("movies", 5), "movi…");
        assert_eq!(truncate("movies", 0), "");
    }

    #[test]
    fn pad_and_center_fill_exact_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("abcdef", 3), "ab…");
    }

    #[test]
    fn wrap_fits_words_per_line() {
        assert_eq!(
            wrap("the quick brown fox", 9, 4),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn wrap_ellipsizes_last_allowed_line() {
        assert_eq!(
            wrap("the quick brown fox jumps", 9, 2),
            vec!["the quick", "brown fo…"]
        );
        assert_eq!(wrap("one two three", 8, 1), vec!["one two…"]);
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap("", 10, 4).is_empty());
        assert!(wrap("   ", 10, 4).is_empty());
    }
}
