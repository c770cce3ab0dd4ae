/// Wraps `text` into lines of at most `width` characters.
///
/// Words are separated by any run of whitespace and joined back with a single
/// space. A word longer than `width` first fills whatever room is left on the
/// current line, then is split into `width`-sized pieces. Width is counted in
/// characters, not rendered size.
///
/// The result always holds at least one line: empty or whitespace-only input
/// yields a single empty line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let gap = usize::from(line_len > 0);

        if line_len + gap + word_len <= width {
            if gap == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_len += gap + word_len;
            continue;
        }

        if word_len <= width {
            lines.push(core::mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
            continue;
        }

        let mut rest = word.chars().peekable();
        let room = width.saturating_sub(line_len + gap);
        if line_len > 0 && room > 0 {
            line.push(' ');
            line.extend(rest.by_ref().take(room));
        }
        if line_len > 0 {
            lines.push(core::mem::take(&mut line));
        }

        line_len = 0;
        while rest.peek().is_some() {
            let piece = rest.by_ref().take(width).collect::<String>();
            line_len = piece.chars().count();
            if line_len == width && rest.peek().is_some() {
                lines.push(piece);
                line_len = 0;
            } else {
                line = piece;
            }
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Pads every column with empty lines until all match the longest one.
///
/// Content is never truncated or reordered; only blank lines are appended.
pub fn pad_columns<const N: usize>(mut columns: [Vec<String>; N]) -> [Vec<String>; N] {
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    for column in &mut columns {
        column.resize(rows, String::new());
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        for width in [1, 10, 22, 45] {
            assert_eq!(wrap("", width), vec![String::new()]);
            assert_eq!(wrap("   \t\n", width), vec![String::new()]);
        }
    }

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("Acme Trading", 45), vec!["Acme Trading"]);
    }

    #[test]
    fn breaks_at_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn exact_fit_stays_on_line() {
        assert_eq!(wrap("abcde fghij", 11), vec!["abcde fghij"]);
        assert_eq!(wrap("abcde fghij", 10), vec!["abcde", "fghij"]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(wrap("  a \t b\n\nc  ", 45), vec!["a b c"]);
    }

    #[test]
    fn long_word_is_split_hard() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("abcdefgh", 4), vec!["abcd", "efgh"]);
    }

    #[test]
    fn long_word_fills_remaining_room_first() {
        assert_eq!(wrap("ab cdefghij", 5), vec!["ab cd", "efghi", "j"]);
        assert_eq!(wrap("abcd efghijkl", 4), vec!["abcd", "efgh", "ijkl"]);
    }

    #[test]
    fn text_after_long_word_continues_its_last_piece() {
        assert_eq!(wrap("abcdefg hi", 5), vec!["abcde", "fg hi"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(wrap("héllo wörld", 5), vec!["héllo", "wörld"]);
    }

    #[test]
    fn lines_never_exceed_width_and_lose_nothing() {
        let text = "Acme Trading Co, 123 Long Street Name That Exceeds Forty Five \
                    Characters In Total Length";
        for width in [10, 15, 22, 45] {
            let lines = wrap(text, width);
            assert!(lines.iter().all(|l| l.chars().count() <= width));
            assert_eq!(lines.join(" "), normalized(text));
        }
    }

    #[test]
    fn padding_appends_only_blank_lines() {
        let columns = [
            wrap("PKG-001 CONTAINER MSKU1234567", 22),
            wrap("10 cartons", 15),
            wrap("cotton shirts, assorted sizes, packed flat in boxes", 22),
            wrap("", 10),
        ];
        let before = columns.clone();
        let padded = pad_columns(columns);

        let rows = before.iter().map(Vec::len).max().unwrap();
        for (original, column) in before.iter().zip(&padded) {
            assert_eq!(column.len(), rows);
            assert_eq!(&column[..original.len()], original.as_slice());
            assert!(column[original.len()..].iter().all(String::is_empty));
        }
    }

    #[test]
    fn padding_equal_columns_is_identity() {
        let columns = [vec!["a".to_owned()], vec!["b".to_owned()]];
        assert_eq!(pad_columns(columns.clone()), columns);
    }
}
