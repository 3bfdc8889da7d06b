// Chunk: docs/chunks/text_commands - Case, sort, dedupe, join and statistics commands

//! Behavior of the text commands on whole documents.

use lite_pad::commands::{
    character_counts, compute_average, deduplicate_lines, invert_case, join_lines, sort_lines,
    to_lowercase, to_uppercase, transform_case,
};
use lite_pad::i18n::Language;
use lite_pad::{Average, CharacterCounts, Collator, LocaleCollator, TextBuffer};
use proptest::prelude::*;

fn buffer_of(lines: &[&str]) -> TextBuffer {
    TextBuffer::from_str(&lines.join("\n"))
}

fn lines_of(buffer: &TextBuffer) -> Vec<String> {
    buffer.lines().collect()
}

proptest! {
    #[test]
    fn case_transform_preserves_length_and_selection(
        text in "[a-zA-ZčćŠ0-9 \n]{0,60}",
        a in 0usize..64,
        c in 0usize..64,
        which in 0u8..3,
    ) {
        let mut buffer = TextBuffer::from_str(&text);
        let len = buffer.len();
        let (anchor, caret) = (a.min(len), c.min(len));
        buffer.select(anchor, caret).unwrap();

        match which {
            0 => to_uppercase(&mut buffer).unwrap(),
            1 => to_lowercase(&mut buffer).unwrap(),
            _ => invert_case(&mut buffer).unwrap(),
        };

        prop_assert_eq!(buffer.len(), len);
        prop_assert_eq!(buffer.anchor(), anchor);
        prop_assert_eq!(buffer.caret(), caret);
    }

    #[test]
    fn sort_is_an_ordered_permutation(lines in prop::collection::vec("[a-cA-C]{0,4}", 1..12)) {
        let collator = LocaleCollator::default();
        let mut buffer = TextBuffer::from_str(&lines.join("\n"));
        buffer.select_all();
        sort_lines(&mut buffer, true, &collator).unwrap();

        let sorted = lines_of(&buffer);
        prop_assert!(sorted.windows(2).all(|w| collator.compare(&w[0], &w[1]).is_le()));
        let mut expected = lines.clone();
        expected.sort();
        let mut actual = sorted.clone();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order(lines in prop::collection::vec("[ab]{0,2}", 1..12)) {
        let mut buffer = TextBuffer::from_str(&lines.join("\n"));
        buffer.select_all();
        deduplicate_lines(&mut buffer).unwrap();

        let mut expected: Vec<String> = Vec::new();
        for line in &lines {
            if !expected.contains(line) {
                expected.push(line.clone());
            }
        }
        prop_assert_eq!(lines_of(&buffer), expected);
    }
}

#[test]
fn test_custom_transform_on_whole_document() {
    let mut buffer = TextBuffer::from_str("abc\ndef");
    buffer.set_caret(5).unwrap();
    transform_case(&mut buffer, |c| if c == 'e' { 'E' } else { c }).unwrap();
    assert_eq!(buffer.text(), "abc\ndEf");
    assert_eq!(buffer.caret(), 5);
}

#[test]
fn test_dedupe_keeps_first_occurrences() {
    let mut buffer = buffer_of(&["b", "a", "b", "c", "a"]);
    buffer.select_all();
    deduplicate_lines(&mut buffer).unwrap();
    assert_eq!(lines_of(&buffer), vec!["b", "a", "c"]);
    assert_eq!(buffer.selected_text().unwrap(), "b\na\nc");
}

#[test]
fn test_sort_case_insensitive_both_directions() {
    let collator = LocaleCollator::new(Language::En);

    let mut buffer = buffer_of(&["banana", "Apple", "cherry"]);
    buffer.select_all();
    sort_lines(&mut buffer, true, &collator).unwrap();
    let ascending = lines_of(&buffer);
    assert_eq!(ascending, vec!["Apple", "banana", "cherry"]);

    let mut buffer = buffer_of(&["banana", "Apple", "cherry"]);
    buffer.select_all();
    sort_lines(&mut buffer, false, &collator).unwrap();
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(lines_of(&buffer), reversed);
}

#[test]
fn test_join_three_lines() {
    let mut buffer = buffer_of(&["foo", "bar", "baz"]);
    join_lines(&mut buffer);
    assert_eq!(buffer.text(), "foo bar baz");
    assert_eq!(buffer.line_count(), 1);
}

#[test]
fn test_average_of_mixed_tokens() {
    let buffer = TextBuffer::from_str("3 x 5 notanumber 2.5");
    assert_eq!(
        compute_average(&buffer),
        Some(Average {
            mean: 3.5,
            count: 3
        })
    );
}

#[test]
fn test_character_counts() {
    let counts = character_counts(&TextBuffer::from_str("ab cd\n ef"));
    assert_eq!(
        counts,
        CharacterCounts {
            with_spaces: 9,
            without_spaces: 6,
            lines: 2
        }
    );

    // Whitespace runs are stripped entirely, whatever their length.
    let counts = character_counts(&TextBuffer::from_str("ab  cd\n ef"));
    assert_eq!(counts.with_spaces, 10);
    assert_eq!(counts.without_spaces, 6);
}

#[test]
fn test_sort_then_dedupe_on_selected_block() {
    let mut buffer = buffer_of(&["header", "pear", "fig", "pear", "apple", "footer"]);
    let start = buffer.line_start_offset(1).unwrap();
    let end = buffer.line_content_end_offset(4).unwrap();
    buffer.select(start, end).unwrap();

    sort_lines(&mut buffer, true, &LocaleCollator::default()).unwrap();
    deduplicate_lines(&mut buffer).unwrap();

    assert_eq!(lines_of(&buffer), vec!["header", "apple", "fig", "pear", "footer"]);
    assert_eq!(buffer.selected_text().unwrap(), "apple\nfig\npear");
}
