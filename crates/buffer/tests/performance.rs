// Chunk: docs/chunks/text_buffer - Gap buffer backing store for documents

//! Performance sanity checks for the text buffer.
//!
//! Not benchmarks: the bounds are loose enough for unoptimized test builds and
//! only catch accidental quadratic behavior.

use lite_pad_buffer::TextBuffer;
use std::time::{Duration, Instant};

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("Line number {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn typing_20k_chars_is_fast() {
    let mut buffer = TextBuffer::new();
    let start = Instant::now();

    for i in 0..20_000 {
        buffer.insert_str(if i % 80 == 79 { "\n" } else { "x" });
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_secs(2),
        "Typing 20K characters took {:?}",
        elapsed
    );
    assert!(buffer.line_count() > 200);
}

#[test]
fn line_access_performance() {
    let buffer = TextBuffer::from_str(&numbered_lines(2_000));
    let start = Instant::now();

    for _ in 0..20 {
        for line in buffer.lines() {
            assert!(line.starts_with("Line"));
        }
    }

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_secs(1),
        "Reading {} lines 20 times took {:?}",
        buffer.line_count(),
        elapsed
    );
}

#[test]
fn replacing_a_large_block_is_fast() {
    let mut buffer = TextBuffer::from_str(&numbered_lines(10_000));
    let start = Instant::now();

    let block_end = buffer.line_content_end_offset(9_999).unwrap();
    let replacement = numbered_lines(5_000);
    buffer.replace_range(0, block_end, &replacement).unwrap();

    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_secs(1),
        "Replacing a 10K-line block took {:?}",
        elapsed
    );
    assert_eq!(buffer.line_count(), 5_000);
}
