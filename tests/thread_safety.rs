//! Thread safety tests for console_tables.
//!
//! This module verifies:
//! 1. All public types are Send + Sync (compile-time verification)
//! 2. The global width cache works correctly under concurrent access
//! 3. Independent tables render in parallel without interference

use console_tables::prelude::*;
use console_tables::table::{CellLines, WidthNegotiator};
use std::sync::Arc;
use std::thread;

// ============================================================================
// COMPILE-TIME SEND + SYNC VERIFICATION
// ============================================================================

/// Helper function to verify a type is Send + Sync at compile time.
fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_style_types_are_send_sync() {
    assert_send_sync::<Color>();
    assert_send_sync::<Style>();
    assert_send_sync::<Segment>();
}

#[test]
fn test_text_types_are_send_sync() {
    assert_send_sync::<MultilineText>();
    assert_send_sync::<HorizontalAlignment>();
    assert_send_sync::<OverflowBehavior>();
}

#[test]
fn test_border_types_are_send_sync() {
    assert_send_sync::<BorderTemplate>();
    assert_send_sync::<BorderSides>();
    assert_send_sync::<TemplateError>();
}

#[test]
fn test_table_types_are_send_sync() {
    assert_send_sync::<Table>();
    assert_send_sync::<Row>();
    assert_send_sync::<Column>();
    assert_send_sync::<Cell>();
    assert_send_sync::<Padding>();
    assert_send_sync::<ColumnSpan>();
    assert_send_sync::<WidthNegotiator>();
    assert_send_sync::<CellLines<'static>>();
    assert_send_sync::<TableRenderer<'static>>();
}

#[test]
fn test_sinks_are_send_sync() {
    assert_send_sync::<SegmentSink>();
    assert_send_sync::<ConsoleSink<Vec<u8>>>();
    assert_send_sync::<RenderError>();
}

// ============================================================================
// CONCURRENT CACHE ACCESS TESTS
// ============================================================================

#[test]
fn test_concurrent_cell_len_calculation() {
    use console_tables::cells::cell_len;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                for _ in 0..500 {
                    assert_eq!(cell_len("Hello, World!"), 13);
                    assert_eq!(cell_len(&format!("Thread {i} testing")), 16);
                    // Wide characters (CJK)
                    assert_eq!(cell_len("\u{4e2d}\u{6587}\u{4e2d}\u{6587}"), 8);
                    assert_eq!(cell_len(""), 0);
                }
            })
        })
        .collect();

    // All threads should complete without panic
    for handle in handles {
        handle
            .join()
            .expect("Thread panicked during concurrent cell_len calculation");
    }
}

#[test]
fn test_concurrent_template_parsing() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                for _ in 0..200 {
                    let template: BorderTemplate = "+-+|+-+|+++++|-".parse().unwrap();
                    assert_eq!(template, ASCII);
                    assert!(BorderTemplate::parse("short").is_err());
                }
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("Thread panicked during concurrent template parsing");
    }
}

// ============================================================================
// CONCURRENT RENDERING TESTS
// ============================================================================

#[test]
fn test_concurrent_table_rendering() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                for n in 0..50 {
                    let table = Table::new()
                        .border_template(SINGLE)
                        .set_headers(["thread", "iteration"])
                        .with_row(Row::from_texts([i.to_string(), n.to_string()]));
                    let output = table.render_plain();
                    assert!(output.contains(&format!("│ {i}      │")), "{output}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("Thread panicked during concurrent table rendering");
    }
}

#[test]
fn test_shared_table_renders_from_many_threads() {
    let table = Arc::new(
        Table::from_records(["a", "b"], [["1", "2"], ["3", "4"]])
            .title("shared")
            .max_width(20),
    );
    let expected = table.render_plain();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for _ in 0..50 {
                    let mut sink = SegmentSink::new();
                    let mut renderer = table.renderer();
                    while renderer.render_next_line(&mut sink).unwrap() {}
                    assert_eq!(sink.to_plain(), table.render_plain());
                }
                table.render_plain()
            })
        })
        .collect();

    for handle in handles {
        let output = handle
            .join()
            .expect("Thread panicked during shared table rendering");
        assert_eq!(output, expected);
    }
}

#[test]
fn test_scoped_renderers_borrow_one_table() {
    let table = Table::from_records(["n"], [["1"], ["2"], ["3"]]);
    thread::scope(|scope| {
        let first = scope.spawn(|| table.renderer().count());
        let second = scope.spawn(|| table.renderer().count());
        assert_eq!(first.join().unwrap(), 7);
        assert_eq!(second.join().unwrap(), 7);
    });
}
