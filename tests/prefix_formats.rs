//! Integration tests for prefix rendering in each emitting style.
//!
//! Coverage:
//! 1. `Plain` writes the bare payload, space-separated, newline-terminated.
//! 2. `FileLine` prefixes the caller's path and line.
//! 3. `Func` prefixes the caller's qualified function path, including from
//!    inside closures.

mod common;

use common::Capture;
use stylog::{Style, log, logf};

#[test]
fn plain_joins_values_with_spaces() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    log!(Style::Plain, "hello", "world");

    assert_eq!(capture.contents(), "hello world\n");
}

#[test]
fn plain_renders_format_templates() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    logf!(Style::Plain, "{} items", 3);

    assert_eq!(capture.contents(), "3 items\n");
}

#[test]
fn plain_accepts_heterogeneous_values() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    log!(Style::Plain, "tick", 3, true);

    assert_eq!(capture.contents(), "tick 3 true\n");
}

#[test]
fn file_line_prefixes_path_and_line() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    let expected_line = line!() + 1;
    log!(Style::FileLine, "marker");

    assert_eq!(
        capture.contents(),
        format!("tests/prefix_formats.rs:{expected_line}: marker\n")
    );
}

#[test]
fn file_line_applies_to_format_templates_too() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    let expected_line = line!() + 1;
    logf!(Style::FileLine, "retry {}", 2);

    assert_eq!(
        capture.contents(),
        format!("tests/prefix_formats.rs:{expected_line}: retry 2\n")
    );
}

#[test]
fn func_prefixes_the_qualified_function_path() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    log!(Style::Func, "marker");

    assert_eq!(
        capture.contents(),
        "prefix_formats::func_prefixes_the_qualified_function_path() marker\n"
    );
}

#[test]
fn func_inside_a_closure_names_the_host_function() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    let emit = || log!(Style::Func, "marker");
    emit();

    assert_eq!(
        capture.contents(),
        "prefix_formats::func_inside_a_closure_names_the_host_function() marker\n"
    );
}
