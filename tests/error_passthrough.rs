//! Integration tests for the failure pass-through contract.
//!
//! Whenever a line is written, the `err =` forms must hand back exactly the
//! failure value they were given, so a logging call can stand in for an
//! inline error return.

mod common;

use std::io;

use common::Capture;
use stylog::{Style, log, logf};

fn offline() -> io::Error {
    io::Error::new(io::ErrorKind::ConnectionReset, "cache offline")
}

#[test]
fn failure_is_printed_and_returned() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    let returned = log!(Style::Plain, err = Some(offline()));

    assert_eq!(capture.contents(), "cache offline\n");
    let returned = returned.expect("failure passes through");
    assert_eq!(returned.kind(), io::ErrorKind::ConnectionReset);
    assert_eq!(returned.to_string(), "cache offline");
}

#[test]
fn trailing_values_follow_the_failure() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    let returned = log!(Style::Plain, err = Some(offline()), "while syncing", 3);

    assert_eq!(capture.contents(), "cache offline while syncing 3\n");
    assert!(returned.is_some());
}

#[test]
fn template_receives_the_failure_first() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    let returned = logf!(
        Style::Plain,
        err = Some(offline()),
        "{}: giving up after {} attempts",
        5,
    );

    assert_eq!(capture.contents(), "cache offline: giving up after 5 attempts\n");
    assert!(returned.is_some());
}

#[test]
fn prefixed_styles_keep_the_pass_through() {
    let _guard = common::exclusive();
    let capture = Capture::install();

    let returned = log!(Style::Func, err = Some(offline()));

    assert_eq!(
        capture.contents(),
        "error_passthrough::prefixed_styles_keep_the_pass_through() cache offline\n"
    );
    assert!(returned.is_some());
}
