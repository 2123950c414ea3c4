// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for double-quote escaping.

use super::escape;
use proptest::prelude::*;

/// Resolve one layer of bash double-quote processing: `\\` becomes `\`,
/// `\"` becomes `"`, everything else passes through.
fn resolve_one_layer(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' && matches!(chars.peek(), Some('\\' | '"')) {
            out.push(chars.next().unwrap());
        } else {
            out.push(c);
        }
    }
    out
}

#[yare::parameterized(
    plain = { "echo hi", "echo hi" },
    quote = { r#"say "hi""#, r#"say \"hi\""# },
    backslash = { r"a\b", r"a\\b" },
    backslash_then_quote = { r#"\""#, r#"\\\""# },
    trailing_backslash = { r"tail\", r"tail\\" },
    empty = { "", "" },
)]
fn escape_cases(input: &str, expected: &str) {
    assert_eq!(escape(input), expected);
}

#[test]
fn double_escape_survives_two_layers() {
    let original = r#"grep "x\y""#;
    let nested = escape(&escape(original));
    assert_eq!(resolve_one_layer(&resolve_one_layer(&nested)), original);
}

proptest! {
    /// Escaping then resolving one echo-pipe layer reproduces the input.
    #[test]
    fn round_trip_law(s in ".*") {
        prop_assert_eq!(resolve_one_layer(&escape(&s)), s);
    }

    /// Quotes stay literal at depth two as well.
    #[test]
    fn nested_round_trip_law(s in r#"[a-z"\\ ;|$]*"#) {
        let nested = escape(&escape(&s));
        prop_assert_eq!(resolve_one_layer(&resolve_one_layer(&nested)), s);
    }
}
