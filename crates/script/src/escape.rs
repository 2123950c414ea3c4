// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting-safe escaping for text embedded in double-quoted `echo`
//! arguments.

/// Escape `text` for embedding inside a double-quoted shell string.
///
/// Backslashes must be doubled before quotes are escaped: each layer of
/// pipe resolution halves the backslash count, so doubling first keeps
/// every quote literal at arbitrary nesting depth. Resolving one
/// `echo`-pipe layer of the result reproduces `text` exactly.
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
