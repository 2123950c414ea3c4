// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for compile error display and accessors.

use super::CompileError;

#[test]
fn indentation_jump_display() {
    let err = CompileError::IndentationJump { line: 3, from: 0, to: 2 };
    assert_eq!(err.to_string(), "line 3: indentation jumped from level 0 to level 2");
    assert_eq!(err.line(), 3);
}

#[test]
fn dangling_indent_display() {
    let err = CompileError::DanglingIndent { line: 1 };
    assert_eq!(err.to_string(), "line 1: indented line has no command above it to pipe into");
    assert_eq!(err.line(), 1);
}
