// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for leveled-script compilation.

use thiserror::Error;

/// Errors that can occur while compiling a leveled script.
///
/// Compilation is all-or-nothing: any error aborts the compile with no
/// partial command list, so a malformed script can never be executed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Indentation stepped more than one level deeper in a single line.
    #[error("line {line}: indentation jumped from level {from} to level {to}")]
    IndentationJump {
        /// 1-based source line number.
        line: usize,
        /// Open nesting depth before the offending line.
        from: usize,
        /// Level the offending line asked for.
        to: usize,
    },

    /// A line was indented but no command above it can receive its input.
    #[error("line {line}: indented line has no command above it to pipe into")]
    DanglingIndent {
        /// 1-based source line number.
        line: usize,
    },
}

impl CompileError {
    /// Get the source line number associated with this error.
    pub fn line(&self) -> usize {
        match self {
            Self::IndentationJump { line, .. } => *line,
            Self::DanglingIndent { line } => *line,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
