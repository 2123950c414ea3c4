// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The level compiler: turns leveled lines into flat shell commands.
//!
//! Indentation encodes "this block's output becomes that command's
//! input". Deeper blocks must resolve before shallower ones, so a stack
//! with fold-on-dedent compiles in a single pass, linear in script
//! length, with no backtracking.

use crate::error::CompileError;
use crate::escape::escape;

/// One indentation group. Levels are counted in fixed 4-space units.
const INDENT: &str = "    ";

/// Ordered list of flat shell commands produced by [`compile`].
///
/// Top-level commands and resolved nested pipelines appear in source
/// order. Immutable once compilation returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    pub commands: Vec<String>,
}

/// A command awaiting the lines that will be piped into it.
///
/// Exists only while its nesting level is open; folded into its parent
/// scope on dedent.
#[derive(Debug)]
struct Frame {
    command: String,
    stdin: Vec<String>,
}

/// Compile a leveled script into an ordered list of shell commands.
///
/// Fails with [`CompileError::IndentationJump`] when a line indents more
/// than one level deeper than the currently open depth, and with
/// [`CompileError::DanglingIndent`] when a line indents below a scope
/// that holds no command to receive its input. On error no partial
/// result is returned.
pub fn compile(script: &str) -> Result<Compiled, CompileError> {
    let mut compiler = Compiler { commands: Vec::new(), stack: Vec::new() };

    // The synthetic trailing `exit` guarantees the generated shell
    // terminates and forces every still-open frame back down to level 0.
    for (idx, line) in script.lines().chain(std::iter::once("exit")).enumerate() {
        compiler.line(idx + 1, line)?;
    }
    compiler.drain();

    Ok(Compiled { commands: compiler.commands })
}

struct Compiler {
    /// Finished commands, append-only.
    commands: Vec<String>,
    /// Open frames; invariant: `stack.len()` equals the open level after
    /// every processed line.
    stack: Vec<Frame>,
}

impl Compiler {
    fn line(&mut self, line_no: usize, raw: &str) -> Result<(), CompileError> {
        let level = indent_level(raw);
        let text = raw.trim_start();

        // Blank and comment lines are inert: no level tracking, no output.
        if text.is_empty() || text.starts_with('#') {
            return Ok(());
        }

        let depth = self.stack.len();
        if depth < level {
            // Indent step. The anchor command loses its place in the
            // current scope and becomes the head of a new frame.
            let anchor = match self.stack.last_mut() {
                Some(frame) => frame.stdin.pop(),
                None => self.commands.pop(),
            };
            let command = anchor.ok_or(CompileError::DanglingIndent { line: line_no })?;
            self.stack.push(Frame { command, stdin: vec![text.to_string()] });
            if self.stack.len() != level {
                return Err(CompileError::IndentationJump { line: line_no, from: depth, to: level });
            }
            return Ok(());
        }

        // Dedent: resolve frames until the line's level is the open one,
        // then the line lands in the flat cases below.
        while self.stack.len() > level {
            self.fold();
        }

        match self.stack.last_mut() {
            Some(frame) => frame.stdin.push(text.to_string()),
            None => self.commands.push(text.to_string()),
        }
        Ok(())
    }

    /// Resolve the innermost open frame into an `echo | command`
    /// pipeline and hand it to the parent scope.
    ///
    /// A fold that lands at level 0 goes straight onto the command list,
    /// never re-wrapped in another `echo`.
    fn fold(&mut self) {
        let Some(frame) = self.stack.pop() else { return };
        let piped = format!("echo \"{}\" | {}", escape(&frame.stdin.join(";")), frame.command);
        match self.stack.last_mut() {
            Some(parent) => parent.stdin.push(piped),
            None => self.commands.push(piped),
        }
    }

    /// Fold any frames left open at end of input down to level 0.
    fn drain(&mut self) {
        while !self.stack.is_empty() {
            self.fold();
        }
    }
}

/// Count leading 4-space groups by stripping one group at a time.
fn indent_level(line: &str) -> usize {
    let mut rest = line;
    let mut level = 0;
    while let Some(stripped) = rest.strip_prefix(INDENT) {
        rest = stripped;
        level += 1;
    }
    level
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
