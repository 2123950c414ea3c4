// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Renders compiled commands as executable bash text.

use crate::compiler::Compiled;

/// Concatenate the shebang header and the compiled commands, one per
/// line, in compilation order.
pub fn render(compiled: &Compiled) -> String {
    format!("#!/bin/bash\n\n{}", compiled.commands.join("\n"))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
