// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Supervised execution of rendered scripts.

mod error;
mod run;

pub use error::ExecError;
pub use run::run;

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
