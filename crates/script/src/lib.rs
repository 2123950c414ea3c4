// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lvsh-script: compiles leveled scripts to flat bash and runs them.
//!
//! A leveled script is plain shell text where indentation encodes
//! pipelines: each leading 4-space group nests a line one level deeper,
//! and a deeper block becomes the stdin of the command above it via a
//! synthesized `echo "..." | command`, recursively for nested levels.

pub mod compiler;
pub mod error;
pub mod escape;
pub mod events;
pub mod exec;
pub mod render;

pub use compiler::{compile, Compiled};
pub use error::CompileError;
pub use escape::escape;
pub use events::{Event, EventBus, HandlerId, ACTION_EXIT, ACTION_STDERR, ACTION_STDOUT};
pub use exec::{run, ExecError};
pub use render::render;
