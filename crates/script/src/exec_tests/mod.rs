// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the execution engine, driven against real bash processes.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::events::{Event, EventBus};

mod lifecycle;
mod streaming;

/// Bus plus an accumulating capture of one stream's chunks.
pub(crate) fn capture(action: &'static str) -> (EventBus, Arc<Mutex<Vec<u8>>>) {
    let bus = EventBus::new();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    bus.on(action, move |event| match event {
        Event::Stdout { chunk } | Event::Stderr { chunk } => {
            sink.lock().extend_from_slice(chunk);
        }
        _ => {}
    });
    (bus, captured)
}

/// Rendered-script text around `body`, shebang and trailing exit included.
pub(crate) fn rendered(body: &str) -> String {
    format!("#!/bin/bash\n\n{body}\nexit")
}
