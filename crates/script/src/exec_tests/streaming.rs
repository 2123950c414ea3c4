// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stream relay behavior: chunk delivery, per-stream ordering, args.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{capture, rendered};
use crate::events::{Event, EventBus, ACTION_STDERR, ACTION_STDOUT};
use crate::exec::run;

#[tokio::test]
async fn stdout_chunks_are_relayed() {
    let (bus, captured) = capture(ACTION_STDOUT);
    let code = run(&rendered("echo hi"), &[], &bus).await.unwrap();
    assert_eq!(code, 0);
    assert_eq!(captured.lock().as_slice(), b"hi\n");
}

#[tokio::test]
async fn stderr_chunks_are_relayed() {
    let (bus, captured) = capture(ACTION_STDERR);
    let code = run(&rendered("echo oops 1>&2"), &[], &bus).await.unwrap();
    assert_eq!(code, 0);
    assert_eq!(captured.lock().as_slice(), b"oops\n");
}

#[tokio::test]
async fn stdout_preserves_arrival_order() {
    let (bus, captured) = capture(ACTION_STDOUT);
    run(&rendered("echo one\necho two\necho three"), &[], &bus).await.unwrap();
    assert_eq!(captured.lock().as_slice(), b"one\ntwo\nthree\n");
}

#[tokio::test]
async fn streams_do_not_cross() {
    let (bus, out) = capture(ACTION_STDOUT);
    let err = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&err);
    bus.on(ACTION_STDERR, move |event| {
        if let Event::Stderr { chunk } = event {
            sink.lock().extend_from_slice(chunk.as_slice());
        }
    });

    run(&rendered("echo good\necho bad 1>&2"), &[], &bus).await.unwrap();
    assert_eq!(out.lock().as_slice(), b"good\n");
    assert_eq!(err.lock().as_slice(), b"bad\n");
}

#[tokio::test]
async fn positional_args_reach_the_script() {
    let (bus, captured) = capture(ACTION_STDOUT);
    let args = ["Obi-Wan".to_string(), "Anakin".to_string()];
    run(&rendered("echo $1 $2"), &args, &bus).await.unwrap();
    assert_eq!(captured.lock().as_slice(), b"Obi-Wan Anakin\n");
}

#[tokio::test]
async fn run_without_subscribers_still_succeeds() {
    let bus = EventBus::new();
    let code = run(&rendered("echo unheard"), &[], &bus).await.unwrap();
    assert_eq!(code, 0);
}
