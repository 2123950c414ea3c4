// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run lifecycle: exit status, exit event, artifact cleanup, isolation.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use super::{capture, rendered};
use crate::events::{Event, EventBus, ACTION_EXIT, ACTION_STDOUT};
use crate::exec::run;

#[tokio::test]
async fn nonzero_exit_status_is_data_not_error() {
    let bus = EventBus::new();
    let code = run(&rendered("exit 3"), &[], &bus).await.unwrap();
    assert_eq!(code, 3);
}

#[tokio::test]
async fn exit_event_fires_exactly_once_with_the_status() {
    let bus = EventBus::new();
    let exits = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&exits);
    bus.on(ACTION_EXIT, move |event| {
        if let Event::Exited { code } = event {
            sink.lock().push(*code);
        }
    });

    run(&rendered("exit 5"), &[], &bus).await.unwrap();
    assert_eq!(*exits.lock(), [5]);
}

#[tokio::test]
async fn all_output_is_delivered_before_the_exit_event() {
    let bus = EventBus::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    let on_out = Arc::clone(&order);
    bus.on(ACTION_STDOUT, move |_| on_out.lock().push("stdout"));
    let on_exit = Arc::clone(&order);
    bus.on(ACTION_EXIT, move |_| on_exit.lock().push("exit"));

    run(&rendered("echo payload"), &[], &bus).await.unwrap();
    assert_eq!(*order.lock(), ["stdout", "exit"]);
}

#[tokio::test]
async fn artifact_is_removed_after_the_run() {
    // $0 inside the script is the artifact path itself.
    let (bus, captured) = capture(ACTION_STDOUT);
    run(&rendered("echo $0"), &[], &bus).await.unwrap();

    let path = PathBuf::from(String::from_utf8(captured.lock().clone()).unwrap().trim());
    assert!(path.to_string_lossy().contains("lvsh-"));
    assert!(!path.exists(), "artifact {} should be gone", path.display());
}

#[tokio::test]
async fn artifact_is_removed_even_when_the_script_fails() {
    let (bus, captured) = capture(ACTION_STDOUT);
    let code = run(&rendered("echo $0\nexit 9"), &[], &bus).await.unwrap();
    assert_eq!(code, 9);

    let path = PathBuf::from(String::from_utf8(captured.lock().clone()).unwrap().trim());
    assert!(!path.exists());
}

#[tokio::test]
async fn concurrent_runs_use_distinct_artifacts() {
    let (bus_a, out_a) = capture(ACTION_STDOUT);
    let (bus_b, out_b) = capture(ACTION_STDOUT);

    let script_a = rendered("echo $0");
    let script_b = rendered("echo $0");
    let (a, b) = tokio::join!(
        run(&script_a, &[], &bus_a),
        run(&script_b, &[], &bus_b),
    );
    a.unwrap();
    b.unwrap();

    let path_a = String::from_utf8(out_a.lock().clone()).unwrap();
    let path_b = String::from_utf8(out_b.lock().clone()).unwrap();
    assert_ne!(path_a, path_b);
}
