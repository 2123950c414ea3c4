// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal publish/subscribe registry for run events.
//!
//! Decouples the execution engine from its consumers: the engine only
//! triggers named actions, and callers decide what (if anything) is
//! listening.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Action name for relayed child stdout chunks.
pub const ACTION_STDOUT: &str = "stdout";
/// Action name for relayed child stderr chunks.
pub const ACTION_STDERR: &str = "stderr";
/// Action name for the once-per-run exit notification.
pub const ACTION_EXIT: &str = "exit";

/// Events published while a compiled script runs.
///
/// Serializes with `{"type": "run:name", ...fields}` format. Unknown
/// type tags deserialize to `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A chunk of the child's standard output, in arrival order.
    #[serde(rename = "run:stdout")]
    Stdout { chunk: Vec<u8> },

    /// A chunk of the child's standard error, in arrival order.
    #[serde(rename = "run:stderr")]
    Stderr { chunk: Vec<u8> },

    /// The child terminated; delivered exactly once per run.
    #[serde(rename = "run:exited")]
    Exited { code: i32 },

    /// Catch-all payload for caller-defined actions (extensibility)
    #[serde(other, skip_serializing)]
    Custom,
}

impl Event {
    pub fn name(&self) -> &str {
        match self {
            Event::Stdout { .. } => "run:stdout",
            Event::Stderr { .. } => "run:stderr",
            Event::Exited { .. } => "run:exited",
            Event::Custom => "custom",
        }
    }
}

/// Token returned by [`EventBus::on`], used to remove one registration.
///
/// Closures have no identity to compare against, so removal is by token
/// rather than by callback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

struct Registration {
    id: HandlerId,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    actions: HashMap<String, Vec<Registration>>,
}

/// Ordered observer registry.
///
/// Clones share one registry. Handlers registered under an action run in
/// registration order. Dispatch happens outside the registry lock, so a
/// handler may register or remove handlers without deadlocking.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `action`; registration order is delivery
    /// order.
    pub fn on<F>(&self, action: &str, handler: F) -> HandlerId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock();
        registry.next_id += 1;
        let id = HandlerId(registry.next_id);
        registry
            .actions
            .entry(action.to_string())
            .or_default()
            .push(Registration { id, handler: Arc::new(handler) });
        id
    }

    /// Remove one registration; returns whether it was found.
    pub fn off(&self, action: &str, id: HandlerId) -> bool {
        let mut registry = self.registry.lock();
        let Some(entries) = registry.actions.get_mut(action) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|r| r.id != id);
        entries.len() != before
    }

    /// Clear every registration for `action`; returns whether any existed.
    pub fn off_all(&self, action: &str) -> bool {
        let mut registry = self.registry.lock();
        registry.actions.remove(action).is_some_and(|entries| !entries.is_empty())
    }

    /// Invoke every handler currently registered for `action`, in
    /// registration order, passing the same event to each. Actions with
    /// no registrations are a no-op, never an error.
    pub fn trigger(&self, action: &str, event: &Event) {
        let handlers: Vec<Handler> = {
            let registry = self.registry.lock();
            match registry.actions.get(action) {
                Some(entries) => entries.iter().map(|r| Arc::clone(&r.handler)).collect(),
                None => return,
            }
        };
        for handler in handlers {
            handler(event);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
