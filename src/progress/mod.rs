//! Progress events emitted while a comparison runs.
//!
//! Events go to a caller-provided callback; the CLI turns them into console
//! lines that never reach the report log.

pub mod event;

pub use event::ProgressEvent;

/// Callback receiving progress events
pub type ProgressFn<'a> = dyn FnMut(&ProgressEvent) + 'a;

/// Callback that drops every event
pub fn silent(_event: &ProgressEvent) {}
