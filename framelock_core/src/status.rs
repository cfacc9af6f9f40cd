// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Status reporting for capability resolution.
//!
//! [`StatusSink`] is the capability the probe uses to report its resolution
//! outcome. The probe emits exactly one event, at construction; state
//! queries never log. Dispatch takes `&self`, so implementations that
//! accumulate events use interior mutability (see the recording sink in
//! `framelock_harness`).

/// Severity tag attached to a status event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A vendor API was bound.
    Ok,
    /// Genlock is unavailable on this context.
    Error,
}

impl Severity {
    /// Returns the column label used by console sinks.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Receives status events from the probe.
pub trait StatusSink {
    /// Called with a severity tag and a preformatted message.
    fn status(&self, severity: Severity, message: &str);
}

/// A [`StatusSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl StatusSink for NoopSink {
    fn status(&self, _severity: Severity, _message: &str) {}
}
