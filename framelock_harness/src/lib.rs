// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable binding-layer and sink doubles for probe tests and demos.
//!
//! Everything here observes rather than asserts: [`ScriptedQuery`] counts
//! invocations and replays scripted results, [`ScriptedBindings`] counts
//! presence checks and resolution attempts, and [`RecordingSink`] keeps the
//! status events it receives. Tests drive a real
//! [`GenlockProbe`](framelock_core::probe::GenlockProbe) against these
//! doubles and assert on the recorded traffic.

#![no_std]

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use framelock_core::binding::{EnableQuery, EnableState, GENLOCK_EXTENSION, GenlockBindings};
use framelock_core::status::{Severity, StatusSink};
use framelock_core::vendor::VendorApi;

/// Opaque stand-in for a rendering context.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubContext;

/// A scriptable enable-state entry point that counts invocations.
pub struct ScriptedQuery {
    calls: Cell<u64>,
    current: Cell<EnableState>,
    rest: RefCell<VecDeque<EnableState>>,
}

impl fmt::Debug for ScriptedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedQuery")
            .field("calls", &self.calls.get())
            .field("current", &self.current.get())
            .finish_non_exhaustive()
    }
}

impl ScriptedQuery {
    /// Entry point that always reports `state`.
    #[must_use]
    pub fn always(state: EnableState) -> Self {
        Self {
            calls: Cell::new(0),
            current: Cell::new(state),
            rest: RefCell::new(VecDeque::new()),
        }
    }

    /// Entry point that replays `states` front to back, then keeps
    /// reporting the last entry.
    ///
    /// # Panics
    ///
    /// Panics if `states` is empty.
    #[must_use]
    pub fn sequence(states: &[EnableState]) -> Self {
        assert!(!states.is_empty(), "a scripted query needs at least one state");
        Self {
            calls: Cell::new(0),
            current: Cell::new(states[0]),
            rest: RefCell::new(states[1..].iter().copied().collect()),
        }
    }

    /// Number of times the entry point was invoked.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }

    fn next_state(&self) -> EnableState {
        let state = self.current.get();
        if let Some(next) = self.rest.borrow_mut().pop_front() {
            self.current.set(next);
        }
        state
    }
}

impl<C: ?Sized> EnableQuery<C> for ScriptedQuery {
    fn is_enabled(&self, _context: &C) -> EnableState {
        self.calls.set(self.calls.get() + 1);
        self.next_state()
    }
}

/// Binding-layer double with per-vendor entry-point slots.
///
/// An empty slot reproduces the "entry point missing" resolution signal; a
/// filled slot hands the probe the contained [`ScriptedQuery`].
pub struct ScriptedBindings {
    extension_present: bool,
    nvidia: Option<ScriptedQuery>,
    amd: Option<ScriptedQuery>,
    presence_checks: Cell<u64>,
    resolutions: Cell<u64>,
}

impl fmt::Debug for ScriptedBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedBindings")
            .field("extension_present", &self.extension_present)
            .field("nvidia", &self.nvidia)
            .field("amd", &self.amd)
            .field("presence_checks", &self.presence_checks.get())
            .field("resolutions", &self.resolutions.get())
            .finish()
    }
}

impl ScriptedBindings {
    /// Binding layer that does not advertise the genlock extension.
    #[must_use]
    pub fn without_extension() -> Self {
        Self {
            extension_present: false,
            nvidia: None,
            amd: None,
            presence_checks: Cell::new(0),
            resolutions: Cell::new(0),
        }
    }

    /// Binding layer advertising the extension with the given vendor slots.
    #[must_use]
    pub fn with_entries(nvidia: Option<ScriptedQuery>, amd: Option<ScriptedQuery>) -> Self {
        Self {
            extension_present: true,
            nvidia,
            amd,
            presence_checks: Cell::new(0),
            resolutions: Cell::new(0),
        }
    }

    /// Number of extension-presence checks observed.
    #[must_use]
    pub fn presence_checks(&self) -> u64 {
        self.presence_checks.get()
    }

    /// Number of entry-point resolution attempts observed.
    #[must_use]
    pub fn resolutions(&self) -> u64 {
        self.resolutions.get()
    }

    /// Invocations of the NVIDIA slot's entry point (0 when the slot is
    /// empty).
    #[must_use]
    pub fn nvidia_calls(&self) -> u64 {
        self.nvidia.as_ref().map_or(0, ScriptedQuery::calls)
    }

    /// Invocations of the AMD slot's entry point (0 when the slot is empty).
    #[must_use]
    pub fn amd_calls(&self) -> u64 {
        self.amd.as_ref().map_or(0, ScriptedQuery::calls)
    }
}

impl GenlockBindings for ScriptedBindings {
    type Context = StubContext;

    fn has_extension(&self, _context: &StubContext, name: &str) -> bool {
        self.presence_checks.set(self.presence_checks.get() + 1);
        self.extension_present && name == GENLOCK_EXTENSION
    }

    fn enable_query(&self, vendor: VendorApi) -> Option<&dyn EnableQuery<StubContext>> {
        self.resolutions.set(self.resolutions.get() + 1);
        let slot = match vendor {
            VendorApi::Nvidia => self.nvidia.as_ref(),
            VendorApi::Amd => self.amd.as_ref(),
            VendorApi::None => None,
        };
        slot.map(|query| query as &dyn EnableQuery<StubContext>)
    }
}

/// Records status events for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<(Severity, String)>>,
}

impl fmt::Debug for RecordingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingSink")
            .field("events", &self.events.borrow().len())
            .finish_non_exhaustive()
    }
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events.borrow().clone()
    }
}

impl StatusSink for RecordingSink {
    fn status(&self, severity: Severity, message: &str) {
        self.events
            .borrow_mut()
            .push((severity, String::from(message)));
    }
}
