// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Genlock capability probe.
//!
//! [`GenlockProbe`] runs capability resolution once, synchronously, at
//! construction: extension presence first, then per-vendor entry-point
//! resolution through an [`EntryPointTable`]. The resolved vendor is fixed
//! for the probe's lifetime. After construction the probe answers
//! [`is_enabled_genlock`](GenlockProbe::is_enabled_genlock) by forwarding
//! one driver call per query — no caching, no retries.
//!
//! # Data flow
//!
//! ```text
//!   context ──► capability resolution ──► VendorApi
//!                                             │
//!                                             ▼
//!                          state query ──► EnableState
//! ```

use alloc::format;

use crate::binding::{EnableQuery, EnableState, EntryPointTable, GENLOCK_EXTENSION, GenlockBindings};
use crate::status::{Severity, StatusSink};
use crate::vendor::VendorApi;

/// Detects which vendor genlock API (if any) a driver exposes and answers
/// enable-state queries through it.
///
/// One probe binds to one rendering context. The context and the status
/// sink are borrowed for the probe's lifetime; the probe owns no resources
/// and never mutates genlock configuration.
///
/// # Usage
///
/// ```rust,ignore
/// let bindings = WglBindings::resolve();
/// let probe = GenlockProbe::new(&bindings, &context);
/// if probe.vendor().is_bound() {
///     let state = probe.is_enabled_genlock();
/// }
/// ```
pub struct GenlockProbe<'a, C: ?Sized> {
    context: &'a C,
    vendor: VendorApi,
    /// Invariant: `Some` exactly when `vendor` is bound.
    entry: Option<&'a dyn EnableQuery<C>>,
    sink: &'a dyn StatusSink,
}

impl<C: ?Sized> core::fmt::Debug for GenlockProbe<'_, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GenlockProbe")
            .field("vendor", &self.vendor)
            .finish_non_exhaustive()
    }
}

impl<'a, C: ?Sized> GenlockProbe<'a, C> {
    /// Probes `bindings` for genlock support on `context`, reporting the
    /// outcome through `sink`.
    ///
    /// Exactly one status event is emitted: severity [`Severity::Ok`] when
    /// a vendor family was bound, [`Severity::Error`] otherwise. Absence of
    /// the extension or of both vendor entry points is a normal outcome
    /// recorded as [`VendorApi::None`], never a failure.
    pub fn with_sink<B>(bindings: &'a B, context: &'a C, sink: &'a dyn StatusSink) -> Self
    where
        B: GenlockBindings<Context = C> + ?Sized,
    {
        // When the extension is not advertised, no entry point is probed.
        let (vendor, entry) = if bindings.has_extension(context, GENLOCK_EXTENSION) {
            EntryPointTable::resolve(bindings).select()
        } else {
            (VendorApi::None, None)
        };

        let probe = Self {
            context,
            vendor,
            entry,
            sink,
        };
        probe.report_capability();
        probe
    }

    /// Probes with the built-in stdout sink.
    #[cfg(feature = "std")]
    pub fn new<B>(bindings: &'a B, context: &'a C) -> Self
    where
        B: GenlockBindings<Context = C> + ?Sized,
    {
        Self::with_sink(bindings, context, &crate::console::StdoutSink)
    }

    /// Returns the vendor API selected during construction.
    #[must_use]
    pub fn vendor(&self) -> VendorApi {
        self.vendor
    }

    /// Queries whether genlock is currently enabled on the bound context.
    ///
    /// With no vendor bound this returns [`EnableState::UNAVAILABLE`]
    /// without touching the driver. Otherwise exactly one call is forwarded
    /// to the resolved entry point and its result is returned unmodified.
    /// Each query reads live hardware state; a failed call surfaces as
    /// `call_ok == false` and is not retried, logged, or escalated.
    #[must_use]
    pub fn is_enabled_genlock(&self) -> EnableState {
        match self.entry {
            Some(entry) => entry.is_enabled(self.context),
            None => EnableState::UNAVAILABLE,
        }
    }

    fn report_capability(&self) {
        let severity = if self.vendor.is_bound() {
            Severity::Ok
        } else {
            Severity::Error
        };
        self.sink.status(
            severity,
            &format!("Genlock: {} supported", self.vendor.as_label()),
        );
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    use super::*;

    struct StubQuery {
        calls: Cell<u64>,
        state: Cell<EnableState>,
        toggle: bool,
    }

    impl StubQuery {
        fn fixed(call_ok: bool, enabled: bool) -> Self {
            Self {
                calls: Cell::new(0),
                state: Cell::new(EnableState { call_ok, enabled }),
                toggle: false,
            }
        }

        /// Flips the reported flag after every call, like hardware whose
        /// enable state changes between queries.
        fn toggling() -> Self {
            Self {
                calls: Cell::new(0),
                state: Cell::new(EnableState {
                    call_ok: true,
                    enabled: true,
                }),
                toggle: true,
            }
        }
    }

    impl<C: ?Sized> EnableQuery<C> for StubQuery {
        fn is_enabled(&self, _context: &C) -> EnableState {
            self.calls.set(self.calls.get() + 1);
            let state = self.state.get();
            if self.toggle {
                self.state.set(EnableState {
                    call_ok: state.call_ok,
                    enabled: !state.enabled,
                });
            }
            state
        }
    }

    struct StubBindings {
        extension_present: bool,
        nvidia: Option<StubQuery>,
        amd: Option<StubQuery>,
        resolutions: Cell<u64>,
    }

    impl StubBindings {
        fn new(
            extension_present: bool,
            nvidia: Option<StubQuery>,
            amd: Option<StubQuery>,
        ) -> Self {
            Self {
                extension_present,
                nvidia,
                amd,
                resolutions: Cell::new(0),
            }
        }

        fn vendor_calls(&self) -> u64 {
            let count = |slot: &Option<StubQuery>| {
                slot.as_ref().map_or(0, |query| query.calls.get())
            };
            count(&self.nvidia) + count(&self.amd)
        }
    }

    impl GenlockBindings for StubBindings {
        type Context = ();

        fn has_extension(&self, _context: &(), name: &str) -> bool {
            self.extension_present && name == GENLOCK_EXTENSION
        }

        fn enable_query(&self, vendor: VendorApi) -> Option<&dyn EnableQuery<()>> {
            self.resolutions.set(self.resolutions.get() + 1);
            let slot = match vendor {
                VendorApi::Nvidia => self.nvidia.as_ref(),
                VendorApi::Amd => self.amd.as_ref(),
                VendorApi::None => None,
            };
            slot.map(|query| query as &dyn EnableQuery<()>)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        events: RefCell<Vec<(Severity, String)>>,
    }

    impl StatusSink for RecordingSink {
        fn status(&self, severity: Severity, message: &str) {
            self.events
                .borrow_mut()
                .push((severity, String::from(message)));
        }
    }

    #[test]
    fn missing_extension_skips_entry_point_probing() {
        let bindings = StubBindings::new(
            false,
            Some(StubQuery::fixed(true, true)),
            Some(StubQuery::fixed(true, true)),
        );
        let sink = RecordingSink::default();
        let probe = GenlockProbe::with_sink(&bindings, &(), &sink);

        assert_eq!(probe.vendor(), VendorApi::None);
        assert_eq!(bindings.resolutions.get(), 0, "no resolution attempted");
        assert_eq!(probe.is_enabled_genlock(), EnableState::UNAVAILABLE);
        assert_eq!(bindings.vendor_calls(), 0, "no vendor function invoked");

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1, "construction emits one event");
        assert_eq!(events[0].0, Severity::Error);
        assert_eq!(events[0].1, "Genlock: none supported");
    }

    #[test]
    fn nvidia_only_binds_and_forwards() {
        let bindings = StubBindings::new(true, Some(StubQuery::fixed(true, true)), None);
        let sink = RecordingSink::default();
        let probe = GenlockProbe::with_sink(&bindings, &(), &sink);

        assert_eq!(probe.vendor(), VendorApi::Nvidia);
        assert_eq!(
            probe.is_enabled_genlock(),
            EnableState {
                call_ok: true,
                enabled: true,
            }
        );
        assert_eq!(bindings.vendor_calls(), 1, "exactly one forwarded call");

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Severity::Ok);
        assert_eq!(events[0].1, "Genlock: Nvidia API supported");
    }

    #[test]
    fn amd_only_binds_and_forwards() {
        let bindings = StubBindings::new(true, None, Some(StubQuery::fixed(true, false)));
        let sink = RecordingSink::default();
        let probe = GenlockProbe::with_sink(&bindings, &(), &sink);

        assert_eq!(probe.vendor(), VendorApi::Amd);
        assert_eq!(
            probe.is_enabled_genlock(),
            EnableState {
                call_ok: true,
                enabled: false,
            }
        );
        assert_eq!(sink.events.borrow()[0].1, "Genlock: AMD API supported");
    }

    #[test]
    fn both_vendors_resolving_binds_the_last_probed() {
        let bindings = StubBindings::new(
            true,
            Some(StubQuery::fixed(true, true)),
            Some(StubQuery::fixed(true, true)),
        );
        let sink = RecordingSink::default();
        let probe = GenlockProbe::with_sink(&bindings, &(), &sink);

        assert_eq!(probe.vendor(), VendorApi::Amd);
        let _ = probe.is_enabled_genlock();
        let nvidia_calls = bindings.nvidia.as_ref().map_or(0, |q| q.calls.get());
        assert_eq!(nvidia_calls, 0, "queries go only to the bound vendor");
    }

    #[test]
    fn neither_vendor_resolving_reports_error_severity() {
        let bindings = StubBindings::new(true, None, None);
        let sink = RecordingSink::default();
        let probe = GenlockProbe::with_sink(&bindings, &(), &sink);

        assert_eq!(probe.vendor(), VendorApi::None);
        assert_eq!(bindings.resolutions.get(), 2, "both families were tried");

        let events = sink.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Severity::Error);
    }

    #[test]
    fn queries_relay_live_state_without_caching() {
        let bindings = StubBindings::new(true, Some(StubQuery::toggling()), None);
        let sink = RecordingSink::default();
        let probe = GenlockProbe::with_sink(&bindings, &(), &sink);

        let first = probe.is_enabled_genlock();
        let second = probe.is_enabled_genlock();
        let third = probe.is_enabled_genlock();

        assert!(first.enabled);
        assert!(!second.enabled);
        assert!(third.enabled);
        assert_eq!(bindings.vendor_calls(), 3, "one driver call per query");
    }

    #[test]
    fn failed_calls_surface_in_the_result_without_logging() {
        let bindings = StubBindings::new(true, Some(StubQuery::fixed(false, false)), None);
        let sink = RecordingSink::default();
        let probe = GenlockProbe::with_sink(&bindings, &(), &sink);

        assert_eq!(
            probe.is_enabled_genlock(),
            EnableState {
                call_ok: false,
                enabled: false,
            }
        );
        assert_eq!(
            sink.events.borrow().len(),
            1,
            "query failures emit no status events"
        );
    }
}
