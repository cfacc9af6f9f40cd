// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform binding contracts for genlock probing.
//!
//! The platform layer owns two mechanisms the probe consumes but never
//! implements:
//!
//! - **Extension presence** — whether the driver advertises the genlock
//!   extension for a context at all.
//! - **Entry-point resolution** — obtaining a callable bound to a named
//!   vendor function. A symbol the driver does not export resolves to
//!   `None`; this "missing function" signal is distinct from a runtime call
//!   failure, which a resolved [`EnableQuery`] reports through
//!   [`EnableState::call_ok`]. Capability resolution branches on presence
//!   only and never interprets call results.
//!
//! [`EntryPointTable`] gathers one resolution outcome per vendor family in
//! [`VendorApi::PROBE_ORDER`] and selects the bound vendor with a pure
//! last-match-wins walk.

use core::fmt;

use crate::vendor::VendorApi;

/// Identifier of the driver extension that carries the genlock entry points.
pub const GENLOCK_EXTENSION: &str = "WGL_I3D_genlock";

/// Result of one enable-state query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnableState {
    /// Raw success signal of the underlying driver call.
    pub call_ok: bool,
    /// Reported enable flag. Meaningful only when [`call_ok`](Self::call_ok)
    /// is `true`; after a failed call it stays `false` by convention and is
    /// never a confirmed "disabled" reading.
    pub enabled: bool,
}

impl EnableState {
    /// The result reported when no vendor entry point is bound: no driver
    /// call was made and the flag defaults to `false`.
    pub const UNAVAILABLE: Self = Self {
        call_ok: false,
        enabled: false,
    };
}

/// A resolved vendor entry point for the enable-state query.
///
/// Models `wglIsEnabledGenlockI3D(hdc, &flag) -> BOOL`: the implementation
/// owns the output slot and folds the call result and flag into an
/// [`EnableState`]. Invocations are read-only with respect to device state.
pub trait EnableQuery<C: ?Sized> {
    /// Queries the live enable flag against `context`.
    fn is_enabled(&self, context: &C) -> EnableState;
}

/// Platform binding layer consumed by
/// [`GenlockProbe`](crate::probe::GenlockProbe).
///
/// One implementation serves one platform extension mechanism. Both methods
/// are expected to return promptly; the probe applies no timeout.
pub trait GenlockBindings {
    /// Opaque rendering-context handle this binding layer operates on.
    type Context: ?Sized;

    /// Reports whether the driver advertises the extension `name` for
    /// `context`.
    fn has_extension(&self, context: &Self::Context, name: &str) -> bool;

    /// Returns `vendor`'s resolved enable-state entry point, or `None` when
    /// the driver does not export it. [`VendorApi::None`] has no entry
    /// point by definition.
    fn enable_query(&self, vendor: VendorApi) -> Option<&dyn EnableQuery<Self::Context>>;
}

/// Per-vendor entry-point resolution outcomes, in fixed probe order.
///
/// Built once during probe construction; [`select`](Self::select) reduces it
/// to the bound vendor without consulting the binding layer again.
pub struct EntryPointTable<'a, C: ?Sized> {
    slots: [(VendorApi, Option<&'a dyn EnableQuery<C>>); VendorApi::PROBE_ORDER.len()],
}

impl<C: ?Sized> fmt::Debug for EntryPointTable<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_map();
        for (vendor, entry) in &self.slots {
            entries.entry(vendor, &entry.is_some());
        }
        entries.finish()
    }
}

impl<'a, C: ?Sized> EntryPointTable<'a, C> {
    /// Resolves every vendor family in [`VendorApi::PROBE_ORDER`] through
    /// `bindings`.
    #[must_use]
    pub fn resolve<B>(bindings: &'a B) -> Self
    where
        B: GenlockBindings<Context = C> + ?Sized,
    {
        Self {
            slots: VendorApi::PROBE_ORDER.map(|vendor| (vendor, bindings.enable_query(vendor))),
        }
    }

    /// Selects the bound vendor: the **last** slot with a resolved entry
    /// point wins.
    ///
    /// Vendor families are mutually exclusive per driver in practice, so
    /// the override is a tie-break of evaluation order, not a preference
    /// for either family.
    #[must_use]
    pub fn select(&self) -> (VendorApi, Option<&'a dyn EnableQuery<C>>) {
        let mut selected = (VendorApi::None, None);
        for (vendor, entry) in self.slots {
            if entry.is_some() {
                selected = (vendor, entry);
            }
        }
        selected
    }
}
