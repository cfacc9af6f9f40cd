// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vendor-normalized genlock capability detection and enable-state queries.
//!
//! Genlock synchronizes a display's frame refresh to an external trigger
//! signal. Graphics drivers expose it through one of two mutually exclusive
//! vendor extension families behind a shared driver extension.
//! `framelock_core` detects which family (if any) the driver answers for and
//! presents a single normalized enable-state query, so callers never branch
//! on the vendor themselves.
//!
//! # Architecture
//!
//! The crate is organized around a probe that binds to one rendering context
//! for its whole lifetime:
//!
//! ```text
//!   GenlockBindings (platform layer)
//!       │
//!       ▼
//!   EntryPointTable::resolve() ──► select() ──► VendorApi
//!                                                   │
//!                 ┌─────────────────────────────────┘
//!                 ▼
//!   GenlockProbe::is_enabled_genlock() ──► EnableState
//! ```
//!
//! **[`vendor`]** — The closed [`VendorApi`](vendor::VendorApi) enumeration
//! and the fixed order in which vendor families are probed.
//!
//! **[`binding`]** — Contracts the platform layer implements: extension
//! presence, per-vendor entry-point resolution (a missing driver symbol is
//! `None`, distinct from a runtime call failure), and the
//! [`EnableState`](binding::EnableState) result value.
//!
//! **[`probe`]** — [`GenlockProbe`](probe::GenlockProbe): capability
//! resolution at construction, repeatable read-only state queries after.
//!
//! **[`status`]** — [`StatusSink`](status::StatusSink) capability for the
//! single construction-time status event, with a no-op implementation.
//!
//! **[`console`]** — Built-in stdout sink (requires the `std` feature).
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables the [`console`] module and the
//!   default-sink constructor on [`GenlockProbe`](probe::GenlockProbe).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod binding;
pub mod probe;
pub mod status;
pub mod vendor;

#[cfg(feature = "std")]
pub mod console;
