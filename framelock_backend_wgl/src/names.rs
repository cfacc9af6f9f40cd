// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `WGL_I3D_genlock` procedure names and tokens.
//!
//! Genlock synchronizes the refresh of a monitor to an external trigger
//! signal. The extension controls it through five parameter groups:
//!
//! - **Enable/Disable** — per-monitor enable plus the enable-state query
//!   this crate resolves ([`IS_ENABLED_GENLOCK`]).
//! - **Source selection** — one genlock source per graphics adapter,
//!   chosen from the six [`GENLOCK_SOURCE_MULTIVIEW`]..[`GENLOCK_SOURCE_DIGITAL_FIELD`]
//!   inputs.
//! - **Source sample edge** — the trigger pulse derives from the rising,
//!   falling, or both edges of the source signal.
//! - **Source sample rate** — every nth pulse generates a trigger, with n
//!   in [`GENLOCK_SAMPLE_RATE_MIN`]..=[`GENLOCK_SAMPLE_RATE_MAX`].
//! - **Source delay** — the trigger can be delayed by up to one frame,
//!   measured in pixels, bounded by the max-source-delay query.
//!
//! Every procedure returns a `BOOL`: `TRUE` on success, `FALSE` on failure
//! with extended information via `GetLastError` (`ERROR_DC_NOT_FOUND` for a
//! bad device context, `ERROR_NO_SYSTEM_RESOURCES` when genlock is
//! unsupported, `ERROR_INVALID_DATA` for out-of-range parameters).
//!
//! The entry points live in the ICD, not in `opengl32`, so they are
//! obtained through `wglGetProcAddress` and advertised only through
//! `WGL_EXT_extensions_string` — never through the GL extension string.
//!
//! Only the enable-state query is invoked by this crate; the remaining
//! names and tokens are carried as the extension's declarative surface.

use core::ffi::CStr;

/// Extension through which WGL extension strings are queried at all.
pub const WGL_EXT_EXTENSIONS_STRING: &str = "WGL_EXT_extensions_string";

/// Extension-string query taking a device context (`ARB` variant).
pub const GET_EXTENSIONS_STRING_ARB: &CStr = c"wglGetExtensionsStringARB";
/// Extension-string query reading the current context (`EXT` variant).
pub const GET_EXTENSIONS_STRING_EXT: &CStr = c"wglGetExtensionsStringEXT";

/// Enables genlock for the monitor of the given device context.
pub const ENABLE_GENLOCK: &CStr = c"wglEnableGenlockI3D";
/// Disables genlock for the monitor of the given device context.
pub const DISABLE_GENLOCK: &CStr = c"wglDisableGenlockI3D";
/// Queries the current genlock enable state.
pub const IS_ENABLED_GENLOCK: &CStr = c"wglIsEnabledGenlockI3D";
/// Selects the genlock source for the adapter.
pub const GENLOCK_SOURCE: &CStr = c"wglGenlockSourceI3D";
/// Queries the current genlock source.
pub const GET_GENLOCK_SOURCE: &CStr = c"wglGetGenlockSourceI3D";
/// Selects which source edges generate genlock pulses.
pub const GENLOCK_SOURCE_EDGE: &CStr = c"wglGenlockSourceEdgeI3D";
/// Queries the current source edge mode.
pub const GET_GENLOCK_SOURCE_EDGE: &CStr = c"wglGetGenlockSourceEdgeI3D";
/// Sets the pulse sample rate (every nth pulse triggers).
pub const GENLOCK_SAMPLE_RATE: &CStr = c"wglGenlockSampleRateI3D";
/// Queries the current pulse sample rate.
pub const GET_GENLOCK_SAMPLE_RATE: &CStr = c"wglGetGenlockSampleRateI3D";
/// Sets the trigger delay in pixels.
pub const GENLOCK_SOURCE_DELAY: &CStr = c"wglGenlockSourceDelayI3D";
/// Queries the current trigger delay.
pub const GET_GENLOCK_SOURCE_DELAY: &CStr = c"wglGetGenlockSourceDelayI3D";
/// Queries the maximum line/pixel delay factors.
pub const QUERY_GENLOCK_MAX_SOURCE_DELAY: &CStr = c"wglQueryGenlockMaxSourceDelayI3D";

/// Multiview sync signal source (`WGL_GENLOCK_SOURCE_MULTIVIEW_I3D`).
pub const GENLOCK_SOURCE_MULTIVIEW: u32 = 0x2044;
/// External genlock vertical sync component.
pub const GENLOCK_SOURCE_EXTERNAL_SYNC: u32 = 0x2045;
/// External genlock field component.
pub const GENLOCK_SOURCE_EXTERNAL_FIELD: u32 = 0x2046;
/// External genlock as a TTL-level signal.
pub const GENLOCK_SOURCE_EXTERNAL_TTL: u32 = 0x2047;
/// Digital genlock vertical sync component.
pub const GENLOCK_SOURCE_DIGITAL_SYNC: u32 = 0x2048;
/// Digital genlock field component.
pub const GENLOCK_SOURCE_DIGITAL_FIELD: u32 = 0x2049;

/// Trigger on the falling edge of the source.
pub const GENLOCK_SOURCE_EDGE_FALLING: u32 = 0x204A;
/// Trigger on the rising edge of the source.
pub const GENLOCK_SOURCE_EDGE_RISING: u32 = 0x204B;
/// Trigger on both edges of the source.
pub const GENLOCK_SOURCE_EDGE_BOTH: u32 = 0x204C;

/// Smallest accepted sample rate (every pulse triggers).
pub const GENLOCK_SAMPLE_RATE_MIN: u32 = 1;
/// Largest accepted sample rate (every sixth pulse triggers).
pub const GENLOCK_SAMPLE_RATE_MAX: u32 = 6;
