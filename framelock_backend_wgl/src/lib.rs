// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WGL binding layer for framelock.
//!
//! This crate implements the `framelock_core` binding contracts over the
//! Windows OpenGL ICD mechanism:
//!
//! - Extension presence via `WGL_EXT_extensions_string`
//!   (`wglGetExtensionsStringARB` with `wglGetExtensionsStringEXT` as
//!   fallback)
//! - Entry-point resolution via `wglGetProcAddress`, with missing symbols
//!   surfaced as `None` rather than call failures
//! - The `WGL_I3D_genlock` procedure-name and token tables ([`names`])
//!
//! On non-Windows targets only the constant tables and the extension-list
//! parser are built; [`WglBindings`] and [`DeviceContext`] require
//! `cfg(windows)`.

pub mod extensions;
pub mod names;

#[cfg(windows)]
mod bindings;

#[cfg(windows)]
pub use bindings::{DeviceContext, WglBindings};
