// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WGL extension-string handling.

/// Reports whether `name` appears in a space-separated extension list.
///
/// Matching is exact per token: `"WGL_I3D_genlock"` is not found inside
/// `"WGL_I3D_genlock2"` or `"EXT_WGL_I3D_genlock"`.
#[must_use]
pub fn extension_list_contains(list: &str, name: &str) -> bool {
    list.split_ascii_whitespace().any(|token| token == name)
}
