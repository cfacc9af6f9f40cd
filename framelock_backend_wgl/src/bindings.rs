// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WGL implementations of the core binding contracts.

#![expect(
    unsafe_code,
    reason = "entry-point resolution requires raw function-pointer FFI"
)]

use core::ffi::CStr;
use core::fmt;
use core::mem;

use framelock_core::binding::{EnableQuery, EnableState, GenlockBindings};
use framelock_core::vendor::VendorApi;
use windows_sys::Win32::Foundation::BOOL;
use windows_sys::Win32::Graphics::Gdi::HDC;
use windows_sys::Win32::Graphics::OpenGL::wglGetProcAddress;

use crate::extensions::extension_list_contains;
use crate::names;

/// Signature of `wglIsEnabledGenlockI3D`.
type IsEnabledGenlockFn = unsafe extern "system" fn(HDC, *mut BOOL) -> BOOL;
/// Signature of `wglGetExtensionsStringARB`.
type GetExtensionsStringArbFn = unsafe extern "system" fn(HDC) -> *const u8;
/// Signature of `wglGetExtensionsStringEXT`.
type GetExtensionsStringExtFn = unsafe extern "system" fn() -> *const u8;

/// Non-owning wrapper around a GDI device context handle.
///
/// The caller keeps the underlying context alive, and current on the calling
/// thread, for as long as any probe bound to it is in use.
#[derive(Clone, Copy)]
pub struct DeviceContext(HDC);

impl DeviceContext {
    /// Wraps a raw `HDC` without taking ownership.
    #[must_use]
    pub fn new(hdc: HDC) -> Self {
        Self(hdc)
    }

    /// Returns the raw handle.
    #[must_use]
    pub fn raw(&self) -> HDC {
        self.0
    }
}

impl fmt::Debug for DeviceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceContext({:p})", self.0)
    }
}

/// One resolved `wglIsEnabledGenlockI3D` entry point.
struct WglEnableQuery {
    entry: IsEnabledGenlockFn,
}

impl EnableQuery<DeviceContext> for WglEnableQuery {
    fn is_enabled(&self, context: &DeviceContext) -> EnableState {
        let mut flag: BOOL = 0;
        // SAFETY: `entry` was resolved from the driver under this symbol's
        // documented signature; `flag` outlives the call.
        let result = unsafe { (self.entry)(context.raw(), &mut flag) };
        EnableState {
            call_ok: result != 0,
            enabled: flag != 0,
        }
    }
}

/// WGL binding layer: genlock entry points resolved through
/// `wglGetProcAddress`.
///
/// Resolution happens once in [`resolve`](Self::resolve) and requires an
/// OpenGL context current on the calling thread, per the WGL contract.
/// Symbols the driver does not export come back as `None`, which the probe
/// treats as "entry point missing" — the normal outcome on adapters without
/// genlock support.
///
/// The I3D entry points share their names across vendor families, so the
/// symbol is resolved once and reported for both families; vendor
/// attribution follows the probe's fixed tie-break order.
pub struct WglBindings {
    get_extensions_arb: Option<GetExtensionsStringArbFn>,
    get_extensions_ext: Option<GetExtensionsStringExtFn>,
    is_enabled: Option<WglEnableQuery>,
}

impl fmt::Debug for WglBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WglBindings")
            .field("get_extensions_arb", &self.get_extensions_arb.is_some())
            .field("get_extensions_ext", &self.get_extensions_ext.is_some())
            .field("is_enabled", &self.is_enabled.is_some())
            .finish()
    }
}

impl WglBindings {
    /// Resolves the extension-string and genlock entry points.
    #[must_use]
    pub fn resolve() -> Self {
        // SAFETY: each symbol is transmuted to the signature documented for
        // its name in the WGL registry.
        unsafe {
            Self {
                get_extensions_arb: resolve_symbol(names::GET_EXTENSIONS_STRING_ARB),
                get_extensions_ext: resolve_symbol(names::GET_EXTENSIONS_STRING_EXT),
                is_enabled: resolve_symbol(names::IS_ENABLED_GENLOCK)
                    .map(|entry: IsEnabledGenlockFn| WglEnableQuery { entry }),
            }
        }
    }

    fn extension_list(&self, context: &DeviceContext) -> Option<String> {
        let ptr = if let Some(arb) = self.get_extensions_arb {
            // SAFETY: resolved driver entry point; takes the device context.
            unsafe { arb(context.raw()) }
        } else if let Some(ext) = self.get_extensions_ext {
            // SAFETY: resolved driver entry point; reads the current context.
            unsafe { ext() }
        } else {
            return None;
        };
        if ptr.is_null() {
            return None;
        }
        // SAFETY: the driver returns a NUL-terminated list that stays valid
        // while the context is current; copied out immediately.
        let list = unsafe { CStr::from_ptr(ptr.cast()) };
        Some(list.to_string_lossy().into_owned())
    }
}

impl GenlockBindings for WglBindings {
    type Context = DeviceContext;

    fn has_extension(&self, context: &DeviceContext, name: &str) -> bool {
        self.extension_list(context)
            .is_some_and(|list| extension_list_contains(&list, name))
    }

    fn enable_query(&self, vendor: VendorApi) -> Option<&dyn EnableQuery<DeviceContext>> {
        match vendor {
            VendorApi::Nvidia | VendorApi::Amd => self
                .is_enabled
                .as_ref()
                .map(|query| query as &dyn EnableQuery<DeviceContext>),
            VendorApi::None => None,
        }
    }
}

/// Resolves `name` through `wglGetProcAddress`.
///
/// Missing symbols come back as null, which maps to `None`. A handful of
/// ICDs return small sentinel values (1, 2, 3, -1) instead of null for
/// unexported names; those are rejected as missing too.
///
/// # Safety
///
/// `F` must be the `extern "system"` function-pointer type matching the
/// driver's export for `name`.
unsafe fn resolve_symbol<F>(name: &CStr) -> Option<F> {
    // SAFETY: `name` is NUL-terminated; a null result is handled below.
    let proc_addr = unsafe { wglGetProcAddress(name.as_ptr().cast()) }?;

    #[expect(
        clippy::fn_to_numeric_cast_any,
        reason = "sentinel detection compares the raw symbol address"
    )]
    let addr = proc_addr as usize;
    if addr <= 3 || addr == usize::MAX {
        return None;
    }

    // SAFETY: the caller guarantees `F` matches the export's signature;
    // function pointers have identical layout.
    Some(unsafe { mem::transmute_copy::<unsafe extern "system" fn() -> isize, F>(&proc_addr) })
}
