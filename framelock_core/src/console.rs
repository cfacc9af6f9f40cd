// Copyright 2026 the Framelock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in console status sink.
//!
//! [`StdoutSink`] is the default sink wired up by
//! [`GenlockProbe::new`](crate::probe::GenlockProbe::new): one two-column
//! line per event on standard output, severity label right-aligned in an
//! eight-character column.

use alloc::format;
use alloc::string::String;
use std::io::{self, Write};

use crate::status::{Severity, StatusSink};

/// Writes two-column status lines to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl StatusSink for StdoutSink {
    fn status(&self, severity: Severity, message: &str) {
        let _ = writeln!(io::stdout(), "{}", status_line(severity, message));
    }
}

fn status_line(severity: Severity, message: &str) -> String {
    format!("{:>8} {}", severity.as_str(), message)
}
