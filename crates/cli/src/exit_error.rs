// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Maps any `fd_core::FdError` surfaced by a controller call to a
    /// non-zero exit carrying its `kind` and message (spec §7).
    pub fn from_fd_error(err: fd_core::FdError) -> Self {
        Self::new(1, format!("{}: {}", err.kind, err.message))
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
