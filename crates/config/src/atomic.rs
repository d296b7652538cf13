// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort atomic file writes: write to a sibling `.tmp` file, then
//! rename over the target (spec §6).

use fd_core::FdError;
use std::path::Path;

pub fn write_atomic(path: &Path, contents: &str) -> Result<(), FdError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| FdError::config_invalid(format!("creating {}: {e}", parent.display())))?;
    }
    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, contents)
        .map_err(|e| FdError::config_invalid(format!("writing {}: {e}", tmp_path.display())))?;
    std::fs::rename(&tmp_path, path)
        .map_err(|e| FdError::config_invalid(format!("renaming {} -> {}: {e}", tmp_path.display(), path.display())))?;
    Ok(())
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;
