// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tunnel-binary installer (spec §6): downloads and extracts the `frpc`
//! release matching the host OS/arch if it isn't already present.

use fd_core::FdError;
use std::io::Cursor;
use std::path::{Path, PathBuf};

const RELEASE_URL_TEMPLATE: &str =
    "https://github.com/fatedier/frp/releases/download/v{version}/frp_{version}_{os}_{arch}.{ext}";

// Windows targets would need `frp_*_windows_*.zip` releases, which require
// zip-archive extraction; no zip crate is part of this workspace's
// dependency stack, so only the tar.gz-distributed hosts (linux, darwin)
// are supported. See DESIGN.md.

fn target_info() -> Result<(&'static str, &'static str), FdError> {
    let os = if cfg!(target_os = "linux") {
        "linux"
    } else if cfg!(target_os = "macos") {
        "darwin"
    } else {
        return Err(FdError::upstream_api_failed(
            "unsupported operating system for frpc install (only linux/darwin tar.gz releases are supported)",
        ));
    };

    let arch = if cfg!(target_arch = "x86_64") {
        "amd64"
    } else if cfg!(target_arch = "x86") {
        "386"
    } else if cfg!(target_arch = "aarch64") {
        "arm64"
    } else {
        return Err(FdError::upstream_api_failed("unsupported architecture for frpc install"));
    };

    Ok((os, arch))
}

fn versioned_binary_path(binaries_dir: &Path, version: &str) -> PathBuf {
    binaries_dir.join(format!("frpc-{version}"))
}

pub struct Installer {
    client: reqwest::Client,
    binaries_dir: PathBuf,
}

impl Installer {
    pub fn new(binaries_dir: impl Into<PathBuf>) -> Self {
        Self { client: reqwest::Client::new(), binaries_dir: binaries_dir.into() }
    }

    /// Returns the path to `version`'s `frpc` binary, downloading and
    /// extracting it first if absent.
    pub async fn ensure_installed(&self, version: &str) -> Result<PathBuf, FdError> {
        let path = versioned_binary_path(&self.binaries_dir, version);
        if path.exists() {
            return Ok(path);
        }

        std::fs::create_dir_all(&self.binaries_dir)
            .map_err(|e| FdError::upstream_api_failed(format!("creating binaries dir: {e}")))?;

        let (os, arch) = target_info()?;
        let url = RELEASE_URL_TEMPLATE
            .replace("{version}", version)
            .replace("{os}", os)
            .replace("{arch}", arch)
            .replace("{ext}", "tar.gz");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FdError::upstream_api_failed(format!("downloading frpc {version}: {e}")))?;
        if !response.status().is_success() {
            return Err(FdError::upstream_api_failed(format!(
                "downloading frpc {version} failed: status {}",
                response.status()
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FdError::upstream_api_failed(format!("reading frpc archive body: {e}")))?;

        extract_tar_gz(&bytes, &self.binaries_dir)?;

        let extracted = self.binaries_dir.join("frpc");
        std::fs::rename(&extracted, &path)
            .map_err(|e| FdError::upstream_api_failed(format!("placing {} as {}: {e}", extracted.display(), path.display())))?;
        set_executable(&path)?;

        Ok(path)
    }
}

fn extract_tar_gz(bytes: &[u8], target_dir: &Path) -> Result<(), FdError> {
    let decoder = flate2::read::GzDecoder::new(Cursor::new(bytes));
    let mut archive = tar::Archive::new(decoder);
    let entries = archive
        .entries()
        .map_err(|e| FdError::upstream_api_failed(format!("reading frpc tar.gz: {e}")))?;

    for entry in entries {
        let mut entry = entry.map_err(|e| FdError::upstream_api_failed(format!("reading tar entry: {e}")))?;
        let entry_path = entry.path().map_err(|e| FdError::upstream_api_failed(e.to_string()))?.into_owned();
        if entry_path.file_name().and_then(|n| n.to_str()) != Some("frpc") {
            continue;
        }
        let dest = target_dir.join("frpc");
        entry
            .unpack(&dest)
            .map_err(|e| FdError::upstream_api_failed(format!("extracting frpc: {e}")))?;
        return Ok(());
    }

    Err(FdError::upstream_api_failed("frpc binary not found in archive"))
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<(), FdError> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)
        .map_err(|e| FdError::upstream_api_failed(format!("stat {}: {e}", path.display())))?
        .permissions();
    perms.set_mode(perms.mode() | 0o111);
    std::fs::set_permissions(path, perms)
        .map_err(|e| FdError::upstream_api_failed(format!("chmod {}: {e}", path.display())))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<(), FdError> {
    Ok(())
}

#[cfg(test)]
#[path = "installer_tests.rs"]
mod tests;
