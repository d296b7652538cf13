// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! fd-collab: external collaborators (spec §6) — broker user-management
//! API, binary installer, Wake-on-LAN sender.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod emqx;
mod installer;
mod wol;

pub use emqx::EmqxApi;
pub use installer::Installer;
pub use wol::send as send_wol;
