// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! fd-node: the tunnel-client node agent (spec §4.6) — wires the task engine
//! to the process supervisor, runs startup reconciliation, and reports
//! status on a timer.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod agent;
mod env;
mod handlers;
mod reconcile;
mod reporter;

pub use agent::NodeAgent;
pub use env::{base_dir, binaries_dir, instances_dir, log_dir, node_config_path};
pub use handlers::register_handlers;
pub use reconcile::reconcile;
pub use reporter::{spawn as spawn_reporter, StopHandle as ReporterHandle};
