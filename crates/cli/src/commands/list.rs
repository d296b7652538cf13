// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fdctl list` - enumerate nodes registered with this controller.
//! Trivially derived from the persisted `clients` array, no protocol
//! round-trip involved.

use crate::exit_error::ExitError;
use clap::Args;
use fd_config::ControllerConfig;

#[derive(Args)]
pub struct ListArgs;

pub async fn run(_args: ListArgs, config: &ControllerConfig) -> Result<(), ExitError> {
    if config.clients.is_empty() {
        println!("no nodes registered");
        return Ok(());
    }
    for client in &config.clients {
        println!("{}\t{}", client.name, client.client_id);
    }
    Ok(())
}
