// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wake-on-LAN magic packet sender (spec §6).

use fd_core::FdError;
use tokio::net::UdpSocket;

const WOL_PORT: u16 = 9;

fn parse_mac(mac: &str) -> Result<[u8; 6], FdError> {
    let mut bytes = [0u8; 6];
    let parts: Vec<&str> = mac.split(|c| c == ':' || c == '-').collect();
    if parts.len() != 6 {
        return Err(FdError::decode_failed(format!("invalid MAC address: {mac}")));
    }
    for (i, part) in parts.iter().enumerate() {
        bytes[i] = u8::from_str_radix(part, 16)
            .map_err(|_| FdError::decode_failed(format!("invalid MAC address: {mac}")))?;
    }
    Ok(bytes)
}

fn build_magic_packet(mac: [u8; 6]) -> [u8; 102] {
    let mut packet = [0xFFu8; 102];
    for repetition in 0..16 {
        let offset = 6 + repetition * 6;
        packet[offset..offset + 6].copy_from_slice(&mac);
    }
    packet
}

/// Broadcasts a Wake-on-LAN magic packet for `mac` on UDP port 9.
pub async fn send(mac: &str) -> Result<(), FdError> {
    let mac_bytes = parse_mac(mac)?;
    let packet = build_magic_packet(mac_bytes);

    let socket = UdpSocket::bind("0.0.0.0:0")
        .await
        .map_err(|e| FdError::upstream_api_failed(format!("binding WOL socket: {e}")))?;
    socket
        .set_broadcast(true)
        .map_err(|e| FdError::upstream_api_failed(format!("enabling broadcast: {e}")))?;
    socket
        .send_to(&packet, ("255.255.255.255", WOL_PORT))
        .await
        .map_err(|e| FdError::upstream_api_failed(format!("sending WOL packet: {e}")))?;

    Ok(())
}

#[cfg(test)]
#[path = "wol_tests.rs"]
mod tests;
