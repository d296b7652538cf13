// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn parse_mac_accepts_colon_and_dash_separators() {
    assert_eq!(parse_mac("00:11:22:33:44:55").unwrap(), [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    assert_eq!(parse_mac("00-11-22-33-44-55").unwrap(), [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
}

#[test]
fn parse_mac_rejects_malformed_input() {
    assert!(parse_mac("not-a-mac").is_err());
    assert!(parse_mac("00:11:22:33:44").is_err());
}

#[test]
fn magic_packet_is_102_bytes_with_six_sync_bytes_then_16_repetitions() {
    let mac = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
    let packet = build_magic_packet(mac);
    assert_eq!(packet.len(), 102);
    assert_eq!(&packet[0..6], &[0xFF; 6]);
    for repetition in 0..16 {
        let offset = 6 + repetition * 6;
        assert_eq!(&packet[offset..offset + 6], &mac);
    }
}

#[tokio::test]
async fn send_succeeds_for_a_well_formed_mac() {
    send("aa:bb:cc:dd:ee:ff").await.unwrap();
}

#[tokio::test]
async fn send_fails_for_a_malformed_mac() {
    send("garbage").await.unwrap_err();
}
