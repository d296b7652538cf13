// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn base_dir_honors_the_override_env_var() {
    std::env::set_var("FRP_DAEMON_BASE_DIR", "/tmp/fd-cli-env-test-base");
    assert_eq!(base_dir(), PathBuf::from("/tmp/fd-cli-env-test-base"));
    assert_eq!(controller_config_path(), PathBuf::from("/tmp/fd-cli-env-test-base/controller.yaml"));
    std::env::remove_var("FRP_DAEMON_BASE_DIR");
}

#[test]
#[serial]
fn base_dir_falls_back_to_home_when_unset() {
    std::env::remove_var("FRP_DAEMON_BASE_DIR");
    assert!(base_dir().ends_with(".frp-daemon"));
}
