// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn appends_each_complete_line_to_the_buffer() {
    let log = Arc::new(Mutex::new(LogBuffer::new()));
    let data = "one\ntwo\nthree\n";
    spawn_tail(data.as_bytes(), log.clone(), "t1".to_string(), "stdout");

    // Give the tail task a chance to drain the in-memory reader.
    for _ in 0..50 {
        if log.lock().len() == 3 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    assert_eq!(log.lock().lines(), vec!["one", "two", "three"]);
}
