// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opaque identifier newtypes (spec §3).
//!
//! `ClientId` doubles as the MQTT username and the routing key in topic
//! names; `Password` authenticates both the broker session and `update`
//! payloads. Both are plain opaque strings on the wire — the newtypes exist
//! so the compiler stops us from swapping one for the other by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_string_id!(ClientId);
opaque_string_id!(Password);
opaque_string_id!(InstanceName);

#[cfg(test)]
#[path = "ids_tests.rs"]
mod tests;
