// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Broker user-management HTTP API (spec §6), Basic-authenticated against
//! EMQX's built-in database authenticator.

use fd_config::{ClientAuth, EmqxApiConfig, MqttClientOpts};
use fd_core::FdError;
use serde::Serialize;

const AUTHENTICATOR_PATH: &str = "password_based:built_in_database";
const TOPIC_PREFIX: &str = "frp";

#[derive(Serialize)]
struct CreateUserBody<'a> {
    user_id: &'a str,
    password: &'a str,
    is_superuser: bool,
}

pub struct EmqxApi {
    config: EmqxApiConfig,
    client: reqwest::Client,
}

impl EmqxApi {
    pub fn new(config: EmqxApiConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }

    /// Creates an MQTT user for `auth` and returns the connection options
    /// the newly provisioned client should use.
    pub async fn create_user(&self, auth: &ClientAuth) -> Result<MqttClientOpts, FdError> {
        let url = format!("{}/api/v5/authentication/{AUTHENTICATOR_PATH}/users", self.config.api_endpoint);
        let body = CreateUserBody { user_id: &auth.client_id, password: &auth.password, is_superuser: false };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.api_app_key, Some(&self.config.api_secret_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| FdError::upstream_api_failed(format!("create_user request failed: {e}")))?;

        if response.status() != reqwest::StatusCode::CREATED {
            return Err(FdError::upstream_api_failed(format!(
                "create_user failed: status {}",
                response.status()
            )));
        }

        Ok(MqttClientOpts {
            broker: self.config.mqtt_broker.clone(),
            client_id: auth.client_id.clone(),
            username: auth.client_id.clone(),
            password: auth.password.clone(),
            topic_prefix: TOPIC_PREFIX.to_string(),
        })
    }

    pub async fn delete_user(&self, auth: &ClientAuth) -> Result<(), FdError> {
        let url = format!(
            "{}/api/v5/authentication/{AUTHENTICATOR_PATH}/users/{}",
            self.config.api_endpoint, auth.client_id
        );

        let response = self
            .client
            .delete(&url)
            .basic_auth(&self.config.api_app_key, Some(&self.config.api_secret_key))
            .send()
            .await
            .map_err(|e| FdError::upstream_api_failed(format!("delete_user request failed: {e}")))?;

        if response.status() != reqwest::StatusCode::NO_CONTENT {
            return Err(FdError::upstream_api_failed(format!(
                "delete_user failed: status {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "emqx_tests.rs"]
mod tests;
