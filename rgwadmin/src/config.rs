// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use http::header::ACCEPT;
use http::HeaderMap;
use http::HeaderValue;
use rgwadmin_core::utils::Redact;
use rgwadmin_core::{Context, Error, Result};

use crate::constants::*;

/// Config for the admin client.
#[derive(Clone)]
pub struct Config {
    /// `address` of the gateway as `host[:port]`, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_ADDRESS`]
    pub address: Option<String>,
    /// `admin_path` the admin API is mounted on, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_PATH`]
    /// - default to `admin`
    pub admin_path: Option<String>,
    /// `no_ssl` switches the scheme to `http`, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_NO_SSL`]
    pub no_ssl: Option<bool>,
    /// `silent` suppresses the request logs of the client, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_SILENT`]
    pub silent: Option<bool>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RGW_ADMIN_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// Headers sent with every request, `Accept: application/json` by default.
    pub default_headers: HeaderMap,
}

impl Default for Config {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            address: None,
            admin_path: None,
            no_ssl: None,
            silent: None,
            access_key_id: None,
            secret_access_key: None,
            default_headers,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("address", &self.address)
            .field("admin_path", &self.admin_path)
            .field("no_ssl", &self.no_ssl)
            .field("silent", &self.silent)
            .field(
                "access_key_id",
                &self.access_key_id.as_ref().map(Redact::from),
            )
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(Redact::from),
            )
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(RGW_ADMIN_ADDRESS) {
            self.address.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(RGW_ADMIN_PATH) {
            self.admin_path.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(RGW_ADMIN_NO_SSL) {
            self.no_ssl.get_or_insert(parse_flag(&v));
        }
        if let Some(v) = ctx.env_var(RGW_ADMIN_SILENT) {
            self.silent.get_or_insert(parse_flag(&v));
        }
        if let Some(v) = ctx.env_var(RGW_ADMIN_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(RGW_ADMIN_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }

        self
    }

    /// Set the gateway address, e.g. `rgw.example.com:8080`.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the admin path.
    pub fn with_admin_path(mut self, admin_path: impl Into<String>) -> Self {
        self.admin_path = Some(admin_path.into());
        self
    }

    /// Talk plain http instead of https.
    pub fn with_no_ssl(mut self, no_ssl: bool) -> Self {
        self.no_ssl = Some(no_ssl);
        self
    }

    /// Suppress request logs.
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = Some(silent);
        self
    }

    /// Set static credentials.
    pub fn with_credential(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Add a header sent with every request, replacing any previous value.
    pub fn with_default_header(mut self, name: http::HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Is plain http used?
    pub fn is_no_ssl(&self) -> bool {
        self.no_ssl.unwrap_or_default()
    }

    /// Are request logs suppressed?
    pub fn is_silent(&self) -> bool {
        self.silent.unwrap_or_default()
    }

    /// The configured admin path without surrounding slashes.
    pub fn admin_path(&self) -> &str {
        self.admin_path
            .as_deref()
            .map(|p| p.trim_matches('/'))
            .unwrap_or(DEFAULT_ADMIN_PATH)
    }

    /// Base address requests are sent to: `scheme://address/admin_path`.
    pub fn service_address(&self) -> Result<String> {
        let address = self
            .address
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("gateway address is not configured"))?;
        let scheme = if self.is_no_ssl() { "http" } else { "https" };

        Ok(format!("{scheme}://{address}/{}", self.admin_path()))
    }
}

fn parse_flag(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rgwadmin_core::{ErrorKind, StaticEnv};

    use super::*;

    fn ctx(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.admin_path(), "admin");
        assert!(!cfg.is_no_ssl());
        assert!(!cfg.is_silent());
        assert_eq!(cfg.default_headers[ACCEPT], "application/json");
        assert_eq!(
            cfg.service_address().unwrap_err().kind(),
            ErrorKind::ConfigInvalid
        );
    }

    #[test]
    fn test_from_env() {
        let cfg = Config::default().from_env(&ctx(&[
            (RGW_ADMIN_ADDRESS, "rgw.example.com:8080"),
            (RGW_ADMIN_PATH, "/ops/"),
            (RGW_ADMIN_NO_SSL, "1"),
            (RGW_ADMIN_SILENT, "false"),
            (RGW_ADMIN_ACCESS_KEY_ID, "admin-access-key"),
            (RGW_ADMIN_SECRET_ACCESS_KEY, "admin-secret-key"),
        ]));

        assert_eq!(cfg.address.as_deref(), Some("rgw.example.com:8080"));
        assert!(cfg.is_no_ssl());
        assert!(!cfg.is_silent());
        assert_eq!(cfg.access_key_id.as_deref(), Some("admin-access-key"));
        assert_eq!(
            cfg.service_address().unwrap(),
            "http://rgw.example.com:8080/ops"
        );
    }

    #[test]
    fn test_explicit_fields_win_over_env() {
        let cfg = Config::default()
            .with_address("rgw.internal")
            .with_no_ssl(false)
            .from_env(&ctx(&[
                (RGW_ADMIN_ADDRESS, "rgw.example.com"),
                (RGW_ADMIN_NO_SSL, "true"),
            ]));

        assert_eq!(cfg.service_address().unwrap(), "https://rgw.internal/admin");
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let cfg =
            Config::default().with_credential("0555b35654ad1656d804", "h7GhxuBLTrlhVUyxSPUKUV8r");
        let out = format!("{cfg:?}");
        assert!(out.contains("055***804"));
        assert!(!out.contains("h7GhxuBLTrlhVUyxSPUKUV8r"));
    }

    #[test]
    fn test_default_headers() {
        let cfg = Config::default()
            .with_default_header(ACCEPT, HeaderValue::from_static("application/xml"))
            .with_default_header(
                http::header::USER_AGENT,
                HeaderValue::from_static("rgwadmin-test"),
            );

        assert_eq!(cfg.default_headers.len(), 2);
        assert_eq!(cfg.default_headers[ACCEPT], "application/xml");
        assert_eq!(
            cfg.default_headers[http::header::USER_AGENT],
            "rgwadmin-test"
        );
    }
}
