// Worldon - Mastodon-compatible data-model bindings
// Copyright (C) 2026 Worldon Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! reqwest-backed implementation of the API collaborator

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use super::{ApiCall, Method};
use crate::log_api_call;

/// Plain REST client for Mastodon-compatible instances.
pub struct RestClient {
    http: reqwest::Client,
}

impl RestClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl ApiCall for RestClient {
    async fn call(
        &self,
        method: Method,
        domain: &str,
        path: &str,
        access_token: &str,
    ) -> Result<Value> {
        let url = format!("{}{}", normalize_domain(domain), path);
        log_api_call!(method.as_str(), &url);

        let response = self
            .http
            .request(method.into(), &url)
            .bearer_auth(access_token)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "{url} returned {status}");

        response
            .json::<Value>()
            .await
            .with_context(|| format!("invalid JSON body from {url}"))
    }
}

/// Normalize a configured domain into an https base URL.
fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('/');
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    }
}
