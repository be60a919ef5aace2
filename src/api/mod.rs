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

//! Outbound API collaborator
//!
//! The model layer only ever reaches the network through the
//! `(method, domain, path, access_token) -> response` contract below. The
//! response shape, retries, and timeouts are owned by the implementation,
//! not by the models that call it.

mod client;

pub use client::RestClient;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP method of a collaborator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// The external API-calling collaborator.
#[async_trait]
pub trait ApiCall: Send + Sync {
    async fn call(
        &self,
        method: Method,
        domain: &str,
        path: &str,
        access_token: &str,
    ) -> Result<Value>;
}
