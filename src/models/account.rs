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

//! Account model for a Mastodon user

use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::status::dehtmlize;
use super::{fields, Entity, HasIcon, Icon, Summarize};
use crate::error::ModelError;

/// A Mastodon account.
///
/// Identity and naming are aliases onto `acct`, `display_name`, and `url`;
/// there is no independent state behind them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Account {
    /// Full account name (`user` for local, `user@domain` for remote).
    pub acct: String,

    /// Display name, when the user has set one.
    pub display_name: Option<String>,

    /// URL of the avatar image.
    pub avatar: Url,

    /// URL of the profile page.
    pub url: Url,

    /// Profile bio (HTML).
    pub note: Option<String>,
}

impl Account {
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = fields::object(value, Self::SLUG)?;
        Ok(Self {
            acct: fields::require_str(obj, Self::SLUG, "acct")?,
            display_name: fields::opt_str(obj, Self::SLUG, "display_name")?,
            avatar: fields::require_url(obj, Self::SLUG, "avatar")?,
            url: fields::require_url(obj, Self::SLUG, "url")?,
            note: fields::opt_str(obj, Self::SLUG, "note")?,
        })
    }

    /// Screen name, alias of `acct`.
    pub fn idname(&self) -> &str {
        &self.acct
    }

    /// Display name; empty when the user has not set one.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }

    /// Permalink to the profile, alias of `url`.
    pub fn perma_link(&self) -> &Url {
        &self.url
    }

    /// Canonical URI, alias of `url`.
    pub fn uri(&self) -> &Url {
        &self.url
    }
}

impl Entity for Account {
    const SLUG: &'static str = "worldon_account";
    type Key = String;

    fn natural_key(&self) -> String {
        self.acct.clone()
    }
}

impl Summarize for Account {
    fn title(&self) -> String {
        format!("{}({})", self.acct, self.name())
    }

    fn description(&self) -> String {
        self.note.as_deref().map(dehtmlize).unwrap_or_default()
    }
}

impl HasIcon for Account {
    fn icon(&self) -> Icon {
        Icon::new(self.avatar.clone())
    }
}
