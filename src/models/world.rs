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

//! World model: one authenticated account session on one instance

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use super::{fields, Account, Entity, HasIcon, Icon, Summarize, Visibility};
use crate::api::{ApiCall, Method};
use crate::error::ModelError;

/// A feed surface the host looks a data source up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datasource {
    /// Home timeline.
    Home,
    /// Notifications.
    Notification,
    /// A numbered list timeline.
    List(u64),
}

/// A configured account session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct World {
    pub id: String,

    /// Host-facing short name for this session; datasource identifiers
    /// derive from it.
    pub slug: String,

    /// Instance domain the session authenticates against.
    pub domain: String,

    /// OAuth access token.
    #[serde(skip_serializing)]
    pub access_token: String,

    /// The connected account.
    pub account: Account,

    /// Default visibility for composed statuses.
    pub privacy: Option<Visibility>,

    /// Whether composed statuses default to sensitive.
    pub sensitive: Option<bool>,

    /// Last fetched list-of-lists response. Set once, read many; no
    /// invalidation policy at this layer.
    #[serde(skip_serializing)]
    lists: Option<Value>,
}

impl World {
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = fields::object(value, Self::SLUG)?;

        let privacy = match fields::opt_str(obj, Self::SLUG, "privacy")? {
            None => None,
            Some(raw) => Some(Visibility::parse(&raw).ok_or(ModelError::invalid(
                Self::SLUG,
                "privacy",
                "one of public, unlisted, private, direct",
            ))?),
        };

        Ok(Self {
            id: fields::require_str(obj, Self::SLUG, "id")?,
            slug: fields::require_str(obj, Self::SLUG, "slug")?,
            domain: fields::require_str(obj, Self::SLUG, "domain")?,
            access_token: fields::require_str(obj, Self::SLUG, "access_token")?,
            account: Account::from_json(fields::require(obj, Self::SLUG, "account")?)?,
            privacy,
            sensitive: fields::opt_bool(obj, Self::SLUG, "sensitive")?,
            lists: None,
        })
    }

    /// Session name, alias of `slug`.
    pub fn name(&self) -> &str {
        &self.slug
    }

    /// Stable symbolic identifier for one of this session's feed surfaces.
    pub fn datasource_slug(&self, kind: Datasource) -> String {
        match kind {
            Datasource::Home => format!("worldon-{}-home", self.slug),
            Datasource::Notification => format!("worldon-{}-notification", self.slug),
            Datasource::List(n) => format!("worldon-{}-list-{}", self.slug, n),
        }
    }

    /// Fetch this session's lists, delegated to the API collaborator.
    ///
    /// Pure pass-through: the response shape and error surface belong to the
    /// collaborator.
    pub async fn get_lists(&self, api: &dyn ApiCall) -> Result<Value> {
        api.call(Method::Get, &self.domain, "/api/v1/lists", &self.access_token)
            .await
    }

    /// Previously fetched lists, when [`World::set_lists`] has run.
    pub fn lists(&self) -> Option<&Value> {
        self.lists.as_ref()
    }

    pub fn set_lists(&mut self, lists: Value) {
        self.lists = Some(lists);
    }
}

impl Entity for World {
    const SLUG: &'static str = "worldon_for_mastodon";
    type Key = String;

    fn natural_key(&self) -> String {
        self.id.clone()
    }
}

impl Summarize for World {
    fn title(&self) -> String {
        self.account.title()
    }

    fn description(&self) -> String {
        self.account.description()
    }
}

impl HasIcon for World {
    fn icon(&self) -> Icon {
        self.account.icon()
    }
}
