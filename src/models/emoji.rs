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

//! Custom emoji model

use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{fields, Entity};
use crate::error::ModelError;

/// A custom emoji usable in statuses and display names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Emoji {
    pub shortcode: String,
    pub static_url: Url,
    pub url: Url,
}

impl Emoji {
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = fields::object(value, Self::SLUG)?;
        Ok(Self {
            shortcode: fields::require_str(obj, Self::SLUG, "shortcode")?,
            static_url: fields::require_url(obj, Self::SLUG, "static_url")?,
            url: fields::require_url(obj, Self::SLUG, "url")?,
        })
    }
}

impl Entity for Emoji {
    const SLUG: &'static str = "worldon_emoji";
    type Key = String;

    fn natural_key(&self) -> String {
        self.shortcode.clone()
    }
}
