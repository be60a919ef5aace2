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

//! Mention model for accounts referenced in a status

use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{fields, Entity};
use crate::error::ModelError;

/// An account mentioned in a status.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Mention {
    pub id: String,
    pub url: Url,
    pub username: String,
    pub acct: String,
}

impl Mention {
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = fields::object(value, Self::SLUG)?;
        Ok(Self {
            id: fields::require_str(obj, Self::SLUG, "id")?,
            url: fields::require_url(obj, Self::SLUG, "url")?,
            username: fields::require_str(obj, Self::SLUG, "username")?,
            acct: fields::require_str(obj, Self::SLUG, "acct")?,
        })
    }
}

impl Entity for Mention {
    const SLUG: &'static str = "worldon_mention";
    type Key = String;

    fn natural_key(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_fields_required() {
        let err = Mention::from_json(&json!({
            "id": "42",
            "url": "https://example.com/@alice",
            "username": "alice"
        }))
        .unwrap_err();
        assert_eq!(err, ModelError::missing("worldon_mention", "acct"));
    }
}
