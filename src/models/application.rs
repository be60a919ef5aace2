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

//! Application model for the client that posted a status

use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{fields, Entity};
use crate::error::ModelError;

/// The client application a status was posted with.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Application {
    pub name: String,
    pub website: Option<Url>,
}

impl Application {
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = fields::object(value, Self::SLUG)?;
        Ok(Self {
            name: fields::require_str(obj, Self::SLUG, "name")?,
            website: fields::opt_url(obj, Self::SLUG, "website")?,
        })
    }
}

impl Entity for Application {
    const SLUG: &'static str = "worldon_application";
    type Key = String;

    fn natural_key(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_with_optional_website() {
        let app = Application::from_json(&json!({ "name": "Worldon" })).unwrap();
        assert_eq!(app.name, "Worldon");
        assert!(app.website.is_none());

        let app = Application::from_json(&json!({
            "name": "Worldon",
            "website": "https://example.com/worldon"
        }))
        .unwrap();
        assert_eq!(app.website.unwrap().as_str(), "https://example.com/worldon");
    }

    #[test]
    fn name_is_required() {
        let err = Application::from_json(&json!({ "website": "https://example.com" })).unwrap_err();
        assert_eq!(
            err,
            ModelError::missing("worldon_application", "name")
        );
    }
}
