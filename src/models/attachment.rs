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

//! Media attachment model

use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{fields, Entity};
use crate::error::ModelError;

/// Type of media attachment.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentType {
    Image,
    Video,
    Gifv,
    Audio,
    Unknown,
}

impl AttachmentType {
    fn parse(raw: &str) -> Self {
        match raw {
            "image" => AttachmentType::Image,
            "video" => AttachmentType::Video,
            "gifv" => AttachmentType::Gifv,
            "audio" => AttachmentType::Audio,
            _ => AttachmentType::Unknown,
        }
    }
}

/// A media attachment on a status.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Attachment {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: AttachmentType,
    pub preview_url: Url,
    pub url: Option<Url>,
    pub remote_url: Option<Url>,
    pub text_url: Option<Url>,
    /// Alt text description.
    pub description: Option<String>,
    /// Auxiliary metadata blob, carried verbatim. Not covered by field
    /// validation; callers must not rely on its shape.
    pub meta: Option<Value>,
}

impl Attachment {
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        let obj = fields::object(value, Self::SLUG)?;
        Ok(Self {
            id: fields::require_str(obj, Self::SLUG, "id")?,
            media_type: AttachmentType::parse(&fields::require_str(obj, Self::SLUG, "type")?),
            preview_url: fields::require_url(obj, Self::SLUG, "preview_url")?,
            url: fields::opt_url(obj, Self::SLUG, "url")?,
            remote_url: fields::opt_url(obj, Self::SLUG, "remote_url")?,
            text_url: fields::opt_url(obj, Self::SLUG, "text_url")?,
            description: fields::opt_str(obj, Self::SLUG, "description")?,
            meta: match obj.get("meta") {
                None | Some(Value::Null) => None,
                Some(meta) => Some(meta.clone()),
            },
        })
    }
}

impl Entity for Attachment {
    const SLUG: &'static str = "worldon_attachment";
    type Key = String;

    fn natural_key(&self) -> String {
        self.id.clone()
    }
}
