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

//! Worldon Core - Mastodon data-model bindings
//!
//! Typed entity records for a Mastodon-compatible API (accounts, statuses,
//! attachments, mentions, tags, emoji, applications), constructed from parsed
//! JSON with validated required fields, plus an interning registry and the
//! API-calling collaborator used to fetch a session's lists. Transport,
//! scheduling, and instance lifetime stay with the host application.

pub mod api;
pub mod error;
pub mod logger;
pub mod models;
pub mod registry;

pub use error::ModelError;
pub use models::{
    Account, Application, Attachment, AttachmentType, Datasource, Emoji, Entity, HasIcon, Icon,
    Mention, Status, Summarize, Tag, Timelineable, Visibility, World,
};
pub use registry::Registry;
