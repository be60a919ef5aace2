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

//! Data models for Worldon
//!
//! Each entity is an immutable record built from a parsed JSON mapping by a
//! validating `from_json` constructor. Capability traits replace the host
//! framework's mixins; the `Entity` trait carries the symbolic registry slug
//! and the natural key used for interning.

mod account;
mod application;
mod attachment;
mod emoji;
pub(crate) mod fields;
mod icon;
mod mention;
mod status;
mod tag;
mod world;

pub use account::*;
pub use application::*;
pub use attachment::*;
pub use emoji::*;
pub use icon::*;
pub use mention::*;
pub use status::*;
pub use tag::*;
pub use world::*;

use chrono::{DateTime, Utc};
use std::hash::Hash;

/// A typed record mapped from a remote API's JSON object.
///
/// The slug is the symbolic name the host's model registry looks the type up
/// under; the natural key deduplicates instances of the type.
pub trait Entity {
    /// Symbolic registry name for this entity type.
    const SLUG: &'static str;

    /// Field(s) used to intern instances of this type.
    type Key: Eq + Hash + Clone;

    fn natural_key(&self) -> Self::Key;
}

/// Title/description surface every displayable model provides.
pub trait Summarize {
    fn title(&self) -> String;
    fn description(&self) -> String;
}

/// Models that can be rendered with an avatar icon.
pub trait HasIcon {
    fn icon(&self) -> Icon;
}

/// Models that can appear on a timeline.
pub trait Timelineable: Summarize {
    fn created(&self) -> DateTime<Utc>;
}
