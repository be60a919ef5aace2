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

//! Field extraction helpers for entity constructors
//!
//! Absent and `null` both count as "no value". A value that is present but
//! of the wrong JSON type is always an [`ModelError::InvalidField`], never a
//! silent default.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use url::Url;

use crate::error::ModelError;

pub(crate) fn object<'a>(
    value: &'a Value,
    entity: &'static str,
) -> Result<&'a Map<String, Value>, ModelError> {
    value.as_object().ok_or(ModelError::NotAnObject { entity })
}

fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

/// A required sub-mapping (nested entity).
pub(crate) fn require<'a>(
    obj: &'a Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<&'a Value, ModelError> {
    present(obj, field).ok_or(ModelError::missing(entity, field))
}

pub(crate) fn require_str(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<String, ModelError> {
    match present(obj, field) {
        None => Err(ModelError::missing(entity, field)),
        Some(value) => value
            .as_str()
            .map(str::to_owned)
            .ok_or(ModelError::invalid(entity, field, "a string")),
    }
}

pub(crate) fn opt_str(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<Option<String>, ModelError> {
    match present(obj, field) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_owned()))
            .ok_or(ModelError::invalid(entity, field, "a string")),
    }
}

pub(crate) fn require_url(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<Url, ModelError> {
    let raw = require_str(obj, entity, field)?;
    Url::parse(&raw).map_err(|_| ModelError::invalid(entity, field, "a valid URL"))
}

pub(crate) fn opt_url(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<Option<Url>, ModelError> {
    match opt_str(obj, entity, field)? {
        None => Ok(None),
        Some(raw) => Url::parse(&raw)
            .map(Some)
            .map_err(|_| ModelError::invalid(entity, field, "a valid URL")),
    }
}

pub(crate) fn require_time(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<DateTime<Utc>, ModelError> {
    let raw = require_str(obj, entity, field)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ModelError::invalid(entity, field, "an RFC 3339 timestamp"))
}

pub(crate) fn opt_bool(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<Option<bool>, ModelError> {
    match present(obj, field) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or(ModelError::invalid(entity, field, "a boolean")),
    }
}

/// An optional count, defaulting to zero when absent.
pub(crate) fn count(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<u64, ModelError> {
    match present(obj, field) {
        None => Ok(0),
        Some(value) => value
            .as_u64()
            .ok_or(ModelError::invalid(entity, field, "a non-negative integer")),
    }
}

/// Expand an optional collection of raw sub-mappings into typed children.
///
/// Runs before the parent's own scalar validation so malformed children fail
/// construction of the whole record.
pub(crate) fn expand<T>(
    obj: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
    build: impl Fn(&Value) -> Result<T, ModelError>,
) -> Result<Vec<T>, ModelError> {
    match present(obj, field) {
        None => Ok(Vec::new()),
        Some(value) => {
            let items = value
                .as_array()
                .ok_or(ModelError::invalid(entity, field, "an array"))?;
            items.iter().map(build).collect()
        }
    }
}
