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

//! Construction errors for the model layer

use thiserror::Error;

/// Error raised while building an entity from a JSON mapping.
///
/// The only failure mode at this layer is validation: a required field that
/// is absent, or a field whose value has the wrong shape. Callers in the
/// host's ingestion pipeline match on the variant to tell the two apart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A required field was absent (or explicitly `null`).
    #[error("{entity}: missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A field was present but its value has the wrong shape.
    #[error("{entity}: field `{field}` is not {expected}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    /// The input itself was not a JSON object.
    #[error("{entity}: expected a JSON object")]
    NotAnObject { entity: &'static str },
}

impl ModelError {
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        ModelError::MissingField { entity, field }
    }

    pub fn invalid(entity: &'static str, field: &'static str, expected: &'static str) -> Self {
        ModelError::InvalidField {
            entity,
            field,
            expected,
        }
    }
}
