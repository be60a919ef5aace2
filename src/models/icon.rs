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

//! Account avatar icon model

use serde::Serialize;
use url::Url;

use super::Entity;

/// Path prefix the instance stores account avatars under.
const AVATAR_PATH_PREFIX: &str = "/system/accounts/avatars/";

/// An account avatar image, identified by its URI.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Icon {
    pub uri: Url,
}

impl Icon {
    pub fn new(uri: Url) -> Self {
        Self { uri }
    }

    /// Recognize a URI as an avatar icon.
    ///
    /// Used by the host's generic "interpret this URI as some known media
    /// type" dispatch: only URIs under the avatar-storage path match, and a
    /// non-match is `None`, not an error.
    pub fn from_uri(uri: Url) -> Option<Self> {
        if uri.path().starts_with(AVATAR_PATH_PREFIX) {
            Some(Self { uri })
        } else {
            None
        }
    }
}

impl Entity for Icon {
    const SLUG: &'static str = "worldon_icon";
    type Key = Url;

    fn natural_key(&self) -> Url {
        self.uri.clone()
    }
}
