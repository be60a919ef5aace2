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

//! Status model for a Mastodon status/toot
//!
//! A reblog is a thin pointer overlay: content-facing accessors resolve
//! through [`Status::actual_status`] to the reblogged original, while
//! attribution (`retweeted_by`, the outer `account`) stays on the outer
//! record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{
    fields, Account, Application, Attachment, Emoji, Entity, HasIcon, Icon, Mention, Summarize,
    Tag, Timelineable,
};
use crate::error::ModelError;

/// Visibility level of a status.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Unlisted,
    Private,
    Direct,
}

impl Visibility {
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        match raw {
            "public" => Some(Visibility::Public),
            "unlisted" => Some(Visibility::Unlisted),
            "private" => Some(Visibility::Private),
            "direct" => Some(Visibility::Direct),
            _ => None,
        }
    }
}

/// A Mastodon status.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Status {
    /// Unique identifier on the originating instance.
    pub id: String,

    /// ActivityPub URI of the status.
    pub uri: String,

    /// URL of the status's HTML representation.
    pub url: Url,

    /// The account that authored (or reblogged) this status.
    pub account: Account,

    /// HTML content.
    pub content: String,

    /// When the status was created.
    pub created_at: DateTime<Utc>,

    /// ID of the status this replies to.
    pub in_reply_to_id: Option<String>,

    /// ID of the account this replies to.
    pub in_reply_to_account_id: Option<String>,

    /// The reblogged original, when this status is a reblog.
    pub reblog: Option<Box<Status>>,

    /// Content warning text.
    pub spoiler_text: Option<String>,

    /// Visibility of the status.
    pub visibility: Option<Visibility>,

    /// Language of the status (ISO 639-1).
    pub language: Option<String>,

    /// The client application the status was posted with.
    pub application: Option<Application>,

    pub reblogs_count: u64,
    pub favourites_count: u64,

    pub sensitive: Option<bool>,
    pub reblogged: Option<bool>,
    pub favourited: Option<bool>,
    pub muted: Option<bool>,
    pub pinned: Option<bool>,

    /// Custom emoji used in the content.
    pub emojis: Vec<Emoji>,

    /// Media attachments.
    pub media_attachments: Vec<Attachment>,

    /// Accounts mentioned in the content.
    pub mentions: Vec<Mention>,

    /// Hashtags used in the content.
    pub tags: Vec<Tag>,
}

impl Status {
    pub fn from_json(value: &Value) -> Result<Self, ModelError> {
        Self::from_json_at(value, 0)
    }

    /// Build a batch of statuses from the elements of a JSON array.
    pub fn from_json_array(values: &[Value]) -> Result<Vec<Self>, ModelError> {
        values.iter().map(Self::from_json).collect()
    }

    fn from_json_at(value: &Value, depth: u8) -> Result<Self, ModelError> {
        let obj = fields::object(value, Self::SLUG)?;

        // Collection-valued sub-entities expand into typed children before
        // the scalar fields are validated.
        let emojis = fields::expand(obj, Self::SLUG, "emojis", Emoji::from_json)?;
        let media_attachments =
            fields::expand(obj, Self::SLUG, "media_attachments", Attachment::from_json)?;
        let mentions = fields::expand(obj, Self::SLUG, "mentions", Mention::from_json)?;
        let tags = fields::expand(obj, Self::SLUG, "tags", Tag::from_json)?;

        // Reblogs are never nested by protocol contract; anything deeper in
        // malformed input is discarded rather than followed.
        let reblog = match obj.get("reblog") {
            None | Some(Value::Null) => None,
            Some(_) if depth >= 1 => None,
            Some(raw) => Some(Box::new(Self::from_json_at(raw, depth + 1)?)),
        };

        let application = match obj.get("application") {
            None | Some(Value::Null) => None,
            Some(raw) => Some(Application::from_json(raw)?),
        };

        let visibility = match fields::opt_str(obj, Self::SLUG, "visibility")? {
            None => None,
            Some(raw) => Some(Visibility::parse(&raw).ok_or(ModelError::invalid(
                Self::SLUG,
                "visibility",
                "one of public, unlisted, private, direct",
            ))?),
        };

        Ok(Self {
            id: fields::require_str(obj, Self::SLUG, "id")?,
            uri: fields::require_str(obj, Self::SLUG, "uri")?,
            url: fields::require_url(obj, Self::SLUG, "url")?,
            account: Account::from_json(fields::require(obj, Self::SLUG, "account")?)?,
            content: fields::require_str(obj, Self::SLUG, "content")?,
            created_at: fields::require_time(obj, Self::SLUG, "created_at")?,
            in_reply_to_id: fields::opt_str(obj, Self::SLUG, "in_reply_to_id")?,
            in_reply_to_account_id: fields::opt_str(obj, Self::SLUG, "in_reply_to_account_id")?,
            reblog,
            spoiler_text: fields::opt_str(obj, Self::SLUG, "spoiler_text")?,
            visibility,
            language: fields::opt_str(obj, Self::SLUG, "language")?,
            application,
            reblogs_count: fields::count(obj, Self::SLUG, "reblogs_count")?,
            favourites_count: fields::count(obj, Self::SLUG, "favourites_count")?,
            sensitive: fields::opt_bool(obj, Self::SLUG, "sensitive")?,
            reblogged: fields::opt_bool(obj, Self::SLUG, "reblogged")?,
            favourited: fields::opt_bool(obj, Self::SLUG, "favourited")?,
            muted: fields::opt_bool(obj, Self::SLUG, "muted")?,
            pinned: fields::opt_bool(obj, Self::SLUG, "pinned")?,
            emojis,
            media_attachments,
            mentions,
            tags,
        })
    }

    /// The status content reads resolve through: the reblogged original when
    /// this is a reblog, otherwise the status itself.
    pub fn actual_status(&self) -> &Status {
        self.reblog.as_deref().unwrap_or(self)
    }

    /// The author of the content, read through the resolved status.
    pub fn user(&self) -> &Account {
        &self.actual_status().account
    }

    pub fn retweet_count(&self) -> u64 {
        self.actual_status().reblogs_count
    }

    pub fn favorite_count(&self) -> u64 {
        self.actual_status().favourites_count
    }

    /// Accounts that reblogged this status into the current view: the outer
    /// account when this is a reblog, empty otherwise.
    pub fn retweeted_by(&self) -> Vec<&Account> {
        if self.reblog.is_some() {
            vec![&self.account]
        } else {
            Vec::new()
        }
    }

    pub fn is_sensitive(&self) -> bool {
        self.actual_status().sensitive.unwrap_or(false)
    }

    pub fn is_retweeted(&self) -> bool {
        self.reblogged.unwrap_or(false)
    }

    pub fn is_favorited(&self) -> bool {
        self.favourited.unwrap_or(false)
    }

    pub fn is_muted(&self) -> bool {
        self.muted.unwrap_or(false)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.unwrap_or(false)
    }

    /// Permalink to the status, alias of `url`.
    pub fn perma_link(&self) -> &Url {
        &self.url
    }

    fn spoiler(&self) -> Option<&str> {
        self.spoiler_text.as_deref().filter(|cw| !cw.is_empty())
    }
}

impl Entity for Status {
    const SLUG: &'static str = "worldon_status";
    type Key = String;

    fn natural_key(&self) -> String {
        self.id.clone()
    }
}

impl Summarize for Status {
    /// Spoiler text verbatim when present, else the raw (unstripped) content.
    fn title(&self) -> String {
        let msg = self.actual_status();
        match msg.spoiler() {
            Some(cw) => cw.to_owned(),
            None => msg.content.clone(),
        }
    }

    /// Normalized plain-ish text, with the spoiler and a separator line
    /// prepended when a content warning exists.
    fn description(&self) -> String {
        let msg = self.actual_status();
        let body = dehtmlize(&msg.content);
        match msg.spoiler() {
            Some(cw) => format!("{}\n----\n{}", dehtmlize(cw), body),
            None => body,
        }
    }
}

impl Timelineable for Status {
    fn created(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl HasIcon for Status {
    fn icon(&self) -> Icon {
        self.user().icon()
    }
}

/// Normalize HTML-ish status content to text.
///
/// Strips `<p>` at the start and `</p>` at the end of every line, drops
/// `<span>` wrappers, and turns `<br>` variants and `</p><p>` paragraph
/// boundaries into newlines. Any other markup passes through untouched.
pub(crate) fn dehtmlize(text: &str) -> String {
    let unwrapped = text
        .split('\n')
        .map(|line| {
            let line = line.strip_prefix("<p>").unwrap_or(line);
            line.strip_suffix("</p>").unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut rest = unwrapped.as_str();
    let mut out = String::with_capacity(rest.len());
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let tagged = &rest[lt..];
        let Some(gt) = tagged.find('>') else {
            // Unterminated tag, emit as-is.
            out.push_str(tagged);
            return out;
        };
        let tag = &tagged[1..gt];
        rest = &tagged[gt + 1..];

        let bare = tag.strip_prefix('/').unwrap_or(tag);
        if tag == "/p" && rest.starts_with("<p>") {
            out.push('\n');
            rest = &rest[3..];
        } else if tag == "br" || tag.starts_with("br ") || tag.starts_with("br/") {
            out.push('\n');
        } else if bare == "span" || bare.starts_with("span ") {
            // span wrappers carry no text of their own
        } else {
            out.push_str(&tagged[..gt + 1]);
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account_json(acct: &str) -> Value {
        json!({
            "acct": acct,
            "display_name": acct.to_uppercase(),
            "avatar": "https://example.com/system/accounts/avatars/1/2/3.png",
            "url": format!("https://example.com/@{acct}")
        })
    }

    fn status_json(id: &str, acct: &str, content: &str) -> Value {
        json!({
            "id": id,
            "uri": format!("https://example.com/users/{acct}/statuses/{id}"),
            "url": format!("https://example.com/@{acct}/{id}"),
            "account": account_json(acct),
            "content": content,
            "created_at": "2019-04-01T12:00:00Z"
        })
    }

    fn reblog_json() -> Value {
        let mut outer = status_json("2", "booster", "");
        let inner = status_json("1", "author", "<p>original words</p>");
        let obj = outer.as_object_mut().unwrap();
        obj.insert("reblog".into(), inner);
        obj.insert("reblogs_count".into(), json!(0));
        outer
    }

    #[test]
    fn plain_status_resolves_to_itself() {
        let status = Status::from_json(&status_json("1", "alice", "<p>hi</p>")).unwrap();
        assert_eq!(status.actual_status().id, status.id);
        assert!(status.retweeted_by().is_empty());
        assert_eq!(status.user().acct, "alice");
    }

    #[test]
    fn reblog_resolves_to_the_original() {
        let status = Status::from_json(&reblog_json()).unwrap();
        assert_eq!(status.actual_status().id, "1");
        assert_eq!(status.user().acct, "author");
        assert_eq!(status.description(), "original words");
        assert_eq!(status.title(), "<p>original words</p>");
    }

    #[test]
    fn attribution_stays_on_the_outer_record() {
        let status = Status::from_json(&reblog_json()).unwrap();
        let rebloggers = status.retweeted_by();
        assert_eq!(rebloggers.len(), 1);
        assert_eq!(rebloggers[0].acct, "booster");
        assert_eq!(status.account.acct, "booster");
    }

    #[test]
    fn counts_read_through_the_original() {
        let mut raw = reblog_json();
        let inner = raw.as_object_mut().unwrap().get_mut("reblog").unwrap();
        let inner_obj = inner.as_object_mut().unwrap();
        inner_obj.insert("reblogs_count".into(), json!(12));
        inner_obj.insert("favourites_count".into(), json!(7));
        inner_obj.insert("sensitive".into(), json!(true));

        let status = Status::from_json(&raw).unwrap();
        assert_eq!(status.retweet_count(), 12);
        assert_eq!(status.favorite_count(), 7);
        assert!(status.is_sensitive());
    }

    #[test]
    fn counts_default_to_zero() {
        let status = Status::from_json(&status_json("1", "alice", "x")).unwrap();
        assert_eq!(status.retweet_count(), 0);
        assert_eq!(status.favorite_count(), 0);
        assert!(!status.is_sensitive());
        assert!(!status.is_retweeted());
    }

    #[test]
    fn nested_reblogs_are_dropped() {
        let mut raw = reblog_json();
        let inner = raw.as_object_mut().unwrap().get_mut("reblog").unwrap();
        inner
            .as_object_mut()
            .unwrap()
            .insert("reblog".into(), status_json("0", "deep", "nope"));

        let status = Status::from_json(&raw).unwrap();
        assert!(status.reblog.as_ref().unwrap().reblog.is_none());
        assert_eq!(status.actual_status().id, "1");
    }

    #[test]
    fn description_strips_paragraph_wrapper() {
        let status = Status::from_json(&status_json("1", "alice", "<p>Hello</p>")).unwrap();
        assert_eq!(status.description(), "Hello");
    }

    #[test]
    fn description_prepends_spoiler_with_separator() {
        let mut raw = status_json("1", "alice", "<p>Hello</p>");
        raw.as_object_mut()
            .unwrap()
            .insert("spoiler_text".into(), json!("cw"));
        let status = Status::from_json(&raw).unwrap();
        assert_eq!(status.description(), "cw\n----\nHello");
        assert_eq!(status.title(), "cw");
    }

    #[test]
    fn empty_spoiler_counts_as_absent() {
        let mut raw = status_json("1", "alice", "<p>Hello</p>");
        raw.as_object_mut()
            .unwrap()
            .insert("spoiler_text".into(), json!(""));
        let status = Status::from_json(&raw).unwrap();
        assert_eq!(status.description(), "Hello");
        assert_eq!(status.title(), "<p>Hello</p>");
    }

    #[test]
    fn collections_expand_before_validation() {
        let mut raw = status_json("1", "alice", "<p>Hello</p>");
        let obj = raw.as_object_mut().unwrap();
        obj.insert(
            "emojis".into(),
            json!([{
                "shortcode": "blobcat",
                "static_url": "https://files.example.com/s.png",
                "url": "https://files.example.com/a.png"
            }]),
        );
        obj.insert(
            "tags".into(),
            json!([{ "name": "rustlang", "url": "https://example.com/tags/rustlang" }]),
        );
        obj.insert(
            "mentions".into(),
            json!([{
                "id": "9",
                "url": "https://example.com/@bob",
                "username": "bob",
                "acct": "bob"
            }]),
        );
        obj.insert(
            "media_attachments".into(),
            json!([{
                "id": "7",
                "type": "image",
                "preview_url": "https://files.example.com/7/small.png"
            }]),
        );

        let status = Status::from_json(&raw).unwrap();
        assert_eq!(status.emojis[0].shortcode, "blobcat");
        assert_eq!(status.tags[0].name, "rustlang");
        assert_eq!(status.mentions[0].acct, "bob");
        assert_eq!(status.media_attachments[0].id, "7");
    }

    #[test]
    fn malformed_child_fails_the_whole_record() {
        let mut raw = status_json("1", "alice", "x");
        raw.as_object_mut()
            .unwrap()
            .insert("tags".into(), json!([{ "name": "rustlang" }]));
        let err = Status::from_json(&raw).unwrap_err();
        assert_eq!(err, ModelError::missing("worldon_tag", "url"));
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let mut raw = status_json("1", "alice", "x");
        raw.as_object_mut().unwrap().remove("created_at");
        let err = Status::from_json(&raw).unwrap_err();
        assert_eq!(err, ModelError::missing("worldon_status", "created_at"));
    }

    #[test]
    fn bad_timestamp_is_a_shape_error() {
        let mut raw = status_json("1", "alice", "x");
        raw.as_object_mut()
            .unwrap()
            .insert("created_at".into(), json!("yesterday"));
        let err = Status::from_json(&raw).unwrap_err();
        assert_eq!(
            err,
            ModelError::invalid("worldon_status", "created_at", "an RFC 3339 timestamp")
        );
    }

    #[test]
    fn unknown_visibility_is_a_shape_error() {
        let mut raw = status_json("1", "alice", "x");
        raw.as_object_mut()
            .unwrap()
            .insert("visibility".into(), json!("worldwide"));
        assert!(Status::from_json(&raw).is_err());

        let mut raw = status_json("1", "alice", "x");
        raw.as_object_mut()
            .unwrap()
            .insert("visibility".into(), json!("unlisted"));
        let status = Status::from_json(&raw).unwrap();
        assert_eq!(status.visibility, Some(Visibility::Unlisted));
    }

    #[test]
    fn from_json_array_builds_a_batch() {
        let values = vec![
            status_json("1", "alice", "a"),
            status_json("2", "bob", "b"),
        ];
        let statuses = Status::from_json_array(&values).unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[1].id, "2");
    }

    #[test]
    fn dehtmlize_converts_breaks_and_paragraphs() {
        assert_eq!(dehtmlize("<p>Hello</p>"), "Hello");
        assert_eq!(dehtmlize("<p>one</p><p>two</p>"), "one\ntwo");
        assert_eq!(dehtmlize("<p>a<br>b<br/>c<br />d</p>"), "a\nb\nc\nd");
        assert_eq!(
            dehtmlize("<p><span class=\"h-card\">@bob</span> hi</p>"),
            "@bob hi"
        );
    }

    #[test]
    fn null_optionals_are_treated_as_absent() {
        let mut raw = status_json("1", "alice", "<p>Hello</p>");
        let obj = raw.as_object_mut().unwrap();
        obj.insert("spoiler_text".into(), Value::Null);
        obj.insert("reblog".into(), Value::Null);
        obj.insert("sensitive".into(), Value::Null);
        obj.insert("reblogs_count".into(), Value::Null);
        obj.get_mut("account")
            .unwrap()
            .as_object_mut()
            .unwrap()
            .insert("display_name".into(), Value::Null);

        let status = Status::from_json(&raw).unwrap();
        assert_eq!(status.description(), "Hello");
        assert_eq!(status.actual_status().id, status.id);
        assert!(status.retweeted_by().is_empty());
        assert!(!status.is_sensitive());
        assert_eq!(status.retweet_count(), 0);
        assert_eq!(status.account.name(), "");
    }

    #[test]
    fn dehtmlize_strips_wrappers_at_line_boundaries() {
        assert_eq!(dehtmlize("<p>one</p>\n<p>two</p>"), "one\ntwo");
        assert_eq!(dehtmlize("plain\n<p>wrapped</p>"), "plain\nwrapped");
    }

    #[test]
    fn dehtmlize_leaves_other_markup_alone() {
        assert_eq!(
            dehtmlize("<p>see <a href=\"https://example.com\">this</a></p>"),
            "see <a href=\"https://example.com\">this</a>"
        );
    }
}
