//! Profiles as the directory describes them, and as devfinder keeps them.

use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

/// A username identifying one profile in the directory.
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display)]
pub struct Handle(String);

impl Handle {
    /// Returns `None` when `input` is empty or only whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The body of a successful `/users/{handle}` response. Fields devfinder doesn't show are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    pub location: Option<String>,
    pub twitter_username: Option<String>,
    pub blog: Option<String>,
    pub html_url: Option<String>,
}

/// Where a profile's picture comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Avatar {
    Remote(String),
    /// The profile has no picture; front ends show their bundled placeholder.
    Placeholder,
}

/// A profile returned by a successful lookup.
///
/// Optional text fields are `None` both when the directory omits them and when it sends an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, CopyGetters)]
pub struct Profile {
    #[getset(get = "pub")]
    login: String,
    #[getset(get = "pub")]
    name: Option<String>,
    #[getset(get = "pub")]
    avatar: Avatar,
    #[getset(get = "pub")]
    bio: Option<String>,
    #[getset(get_copy = "pub")]
    created_at: DateTime<Utc>,
    #[getset(get_copy = "pub")]
    public_repos: u64,
    #[getset(get_copy = "pub")]
    followers: u64,
    #[getset(get_copy = "pub")]
    following: u64,
    #[getset(get = "pub")]
    location: Option<String>,
    #[getset(get = "pub")]
    twitter_username: Option<String>,
    #[getset(get = "pub")]
    blog: Option<String>,
    #[getset(get = "pub")]
    html_url: Option<String>,
}

impl Profile {
    /// Text shown under the handle, e.g. `Joined 25 Jan 2011`.
    pub fn joined(&self) -> String {
        format_join_date(self.created_at)
    }
}

impl From<RawProfile> for Profile {
    fn from(raw: RawProfile) -> Self {
        Self {
            login: raw.login,
            name: present(raw.name),
            avatar: present(raw.avatar_url).map_or(Avatar::Placeholder, Avatar::Remote),
            bio: present(raw.bio),
            created_at: raw.created_at,
            public_repos: raw.public_repos,
            followers: raw.followers,
            following: raw.following,
            location: present(raw.location),
            twitter_username: present(raw.twitter_username),
            blog: present(raw.blog),
            html_url: present(raw.html_url),
        }
    }
}

/// Day, abbreviated month and full year, in that order. Dates are taken in UTC.
pub fn format_join_date(created_at: DateTime<Utc>) -> String {
    format!("Joined {}", created_at.format("%-d %b %Y"))
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
