//! What a front end renders for a given [`ProfileLookup`](crate::ProfileLookup) state.
//!
//! All display fallbacks live in [`ProfileCard::new`]; front ends only lay the strings out.

use strum::Display;

use crate::{
    LookupError,
    profile::{Avatar, Profile},
};

const NO_NAME: &str = "No Name";
const NO_BIO: &str = "This profile has no bio";
const NOT_AVAILABLE: &str = "Not Available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupView<'a> {
    /// Nothing searched yet, only the search bar is shown.
    Initial,
    Loading,
    /// Shown inline next to the search control.
    Error(&'a LookupError),
    Profile(ProfileCard),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Stat {
    Repos,
    Followers,
    Following,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCell {
    pub stat: Stat,
    pub value: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Detail {
    Location,
    Twitter,
    Blog,
    #[strum(to_string = "Profile page")]
    ProfilePage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub detail: Detail,
    pub text: String,
    /// Where activating the row leads, if anywhere.
    pub link: Option<String>,
}

impl DetailRow {
    fn new(detail: Detail, text: Option<String>, link: Option<String>) -> Self {
        match text {
            Some(text) => Self { detail, text, link },
            None => Self {
                detail,
                text: NOT_AVAILABLE.into(),
                link: None,
            },
        }
    }

    pub fn is_available(&self) -> bool {
        self.text != NOT_AVAILABLE
    }
}

/// A found profile with every display default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub avatar: Avatar,
    pub name: String,
    pub handle: String,
    pub joined: String,
    pub bio: String,
    pub stats: [StatCell; 3],
    pub details: [DetailRow; 4],
}

impl ProfileCard {
    pub fn new(profile: &Profile) -> Self {
        let handle = format!("@{}", profile.login());
        let twitter = profile.twitter_username().clone();

        Self {
            avatar: profile.avatar().clone(),
            name: profile.name().clone().unwrap_or_else(|| NO_NAME.into()),
            handle: handle.clone(),
            joined: profile.joined(),
            bio: profile.bio().clone().unwrap_or_else(|| NO_BIO.into()),
            stats: [
                StatCell {
                    stat: Stat::Repos,
                    value: profile.public_repos(),
                },
                StatCell {
                    stat: Stat::Followers,
                    value: profile.followers(),
                },
                StatCell {
                    stat: Stat::Following,
                    value: profile.following(),
                },
            ],
            details: [
                DetailRow::new(Detail::Location, profile.location().clone(), None),
                DetailRow::new(
                    Detail::Twitter,
                    twitter.clone(),
                    twitter.map(|t| format!("https://twitter.com/{t}")),
                ),
                DetailRow::new(Detail::Blog, profile.blog().clone(), profile.blog().clone()),
                DetailRow::new(
                    Detail::ProfilePage,
                    profile.html_url().as_ref().map(|_| handle),
                    profile.html_url().clone(),
                ),
            ],
        }
    }
}
