//! The state behind the profile lookup widget.
//!
//! [`ProfileLookup`] never performs I/O itself. [`ProfileLookup::submit`] hands out a
//! [`LookupRequest`] for the caller to run against a
//! [`ProfileDirectory`](crate::ProfileDirectory), and the result comes back through
//! [`ProfileLookup::settle`]. Every request carries a generation; only the most recently
//! submitted one is allowed to settle, so a slow response can never overwrite a newer one.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use crate::{
    LookupError, ProfileDirectory,
    profile::{Handle, Profile},
    view::{LookupView, ProfileCard},
};

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == DisplayMode::Dark
    }
}

/// The result of the last lookup that was allowed to settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Profile),
    Failed(LookupError),
}

/// A lookup the caller has to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: u64,
    pub handle: Handle,
}

impl LookupRequest {
    /// Run this request against `directory`, returning the generation alongside the result so
    /// it can be passed straight to [`ProfileLookup::settle`].
    pub async fn run<D>(self, directory: &D) -> (u64, Result<Profile, LookupError>)
    where
        D: ProfileDirectory,
    {
        let result = directory.fetch_profile(&self.handle).await;
        (self.generation, result)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileLookup {
    query: String,
    outcome: Option<Outcome>,
    loading: bool,
    mode: DisplayMode,
    generation: u64,
}

impl ProfileLookup {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    // Fields

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.outcome {
            Some(Outcome::Found(profile)) => Some(profile),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match &self.outcome {
            Some(Outcome::Failed(err)) => Some(err),
            _ => None,
        }
    }

    /// The generation of the most recently submitted lookup, 0 before any.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // Operations

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a lookup for the current query. A blank query changes nothing and yields `None`.
    ///
    /// Any earlier lookup still in flight is superseded. The previous outcome stays in place
    /// until this one settles.
    pub fn submit(&mut self) -> Option<LookupRequest> {
        let handle = Handle::parse(&self.query)?;

        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        debug!("Submitted lookup #{} for {handle}", self.generation);

        Some(LookupRequest {
            generation: self.generation,
            handle,
        })
    }

    /// Apply the result of the lookup with the given generation.
    ///
    /// Returns `false` and leaves the state untouched when a newer lookup has been submitted
    /// since.
    pub fn settle(&mut self, generation: u64, result: Result<Profile, LookupError>) -> bool {
        if generation != self.generation || !self.loading {
            debug!(
                "Discarding stale lookup #{generation}, latest is #{}",
                self.generation
            );
            return false;
        }

        self.outcome = Some(match result {
            Ok(profile) => Outcome::Found(profile),
            Err(err) => Outcome::Failed(err),
        });
        self.loading = false;

        true
    }

    pub fn toggle_display_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    /// What should be on screen right now.
    pub fn view(&self) -> LookupView<'_> {
        if self.loading {
            return LookupView::Loading;
        }

        match &self.outcome {
            None => LookupView::Initial,
            Some(Outcome::Failed(err)) => LookupView::Error(err),
            Some(Outcome::Found(profile)) => LookupView::Profile(ProfileCard::new(profile)),
        }
    }
}
