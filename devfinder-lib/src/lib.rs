//! Core of devfinder: looks up public profiles by handle in a remote profile directory and
//! derives everything a front end needs to render the result.
//!
//! Front ends own a [`ProfileLookup`], feed it user input, dispatch the [`LookupRequest`]s it
//! hands out through a [`ProfileDirectory`] and render its [`LookupView`](view::LookupView).

pub mod config;
pub mod directory;
mod error;
pub mod fs;
pub mod logging;
pub mod lookup;
pub mod profile;
pub mod view;

pub use directory::{DirectoryClient, ProfileDirectory};
pub use error::{Error, LookupError, Result};
pub use lookup::{DisplayMode, LookupRequest, ProfileLookup};
pub use profile::{Avatar, Handle, Profile};
