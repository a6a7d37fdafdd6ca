//! The library code for `contributor-cards`, a build-time helper for
//! documentation sites. It turns a directory of contributor profiles into
//! HTML cards in three steps:
//!
//! 1. Finding the contributor files ([`crate::locate`])
//! 2. Parsing each file into a [`Contributor`] ([`crate::parser`])
//! 3. Rendering the sorted contributors as cards ([`crate::card`])
//!
//! A host documentation build reaches all of this through the three
//! operations registered by [`env::define_env`]. Nothing here fails the
//! build: a file that can't be read or parsed is logged and left out.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod card;
pub mod config;
pub mod contributor;
pub mod diagnostics;
pub mod env;
pub mod locate;
pub mod parser;

pub use crate::config::Config;
pub use crate::contributor::{Contributor, Socials};
pub use crate::env::{define_env, Macros};
