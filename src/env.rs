//! The host-facing side of the crate. A documentation build registers the
//! three operations in [`Macros`] once, then invokes them by name while
//! rendering pages:
//!
//! * `load_contributors` returns every parsed contributor, sorted by name
//! * `render_contributor_card` renders one contributor
//! * `render_all_contributors` loads and renders the whole grid

use crate::card::{render_all, render_card};
use crate::config::Config;
use crate::contributor::Contributor;
use crate::diagnostics;
use crate::parser::load_contributors;
use std::rc::Rc;

pub const LOAD_CONTRIBUTORS: &str = "load_contributors";
pub const RENDER_CONTRIBUTOR_CARD: &str = "render_contributor_card";
pub const RENDER_ALL_CONTRIBUTORS: &str = "render_all_contributors";

/// The operations handed to the host. Each slot is populated by
/// [`define_env`] and is safe to call any number of times; every call reads
/// the contributors directory afresh.
pub struct Macros {
    pub load_contributors: Box<dyn Fn() -> Vec<Contributor>>,

    /// Renders the given contributor, or an empty one (just the placeholder
    /// name) when called without an argument.
    pub render_contributor_card: Box<dyn Fn(Option<&Contributor>) -> String>,

    pub render_all_contributors: Box<dyn Fn() -> String>,
}

/// The result of dispatching a macro by name with [`Macros::call`].
#[derive(Debug, PartialEq)]
pub enum Output {
    Contributors(Vec<Contributor>),
    Markup(String),
}

impl Macros {
    /// Calls the macro registered as `name` without arguments. Returns `None`
    /// for names that aren't registered.
    pub fn call(&self, name: &str) -> Option<Output> {
        match name {
            LOAD_CONTRIBUTORS => {
                Some(Output::Contributors((self.load_contributors)()))
            }
            RENDER_CONTRIBUTOR_CARD => {
                Some(Output::Markup((self.render_contributor_card)(None)))
            }
            RENDER_ALL_CONTRIBUTORS => {
                Some(Output::Markup((self.render_all_contributors)()))
            }
            _ => None,
        }
    }
}

impl Default for Macros {
    fn default() -> Self {
        define_env(Config::default())
    }
}

/// Builds the host's [`Macros`] for `config` and routes this crate's
/// diagnostics to stderr.
pub fn define_env(config: Config) -> Macros {
    diagnostics::init();
    let config = Rc::new(config);

    Macros {
        load_contributors: {
            let config = Rc::clone(&config);
            Box::new(move || load_contributors(&config))
        },
        render_contributor_card: {
            let config = Rc::clone(&config);
            Box::new(move |contributor: Option<&Contributor>| {
                match contributor {
                    Some(contributor) => render_card(contributor, &config),
                    None => render_card(&Contributor::default(), &config),
                }
            })
        },
        render_all_contributors: Box::new(move || {
            render_all(&load_contributors(&config), &config)
        }),
    }
}
