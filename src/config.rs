//! Defines [`Config`], the fixed locations and display constants used when
//! loading and rendering contributors.

use std::path::{Path, PathBuf};

/// The directory, relative to the site root, that holds contributor files.
pub const CONTRIBUTORS_DIRECTORY: &str = "docs/About/contributors";

/// The extension (without the dot) of contributor source files.
pub const CONTRIBUTOR_EXTENSION: &str = "md";

const IMAGE_PREFIX: &str = "/assets/contributors_pictures/Profile_";
const IMAGE_EXTENSION: &str = ".jpg";
const NAME_PLACEHOLDER: &str = "Unknown";
const EMPTY_PLACEHOLDER: &str =
    "<p><em>No contributors found. Be the first to contribute!</em></p>";

/// Where contributors live and how their cards fall back when fields are
/// missing. The host only ever uses [`Config::default`]; the contributors
/// directory is always [`CONTRIBUTORS_DIRECTORY`] relative to `site_root`.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The directory that [`CONTRIBUTORS_DIRECTORY`] is resolved against.
    /// Defaults to the current working directory of the host build.
    pub site_root: PathBuf,

    /// The prefix for derived profile picture paths.
    pub image_prefix: &'static str,

    /// The extension for derived profile picture paths.
    pub image_extension: &'static str,

    /// The heading used when a contributor has no `name`.
    pub name_placeholder: &'static str,

    /// The markup rendered in place of an empty contributor grid.
    pub empty_placeholder: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Config::rooted_at(".")
    }
}

impl Config {
    /// Returns the default configuration with `site_root` replaced.
    pub fn rooted_at<P: AsRef<Path>>(site_root: P) -> Config {
        Config {
            site_root: site_root.as_ref().to_owned(),
            image_prefix: IMAGE_PREFIX,
            image_extension: IMAGE_EXTENSION,
            name_placeholder: NAME_PLACEHOLDER,
            empty_placeholder: EMPTY_PLACEHOLDER,
        }
    }

    /// The directory searched for contributor files.
    pub fn contributors_directory(&self) -> PathBuf {
        self.site_root.join(CONTRIBUTORS_DIRECTORY)
    }
}
