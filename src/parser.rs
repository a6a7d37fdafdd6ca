//! Parses [`Contributor`] records from source files and loads the whole
//! contributors directory. Each file is structured as follows:
//!
//! 1. Initial frontmatter fence (`---`)
//! 2. YAML frontmatter with any of `name`, `role`, `feature_img`, `bio` and
//!    a `socials` mapping
//! 3. Terminal frontmatter fence (`---`)
//! 4. Biography
//!
//! For example:
//!
//! ```md
//! ---
//! name: Ana García
//! role: Editor
//! socials:
//!   github: https://github.com/ana
//! ---
//! Loves docs.
//! ```
//!
//! Both fences are optional: without the initial fence the whole file is the
//! biography, and without the terminal fence the whole file is frontmatter.

use crate::config::{Config, CONTRIBUTOR_EXTENSION};
use crate::contributor::Contributor;
use crate::locate::contributor_files;
use serde_yaml::Value;
use std::fmt;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

const FENCE: &str = "---";

/// The only accented characters stripped from derived picture names. Other
/// diacritics (including uppercase ones) are kept as written.
const ACCENTS: [(char, char); 6] = [
    ('á', 'a'),
    ('é', 'e'),
    ('í', 'i'),
    ('ó', 'o'),
    ('ú', 'u'),
    ('ñ', 'n'),
];

impl std::str::FromStr for Contributor {
    type Err = Error;

    /// Parses the full text of one contributor file.
    fn from_str(input: &str) -> Result<Contributor> {
        let (frontmatter, body) = split_frontmatter(input);
        let mut contributor = parse_frontmatter(frontmatter.trim())?;
        let body = body.trim();
        if !body.is_empty() {
            contributor.bio = Some(body.to_owned());
        }
        Ok(contributor)
    }
}

/// Splits `input` into its frontmatter and body. The frontmatter runs from
/// the leading fence to the next fence.
fn split_frontmatter(input: &str) -> (&str, &str) {
    match input.strip_prefix(FENCE) {
        None => ("", input),
        Some(rest) => match rest.find(FENCE) {
            None => (rest, ""),
            Some(offset) => (&rest[..offset], &rest[offset + FENCE.len()..]),
        },
    }
}

fn parse_frontmatter(frontmatter: &str) -> Result<Contributor> {
    let blank = frontmatter.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    });
    if blank {
        return Ok(Contributor::default());
    }

    match serde_yaml::from_str::<Value>(frontmatter)? {
        Value::Null => Ok(Contributor::default()),
        value => Ok(serde_yaml::from_value(value)?),
    }
}

/// Reads and parses a single contributor file. Errors are annotated with
/// the file's path.
pub fn parse_contributor(path: &Path) -> Result<Contributor> {
    fn read(path: &Path) -> Result<Contributor> {
        use std::io::Read;
        let mut contents = String::new();
        File::open(path)?.read_to_string(&mut contents)?;
        contents.parse()
    }

    read(path).map_err(|e| {
        Error::Annotated(
            format!("parsing contributor `{}`", path.display()),
            Box::new(e),
        )
    })
}

/// Loads every contributor in the configured directory, sorted by name
/// (missing names first). Files that can't be read or parsed are logged and
/// left out; nothing here fails the build.
pub fn load_contributors(config: &Config) -> Vec<Contributor> {
    let dir = config.contributors_directory();
    let files = match contributor_files(&dir, CONTRIBUTOR_EXTENSION) {
        Ok(files) => files,
        Err(e) => {
            warn!(error = %e, "skipping contributors directory");
            return Vec::new();
        }
    };

    let mut contributors = Vec::with_capacity(files.len());
    for path in files {
        match parse_contributor(&path) {
            Ok(contributor) => contributors.push(contributor),
            Err(e) => warn!(error = %e, "skipping contributor file"),
        }
    }
    debug!(
        count = contributors.len(),
        dir = %dir.display(),
        "loaded contributors"
    );

    contributors.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    contributors
}

/// Guesses the profile picture path for `name`: spaces are removed and the
/// accents in [`ACCENTS`] are stripped, e.g. `Ana García` becomes
/// `/assets/contributors_pictures/Profile_AnaGarcia.jpg`.
pub fn profile_picture_path(name: &str, config: &Config) -> String {
    let mut path = String::from(config.image_prefix);
    for c in name.chars().filter(|&c| c != ' ') {
        let plain = ACCENTS
            .iter()
            .find(|(accented, _)| *accented == c)
            .map_or(c, |&(_, plain)| plain);
        path.push(plain);
    }
    path.push_str(config.image_extension);
    path
}

/// Represents the result of a [`Contributor`]-parse operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing a [`Contributor`].
#[derive(Debug)]
pub enum Error {
    /// Returned when the frontmatter isn't valid YAML or doesn't describe a
    /// contributor.
    DeserializeYaml(serde_yaml::Error),

    /// Returned for I/O errors, including files that aren't valid UTF-8.
    Io(std::io::Error),

    /// An error with an annotation.
    Annotated(String, Box<Error>),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DeserializeYaml(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
            Error::Annotated(annotation, err) => {
                write!(f, "{}: {}", &annotation, err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DeserializeYaml(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Annotated(_, err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts a [`serde_yaml::Error`] into an [`Error`]. It allows us to use
    /// the `?` operator for [`serde_yaml`] deserialization functions.
    fn from(err: serde_yaml::Error) -> Error {
        Error::DeserializeYaml(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
