//! Renders [`Contributor`]s as HTML cards. Cards reuse the markup of the
//! Material theme's footer social links, so the icons resolve against the
//! theme's SVG sprite (`<use href="#__{icon}">`).
//!
//! Values are written as-is. Escaping is left to the host page, which embeds
//! the returned markup verbatim.

use crate::config::Config;
use crate::contributor::{non_empty, Contributor};
use std::fmt::{self, Display};

/// Sprite ids for the platforms we know. Everything else gets
/// [`DEFAULT_ICON`].
const ICONS: [(&str, &str); 8] = [
    ("linkedin", "material-linkedin"),
    ("github", "material-github"),
    ("instagram", "material-instagram"),
    ("twitter", "material-twitter"),
    ("youtube", "material-youtube"),
    ("facebook", "material-facebook"),
    ("email", "fontawesome-solid-envelope"),
    ("website", "fontawesome-solid-globe"),
];

const DEFAULT_ICON: &str = "fontawesome-solid-link";

const MAILTO: &str = "mailto:";

/// Returns the sprite id for `platform`.
pub fn icon(platform: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(key, _)| *key == platform)
        .map_or(DEFAULT_ICON, |&(_, id)| id)
}

/// Title-cases a platform key for the link tooltip: the first letter of every
/// run of letters is uppercased and the rest lowercased (`github` becomes
/// `Github`, `stack_overflow` becomes `Stack_Overflow`).
pub fn link_title(platform: &str) -> String {
    let mut title = String::with_capacity(platform.len());
    let mut in_word = false;
    for c in platform.chars() {
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }
    title
}

/// The link target for a social entry. Email addresses get a `mailto:`
/// scheme unless they already have one.
fn href<'a>(platform: &str, link: &'a str) -> std::borrow::Cow<'a, str> {
    if platform == "email" && !link.starts_with(MAILTO) {
        format!("{}{}", MAILTO, link).into()
    } else {
        link.into()
    }
}

/// A single contributor card. Rendering is a pure function of the
/// contributor and config, so rendering twice yields identical markup.
pub struct Card<'a> {
    pub contributor: &'a Contributor,
    pub config: &'a Config,
}

impl Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.contributor;
        let name = c.name.as_deref().unwrap_or(self.config.name_placeholder);

        f.write_str("<div class=\"contributor-card\">\n")?;

        // name and role on the left, picture on the right
        f.write_str("  <div class=\"contributor-header\">\n")?;
        f.write_str("    <div class=\"contributor-info\">\n")?;
        writeln!(f, r#"      <h3 class="contributor-name">{}</h3>"#, name)?;
        if let Some(role) = non_empty(&c.role) {
            writeln!(f, r#"      <h4 class="contributor-role">{}</h4>"#, role)?;
        }
        f.write_str("    </div>\n")?;
        if let Some(img) = c.image_path(self.config) {
            f.write_str("    <div class=\"contributor-image-container\">\n")?;
            writeln!(
                f,
                r#"      <img src="{}" alt="{}" class="contributor-image" />"#,
                img, name
            )?;
            f.write_str("    </div>\n")?;
        }
        f.write_str("  </div>\n")?;

        if let Some(bio) = non_empty(&c.bio) {
            f.write_str("  <div class=\"contributor-bio\">\n")?;
            writeln!(f, "    <p>{}</p>", bio)?;
            f.write_str("  </div>\n")?;
        }

        if !c.socials.is_empty() {
            f.write_str("  <div class=\"contributor-socials\">\n")?;
            for (platform, link) in c.socials.iter() {
                if link.trim().is_empty() {
                    continue;
                }
                writeln!(
                    f,
                    r#"    <a href="{}" target="_blank" class="md-social__link" title="{}">"#,
                    href(platform, link),
                    link_title(platform),
                )?;
                f.write_str(
                    "      <svg class=\"md-social__icon\" focusable=\"false\" width=\"1.92em\" height=\"1.92em\" viewBox=\"0 0 24 24\">\n",
                )?;
                writeln!(f, r##"        <use href="#__{}"></use>"##, icon(platform))?;
                f.write_str("      </svg>\n")?;
                f.write_str("    </a>\n")?;
            }
            f.write_str("  </div>\n")?;
        }

        f.write_str("</div>\n")
    }
}

/// All contributor cards, in the order given, inside one grid container. An
/// empty grid renders the config's placeholder message instead.
pub struct Grid<'a> {
    pub contributors: &'a [Contributor],
    pub config: &'a Config,
}

impl Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contributors.is_empty() {
            return f.write_str(self.config.empty_placeholder);
        }

        f.write_str("<div class=\"contributors-grid\">\n")?;
        for contributor in self.contributors {
            let card = Card {
                contributor,
                config: self.config,
            };
            writeln!(f, "{}", card)?;
        }
        f.write_str("</div>\n")
    }
}

/// Renders one contributor card.
pub fn render_card(contributor: &Contributor, config: &Config) -> String {
    Card {
        contributor,
        config,
    }
    .to_string()
}

/// Renders already-sorted contributors as a grid of cards.
pub fn render_all(contributors: &[Contributor], config: &Config) -> String {
    Grid {
        contributors,
        config,
    }
    .to_string()
}
