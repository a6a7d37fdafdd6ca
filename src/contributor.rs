//! Defines the [`Contributor`] record and its [`Socials`] links. A record is
//! built from exactly one source file (see [`crate::parser`]) and is
//! discarded once its card has been rendered.

use crate::config::Config;
use crate::parser::profile_picture_path;
use serde::de::Error;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::{Mapping, Value};

/// One contributor, as described by the metadata block and body of a
/// contributor file. Every field is optional; absent fields are left out of
/// both the rendered card and the serialized mapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Contributor {
    /// The display name. Also the sort key for the contributor grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// An explicit picture path or URL. When absent, one is derived from
    /// `name` at render time (see [`Contributor::image_path`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_img: Option<String>,

    #[serde(skip_serializing_if = "Socials::is_empty")]
    pub socials: Socials,

    /// The biography. A non-empty file body replaces whatever the metadata
    /// block said.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Metadata keys this crate doesn't interpret, whatever their type (e.g.,
    /// `2021: archived`). They're passed through to the host untouched.
    #[serde(flatten)]
    pub extra: Mapping,
}

impl<'de> Deserialize<'de> for Contributor {
    /// Accepts any YAML mapping. The known fields are taken out by name and
    /// every other entry is kept in `extra`.
    fn deserialize<D>(deserializer: D) -> Result<Contributor, D::Error>
    where
        D: Deserializer<'de>,
    {
        Contributor::from_mapping(Mapping::deserialize(deserializer)?)
            .map_err(D::Error::custom)
    }
}

impl Contributor {
    fn from_mapping(mut extra: Mapping) -> Result<Contributor, String> {
        fn field(
            extra: &mut Mapping,
            key: &str,
        ) -> Result<Option<String>, String> {
            match extra.remove(&Value::String(key.to_owned())) {
                None => Ok(None),
                Some(value) => scalar_to_string(value)
                    .map_err(|e| format!("field `{}`: {}", key, e)),
            }
        }

        Ok(Contributor {
            name: field(&mut extra, "name")?,
            role: field(&mut extra, "role")?,
            feature_img: field(&mut extra, "feature_img")?,
            bio: field(&mut extra, "bio")?,
            socials: match extra.remove(&Value::String("socials".to_owned())) {
                None => Socials::default(),
                Some(value) => Socials::from_value(value)
                    .map_err(|e| format!("field `socials`: {}", e))?,
            },
            extra,
        })
    }
}

impl Contributor {
    /// The key contributors are ordered by. A missing name sorts as the empty
    /// string, i.e., first.
    pub fn sort_key(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// The picture to show on the card: `feature_img` if set, otherwise a
    /// path derived from a non-empty `name`. The derived path is a guess; the
    /// file may not exist.
    pub fn image_path(&self, config: &Config) -> Option<String> {
        match non_empty(&self.feature_img) {
            Some(img) => Some(img.to_owned()),
            None => non_empty(&self.name)
                .map(|name| profile_picture_path(name, config)),
        }
    }
}

/// Returns the string inside `field` unless it's missing or empty.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Social links keyed by platform (`github`, `email`, ...), kept in the order
/// they were written. Platform keys are open-ended; unknown ones still get a
/// link with a generic icon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Socials(pub Vec<(String, String)>);

impl Socials {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Accepts a mapping of scalars. A `null` value (e.g., `github:` with
    /// nothing after it) becomes an empty link, which the renderer skips.
    fn from_value(value: Value) -> Result<Socials, &'static str> {
        let mapping = match value {
            Value::Null => return Ok(Socials::default()),
            Value::Mapping(mapping) => mapping,
            _ => return Err("expected a mapping"),
        };

        let mut links = Vec::with_capacity(mapping.len());
        for (platform, link) in mapping {
            let platform = scalar_to_string(platform)?.unwrap_or_default();
            let link = scalar_to_string(link)?.unwrap_or_default();
            links.push((platform, link));
        }
        Ok(Socials(links))
    }
}

impl<'de> Deserialize<'de> for Socials {
    fn deserialize<D>(deserializer: D) -> Result<Socials, D::Error>
    where
        D: Deserializer<'de>,
    {
        Socials::from_value(Value::deserialize(deserializer)?)
            .map_err(D::Error::custom)
    }
}

impl Serialize for Socials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (platform, link) in &self.0 {
            map.serialize_entry(platform, link)?;
        }
        map.end()
    }
}

/// Stringifies a YAML scalar so `name: 2021` or `bio: true` don't reject the
/// whole file. `null` is treated as absent.
fn scalar_to_string(value: Value) -> Result<Option<String>, &'static str> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        _ => Err("expected a scalar value"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn from_yaml(yaml: &str) -> Result<Contributor, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    #[test]
    fn test_socials_keep_file_order() -> Result<(), serde_yaml::Error> {
        let contributor = from_yaml(
            "socials:\n  website: https://a.example\n  email: a@example.com\n  github: https://github.com/a\n",
        )?;
        let platforms: Vec<&str> =
            contributor.socials.iter().map(|(p, _)| p).collect();
        assert_eq!(vec!["website", "email", "github"], platforms);
        Ok(())
    }

    #[test]
    fn test_null_social_is_empty_link() -> Result<(), serde_yaml::Error> {
        let contributor = from_yaml("socials:\n  github:\n")?;
        assert_eq!(
            Socials(vec![("github".to_owned(), String::new())]),
            contributor.socials
        );
        Ok(())
    }

    #[test]
    fn test_non_string_scalars_are_stringified(
    ) -> Result<(), serde_yaml::Error> {
        let contributor = from_yaml("name: 2021\nrole: true\n")?;
        assert_eq!(Some("2021"), contributor.name.as_deref());
        assert_eq!(Some("true"), contributor.role.as_deref());
        Ok(())
    }

    #[test]
    fn test_null_field_is_absent() -> Result<(), serde_yaml::Error> {
        let contributor = from_yaml("name: Ana\nrole: ~\n")?;
        assert_eq!(None, contributor.role);
        Ok(())
    }

    #[test]
    fn test_sequence_name_is_rejected() {
        assert!(from_yaml("name: [a, b]\n").is_err());
    }

    #[test]
    fn test_unknown_keys_pass_through() -> Result<(), serde_yaml::Error> {
        let contributor = from_yaml("name: Ana\npronouns: she/her\n")?;
        assert_eq!(
            Some(&Value::String("she/her".to_owned())),
            contributor.extra.get(&Value::String("pronouns".to_owned()))
        );
        assert!(contributor
            .extra
            .get(&Value::String("name".to_owned()))
            .is_none());
        Ok(())
    }

    #[test]
    fn test_non_string_keys_pass_through() -> Result<(), serde_yaml::Error> {
        let contributor = from_yaml("1: x\nname: Bo\n2021: archived\n")?;
        assert_eq!(Some("Bo"), contributor.name.as_deref());
        assert_eq!(
            Some(&Value::String("x".to_owned())),
            contributor.extra.get(&Value::Number(1.into()))
        );
        assert_eq!(
            Some(&Value::String("archived".to_owned())),
            contributor.extra.get(&Value::Number(2021.into()))
        );
        assert_eq!(2, contributor.extra.len());
        Ok(())
    }

    #[test]
    fn test_socials_must_be_a_mapping() {
        assert!(from_yaml("name: Bo\nsocials: [a, b]\n").is_err());
    }

    #[test]
    fn test_serialize_omits_absent_fields() -> Result<(), serde_yaml::Error> {
        let contributor = Contributor {
            name: Some("Ana".to_owned()),
            ..Contributor::default()
        };
        let value = serde_yaml::to_value(&contributor)?;
        let mut wanted = Mapping::new();
        wanted.insert(
            Value::String("name".to_owned()),
            Value::String("Ana".to_owned()),
        );
        assert_eq!(Value::Mapping(wanted), value);
        Ok(())
    }

    #[test]
    fn test_image_path_prefers_feature_img() {
        let config = Config::default();
        let contributor = Contributor {
            name: Some("Ana".to_owned()),
            feature_img: Some("/img/ana.png".to_owned()),
            ..Contributor::default()
        };
        assert_eq!(
            Some("/img/ana.png".to_owned()),
            contributor.image_path(&config)
        );
    }

    #[test]
    fn test_image_path_derived_from_name() {
        let config = Config::default();
        let contributor = Contributor {
            name: Some("Ana García".to_owned()),
            feature_img: Some(String::new()),
            ..Contributor::default()
        };
        assert_eq!(
            Some("/assets/contributors_pictures/Profile_AnaGarcia.jpg".to_owned()),
            contributor.image_path(&config)
        );
    }

    #[test]
    fn test_no_image_without_name() {
        let config = Config::default();
        assert_eq!(None, Contributor::default().image_path(&config));
        let empty_name = Contributor {
            name: Some(String::new()),
            ..Contributor::default()
        };
        assert_eq!(None, empty_name.image_path(&config));
    }
}
