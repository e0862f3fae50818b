use crate::factory::BuildError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Closed set of built-in value modifiers, tagged in kebab-case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ModifierKind {
    #[default]
    #[strum(message = "Square", detailed_message = "Squares the latest observation.")]
    Square,
    #[strum(
        message = "Natural Log",
        detailed_message = "Natural logarithm of the latest observation (positive inputs only)."
    )]
    Log,
}

impl ModifierKind {
    /// Parses a kind tag, failing with [`BuildError::UnsupportedVariant`] for
    /// anything outside the closed set.
    pub fn parse(tag: &str) -> Result<Self, BuildError> {
        Self::from_str(tag).map_err(|_| BuildError::UnsupportedVariant(tag.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn parses_known_tags() {
        assert_eq!(ModifierKind::parse("square").unwrap(), ModifierKind::Square);
        assert_eq!(ModifierKind::parse("log").unwrap(), ModifierKind::Log);
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        let err = ModifierKind::parse("linear").unwrap_err();
        assert!(matches!(err, BuildError::UnsupportedVariant(ref t) if t == "linear"));
        assert!(ModifierKind::parse("Square").is_err());
    }

    #[test]
    fn display_and_serde_agree() {
        for kind in ModifierKind::iter() {
            let tag: &'static str = kind.into();
            assert_eq!(kind.to_string(), tag);
            assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(tag));
            assert!(kind.get_message().is_some());
        }
    }

    #[test]
    fn default_is_square() {
        assert_eq!(ModifierKind::default(), ModifierKind::Square);
    }
}
