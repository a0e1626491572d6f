use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use simple_error::SimpleError;

use super::{
    concrete::{MultiSelectCreator, SimpleCreator},
    interface::Creators,
};

/// A plain tag naming one of the [Creators] variants.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CreatorKind {
    Simple,
    MultiSelect,
}

impl CreatorKind {
    /// Every kind, in declaration order.
    pub const ALL: [CreatorKind; 2] = [CreatorKind::Simple, CreatorKind::MultiSelect];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreatorKind::Simple => "simple",
            CreatorKind::MultiSelect => "multi_select",
        }
    }
}

impl fmt::Display for CreatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreatorKind {
    type Err = SimpleError;

    /// Parses a kind name, ignoring case and treating `-` like `_`
    /// ```
    /// use input_text_factory::creator::CreatorKind;
    ///
    /// assert_eq!("simple".parse::<CreatorKind>().ok(), Some(CreatorKind::Simple));
    /// assert_eq!("Multi-Select".parse::<CreatorKind>().ok(), Some(CreatorKind::MultiSelect));
    /// assert!("dropdown".parse::<CreatorKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "simple" => Ok(CreatorKind::Simple),
            "multi_select" => Ok(CreatorKind::MultiSelect),
            _ => Err(SimpleError::new(format!(
                "unknown creator kind {s:?}, expected one of: simple, multi_select"
            ))),
        }
    }
}

impl From<CreatorKind> for Creators {
    fn from(kind: CreatorKind) -> Self {
        match kind {
            CreatorKind::Simple => SimpleCreator.into(),
            CreatorKind::MultiSelect => MultiSelectCreator.into(),
        }
    }
}

impl Creators {
    pub fn kind(&self) -> CreatorKind {
        match self {
            Creators::SimpleCreator(_) => CreatorKind::Simple,
            Creators::MultiSelectCreator(_) => CreatorKind::MultiSelect,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_maps_to_creator_and_back() {
        for kind in CreatorKind::ALL {
            assert_eq!(Creators::from(kind).kind(), kind);
        }
    }

    #[test]
    fn parse_accepts_spellings() {
        for name in ["simple", " SIMPLE "] {
            assert_eq!(name.parse::<CreatorKind>().ok(), Some(CreatorKind::Simple));
        }
        for name in ["multi_select", "multi-select", "Multi_Select"] {
            assert_eq!(name.parse::<CreatorKind>().ok(), Some(CreatorKind::MultiSelect));
        }
    }

    #[test]
    fn parse_error_names_input() {
        let err = "checkbox".parse::<CreatorKind>().unwrap_err();
        assert!(err.to_string().contains("\"checkbox\""), "got {err}");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for kind in CreatorKind::ALL {
            assert_eq!(kind.to_string().parse::<CreatorKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_value(CreatorKind::MultiSelect).unwrap(),
            serde_json::json!("multi_select")
        );
        let kind: CreatorKind = serde_json::from_str("\"simple\"").unwrap();
        assert_eq!(kind, CreatorKind::Simple);
    }
}
