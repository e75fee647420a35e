//! Gear catalog search.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::gear::{GearDto, GearType, GearTypeParseError};

/// Gear type restriction applied by the catalog search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(GearType),
}

impl TypeFilter {
    pub fn matches(&self, gear_type: GearType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == gear_type,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = GearTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        s.parse().map(Self::Only)
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = GearTypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(value: TypeFilter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(gear_type) => fmt::Display::fmt(gear_type, f),
        }
    }
}

/// Returns the catalog entries matching `search_text` and `type_filter`, in catalog order.
///
/// Search is a case-insensitive substring match against the item name or its skill text. A
/// blank search matches every item.
pub fn filter_gear<'a>(
    catalog: &'a [GearDto],
    search_text: &str,
    type_filter: TypeFilter,
) -> Vec<&'a GearDto> {
    let needle = search_text.trim().to_lowercase();

    catalog
        .iter()
        .filter(|gear| type_filter.matches(gear.gear_type))
        .filter(|gear| {
            needle.is_empty()
                || gear.name.to_lowercase().contains(&needle)
                || gear
                    .skill
                    .as_deref()
                    .is_some_and(|skill| skill.to_lowercase().contains(&needle))
        })
        .collect()
}
