//! The protocol fork tag.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A beacon chain fork supported by Celadon, in chronological order.
///
/// `Unsupported` stands in for any fork outside the supported range, both
/// earlier and later ones. Parsing deliberately absorbs unknown names into
/// the sentinel so that input from a newer peer degrades into a
/// recognizable tag instead of a parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fork {
    Bellatrix,
    Capella,
    Deneb,
    Electra,
    Unsupported,
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bellatrix => "bellatrix",
            Self::Capella => "capella",
            Self::Deneb => "deneb",
            Self::Electra => "electra",
            Self::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

impl FromStr for Fork {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "bellatrix" => Self::Bellatrix,
            "capella" => Self::Capella,
            "deneb" => Self::Deneb,
            "electra" => Self::Electra,
            _ => Self::Unsupported,
        })
    }
}

impl<'de> Deserialize<'de> for Fork {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or(Self::Unsupported))
    }
}
