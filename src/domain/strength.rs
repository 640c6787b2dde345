//! Hero-power strength rating.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Strong, Self::Weak, Self::Average]
    }
}

impl FromStr for Strength {
    type Err = ();

    /// Exact, case-sensitive match on the stored literal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strong" => Ok(Self::Strong),
            "Weak" => Ok(Self::Weak),
            "Average" => Ok(Self::Average),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
