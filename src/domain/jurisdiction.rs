use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    #[serde(rename = "general")]
    General,
    #[serde(rename = "eu")]
    Eu,
    #[serde(rename = "us-ca")]
    UsCa,
    #[serde(rename = "us-hipaa")]
    UsHipaa,
}

impl Jurisdiction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Jurisdiction::General => "general",
            Jurisdiction::Eu => "eu",
            Jurisdiction::UsCa => "us-ca",
            Jurisdiction::UsHipaa => "us-hipaa",
        }
    }

    /// Unknown labels collapse to [`Jurisdiction::General`].
    pub fn normalize(label: &str) -> Jurisdiction {
        label
            .trim()
            .to_lowercase()
            .parse()
            .unwrap_or(Jurisdiction::General)
    }
}

impl FromStr for Jurisdiction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Jurisdiction::General),
            "eu" => Ok(Jurisdiction::Eu),
            "us-ca" => Ok(Jurisdiction::UsCa),
            "us-hipaa" => Ok(Jurisdiction::UsHipaa),
            _ => Err(format!("Invalid jurisdiction: {}", s)),
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
