use std::fmt;

use serde::{Deserialize, Serialize};

pub const GENERAL_INDUSTRY: &str = "general";
pub const HEALTHCARE_INDUSTRY: &str = "healthcare";

/// Free-text industry label for a tenant or checklist item, stored trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Industry(String);

impl Industry {
    pub fn new(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            Self::general()
        } else {
            Self(label)
        }
    }

    pub fn general() -> Self {
        Self(GENERAL_INDUSTRY.to_string())
    }

    pub fn healthcare() -> Self {
        Self(HEALTHCARE_INDUSTRY.to_string())
    }

    pub fn is_general(&self) -> bool {
        self.0 == GENERAL_INDUSTRY
    }

    pub fn is_healthcare(&self) -> bool {
        self.0 == HEALTHCARE_INDUSTRY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Industry {
    fn default() -> Self {
        Self::general()
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
