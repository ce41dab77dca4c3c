//! The area of life a reading is interpreted for.

use gua_core::{GuaError, GuaResult};
use serde::{Deserialize, Serialize};

/// Interpretation context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextType {
    /// No particular focus.
    #[default]
    General,
    /// Work and career.
    Career,
    /// Love and partnership.
    Relationship,
    /// Health.
    Health,
    /// Money.
    Wealth,
}

impl ContextType {
    /// All contexts.
    pub const ALL: [Self; 5] = [
        Self::General,
        Self::Career,
        Self::Relationship,
        Self::Health,
        Self::Wealth,
    ];

    /// Parse an English or Chinese context name.
    pub fn parse(s: &str) -> GuaResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" | "综合" => Ok(Self::General),
            "career" | "事业" => Ok(Self::Career),
            "relationship" | "love" | "感情" => Ok(Self::Relationship),
            "health" | "健康" => Ok(Self::Health),
            "wealth" | "money" | "财运" => Ok(Self::Wealth),
            _ => Err(GuaError::InvalidContext(s.to_string())),
        }
    }

    /// Lowercase English name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Career => "career",
            Self::Relationship => "relationship",
            Self::Health => "health",
            Self::Wealth => "wealth",
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::General => "综合",
            Self::Career => "事业",
            Self::Relationship => "感情",
            Self::Health => "健康",
            Self::Wealth => "财运",
        }
    }
}

impl std::fmt::Display for ContextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
