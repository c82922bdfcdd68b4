//! Short description synthesis for project cards
//!
//! Resolution order, first match wins:
//! 1. a fixed override for the project identifier
//! 2. `<name> project using <first three technologies>.`
//! 3. the cleaned, length-bounded long description
//! 4. `<name> project in development.`

use std::collections::BTreeMap;

use crate::model::ProjectRecord;
use crate::normalize;

/// Technologies named in a synthesized description
const TECH_ITEMS: usize = 3;

/// Built-in overrides for the known project set
pub const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    (
        "DIYAPP",
        "Next.js 14 DIY project planning app with build planner, quick builds, and responsive design. Features unit conversion, tool filtering, and shopping list generation.",
    ),
    (
        "BusinessLoclAi",
        "Canadian on-premise LLM deployment service for businesses. Specializing in private, secure AI assistants with local hosting for privacy and compliance.",
    ),
    (
        "AiAutoAgency",
        "AI automation agency helping SMBs implement custom AI solutions. Focus on chatbots, workflow automation, and consulting with value-based pricing.",
    ),
    (
        "CryptoTradingBot",
        "Automated cryptocurrency trading system with sentiment analysis, backtesting, and risk management. Research phase complete with comprehensive analysis.",
    ),
    (
        "StockTradingBot",
        "Automated stock trading system with technical analysis, backtesting, and risk management. Designed for algorithmic trading strategies.",
    ),
];

/// Built-in overrides as an owned table
pub fn builtin_overrides() -> BTreeMap<String, String> {
    BUILTIN_OVERRIDES
        .iter()
        .map(|(name, text)| (name.to_string(), text.to_string()))
        .collect()
}

/// A resolved short description, tagged with the branch that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortDescription {
    Override(String),
    TechStack(String),
    Cleaned(String),
    Fallback(String),
}

impl ShortDescription {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Override(s) | Self::TechStack(s) | Self::Cleaned(s) | Self::Fallback(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Override(s) | Self::TechStack(s) | Self::Cleaned(s) | Self::Fallback(s) => s,
        }
    }
}

/// Resolves short descriptions against an override table
#[derive(Debug, Clone, Default)]
pub struct DescriptionSynthesizer {
    overrides: BTreeMap<String, String>,
}

impl DescriptionSynthesizer {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Synthesizer loaded with [`BUILTIN_OVERRIDES`]
    pub fn builtin() -> Self {
        Self::new(builtin_overrides())
    }

    pub fn resolve(&self, record: &ProjectRecord) -> ShortDescription {
        if let Some(text) = self.overrides.get(&record.name) {
            return ShortDescription::Override(text.clone());
        }

        if !record.tech_stack.is_empty() {
            let tech = record
                .tech_stack
                .iter()
                .take(TECH_ITEMS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return ShortDescription::TechStack(format!("{} project using {}.", record.name, tech));
        }

        if !record.description.is_empty() {
            return ShortDescription::Cleaned(normalize::clean_description(&record.description));
        }

        ShortDescription::Fallback(format!("{} project in development.", record.name))
    }

    pub fn synthesize(&self, record: &ProjectRecord) -> String {
        self.resolve(record).into_string()
    }
}
