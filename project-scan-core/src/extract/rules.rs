//! Ordered rule table driving pattern extraction
//!
//! Each rule pairs a category with one pattern. Rules are applied in table
//! order. An accumulating rule appends every capture it finds; a
//! non-accumulating rule takes only its first capture, and once one of them
//! has matched for a category the later ones for that category are skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The field a rule writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Title,
    Completed,
    InProgress,
    Todo,
    TechStack,
    BusinessModel,
    MarketAnalysis,
}

impl Category {
    /// Single-valued categories hold one string rather than a list
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Title | Self::BusinessModel | Self::MarketAnalysis)
    }
}

/// A rule as written in the table, before compilation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub category: Category,
    /// Must contain exactly one capture group holding the extracted text
    pub pattern: String,
    pub accumulate: bool,
}

impl RuleSpec {
    pub fn new(category: Category, pattern: &str, accumulate: bool) -> Self {
        Self { category, pattern: pattern.to_string(), accumulate }
    }
}

/// A compiled rule
#[derive(Debug, Clone)]
pub struct Rule {
    pub category: Category,
    pub pattern: Regex,
    pub accumulate: bool,
}

/// The standard table: status markers, tech stack, business headers, title
pub fn default_rules() -> Vec<RuleSpec> {
    use Category::*;

    vec![
        RuleSpec::new(Title, r"^#\s+(.+)$", false),
        RuleSpec::new(Completed, r"✅\s*(.+)", true),
        RuleSpec::new(Completed, r"- \[x\]\s*(.+)", true),
        RuleSpec::new(Completed, r"COMPLETED[:\s]+(.+)", true),
        RuleSpec::new(Completed, r"DONE[:\s]+(.+)", true),
        RuleSpec::new(InProgress, r"🔄\s*(.+)", true),
        RuleSpec::new(InProgress, r"IN PROGRESS[:\s]+(.+)", true),
        RuleSpec::new(InProgress, r"WORKING ON[:\s]+(.+)", true),
        RuleSpec::new(Todo, r"- \[ \]\s*(.+)", true),
        RuleSpec::new(Todo, r"TODO[:\s]+(.+)", true),
        RuleSpec::new(Todo, r"NEEDS WORK[:\s]+(.+)", true),
        RuleSpec::new(Todo, r"NEXT STEPS[:\s]+(.+)", true),
        RuleSpec::new(TechStack, r"Tech Stack[:\s]+(.+)", true),
        RuleSpec::new(TechStack, r"Technologies[:\s]+(.+)", true),
        RuleSpec::new(TechStack, r"Built with[:\s]+(.+)", true),
        RuleSpec::new(TechStack, r"Stack[:\s]+(.+)", true),
        RuleSpec::new(BusinessModel, r"Business Model[:\s]+(.+)", false),
        RuleSpec::new(BusinessModel, r"Revenue Model[:\s]+(.+)", false),
        RuleSpec::new(BusinessModel, r"Pricing[:\s]+(.+)", false),
        RuleSpec::new(MarketAnalysis, r"Market Analysis[:\s]+(.+)", false),
        RuleSpec::new(MarketAnalysis, r"Market Opportunity[:\s]+(.+)", false),
        RuleSpec::new(MarketAnalysis, r"Industry Trends[:\s]+(.+)", false),
    ]
}

static STANDARD: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::compile(&default_rules()).expect("Invalid regex pattern")
});

/// An ordered, compiled rule table
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile rule specs; patterns are case-insensitive and line-anchored
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|spec| {
                Ok(Rule {
                    category: spec.category,
                    pattern: regex_utils::line_pattern(&spec.pattern)?,
                    accumulate: spec.accumulate,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The shared, pre-compiled default table
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
