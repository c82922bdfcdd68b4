//! Pattern-based field extraction from free-form project documents
//!
//! One [`PatternExtractor`] turns the full text of a document into an
//! [`ExtractionResult`]. Every category except the description is driven by
//! the ordered [`RuleSet`]; the description comes from a line scan over the
//! first prose run.

pub mod prose;
pub mod rules;

use std::collections::HashSet;

use crate::model::ExtractionResult;
use crate::normalize;

pub use rules::{Category, Rule, RuleSet, RuleSpec, default_rules};

/// Applies a rule table to document text
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    rules: RuleSet,
}

impl PatternExtractor {
    /// Create an extractor over the standard rule table
    pub fn new() -> Self {
        Self::with_rules(RuleSet::standard().clone())
    }

    /// Create an extractor over a custom rule table
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Extract every category from one document
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult {
            description: prose::description(text),
            ..Default::default()
        };
        let mut settled: HashSet<Category> = HashSet::new();

        for rule in self.rules.iter() {
            if rule.accumulate {
                for caps in rule.pattern.captures_iter(text) {
                    if let Some(m) = caps.get(1) {
                        record(&mut result, rule.category, m.as_str());
                    }
                }
            } else if !settled.contains(&rule.category) {
                let first = rule.pattern.captures(text).and_then(|caps| caps.get(1));
                if let Some(m) = first {
                    record(&mut result, rule.category, m.as_str());
                    settled.insert(rule.category);
                }
            }
        }

        result
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one captured value into its category's field
fn record(result: &mut ExtractionResult, category: Category, raw: &str) {
    match category {
        Category::Title => set_once(&mut result.title, raw),
        Category::BusinessModel => set_once(&mut result.business_model, raw),
        Category::MarketAnalysis => set_once(&mut result.market_analysis, raw),
        Category::Completed => result.completed_features.push(normalize::capture(raw)),
        Category::InProgress => result.in_progress_features.push(normalize::capture(raw)),
        Category::Todo => result.todo_features.push(normalize::capture(raw)),
        Category::TechStack => result.tech_stack.extend(normalize::tech_tokens(raw)),
    }
}

// A scalar keeps its first non-empty value even under an accumulating rule
fn set_once(field: &mut String, raw: &str) {
    if field.is_empty() {
        *field = normalize::capture(raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> ExtractionResult {
        PatternExtractor::new().extract(text)
    }

    #[test]
    fn test_checkbox_document() {
        let result = extract("- [x] Build login page\n- [ ] Add tests\n");
        assert_eq!(result.completed_features, vec!["Build login page"]);
        assert_eq!(result.todo_features, vec!["Add tests"]);
        assert!(result.in_progress_features.is_empty());
    }

    #[test]
    fn test_no_matches_yields_empty_result() {
        let result = extract("## Notes\n---\n");
        assert!(result.is_empty());
        assert_eq!(result, ExtractionResult::default());
    }

    #[test]
    fn test_all_patterns_in_category_are_applied() {
        let text = "✅ Auth flow\n- [X] Signup\nCOMPLETED: Billing\ndone - Emails\n";
        let result = extract(text);
        assert_eq!(result.completed_features, vec!["Auth flow", "Signup", "Billing", "- Emails"]);
    }

    #[test]
    fn test_in_progress_markers() {
        let result = extract("🔄 Search\nIn progress: Caching\nworking on: Sync\n");
        assert_eq!(result.in_progress_features, vec!["Search", "Caching", "Sync"]);
    }

    #[test]
    fn test_todo_markers() {
        let text = "- [ ] Docs\nTODO: CI\nNeeds work: Perf\nNext steps: Launch\n";
        let result = extract(text);
        assert_eq!(result.todo_features, vec!["Docs", "CI", "Perf", "Launch"]);
    }

    #[test]
    fn test_tech_stack_tokens() {
        let result = extract("Built with: Rust, Tokio • Serde, JS\n");
        assert_eq!(result.tech_stack, vec!["Rust", "Tokio", "Serde"]);
    }

    #[test]
    fn test_tech_stack_header_also_matches_stack_rule() {
        let result = extract("Tech Stack: Python, Django\n");
        assert_eq!(result.tech_stack, vec!["Python", "Django", "Python", "Django"]);
    }

    #[test]
    fn test_business_model_first_pattern_wins() {
        let text = "Pricing: $10/month\nBusiness Model: Subscription\nBusiness model: Ads\n";
        let result = extract(text);
        assert_eq!(result.business_model, "Subscription");
    }

    #[test]
    fn test_market_analysis_falls_through_patterns() {
        let result = extract("Industry Trends: Growing fast\n");
        assert_eq!(result.market_analysis, "Growing fast");
    }

    #[test]
    fn test_title_first_heading_only() {
        let result = extract("## Sub\n# First\n# Second\n");
        assert_eq!(result.title, "First");
    }

    #[test]
    fn test_description_and_title_together() {
        let text = "# Widget\n\nA small widget.\nIt does things.\n\n## Status\n- [x] Shipped\n";
        let result = extract(text);
        assert_eq!(result.title, "Widget");
        assert_eq!(result.description, "A small widget. It does things.");
        assert_eq!(result.completed_features, vec!["Shipped"]);
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = RuleSet::compile(&[RuleSpec::new(Category::Todo, r"^FIXME[:\s]+(.+)", true)])
            .unwrap();
        let extractor = PatternExtractor::with_rules(rules);
        let result = extractor.extract("FIXME: leak\nTODO: ignored\n");
        assert_eq!(result.todo_features, vec!["leak"]);
    }

    #[test]
    fn test_non_accumulating_list_rule_takes_first_match() {
        let rules = RuleSet::compile(&[
            RuleSpec::new(Category::Completed, r"DONE[:\s]+(.+)", false),
            RuleSpec::new(Category::Completed, r"SHIPPED[:\s]+(.+)", false),
        ])
        .unwrap();
        let result = PatternExtractor::with_rules(rules).extract("done: a\ndone: b\nshipped: c\n");
        assert_eq!(result.completed_features, vec!["a"]);
    }
}
