//! Folding per-document extractions into one project record

use crate::model::{ExtractionResult, ProjectRecord};

impl ProjectRecord {
    /// Fold one document's extraction into the aggregate
    ///
    /// List fields are appended in full, keeping existing entries first and
    /// retaining duplicates. Scalar fields are taken only while still empty,
    /// so the first document (in discovery order) to supply one wins.
    pub fn merge(&mut self, result: &ExtractionResult) -> &mut Self {
        self.completed_features.extend(result.completed_features.iter().cloned());
        self.in_progress_features.extend(result.in_progress_features.iter().cloned());
        self.todo_features.extend(result.todo_features.iter().cloned());
        self.tech_stack.extend(result.tech_stack.iter().cloned());

        fill_if_empty(&mut self.title, &result.title);
        fill_if_empty(&mut self.description, &result.description);
        fill_if_empty(&mut self.business_model, &result.business_model);
        fill_if_empty(&mut self.market_analysis, &result.market_analysis);

        self
    }
}

fn fill_if_empty(target: &mut String, candidate: &str) {
    if target.is_empty() && !candidate.is_empty() {
        *target = candidate.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(completed: &[&str], description: &str, business: &str) -> ExtractionResult {
        ExtractionResult {
            completed_features: completed.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
            business_model: business.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_lists_append_with_duplicates() {
        let mut record = ProjectRecord::new("p");
        record.merge(&result(&["a", "b"], "", "")).merge(&result(&["b", "c"], "", ""));
        assert_eq!(record.completed_features, vec!["a", "b", "b", "c"]);
    }

    #[test]
    fn test_first_non_empty_scalar_wins() {
        let mut record = ProjectRecord::new("p");
        record.merge(&result(&[], "", "Ads"));
        record.merge(&result(&[], "First description", "Subscriptions"));
        record.merge(&result(&[], "Second description", ""));
        assert_eq!(record.description, "First description");
        assert_eq!(record.business_model, "Ads");
    }

    #[test]
    fn test_merge_order_changes_scalars_not_list_contents() {
        let a = result(&["x"], "from A", "");
        let b = result(&["y"], "from B", "");

        let mut ab = ProjectRecord::new("p");
        ab.merge(&a).merge(&b);
        let mut ba = ProjectRecord::new("p");
        ba.merge(&b).merge(&a);

        let mut left = ab.completed_features.clone();
        let mut right = ba.completed_features.clone();
        left.sort();
        right.sort();
        assert_eq!(left, right);
        assert_eq!(ab.description, "from A");
        assert_eq!(ba.description, "from B");
    }

    #[test]
    fn test_merging_empty_result_changes_nothing() {
        let mut record = ProjectRecord::new("p");
        record.merge(&result(&["a"], "desc", "model"));
        let before = record.clone();
        record.merge(&ExtractionResult::default());
        assert_eq!(record, before);
    }
}
