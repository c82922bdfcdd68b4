//! Human-readable digest rendering
//!
//! Purely presentational: every value printed here was computed earlier in
//! the pipeline.

use chrono::{DateTime, Utc};

use crate::model::{ProjectRecord, ProjectStatus};

/// Completed features listed per project
pub const COMPLETED_SHOWN: usize = 5;
/// In-progress features listed per project
pub const IN_PROGRESS_SHOWN: usize = 3;
/// Next-step items listed per project
pub const NEXT_STEPS_SHOWN: usize = 3;

/// Render the digest, stamped with the current time
pub fn render(records: &[ProjectRecord]) -> String {
    render_at(records, Utc::now())
}

/// Render the digest with an explicit generation timestamp
pub fn render_at(records: &[ProjectRecord], generated_at: DateTime<Utc>) -> String {
    let mut report = String::from("# 📊 AI Project Scanner Report\n\n");
    report.push_str(&format!("*Generated on {}*\n\n", generated_at.format("%Y-%m-%d %H:%M:%S")));

    for record in records {
        report.push_str(&render_project(record));
    }

    report
}

fn render_project(record: &ProjectRecord) -> String {
    let mut section = format!("## 🚀 {}\n\n", record.name);
    section.push_str(&format!("**Status:** {}\n", record.status));
    section.push_str(&format!("**Progress:** {}%\n", record.progress));
    section.push_str(&format!("**Description:** {}\n\n", record.description));

    push_list(&mut section, "### ✅ Completed Features", &record.completed_features, COMPLETED_SHOWN);
    push_list(&mut section, "### 🔄 In Progress", &record.in_progress_features, IN_PROGRESS_SHOWN);
    // Next steps are the todo category: unchecked boxes, TODO, NEXT STEPS
    push_list(&mut section, "### 🎯 Next Steps", &record.todo_features, NEXT_STEPS_SHOWN);

    section.push_str("---\n\n");
    section
}

fn push_list(out: &mut String, heading: &str, items: &[String], limit: usize) {
    if items.is_empty() {
        return;
    }
    out.push_str(heading);
    out.push('\n');
    for item in items.iter().take(limit) {
        out.push_str(&format!("- {}\n", item));
    }
    out.push('\n');
}

/// Totals per status followed by every project ordered by progress
pub fn render_summary(records: &[ProjectRecord]) -> String {
    let mut summary = String::from("📈 Overall Progress:\n");
    summary.push_str(&format!("   • Total Projects: {}\n", records.len()));
    for status in ProjectStatus::ALL {
        let count = records.iter().filter(|r| r.status == status).count();
        summary.push_str(&format!("   • {}: {}\n", status, count));
    }

    let mut ranked: Vec<&ProjectRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.progress.cmp(&a.progress));

    summary.push_str("\n🎯 Projects by Progress:\n");
    for record in ranked {
        summary.push_str(&format!("   • {}: {}% - {}\n", record.name, record.progress, record.status));
    }

    summary
}
