//! Progress scoring and status classification

use crate::model::{ProjectRecord, ProjectStatus};

/// Progress at or above which a project counts as completed
pub const COMPLETED_THRESHOLD: u8 = 80;
/// Progress at or above which a project counts as in progress
pub const IN_PROGRESS_THRESHOLD: u8 = 50;
/// Progress at or above which a project counts as planning
pub const PLANNING_THRESHOLD: u8 = 20;

/// Weighted completion percentage from feature counts
///
/// Completed features count fully, in-progress ones half, todo ones not at
/// all: `floor(100 * (C + I/2) / (C + I + T))`, or 0 with no features.
/// Computed in integers (scaled by two) so the floor is exact.
pub fn progress(completed: usize, in_progress: usize, todo: usize) -> u8 {
    let total = completed + in_progress + todo;
    if total == 0 {
        return 0;
    }
    let weighted = 200 * completed as u128 + 100 * in_progress as u128;
    let percent = weighted / (2 * total as u128);
    percent.min(100) as u8
}

/// Score a record from its feature-list cardinalities
pub fn score(record: &ProjectRecord) -> u8 {
    progress(
        record.completed_features.len(),
        record.in_progress_features.len(),
        record.todo_features.len(),
    )
}

/// Map an already computed progress value to a status
pub fn classify(progress: u8) -> ProjectStatus {
    if progress >= COMPLETED_THRESHOLD {
        ProjectStatus::Completed
    } else if progress >= IN_PROGRESS_THRESHOLD {
        ProjectStatus::InProgress
    } else if progress >= PLANNING_THRESHOLD {
        ProjectStatus::Planning
    } else {
        ProjectStatus::NotStarted
    }
}
