//! Task derivation: subjects and topics to a flat list of study tasks.

use super::{PlanTask, TaskKind};
use crate::profile::SubjectDetails;

/// Topics synthesized for a subject that lists none.
fn default_topics(subject: &str) -> Vec<String> {
    vec![
        format!("{subject} quick notes"),
        format!("{subject} practice set"),
        format!("{subject} recap questions"),
    ]
}

/// Flatten `subjects` into one-hour study tasks in input order.
///
/// Ids are `study-<subjectIndex>-<topicIndex>`, where the topic index counts
/// blank topics too, so ids stay stable when a blank line is removed later.
/// `week_index` is a placeholder until allocation.
pub fn derive_study_tasks(subjects: &[SubjectDetails]) -> Vec<PlanTask> {
    let mut tasks = Vec::new();
    for (subject_index, subject) in subjects.iter().enumerate() {
        let topics = if subject.topics.is_empty() {
            default_topics(&subject.name)
        } else {
            subject.topics.clone()
        };

        for (topic_index, topic) in topics.iter().enumerate() {
            let title = topic.trim();
            if title.is_empty() {
                continue;
            }
            tasks.push(PlanTask {
                id: format!("study-{subject_index}-{topic_index}"),
                subject: subject.name.clone(),
                title: title.to_owned(),
                kind: TaskKind::Study,
                estimated_hours: 1.0,
                week_index: 0,
            });
        }
    }
    tasks
}
