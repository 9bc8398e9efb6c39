// src/ui/analytics.rs — Analytics view-model
//
// Pure transformation of a backend snapshot into display strings. Each
// open of the overlay rebuilds the whole view from a fresh snapshot; the
// previous one is discarded wholesale.

use crate::client::types::AnalyticsSnapshot;

pub const NO_TOPICS: &str = "No topics covered yet";
pub const NO_GAPS: &str = "No knowledge gaps identified";
pub const NO_PROGRESSION: &str = "No solved problems yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsView {
    pub total_interactions: String,
    pub problems_solved: String,
    /// Percentage with one-decimal rounding, e.g. "66.7".
    pub average_score: String,
    /// Never empty: a single placeholder row stands in for an empty list.
    pub topics: Vec<String>,
    pub gaps: Vec<String>,
    pub progression: Vec<String>,
}

impl AnalyticsView {
    pub fn from_snapshot(snapshot: &AnalyticsSnapshot) -> Self {
        let progression: Vec<String> = snapshot
            .progress
            .skill_progression
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "Problem {}: {} (score {}%)",
                    i + 1,
                    entry.topic.as_deref().unwrap_or("unknown"),
                    format_score(entry.score),
                )
            })
            .collect();

        Self {
            total_interactions: snapshot.total_interactions.to_string(),
            problems_solved: snapshot.problems_solved.to_string(),
            average_score: format_score(snapshot.average_score),
            topics: or_placeholder(snapshot.topics_covered.clone(), NO_TOPICS),
            gaps: or_placeholder(snapshot.knowledge_gaps.clone(), NO_GAPS),
            progression: or_placeholder(progression, NO_PROGRESSION),
        }
    }
}

/// One-decimal score formatting shared by the overlay and the status line.
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Human label for a server-assigned learning mode. Unrecognized modes get
/// a generic label instead of failing.
pub fn learning_mode_label(mode: &str) -> &'static str {
    match mode {
        "explanation" => "Explanation",
        "problem_solving" => "Problem solving",
        "assessment" => "Assessment",
        "feedback" => "Feedback",
        "guidance" => "Guidance",
        _ => "Assistant",
    }
}

fn or_placeholder(items: Vec<String>, placeholder: &str) -> Vec<String> {
    if items.is_empty() {
        vec![placeholder.to_string()]
    } else {
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::types::{Progress, SkillScore};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_view_rounds_score_to_one_decimal() {
        let snapshot = AnalyticsSnapshot {
            total_interactions: 5,
            problems_solved: 2,
            average_score: 66.666,
            topics_covered: vec![],
            knowledge_gaps: vec!["recursion".into()],
            progress: Progress::default(),
        };
        let view = AnalyticsView::from_snapshot(&snapshot);
        assert_eq!(view.total_interactions, "5");
        assert_eq!(view.problems_solved, "2");
        assert_eq!(view.average_score, "66.7");
        assert_eq!(view.topics, vec![NO_TOPICS.to_string()]);
        assert_eq!(view.gaps, vec!["recursion".to_string()]);
    }

    #[test]
    fn test_empty_progression_gets_placeholder() {
        let view = AnalyticsView::from_snapshot(&AnalyticsSnapshot::default());
        assert_eq!(view.progression, vec![NO_PROGRESSION.to_string()]);
    }

    #[test]
    fn test_progression_rows_numbered_with_topic_fallback() {
        let snapshot = AnalyticsSnapshot {
            progress: Progress {
                skill_progression: vec![
                    SkillScore {
                        topic: Some("loops".into()),
                        score: 80.0,
                    },
                    SkillScore {
                        topic: None,
                        score: 55.5,
                    },
                ],
            },
            ..Default::default()
        };
        let view = AnalyticsView::from_snapshot(&snapshot);
        assert_eq!(
            view.progression,
            vec![
                "Problem 1: loops (score 80.0%)".to_string(),
                "Problem 2: unknown (score 55.5%)".to_string(),
            ]
        );
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(learning_mode_label("explanation"), "Explanation");
        assert_eq!(learning_mode_label("problem_solving"), "Problem solving");
        assert_eq!(learning_mode_label("assessment"), "Assessment");
        assert_eq!(learning_mode_label("feedback"), "Feedback");
        assert_eq!(learning_mode_label("guidance"), "Guidance");
        // Unknown modes fall back instead of failing.
        assert_eq!(learning_mode_label("interpretive_dance"), "Assistant");
    }

    #[test]
    fn test_format_score_whole_number() {
        assert_eq!(format_score(80.0), "80.0");
    }
}
