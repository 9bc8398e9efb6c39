// src/client/types.rs — Wire types for the learning-companion API
//
// Field names follow the backend contract exactly (snake_case JSON).

use serde::{Deserialize, Serialize};

/// POST /chat request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
    pub session_id: String,
}

/// POST /chat response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub learning_mode: String,
    #[serde(default)]
    pub current_topic: Option<String>,
    #[serde(default)]
    pub problems_solved: u64,
    #[serde(default)]
    pub average_score: f64,
}

/// GET /analytics/{user_id} response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub total_interactions: u64,
    #[serde(default)]
    pub problems_solved: u64,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub topics_covered: Vec<String>,
    #[serde(default)]
    pub knowledge_gaps: Vec<String>,
    #[serde(default)]
    pub progress: Progress,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub skill_progression: Vec<SkillScore>,
}

/// One historical scored attempt. The backend may omit the topic.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillScore {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub score: f64,
}

/// POST /generate_problem request body.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemRequest {
    pub topic: String,
    pub problem_type: String,
    pub difficulty: String,
}

/// POST /generate_problem response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemReply {
    pub problem: GeneratedProblem,
    #[serde(default)]
    pub topic: Option<String>,
}

/// A generated practice problem. The backend attaches more fields
/// (evaluation criteria, solution steps); we keep the ones we render.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedProblem {
    pub problem_statement: String,
    #[serde(default)]
    pub problem_type: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub expected_skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chat_request_serializes_snake_case() {
        let req = ChatRequest {
            message: "what is recursion?".into(),
            user_id: "user_1".into(),
            session_id: "session_2".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["message"], "what is recursion?");
        assert_eq!(v["user_id"], "user_1");
        assert_eq!(v["session_id"], "session_2");
    }

    #[test]
    fn test_chat_reply_tolerates_missing_topic() {
        let reply: ChatReply = serde_json::from_str(
            r#"{"response":"hi","learning_mode":"explanation","problems_solved":3,"average_score":71.5}"#,
        )
        .unwrap();
        assert_eq!(reply.current_topic, None);
        assert_eq!(reply.problems_solved, 3);
    }

    #[test]
    fn test_chat_reply_ignores_extra_fields() {
        // The backend also echoes user_id/session_id and a knowledge level.
        let reply: ChatReply = serde_json::from_str(
            r#"{"response":"ok","learning_mode":"guidance","current_topic":"sorting",
                "problems_solved":0,"average_score":0.0,
                "user_id":"u","session_id":"s","knowledge_level":"beginner"}"#,
        )
        .unwrap();
        assert_eq!(reply.current_topic.as_deref(), Some("sorting"));
    }

    #[test]
    fn test_analytics_deserializes_full() {
        let snap: AnalyticsSnapshot = serde_json::from_str(
            r#"{"total_interactions":5,"problems_solved":2,"average_score":66.666,
                "topics_covered":["loops"],"knowledge_gaps":["recursion"],
                "progress":{"skill_progression":[{"topic":"loops","score":80.0},{"score":55.0}]}}"#,
        )
        .unwrap();
        assert_eq!(snap.total_interactions, 5);
        assert_eq!(snap.progress.skill_progression.len(), 2);
        assert_eq!(snap.progress.skill_progression[1].topic, None);
    }

    #[test]
    fn test_analytics_defaults_when_sparse() {
        let snap: AnalyticsSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snap.total_interactions, 0);
        assert!(snap.topics_covered.is_empty());
        assert!(snap.progress.skill_progression.is_empty());
    }

    #[test]
    fn test_problem_reply_minimal() {
        let reply: ProblemReply = serde_json::from_str(
            r#"{"problem":{"problem_statement":"Write a function that reverses a list."},
                "topic":"lists","problem_type":"practical","difficulty":"medium"}"#,
        )
        .unwrap();
        assert_eq!(
            reply.problem.problem_statement,
            "Write a function that reverses a list."
        );
        assert!(reply.problem.hints.is_empty());
    }
}
